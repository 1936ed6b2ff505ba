use crate::{GestureError, GestureObservation};
use wave_camera::Frame;

/// Turns one frame into the gestures visible in it.
///
/// Implementations block for as long as recognition takes, so they only run
/// on the capture thread.
pub trait GestureClassifier: Send {
    fn classify(&mut self, frame: &Frame) -> Result<GestureObservation, GestureError>;
}
