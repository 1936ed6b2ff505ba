use crate::{CameraError, Frame};

/// Exclusive, restartable source of camera frames.
///
/// The sequence is lazy and infinite while open: every `grab` advances to the
/// newest buffer, and `retrieve` decodes whatever was grabbed last. After
/// `close`, a new `open` starts the sequence over.
pub trait FrameSampler: Send {
    /// Acquire the device. Fails with `CameraError::DeviceUnavailable` if it is
    /// missing or already held.
    fn open(&mut self) -> Result<(), CameraError>;

    /// Advance to the next buffer without decoding it.
    fn grab(&mut self) -> Result<(), CameraError>;

    /// Decode the most recently grabbed buffer.
    fn retrieve(&mut self) -> Result<Frame, CameraError>;

    /// Release the device. Calling this on a closed sampler does nothing.
    fn close(&mut self);

    fn is_open(&self) -> bool;
}
