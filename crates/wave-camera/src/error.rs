use std::fmt;

#[derive(Debug)]
pub enum CameraError {
    /// No device at the configured path, or it is already held by this process.
    DeviceUnavailable(String),
    /// The device could not hand out its next buffer.
    GrabFailed(String),
    /// The last grabbed buffer could not be turned into a frame.
    DecodeFailed(String),
}

impl CameraError {
    /// Grab and decode failures are retried by the caller on its next iteration.
    pub fn is_transient(&self) -> bool {
        !matches!(self, CameraError::DeviceUnavailable(_))
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::DeviceUnavailable(msg) => write!(f, "device unavailable: {msg}"),
            CameraError::GrabFailed(msg) => write!(f, "grab failed: {msg}"),
            CameraError::DecodeFailed(msg) => write!(f, "decode failed: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<wave_image::ImageError> for CameraError {
    fn from(err: wave_image::ImageError) -> Self {
        CameraError::DecodeFailed(err.to_string())
    }
}
