use std::fmt;

#[derive(Debug)]
pub enum GestureError {
    /// Connection, TLS, timeout or body transfer failure.
    ServiceUnreachable(String),
    /// The service answered with a non-success status.
    ServiceRejected { status: u16, message: String },
    /// The body was not JSON or did not carry a `hands` array.
    MalformedResponse(String),
    /// The frame could not be written to the artifact directory.
    Artifact(String),
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureError::ServiceUnreachable(msg) => write!(f, "service unreachable: {msg}"),
            GestureError::ServiceRejected { status, message } => {
                write!(f, "service rejected request ({status}): {message}")
            }
            GestureError::MalformedResponse(msg) => write!(f, "malformed response: {msg}"),
            GestureError::Artifact(msg) => write!(f, "artifact error: {msg}"),
        }
    }
}

impl std::error::Error for GestureError {}

impl From<serde_json::Error> for GestureError {
    fn from(err: serde_json::Error) -> Self {
        GestureError::MalformedResponse(err.to_string())
    }
}

impl From<wave_image::ImageError> for GestureError {
    fn from(err: wave_image::ImageError) -> Self {
        GestureError::Artifact(err.to_string())
    }
}

impl From<reqwest::Error> for GestureError {
    fn from(err: reqwest::Error) -> Self {
        GestureError::ServiceUnreachable(err.to_string())
    }
}
