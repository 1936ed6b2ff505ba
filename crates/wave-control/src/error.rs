use crate::PlayerCommand;
use std::fmt;
use wave_camera::CameraError;

/// Why `CaptureLoop::start` refused to run.
#[derive(Debug)]
pub enum CaptureError {
    Camera(CameraError),
    AlreadyRunning,
    Spawn(std::io::Error),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Camera(err) => write!(f, "camera error: {err}"),
            CaptureError::AlreadyRunning => write!(f, "capture loop is already running"),
            CaptureError::Spawn(err) => write!(f, "cannot spawn capture thread: {err}"),
        }
    }
}

impl std::error::Error for CaptureError {}

impl From<CameraError> for CaptureError {
    fn from(err: CameraError) -> Self {
        CaptureError::Camera(err)
    }
}

/// A command the player context did not accept. Commands are not retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// The player has fallen behind and its queue is full.
    Full(PlayerCommand),
    /// The player context is gone.
    Closed(PlayerCommand),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Full(cmd) => write!(f, "dispatch failed: queue full, dropped {cmd}"),
            DispatchError::Closed(cmd) => write!(f, "dispatch failed: player gone, dropped {cmd}"),
        }
    }
}

impl std::error::Error for DispatchError {}
