//! Frame sampling for the wave control loop.
//!
//! A `FrameSampler` separates the cheap `grab` (advance the device buffer)
//! from the expensive `retrieve` (decode into a `Frame`), so a caller can
//! drain frames at camera rate and decode only the ones it classifies.

pub mod config;
pub mod convert;
pub mod error;
pub mod frame;
pub mod lease;
pub mod replay;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::CameraConfig;
pub use error::CameraError;
pub use frame::Frame;
pub use lease::DeviceLease;
pub use replay::ReplaySampler;
pub use traits::FrameSampler;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Sampler;
