use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use wave_camera::CameraConfig;
use wave_control::CaptureConfig;
use wave_gesture::FacePlusPlusConfig;

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "cannot read settings: {err}"),
            SettingsError::Parse(err) => write!(f, "invalid settings: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

/// Settings file of the demo player. Every field is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub device: PathBuf,
    /// Replay still images from this directory instead of opening the camera.
    pub replay_dir: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub delay_ms: u64,
    pub endpoint: String,
    pub timeout_secs: u64,
    pub artifact_dir: PathBuf,
    pub property_store: PathBuf,
    /// Log to dated files here instead of stdout.
    pub log_dir: Option<PathBuf>,
    pub queue_capacity: usize,
    pub playlist: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let camera = CameraConfig::default();
        let capture = CaptureConfig::default();
        let service = FacePlusPlusConfig::default();
        Self {
            device: camera.device().to_path_buf(),
            replay_dir: None,
            width: camera.width(),
            height: camera.height(),
            fps: camera.fps(),
            delay_ms: capture.delay().as_millis() as u64,
            endpoint: service.endpoint().to_string(),
            timeout_secs: service.timeout().as_secs(),
            artifact_dir: service.artifact_dir().to_path_buf(),
            property_store: PathBuf::from("properties.json"),
            log_dir: None,
            queue_capacity: wave_control::bridge::DEFAULT_CAPACITY,
            playlist: vec![
                "Intro".to_string(),
                "Morning Walk".to_string(),
                "Night Drive".to_string(),
            ],
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn camera_config(&self) -> CameraConfig {
        CameraConfig::default()
            .with_device(&self.device)
            .with_width(self.width)
            .with_height(self.height)
            .with_fps(self.fps)
    }

    pub fn capture_config(&self) -> CaptureConfig {
        CaptureConfig::default().with_delay(Duration::from_millis(self.delay_ms))
    }

    pub fn classifier_config(&self) -> FacePlusPlusConfig {
        FacePlusPlusConfig::default()
            .with_endpoint(&self.endpoint)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_artifact_dir(&self.artifact_dir)
    }
}
