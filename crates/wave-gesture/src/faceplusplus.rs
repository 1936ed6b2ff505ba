use crate::{
    ArtifactStore, Credentials, GestureClassifier, GestureError, GestureObservation,
    parse_response, response::error_message,
};
use reqwest::blocking::{Client, multipart::Form};
use std::path::{Path, PathBuf};
use std::time::Duration;
use wave_camera::Frame;

pub const DEFAULT_ENDPOINT: &str = "https://api-us.faceplusplus.com/humanbodypp/v1/gesture";

/// Settings for the Face++ gesture endpoint.
#[derive(Clone, Debug)]
pub struct FacePlusPlusConfig {
    endpoint: String,
    timeout: Duration,
    artifact_dir: PathBuf,
}

impl Default for FacePlusPlusConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
            artifact_dir: PathBuf::from("images/frames"),
        }
    }
}

impl FacePlusPlusConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Upper bound on one upload-and-answer round trip.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_artifact_dir(mut self, artifact_dir: impl Into<PathBuf>) -> Self {
        self.artifact_dir = artifact_dir.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn artifact_dir(&self) -> &Path {
        &self.artifact_dir
    }
}

/// Classifier backed by the Face++ HumanBody gesture API.
///
/// Uses a blocking HTTP client: construct, use and drop it outside of any
/// async runtime (the capture thread is a plain OS thread).
pub struct FacePlusPlusClassifier {
    client: Client,
    credentials: Credentials,
    config: FacePlusPlusConfig,
    artifacts: ArtifactStore,
}

impl std::fmt::Debug for FacePlusPlusClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacePlusPlusClassifier")
            .field("credentials", &self.credentials)
            .field("config", &self.config)
            .finish()
    }
}

impl FacePlusPlusClassifier {
    pub fn new(credentials: Credentials, config: FacePlusPlusConfig) -> Result<Self, GestureError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        let artifacts = ArtifactStore::new(config.artifact_dir());
        Ok(Self {
            client,
            credentials,
            config,
            artifacts,
        })
    }

    pub fn config(&self) -> &FacePlusPlusConfig {
        &self.config
    }

    fn upload(&self, image: &Path) -> Result<GestureObservation, GestureError> {
        let form = Form::new()
            .text("api_key", self.credentials.api_key().to_string())
            .text("api_secret", self.credentials.api_secret().to_string())
            .file("image_file", image)
            .map_err(|e| GestureError::Artifact(format!("{}: {}", image.display(), e)))?
            .text("return_gesture", "1");

        let response = self
            .client
            .post(self.config.endpoint())
            .multipart(form)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(GestureError::ServiceRejected {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_response(&body)
    }
}

impl GestureClassifier for FacePlusPlusClassifier {
    fn classify(&mut self, frame: &Frame) -> Result<GestureObservation, GestureError> {
        let image = self.artifacts.persist(frame)?;
        let observation = self.upload(&image)?;
        log::debug!(
            "{}: {} hand(s) {:?}",
            image.display(),
            observation.hands.len(),
            observation.symbols()
        );
        Ok(observation)
    }
}
