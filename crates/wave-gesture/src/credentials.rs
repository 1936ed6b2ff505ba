use serde::Deserialize;
use std::fmt;
use std::path::Path;

pub const API_KEY_PROPERTY: &str = "gest_api_key";
pub const API_SECRET_PROPERTY: &str = "gest_api_secret";

#[derive(Debug)]
pub enum CredentialsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Missing(&'static str),
}

impl fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialsError::Io(err) => write!(f, "cannot read property store: {err}"),
            CredentialsError::Parse(err) => write!(f, "invalid property store: {err}"),
            CredentialsError::Missing(key) => write!(f, "property {key} is missing or empty"),
        }
    }
}

impl std::error::Error for CredentialsError {}

impl From<std::io::Error> for CredentialsError {
    fn from(err: std::io::Error) -> Self {
        CredentialsError::Io(err)
    }
}

impl From<serde_json::Error> for CredentialsError {
    fn from(err: serde_json::Error) -> Self {
        CredentialsError::Parse(err)
    }
}

#[derive(Deserialize)]
struct PropertyStore {
    #[serde(rename = "gest_api_key")]
    api_key: Option<String>,
    #[serde(rename = "gest_api_secret")]
    api_secret: Option<String>,
}

/// Key and secret for the recognition service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

fn non_empty(value: Option<String>, key: &'static str) -> Result<String, CredentialsError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CredentialsError::Missing(key)),
    }
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Parse a JSON property store. Unrelated properties are ignored.
    pub fn from_properties_json(json: &str) -> Result<Self, CredentialsError> {
        let store: PropertyStore = serde_json::from_str(json)?;
        Ok(Self {
            api_key: non_empty(store.api_key, API_KEY_PROPERTY)?,
            api_secret: non_empty(store.api_secret, API_SECRET_PROPERTY)?,
        })
    }

    pub fn from_property_file(path: impl AsRef<Path>) -> Result<Self, CredentialsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_properties_json(&json)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }
}
