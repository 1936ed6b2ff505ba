//! Hand gesture recognition through an external HTTP service.
//!
//! Each classified frame is written to disk as a numbered PNG, uploaded to
//! the recognition endpoint, and the per-hand votes in the answer are
//! reduced to one `GestureSymbol` per hand.

pub mod artifact;
pub mod classifier;
pub mod credentials;
pub mod error;
pub mod faceplusplus;
pub mod response;

pub use artifact::ArtifactStore;
pub use classifier::GestureClassifier;
pub use credentials::{Credentials, CredentialsError};
pub use error::GestureError;
pub use faceplusplus::{FacePlusPlusClassifier, FacePlusPlusConfig};
pub use response::{GestureObservation, GestureSymbol, Hand, HandRect, parse_response};
