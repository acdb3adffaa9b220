//! Failure taxonomy for store operations.
//!
//! The one distinction that matters to callers is superseded versus
//! everything else: a superseded request was pre-empted by a newer equivalent
//! request and its outcome must be discarded silently, never shown to the
//! user. All other variants are operational and surface as inline errors.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A newer request for the same logical operation took precedence.
    /// Expected under rapid input or rapid view remounts; not an error.
    #[error("request superseded by a newer one")]
    Superseded,
    #[error("record not found")]
    NotFound,
    /// The store rejected the payload (missing or malformed fields).
    #[error("invalid record: {0}")]
    Invalid(String),
    /// Transport failure or an unexpected status.
    #[error("store request failed: {0}")]
    Http(String),
    /// The response body did not decode into the expected shape.
    #[error("malformed store response: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded)
    }
}
