//! Report error types.

use crate::search::SearchError;
use thiserror::Error;

/// Errors that can occur during report operations
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Report version is not supported by this version
    #[error("Unsupported report version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Report contents do not describe a consistent search outcome
    #[error("Report validation failed: {0}")]
    ValidationFailed(String),

    /// Re-checking an unreachable claim hit a search limit
    #[error("Report verification stopped: {0}")]
    Search(#[from] SearchError),
}
