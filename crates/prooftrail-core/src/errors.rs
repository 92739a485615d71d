use thiserror::Error;

/// Errors raised while building or hashing records.
///
/// These are precondition violations on the producer side (a record that
/// cannot be serialized or canonicalized), not expected runtime conditions;
/// verification of untrusted input never surfaces them directly.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Record could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Canonical encoding failed.
    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] prooftrail_canonical::CanonicalizationError),
    /// Signing failed.
    #[error("signing failed: {0}")]
    Signing(#[from] crate::signing::SigningError),
}
