//! Canonical encoding and digest primitives for Proof-Trail records.
//!
//! Everything that participates in hashing or signing goes through this
//! crate: the canonical byte form is the single source of truth for both,
//! so a digest and a signature computed over "the same logical record" are
//! always computed over the same bytes.
//!
#![deny(missing_docs)]

/// Canonicalization helpers for deterministic hashing and signing.
pub mod canonicalizer;
/// Digest rendering and the chain sentinel.
pub mod digest;
/// Validated identifier newtypes.
pub mod identifiers;
/// Validation errors shared by canonical types.
pub mod validation;

pub use canonicalizer::{canonical_bytes, canonical_string, CanonicalizationError};
pub use digest::{is_bare_digest, is_tagged_digest, sha256_hex, sha256_tagged, GENESIS, SHA256_PREFIX};
pub use identifiers::Timestamp;
pub use validation::ValidationError;
