//! Core record types, chain hashing, verification, and signing for Proof-Trail.
//!
//! This crate provides:
//! - The flat custody event profile and the extensible envelope profile
//! - Chain hashing over canonical bytes, with the previous digest in-band
//! - Sequential chain verification reporting the first point of corruption
//! - Structural envelope validation run before any cryptography
//! - Ed25519 signing and verification over PEM-encoded key material
//!
//! Core invariants:
//! - Records are immutable, append-only evidence; derived fields
//!   (`currentHash`, `chain.event_hash`, signatures) are never authored by hand
//! - Digests are content-derived from canonical bytes, so any field change
//!   breaks the chain and is the detection mechanism
//! - Verification is deterministic, offline, and read-only
//!
#![deny(missing_docs)]

/// Chain hashing and construction for the flat event profile.
pub mod chain;
/// Extensible envelope profile and its hashing/signing rules.
pub mod envelope;
/// Error types for builder and signing paths.
pub mod errors;
/// Flat custody event types.
pub mod events;
/// Ed25519 keypairs and signature primitives.
pub mod signing;
/// Structural envelope validation.
pub mod validate;
/// Chain verification over any record profile.
pub mod verify;

pub use chain::{build_event, compute_current_hash, sign_event, verify_event_signature};
pub use envelope::{
    compute_event_hash, seal_envelope, sign_envelope, signing_payload, verify_envelope_signature,
    Actor, ChainLink, CustodyEnvelope, SignatureBlock,
};
pub use errors::CoreError;
pub use events::{CustodyEvent, EventPayload};
pub use prooftrail_canonical::GENESIS;
pub use signing::{verify_bytes, verify_digest_signature, Keypair, SigningError};
pub use validate::{validate_envelope, EnvelopeFault};
pub use verify::{verify_chain, ChainCursor, ChainFault, ChainRecord, VerificationReport};
