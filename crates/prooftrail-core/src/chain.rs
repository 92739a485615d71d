//! Chain hashing and construction for the flat event profile.
//!
//! The digest is computed as `sha256(canonical_bytes(payload))` where the
//! payload already contains `previousHash` — the previous digest is one of
//! the canonicalized fields, not appended out-of-band, which is what makes
//! successive records a chain rather than independent hashes.

use prooftrail_canonical::{canonical_bytes, sha256_hex};

use crate::errors::CoreError;
use crate::events::{CustodyEvent, EventPayload};
use crate::signing::{verify_digest_signature, Keypair};

/// Computes the digest of a flat event payload.
///
/// Deterministic: two payloads with equal field values yield the same digest
/// regardless of how they were constructed.
pub fn compute_current_hash(payload: &EventPayload) -> Result<String, CoreError> {
    let value = serde_json::to_value(payload)?;
    let bytes = canonical_bytes(&value)?;
    Ok(sha256_hex(&bytes))
}

/// Builds a custody event from its non-derived fields.
///
/// Pure and idempotent: no I/O, no hidden state, identical results for
/// identical payloads. Signing, if used, happens afterward via
/// [`sign_event`] and does not alter the digest.
pub fn build_event(payload: EventPayload) -> Result<CustodyEvent, CoreError> {
    let current_hash = compute_current_hash(&payload)?;
    Ok(CustodyEvent {
        payload,
        current_hash,
        signature: None,
    })
}

/// Signs a flat event, attaching a detached signature over its digest bytes.
///
/// Flat-profile convention: the signing input is the raw hex-decoded
/// `currentHash`, so the signature covers the digest (and, through it, the
/// chained content), rendered as bare base64.
pub fn sign_event(event: &mut CustodyEvent, keypair: &Keypair) -> Result<(), CoreError> {
    let sig = keypair.sign_digest_hex(&event.current_hash)?;
    event.signature = Some(sig);
    Ok(())
}

/// Verifies a flat event's signature against an SPKI public key PEM.
///
/// Returns `false` for an absent or malformed signature; never panics.
pub fn verify_event_signature(event: &CustodyEvent, public_key_pem: &str) -> bool {
    match event.signature.as_deref() {
        Some(sig) => verify_digest_signature(&event.current_hash, sig, public_key_pem),
        None => false,
    }
}
