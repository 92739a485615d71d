//! Extensible envelope profile: schema-versioned records with free-form
//! context/body maps, a chain sub-record, and a signature sub-record.
//!
//! Hashing and signing share one input: the envelope as JSON with
//! `signature.sig` and `chain.event_hash` stripped. The signature therefore
//! covers the full canonical record content, not just its digest.

use prooftrail_canonical::{canonical_bytes, sha256_tagged, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CoreError;
use crate::signing::{verify_bytes, Keypair};

/// Identity of the actor that produced an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Acting agent identifier.
    pub agent_id: String,
    /// Optional tenant scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Identifier of the signing key (e.g. `ed25519:agent-main:v1`).
    pub key_id: String,
}

/// Chain sub-record linking an envelope to its predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    /// Previous envelope's `event_hash`, or [`GENESIS`](prooftrail_canonical::GENESIS).
    pub prev_event_hash: String,
    /// This envelope's own digest (`sha256:<hex>`); derived, never authored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_hash: Option<String>,
}

/// Signature sub-record of an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureBlock {
    /// Signature algorithm tag (`ed25519`).
    pub alg: String,
    /// Signature value (`base64:<b64>`); derived, never authored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sig: Option<String>,
    /// Optional echo of the signed bytes. If used, it must be attached
    /// before hashing and signing: it participates in the signing payload
    /// like any other field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_bytes: Option<String>,
}

/// An extensible custody envelope.
///
/// Unknown additional fields inside `context` and `body` pass through
/// canonicalization and hashing like any other map content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustodyEnvelope {
    /// Schema version tag (e.g. `1.0`).
    pub schema_version: String,
    /// Stream this envelope belongs to.
    pub stream_id: String,
    /// Monotonically increasing sequence number, starting at 1.
    pub seq: u64,
    /// Event type tag (e.g. `skill.call`).
    pub event_type: String,
    /// When the event occurred.
    pub ts: Timestamp,
    /// Actor that produced the envelope.
    pub actor: Actor,
    /// Optional free-form context map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
    /// Free-form body map.
    pub body: Map<String, Value>,
    /// Chain sub-record.
    pub chain: ChainLink,
    /// Signature sub-record.
    pub signature: SignatureBlock,
}

/// Returns the envelope as JSON with its derived fields stripped.
///
/// This is the single hashing/signing input: only `signature.sig` and
/// `chain.event_hash` are removed; everything else (including
/// `signature.alg` and any `signed_bytes` echo) stays in.
pub fn signing_payload(envelope: &CustodyEnvelope) -> Result<Value, CoreError> {
    let mut value = serde_json::to_value(envelope)?;
    if let Some(obj) = value.as_object_mut() {
        if let Some(sig) = obj.get_mut("signature").and_then(Value::as_object_mut) {
            sig.remove("sig");
        }
        if let Some(chain) = obj.get_mut("chain").and_then(Value::as_object_mut) {
            chain.remove("event_hash");
        }
    }
    Ok(value)
}

/// Computes an envelope's own digest: `sha256:<hex>` over canonical bytes
/// of the signing payload.
pub fn compute_event_hash(envelope: &CustodyEnvelope) -> Result<String, CoreError> {
    let payload = signing_payload(envelope)?;
    let bytes = canonical_bytes(&payload)?;
    Ok(sha256_tagged(&bytes))
}

/// Attaches the derived `chain.event_hash` to an envelope.
///
/// Pure builder: sealing twice is a no-op because the hash input strips
/// `event_hash` before encoding.
pub fn seal_envelope(mut envelope: CustodyEnvelope) -> Result<CustodyEnvelope, CoreError> {
    let event_hash = compute_event_hash(&envelope)?;
    envelope.chain.event_hash = Some(event_hash);
    Ok(envelope)
}

/// Signs an envelope's canonical content, returning `base64:<b64>`.
///
/// Extensible-profile convention: the signature covers the full canonical
/// signing payload, so mutating any non-derived field after signing — even
/// one unrelated to the digest — invalidates the signature.
pub fn sign_envelope(envelope: &CustodyEnvelope, keypair: &Keypair) -> Result<String, CoreError> {
    let payload = signing_payload(envelope)?;
    let bytes = canonical_bytes(&payload)?;
    Ok(format!("base64:{}", keypair.sign_bytes(&bytes)))
}

/// Verifies an envelope's signature against an SPKI public key PEM.
///
/// An absent `signature.sig` fails deterministically; malformed signatures
/// return `false` rather than erroring.
pub fn verify_envelope_signature(envelope: &CustodyEnvelope, public_key_pem: &str) -> bool {
    let Some(sig) = envelope.signature.sig.as_deref() else {
        return false;
    };
    let Ok(payload) = signing_payload(envelope) else {
        return false;
    };
    let Ok(bytes) = canonical_bytes(&payload) else {
        return false;
    };
    verify_bytes(&bytes, sig, public_key_pem)
}
