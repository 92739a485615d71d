//! Structural envelope validation: a cheap precondition gate run before any
//! hash or signature computation on untrusted input.

use serde_json::Value;
use thiserror::Error;

/// First structural rule violated by a candidate envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeFault {
    /// Candidate is not a JSON object.
    #[error("envelope must be a JSON object")]
    NotAnObject,
    /// A required field is absent (or empty where emptiness is meaningless).
    #[error("missing field: {0}")]
    MissingField(String),
    /// `seq` is not an integer >= 1.
    #[error("seq must be an integer >= 1")]
    InvalidSequenceNumber,
}

const REQUIRED: [&str; 9] = [
    "schema_version",
    "stream_id",
    "seq",
    "event_type",
    "ts",
    "actor",
    "body",
    "chain",
    "signature",
];

/// Validates a candidate envelope's structure.
///
/// Pure and independent of cryptography: confirms every required top-level
/// field is present, that `actor.key_id`, `chain.prev_event_hash`, and
/// `signature.sig` are present, and that `seq` is an integer >= 1. The
/// first violated rule is returned; rules are checked in a fixed order so
/// the reported reason is deterministic.
pub fn validate_envelope(candidate: &Value) -> Result<(), EnvelopeFault> {
    let Some(obj) = candidate.as_object() else {
        return Err(EnvelopeFault::NotAnObject);
    };

    for key in REQUIRED {
        if !obj.contains_key(key) {
            return Err(EnvelopeFault::MissingField(key.to_string()));
        }
    }

    let key_id = obj
        .get("actor")
        .and_then(|a| a.get("key_id"))
        .and_then(Value::as_str);
    if key_id.map_or(true, str::is_empty) {
        return Err(EnvelopeFault::MissingField("actor.key_id".to_string()));
    }

    let has_prev = obj
        .get("chain")
        .and_then(Value::as_object)
        .is_some_and(|c| c.contains_key("prev_event_hash"));
    if !has_prev {
        return Err(EnvelopeFault::MissingField(
            "chain.prev_event_hash".to_string(),
        ));
    }

    let sig = obj
        .get("signature")
        .and_then(|s| s.get("sig"))
        .and_then(Value::as_str);
    if sig.map_or(true, str::is_empty) {
        return Err(EnvelopeFault::MissingField("signature.sig".to_string()));
    }

    match obj.get("seq").and_then(Value::as_u64) {
        Some(seq) if seq >= 1 => Ok(()),
        _ => Err(EnvelopeFault::InvalidSequenceNumber),
    }
}
