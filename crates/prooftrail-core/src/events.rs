use prooftrail_canonical::Timestamp;
use serde::{Deserialize, Serialize};

/// Non-derived fields of a flat custody event.
///
/// This is the exact hashing input for the flat profile: every field here,
/// including `previous_hash`, participates in the digest; nothing else does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    /// Session the step belongs to.
    pub session_id: String,
    /// Task being executed within the session.
    pub task_id: String,
    /// Monotonically increasing step index, starting at 0.
    pub step_index: u64,
    /// When the step occurred.
    pub timestamp: Timestamp,
    /// Acting agent identifier.
    pub agent_id: String,
    /// Model that produced the step.
    pub model_name: String,
    /// Tool invoked during the step, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
    /// Digest of the step input.
    pub input_hash: String,
    /// Digest of the step output.
    pub output_hash: String,
    /// Digest of the previous event, or [`GENESIS`](prooftrail_canonical::GENESIS).
    pub previous_hash: String,
}

/// A flat custody event: payload plus derived fields.
///
/// `current_hash` is a pure function of the payload and must never be set by
/// hand; use [`build_event`](crate::build_event). The optional signature
/// attaches to, but never participates in, the digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustodyEvent {
    /// Non-derived fields.
    #[serde(flatten)]
    pub payload: EventPayload,
    /// This event's own digest (bare lowercase hex SHA-256).
    pub current_hash: String,
    /// Detached signature over the digest bytes (bare base64), if signed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}
