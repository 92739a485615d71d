//! Chain verification, written once against the [`ChainRecord`] interface
//! so both record profiles share the same replay logic.

use prooftrail_canonical::GENESIS;
use thiserror::Error;

use crate::chain::compute_current_hash;
use crate::envelope::{compute_event_hash, CustodyEnvelope};
use crate::errors::CoreError;
use crate::events::CustodyEvent;

/// The kind of corruption found while replaying a chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainFault {
    /// Backing store is missing or unreadable.
    #[error("backing store not found")]
    StoreNotFound,
    /// A record does not parse into the expected shape.
    #[error("malformed record: {0}")]
    MalformedRecord(String),
    /// Previous-link field disagrees with the expected chain state.
    #[error("previous-link mismatch: expected {expected}, found {found}")]
    LinkMismatch {
        /// Digest the chain state required.
        expected: String,
        /// Digest the record carried.
        found: String,
    },
    /// Recomputed digest disagrees with the stored digest.
    #[error("digest mismatch: recomputed {recomputed}, stored {stored}")]
    DigestMismatch {
        /// Digest recomputed from the record's non-derived fields.
        recomputed: String,
        /// Digest stored on the record.
        stored: String,
    },
}

/// Outcome of replaying a stored sequence.
///
/// Verification stops at the first corruption: a single broken link
/// invalidates everything after it, so the remainder is reported as
/// unverified rather than assumed valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    /// Whether the whole sequence verified.
    pub ok: bool,
    /// Index of the first corrupted record, if any.
    pub first_corrupted_index: Option<usize>,
    /// The corruption found at that index.
    pub fault: Option<ChainFault>,
}

impl VerificationReport {
    /// A fully valid sequence (including the empty sequence).
    pub fn valid() -> Self {
        Self {
            ok: true,
            first_corrupted_index: None,
            fault: None,
        }
    }

    /// A sequence corrupted at `index`.
    pub fn corrupted(index: usize, fault: ChainFault) -> Self {
        Self {
            ok: false,
            first_corrupted_index: Some(index),
            fault: Some(fault),
        }
    }
}

/// Common interface over both record profiles.
///
/// Exposes exactly what the verifier needs: the previous-link field, the
/// stored own-digest, and a recomputation of that digest from the record's
/// non-derived fields.
pub trait ChainRecord {
    /// The record's previous-link field.
    fn prev_link(&self) -> &str;
    /// The record's stored own digest, if present.
    fn stored_digest(&self) -> Option<&str>;
    /// Recomputes the record's digest from its non-derived fields.
    fn recompute_digest(&self) -> Result<String, CoreError>;
}

impl ChainRecord for CustodyEvent {
    fn prev_link(&self) -> &str {
        &self.payload.previous_hash
    }

    fn stored_digest(&self) -> Option<&str> {
        Some(&self.current_hash)
    }

    fn recompute_digest(&self) -> Result<String, CoreError> {
        compute_current_hash(&self.payload)
    }
}

impl ChainRecord for CustodyEnvelope {
    fn prev_link(&self) -> &str {
        &self.chain.prev_event_hash
    }

    fn stored_digest(&self) -> Option<&str> {
        self.chain.event_hash.as_deref()
    }

    fn recompute_digest(&self) -> Result<String, CoreError> {
        compute_event_hash(self)
    }
}

/// Incremental chain verifier state.
///
/// Starts expecting [`GENESIS`]; after each accepted record, expects that
/// record's stored digest. Verification is strictly sequential because each
/// step's expected-previous value depends on the prior step's result.
#[derive(Debug, Clone)]
pub struct ChainCursor {
    expected_prev: String,
}

impl ChainCursor {
    /// Creates a cursor positioned before the first record.
    pub fn new() -> Self {
        Self {
            expected_prev: GENESIS.to_string(),
        }
    }

    /// Checks one record against the chain state and advances on success.
    pub fn advance<R: ChainRecord>(&mut self, record: &R) -> Result<(), ChainFault> {
        if record.prev_link() != self.expected_prev {
            return Err(ChainFault::LinkMismatch {
                expected: self.expected_prev.clone(),
                found: record.prev_link().to_string(),
            });
        }

        let stored = record
            .stored_digest()
            .ok_or_else(|| ChainFault::MalformedRecord("own digest is missing".to_string()))?;

        let recomputed = record
            .recompute_digest()
            .map_err(|e| ChainFault::MalformedRecord(e.to_string()))?;

        if recomputed != stored {
            return Err(ChainFault::DigestMismatch {
                recomputed,
                stored: stored.to_string(),
            });
        }

        self.expected_prev = stored.to_string();
        Ok(())
    }
}

impl Default for ChainCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Replays an in-memory sequence and reports the first corruption.
///
/// An empty sequence verifies successfully: absence of records is not
/// itself evidence of tampering. The input is never mutated and at most N
/// records are examined.
pub fn verify_chain<R: ChainRecord>(records: &[R]) -> VerificationReport {
    let mut cursor = ChainCursor::new();
    for (index, record) in records.iter().enumerate() {
        if let Err(fault) = cursor.advance(record) {
            return VerificationReport::corrupted(index, fault);
        }
    }
    VerificationReport::valid()
}
