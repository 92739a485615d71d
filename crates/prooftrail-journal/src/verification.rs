//! Whole-log chain verification.

use crate::reader::read_lines;
use prooftrail_core::{ChainCursor, ChainFault, ChainRecord, VerificationReport};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Replays a stored log and reports the first point of corruption.
///
/// Classification, in order of detection:
/// - a missing or unreadable store is a [`ChainFault::StoreNotFound`] at
///   index 0 — never an empty-chain success;
/// - a line that fails to parse into the record shape is a
///   [`ChainFault::MalformedRecord`] at that line's index;
/// - link and digest faults follow the sequential replay of
///   [`ChainCursor`].
///
/// An empty (but present) log verifies successfully. Verification never
/// mutates the store and stops at the first fault: a single broken link
/// invalidates everything after it.
pub fn verify_log<R, P>(path: P) -> VerificationReport
where
    R: ChainRecord + DeserializeOwned,
    P: AsRef<Path>,
{
    let lines = match read_lines(path) {
        Ok(lines) => lines,
        // Missing or unreadable store: a distinct failure, never an
        // empty-chain success.
        Err(_) => return VerificationReport::corrupted(0, ChainFault::StoreNotFound),
    };

    let mut cursor = ChainCursor::new();
    for (index, line) in lines.iter().enumerate() {
        let record: R = match serde_json::from_str(line) {
            Ok(record) => record,
            Err(e) => {
                return VerificationReport::corrupted(
                    index,
                    ChainFault::MalformedRecord(e.to_string()),
                )
            }
        };

        if let Err(fault) = cursor.advance(&record) {
            return VerificationReport::corrupted(index, fault);
        }
    }

    VerificationReport::valid()
}
