//! Append-only newline-delimited JSON store for custody records.
//!
//! This crate provides:
//! - An append-or-create writer emitting one JSON record per line
//! - Line and typed-record readers with a distinct not-found error
//! - Whole-log chain verification reporting the first point of corruption
//!
//! The store is the only stateful resource in the system and assumes a
//! single logical writer. Verification is read-only and holds regardless of
//! how writes were serialized: it depends only on what ended up durably
//! stored.
//!
#![deny(missing_docs)]

/// Error types for journal operations.
pub mod errors;
/// Line and record readers.
pub mod reader;
/// Whole-log chain verification.
pub mod verification;
/// Append-only log writer.
pub mod writer;

pub use errors::JournalError;
pub use reader::{read_lines, read_records};
pub use verification::verify_log;
pub use writer::{LogWriter, WriteOptions};
