//! Line and record readers for newline-delimited JSON logs.

use crate::errors::JournalError;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads all non-empty lines of a log file.
///
/// Blank lines (including a trailing newline) are ignored; they are not
/// records and not evidence of tampering.
///
/// # Errors
///
/// Returns [`JournalError::NotFound`] if the file does not exist, so callers
/// can distinguish "no store" from "empty store".
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, JournalError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            JournalError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            JournalError::Io(e)
        }
    })?;

    Ok(contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Reads and parses every record in a log file.
///
/// The first unparsable line aborts the read with a [`JournalError::Json`];
/// use [`verify_log`](crate::verify_log) when malformed lines must be
/// reported by index instead.
pub fn read_records<T, P>(path: P) -> Result<Vec<T>, JournalError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    read_lines(path)?
        .iter()
        .map(|line| serde_json::from_str(line).map_err(JournalError::Json))
        .collect()
}
