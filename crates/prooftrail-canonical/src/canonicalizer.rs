use canonical_json::to_string;
use serde_json::Value;
use std::fmt;

/// Maximum nesting depth accepted by the canonicalizer.
///
/// `serde_json::Value` cannot express reference cycles, so a depth bound is
/// the fail-fast guard against pathological self-similar nesting. Exceeding
/// it is a programmer error, not an expected runtime condition.
pub const MAX_DEPTH: usize = 128;

/// Error returned when canonicalization fails.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalizationError {
    /// Provided JSON could not be canonicalized.
    #[error("invalid JSON structure: {0}")]
    InvalidStructure(String),
    /// Non-finite number (NaN/Infinity) detected.
    #[error("non-finite number detected at {0}")]
    NonFiniteNumber(String),
    /// Nesting exceeds [`MAX_DEPTH`].
    #[error("nesting depth exceeds {MAX_DEPTH} at {0}")]
    DepthExceeded(String),
}

/// Helper for building JSON paths in error messages.
#[derive(Debug, Clone)]
struct Path {
    segments: Vec<String>,
}

impl Path {
    fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    fn push_field(&self, field: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(field.to_string());
        Self { segments }
    }

    fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(format!("[{}]", index));
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "root")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}

/// Produces the canonical byte form of a JSON value.
///
/// Object members are serialized with keys sorted lexicographically at every
/// nesting level; arrays preserve element order; no whitespace is inserted
/// (RFC 8785). Two semantically equal values yield identical bytes
/// regardless of the order their fields were populated in.
///
/// # Example
///
/// ```rust
/// use prooftrail_canonical::canonical_bytes;
/// use serde_json::json;
///
/// let bytes = canonical_bytes(&json!({"b": 1, "a": "x"}))?;
/// assert_eq!(bytes, br#"{"a":"x","b":1}"#);
/// # Ok::<(), prooftrail_canonical::CanonicalizationError>(())
/// ```
pub fn canonical_bytes(value: &Value) -> Result<Vec<u8>, CanonicalizationError> {
    Ok(canonical_string(value)?.into_bytes())
}

/// String counterpart of [`canonical_bytes`].
pub fn canonical_string(value: &Value) -> Result<String, CanonicalizationError> {
    validate(value, Path::root(), 0)?;
    to_string(value).map_err(|err| CanonicalizationError::InvalidStructure(err.to_string()))
}

/// Validates the JSON value before encoding, reporting the failing path.
fn validate(value: &Value, path: Path, depth: usize) -> Result<(), CanonicalizationError> {
    if depth > MAX_DEPTH {
        return Err(CanonicalizationError::DepthExceeded(format!("{}", path)));
    }

    match value {
        Value::Object(map) => {
            for (key, child) in map {
                validate(child, path.push_field(key), depth + 1)?;
            }
            Ok(())
        }
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                validate(item, path.push_index(idx), depth + 1)?;
            }
            Ok(())
        }
        Value::Number(num) => {
            if let Some(f) = num.as_f64() {
                if !f.is_finite() {
                    return Err(CanonicalizationError::NonFiniteNumber(format!("{}", path)));
                }
            }
            Ok(())
        }
        Value::String(_) | Value::Bool(_) | Value::Null => Ok(()),
    }
}
