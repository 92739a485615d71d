use regex::Regex;
use sha2::{Digest as Sha2Digest, Sha256};

/// Reserved previous-link value for the first record in a chain.
///
/// Digests in either profile are lowercase hex (optionally behind the
/// [`SHA256_PREFIX`] tag), and `GENESIS` is not valid hex, so the sentinel
/// can never collide with a real digest as long as that encoding convention
/// is preserved.
pub const GENESIS: &str = "GENESIS";

/// Algorithm namespace tag used by the extensible profile.
pub const SHA256_PREFIX: &str = "sha256:";

/// Computes the bare lowercase-hex SHA-256 digest of `bytes` (flat profile).
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Computes the `sha256:<hex>` digest of `bytes` (extensible profile).
pub fn sha256_tagged(bytes: &[u8]) -> String {
    format!("{}{}", SHA256_PREFIX, sha256_hex(bytes))
}

/// Returns true if `value` has the shape of a bare flat-profile digest.
pub fn is_bare_digest(value: &str) -> bool {
    Regex::new(r"^[0-9a-f]{64}$")
        .expect("invalid regex")
        .is_match(value)
}

/// Returns true if `value` has the shape of a tagged extensible-profile digest.
pub fn is_tagged_digest(value: &str) -> bool {
    value
        .strip_prefix(SHA256_PREFIX)
        .is_some_and(is_bare_digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sha256_vector() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            sha256_tagged(b"abc"),
            "sha256:ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sentinel_is_never_a_digest() {
        assert!(!is_bare_digest(GENESIS));
        assert!(!is_tagged_digest(GENESIS));
        assert!(is_bare_digest(&sha256_hex(b"")));
        assert!(is_tagged_digest(&sha256_tagged(b"")));
    }
}
