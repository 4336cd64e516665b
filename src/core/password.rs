//! Password hashing.
//!
//! Encoded passwords have the form `sha256$<salt>$<digest>` where both parts
//! are lower-case hex and the digest covers `salt || password`.

use constant_time_eq::constant_time_eq;
use rand::Rng;
use sha2::{Digest, Sha256};

const SCHEME: &str = "sha256";
const SALT_LEN: usize = 16;

/// Hashes `raw` with a fresh random salt.
#[must_use]
pub fn encode(raw: &str) -> String {
    let mut salt = [0_u8; SALT_LEN];
    rand::rng().fill(&mut salt[..]);
    encode_with_salt(raw, &salt)
}

fn encode_with_salt(raw: &str, salt: &[u8]) -> String {
    format!("{SCHEME}${}${}", hex::encode(salt), digest(salt, raw))
}

/// Checks `raw` against a value produced by [`encode`].
#[must_use]
pub fn matches(raw: &str, encoded: &str) -> bool {
    let mut parts = encoded.splitn(3, '$');
    let (Some(SCHEME), Some(salt_hex), Some(expected)) = (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    constant_time_eq(digest(&salt, raw).as_bytes(), expected.as_bytes())
}

fn digest(salt: &[u8], raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(raw.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_then_match() {
        let encoded = encode("baker");
        assert!(encoded.starts_with("sha256$"));
        assert!(matches("baker", &encoded));
        assert!(!matches("barista", &encoded));
    }

    #[test]
    fn test_salts_differ() {
        assert_ne!(encode("same"), encode("same"));
    }

    #[test]
    fn test_known_digest() {
        // sha256("abc") with an empty salt
        assert_eq!(
            encode_with_salt("abc", &[]),
            "sha256$$ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_malformed_values_never_match() {
        assert!(!matches("x", ""));
        assert!(!matches("x", "md5$00$abcd"));
        assert!(!matches("x", "sha256$zz$abcd"));
        assert!(!matches("x", "sha256$abc$abcd"));
    }

    #[test]
    fn test_truncated_digest_never_matches() {
        let encoded = encode_with_salt("baker", &[0xab, 0xcd]);
        assert!(encoded.starts_with("sha256$abcd$"));
        assert!(matches("baker", &encoded));
        assert!(!matches("baker", &encoded[..encoded.len() - 1]));
    }
}
