//! Request signing for the Kdniao open API.
//!
//! The vendor protocol mandates MD5 here; it is a wire-compatibility
//! requirement, not a security choice. The signature must stay bit-exact
//! with the vendor's reference: lowercase hex of the digest, then standard
//! Base64 of that hex string's UTF-8 bytes.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Computes the `DataSign` value for a request payload.
///
/// The secret key is appended to the payload before hashing; an empty key
/// signs the payload alone.
pub fn sign(payload: &str, secret_key: &str) -> String {
    let keyed = if secret_key.is_empty() {
        payload.to_string()
    } else {
        format!("{payload}{secret_key}")
    };

    let digest = md5::compute(keyed.as_bytes());
    let digest_hex = hex::encode(digest.as_ref());

    STANDARD.encode(digest_hex.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        assert_eq!(sign("abc", "key"), sign("abc", "key"));
    }

    #[test]
    fn matches_reference_vector() {
        // base64("11e74c87d199c94fd4c02322b42391dd") where the hex string is
        // the MD5 of "abckey".
        assert_eq!(
            sign("abc", "key"),
            "MTFlNzRjODdkMTk5Yzk0ZmQ0YzAyMzIyYjQyMzkxZGQ="
        );
        assert_eq!(sign("X", "Y"), "NzRjNTNiY2QzZGNiMmJiNzk5OTNiMmZlYzM3ZDM2MmE=");
    }

    #[test]
    fn empty_key_signs_payload_alone() {
        assert_eq!(sign("abckey", ""), sign("abc", "key"));
    }
}
