//! GitHub webhook signature verification using HMAC-SHA256.
//!
//! GitHub signs each delivery with a shared secret and sends the result in
//! the `X-Hub-Signature-256` header as `sha256=<hex>`. Verification is the
//! first step in webhook processing; invalid signatures are rejected before
//! the payload is parsed.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Parses a GitHub signature header (e.g. "sha256=abc123...") into raw bytes.
///
/// Returns `None` for malformed headers (missing prefix, wrong algorithm,
/// invalid hex). Never panics.
pub fn parse_signature_header(header: &str) -> Option<Vec<u8>> {
    let hex_sig = header.strip_prefix("sha256=")?;
    hex::decode(hex_sig).ok()
}

/// Computes the HMAC-SHA256 signature of a payload with the given secret.
///
/// Exposed for tests, which need to generate valid headers for synthetic
/// deliveries.
pub fn compute_signature(payload: &[u8], secret: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload);
    mac.finalize().into_bytes().to_vec()
}

/// Formats a signature as a GitHub-style header value (`sha256=<hex>`).
pub fn format_signature_header(signature: &[u8]) -> String {
    format!("sha256={}", hex::encode(signature))
}

/// Verifies a webhook payload against its signature header and the secret.
///
/// Uses the HMAC library's constant-time comparison.
///
/// # Examples
///
/// ```
/// use pr_butler::webhooks::{compute_signature, format_signature_header, verify_signature};
///
/// let payload = b"Hello, World!";
/// let secret = b"It's a Secret to Everybody";
///
/// let header = format_signature_header(&compute_signature(payload, secret));
/// assert!(verify_signature(payload, &header, secret));
/// assert!(!verify_signature(payload, &header, b"wrong-secret"));
/// ```
pub fn verify_signature(payload: &[u8], signature_header: &str, secret: &[u8]) -> bool {
    let expected_signature = match parse_signature_header(signature_header) {
        Some(sig) => sig,
        None => return false,
    };

    let mut mac = match HmacSha256::new_from_slice(secret) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(payload);
    mac.verify_slice(&expected_signature).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_header_valid() {
        assert_eq!(
            parse_signature_header("sha256=1234abcd"),
            Some(vec![0x12, 0x34, 0xab, 0xcd])
        );
    }

    #[test]
    fn parse_header_rejects_missing_prefix() {
        assert_eq!(parse_signature_header("1234abcd"), None);
    }

    #[test]
    fn parse_header_rejects_wrong_algorithm() {
        assert_eq!(parse_signature_header("sha1=1234abcd"), None);
    }

    #[test]
    fn parse_header_rejects_invalid_hex() {
        assert_eq!(parse_signature_header("sha256=xyz"), None);
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let payload = b"test payload";
        let header = format_signature_header(&compute_signature(payload, b"correct"));

        assert!(verify_signature(payload, &header, b"correct"));
        assert!(!verify_signature(payload, &header, b"wrong"));
    }

    #[test]
    fn verify_rejects_modified_payload() {
        let secret = b"secret";
        let header = format_signature_header(&compute_signature(b"original", secret));

        assert!(verify_signature(b"original", &header, secret));
        assert!(!verify_signature(b"modified", &header, secret));
    }

    #[test]
    fn verify_rejects_malformed_headers_without_panicking() {
        let payload = b"test";
        let secret = b"secret";

        assert!(!verify_signature(payload, "", secret));
        assert!(!verify_signature(payload, "sha256=", secret));
        assert!(!verify_signature(payload, "sha256=zzzz", secret));
        assert!(!verify_signature(payload, "sha1=abc123", secret));
        assert!(!verify_signature(payload, "not-a-header", secret));
    }

    proptest! {
        /// Signing and verifying with the same secret always succeeds.
        #[test]
        fn prop_sign_verify_roundtrip(payload: Vec<u8>, secret: Vec<u8>) {
            let header = format_signature_header(&compute_signature(&payload, &secret));
            prop_assert!(verify_signature(&payload, &header, &secret));
        }

        /// Verifying with a different secret always fails.
        #[test]
        fn prop_wrong_secret_fails(payload: Vec<u8>, secret1: Vec<u8>, secret2: Vec<u8>) {
            prop_assume!(secret1 != secret2);

            let header = format_signature_header(&compute_signature(&payload, &secret1));
            prop_assert!(!verify_signature(&payload, &header, &secret2));
        }

        /// Any modification to the payload makes verification fail.
        #[test]
        fn prop_modified_payload_fails(original: Vec<u8>, modified: Vec<u8>, secret: Vec<u8>) {
            prop_assume!(original != modified);

            let header = format_signature_header(&compute_signature(&original, &secret));
            prop_assert!(!verify_signature(&modified, &header, &secret));
        }

        /// Formatting then parsing a signature roundtrips.
        #[test]
        fn prop_format_parse_roundtrip(signature: [u8; 32]) {
            let header = format_signature_header(&signature);
            prop_assert_eq!(parse_signature_header(&header), Some(signature.to_vec()));
        }

        /// Malformed headers never cause a panic.
        #[test]
        fn prop_malformed_header_no_panic(header: String, payload: Vec<u8>, secret: Vec<u8>) {
            let _ = parse_signature_header(&header);
            let _ = verify_signature(&payload, &header, &secret);
        }
    }
}
