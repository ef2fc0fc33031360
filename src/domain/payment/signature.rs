//! Gateway callback signature verification.
//!
//! The gateway signs each completed payment with
//! `HMAC_SHA256(secret, "{order_id}|{payment_id}")`, hex-encoded. Verification
//! recomputes the digest and compares in constant time.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Verifier for gateway payment callbacks.
#[derive(Clone)]
pub struct CallbackVerifier {
    /// The gateway key secret shared with the payment provider.
    secret: SecretString,
}

impl CallbackVerifier {
    /// Creates a new verifier with the given shared secret.
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Verifies a callback signature.
    ///
    /// Returns true only when the hex-decoded signature matches the
    /// recomputed digest byte for byte. Malformed hex counts as a mismatch,
    /// not an error: an attacker-controlled field must never take a
    /// different code path from a wrong-but-well-formed signature.
    pub fn verify(&self, order_id: &str, payment_id: &str, supplied_hex: &str) -> bool {
        let supplied = match hex::decode(supplied_hex) {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };

        let expected = self.compute(order_id, payment_id);
        constant_time_compare(&expected, &supplied)
    }

    /// Computes the raw HMAC-SHA256 digest for a callback.
    fn compute(&self, order_id: &str, payment_id: &str) -> Vec<u8> {
        let signed_payload = format!("{}|{}", order_id, payment_id);

        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key size");
        mac.update(signed_payload.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

/// Performs constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Computes the hex signature the gateway would produce, for test fixtures.
#[cfg(test)]
pub fn compute_test_signature(secret: &str, order_id: &str, payment_id: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key size");
    mac.update(format!("{}|{}", order_id, payment_id).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "rzp_test_secret_12345";

    fn verifier() -> CallbackVerifier {
        CallbackVerifier::new(SecretString::new(TEST_SECRET.to_string()))
    }

    #[test]
    fn accepts_matching_signature() {
        let sig = compute_test_signature(TEST_SECRET, "order_1", "pay_1");
        assert!(verifier().verify("order_1", "pay_1", &sig));
    }

    #[test]
    fn rejects_single_character_mutation() {
        let sig = compute_test_signature(TEST_SECRET, "order_1", "pay_1");
        let mut mutated = sig.into_bytes();
        mutated[0] = if mutated[0] == b'a' { b'b' } else { b'a' };
        let mutated = String::from_utf8(mutated).unwrap();
        assert!(!verifier().verify("order_1", "pay_1", &mutated));
    }

    #[test]
    fn rejects_signature_for_different_payment() {
        let sig = compute_test_signature(TEST_SECRET, "order_1", "pay_1");
        assert!(!verifier().verify("order_1", "pay_2", &sig));
    }

    #[test]
    fn rejects_signature_from_wrong_secret() {
        let sig = compute_test_signature("some_other_secret", "order_1", "pay_1");
        assert!(!verifier().verify("order_1", "pay_1", &sig));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(!verifier().verify("order_1", "pay_1", "zz-not-hex"));
        assert!(!verifier().verify("order_1", "pay_1", ""));
    }

    #[test]
    fn rejects_truncated_signature() {
        let sig = compute_test_signature(TEST_SECRET, "order_1", "pay_1");
        assert!(!verifier().verify("order_1", "pay_1", &sig[..32]));
    }

    #[test]
    fn rejects_swapped_order_and_payment_ids() {
        let sig = compute_test_signature(TEST_SECRET, "order_1", "pay_1");
        assert!(!verifier().verify("pay_1", "order_1", &sig));
    }
}
