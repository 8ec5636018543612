//! Key verification without key storage.
//!
//! A locked folder stores a one-way digest of the key that locked it.
//! Unlock attempts are accepted or rejected by comparing digests; the
//! key itself is never persisted and cannot be recovered from the
//! stored value.
//!
//! The digest scheme sits behind the [`KeyVerifier`] trait so it can be
//! swapped without touching the folder state machine. Two mutually
//! incompatible schemes existed historically (a polynomial mix and a
//! content digest); values produced by one scheme are never valid input
//! to another, and no cross-scheme migration is attempted.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::alphabet;
use crate::error::{PassfoldError, Result};

/// Length of a verifier value in bytes.
const VERIFIER_LEN: usize = 32;

/// An opaque one-way digest of a key.
///
/// Equality of two values is the sole test of key equality for
/// unlocking. Serialized as a hex string.
#[derive(Clone, PartialEq, Eq)]
pub struct VerifierValue([u8; VERIFIER_LEN]);

impl fmt::Debug for VerifierValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VerifierValue({})", hex::encode(self.0))
    }
}

impl Serialize for VerifierValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for VerifierValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        let bytes = hex::decode(&encoded).map_err(D::Error::custom)?;
        let bytes: [u8; VERIFIER_LEN] = bytes
            .try_into()
            .map_err(|_| D::Error::custom("verifier must be 32 bytes"))?;
        Ok(Self(bytes))
    }
}

/// One-way digest of a candidate key.
///
/// Implementations must be deterministic and irreversible; the folder
/// state machine relies on nothing else.
pub trait KeyVerifier {
    /// Digest a key into an opaque verifier value.
    ///
    /// # Errors
    ///
    /// Returns [`PassfoldError::EmptyKey`] for an empty key, or
    /// [`PassfoldError::UnknownSymbol`] if the key contains characters
    /// outside the alphabet domain; verification is defined only over
    /// that domain.
    fn digest(&self, key: &str) -> Result<VerifierValue>;
}

/// The default verifier: BLAKE3 over the raw key bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Verifier;

impl KeyVerifier for Blake3Verifier {
    fn digest(&self, key: &str) -> Result<VerifierValue> {
        if key.is_empty() {
            return Err(PassfoldError::EmptyKey);
        }
        for symbol in key.chars() {
            alphabet::index_of(symbol)?;
        }
        Ok(VerifierValue(*blake3::hash(key.as_bytes()).as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        let verifier = Blake3Verifier;
        assert_eq!(
            verifier.digest("Tr0ub4dor&3").unwrap(),
            verifier.digest("Tr0ub4dor&3").unwrap()
        );
    }

    #[test]
    fn test_different_keys_different_digests() {
        let verifier = Blake3Verifier;
        assert_ne!(
            verifier.digest("Tr0ub4dor&3").unwrap(),
            verifier.digest("Tr0ub4dor&4").unwrap()
        );
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(Blake3Verifier.digest(""), Err(PassfoldError::EmptyKey));
    }

    #[test]
    fn test_out_of_domain_key_rejected() {
        assert_eq!(
            Blake3Verifier.digest("p\u{e4}ssword"),
            Err(PassfoldError::UnknownSymbol('\u{e4}'))
        );
    }

    #[test]
    fn test_serde_hex_round_trip() {
        let value = Blake3Verifier.digest("some key").unwrap();
        let json = serde_json::to_string(&value).unwrap();
        // Hex string: 64 chars plus quotes.
        assert_eq!(json.len(), 66);
        let back: VerifierValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_deserialize_rejects_wrong_length() {
        let result: std::result::Result<VerifierValue, _> = serde_json::from_str("\"abcd\"");
        assert!(result.is_err());
    }
}
