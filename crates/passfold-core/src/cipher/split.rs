//! Split-key cipher: the transform actually applied to folder fields.
//!
//! The key is split into two parts and each part drives an independent
//! iterated-cipher pass. Keys shorter than four symbols are used whole.
//! For longer keys, part one is `key[..=mid]` with `mid = len / 2`, and
//! part two is the remainder, plus `key[1]` appended when the key
//! length is even, so even-length keys contribute one extra symbol.
//!
//! Decrypt chains the parts in reverse (part two, then part one), each
//! pass itself unwinding its rounds in reverse. This ordering is pinned
//! by tests; previously stored ciphertext depends on it.

use crate::alphabet;
use crate::error::Result;

use super::IteratedShiftCipher;

/// Round count used when protecting folder entry fields.
pub const VAULT_ROUNDS: usize = 100;

/// Two chained iterated-cipher passes under a split key.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitKeyCipher {
    inner: IteratedShiftCipher,
}

impl SplitKeyCipher {
    /// Create a cipher whose inner passes run the given round count.
    pub fn new(rounds: usize) -> Self {
        Self {
            inner: IteratedShiftCipher::new(rounds),
        }
    }

    /// The configuration the folder state machine uses (100 rounds).
    pub fn vault() -> Self {
        Self::new(VAULT_ROUNDS)
    }

    /// Encrypt `text`: one iterated pass per key part, part one first.
    ///
    /// # Errors
    ///
    /// Empty key or any out-of-domain character in text or key aborts
    /// the whole multi-part transform with no partial output.
    pub fn encrypt(&self, text: &str, key: &str) -> Result<String> {
        let key = super::encode_key(key)?;
        let mut residues = alphabet::encode(text)?;
        for part in split_key(&key) {
            self.inner.encrypt_residues(&mut residues, &part);
        }
        Ok(alphabet::decode(&residues))
    }

    /// Decrypt `text`: parts applied in reverse order. Inverse of
    /// [`encrypt`](Self::encrypt).
    ///
    /// # Errors
    ///
    /// Same conditions as [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, text: &str, key: &str) -> Result<String> {
        let key = super::encode_key(key)?;
        let mut residues = alphabet::encode(text)?;
        for part in split_key(&key).iter().rev() {
            self.inner.decrypt_residues(&mut residues, part);
        }
        Ok(alphabet::decode(&residues))
    }
}

/// Split a key into its cipher parts.
///
/// Keys shorter than four symbols stay whole. Otherwise part one takes
/// indices `0..=mid`, part two the rest, with `key[1]` appended to part
/// two for even-length keys.
fn split_key(key: &[u8]) -> Vec<Vec<u8>> {
    if key.len() < 4 {
        return vec![key.to_vec()];
    }
    let mid = key.len() / 2;
    let first = key[..=mid].to_vec();
    let mut second = key[mid + 1..].to_vec();
    if key.len() % 2 == 0 {
        second.push(key[1]);
    }
    vec![first, second]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PassfoldError;

    #[test]
    fn test_short_keys_stay_whole() {
        for len in 1u8..4 {
            let key: Vec<u8> = (0..len).collect();
            assert_eq!(split_key(&key), vec![key.clone()]);
        }
    }

    #[test]
    fn test_split_odd_length() {
        // len 5: mid = 2, part one = indices 0..=2, part two = 3..5.
        let parts = split_key(&[10, 11, 12, 13, 14]);
        assert_eq!(parts, vec![vec![10, 11, 12], vec![13, 14]]);
        let total: usize = parts.iter().map(Vec::len).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn test_split_even_length_gains_one_symbol() {
        // len 6: key[1] is appended to part two.
        let parts = split_key(&[10, 11, 12, 13, 14, 15]);
        assert_eq!(parts, vec![vec![10, 11, 12, 13], vec![14, 15, 11]]);
        let total: usize = parts.iter().map(Vec::len).sum();
        assert_eq!(total, 7);
    }

    #[test]
    fn test_split_minimum_length() {
        let parts = split_key(&[1, 2, 3, 4]);
        assert_eq!(parts, vec![vec![1, 2, 3], vec![4, 2]]);
    }

    #[test]
    fn test_vault_scenario_round_trip() {
        let cipher = SplitKeyCipher::vault();
        let ciphertext = cipher.encrypt("alice", "Tr0ub4dor&3").unwrap();
        assert_ne!(ciphertext, "alice");
        assert_eq!(cipher.decrypt(&ciphertext, "Tr0ub4dor&3").unwrap(), "alice");
    }

    #[test]
    fn test_wrong_key_yields_garbage_not_plaintext() {
        let cipher = SplitKeyCipher::vault();
        let ciphertext = cipher.encrypt("alice", "Tr0ub4dor&3").unwrap();
        let garbled = cipher.decrypt(&ciphertext, "wrong-key").unwrap();
        assert_ne!(garbled, "alice");
    }

    #[test]
    fn test_round_trip_with_short_key() {
        // Keys under four symbols take the single-part path.
        let cipher = SplitKeyCipher::vault();
        let ciphertext = cipher.encrypt("some secret", "abc").unwrap();
        assert_eq!(cipher.decrypt(&ciphertext, "abc").unwrap(), "some secret");
    }

    #[test]
    fn test_round_trip_across_key_lengths() {
        let cipher = SplitKeyCipher::default();
        let plaintext = "The 91-symbol domain: letters, digits & space!";
        for key in ["k", "key!", "pass5", "hunter2hunter2", "A_longer key with spaces"] {
            let ciphertext = cipher.encrypt(plaintext, key).unwrap();
            assert_eq!(cipher.decrypt(&ciphertext, key).unwrap(), plaintext, "key {key:?}");
        }
    }

    #[test]
    fn test_unknown_symbol_propagates_unchanged() {
        let cipher = SplitKeyCipher::vault();
        assert_eq!(
            cipher.encrypt("caf\u{e9}", "key"),
            Err(PassfoldError::UnknownSymbol('\u{e9}'))
        );
        assert_eq!(
            cipher.decrypt("text", "caf\u{e9}"),
            Err(PassfoldError::UnknownSymbol('\u{e9}'))
        );
    }

    #[test]
    fn test_empty_key_rejected() {
        let cipher = SplitKeyCipher::vault();
        assert_eq!(cipher.encrypt("text", ""), Err(PassfoldError::EmptyKey));
    }
}
