//! Iterated shift cipher: N rounds of the substitution cipher with a
//! rotating key.
//!
//! Encrypt round `i` (0-indexed) uses the key rotated left by `i`
//! positions, so each round sees a different effective keystream.
//! Decrypt must replay the rounds in exact reverse order (`N-1` down to
//! `0`), each with the same rotation as its encrypt round. Getting the
//! rotation amount or the round order subtly wrong breaks the inverse
//! law, which is why this layer carries its own tests.

use crate::alphabet;
use crate::error::Result;

use super::substitution;

/// Default number of rounds.
pub const DEFAULT_ROUNDS: usize = 10;

/// The substitution cipher iterated over N key-rotating rounds.
#[derive(Debug, Clone, Copy)]
pub struct IteratedShiftCipher {
    rounds: usize,
}

impl Default for IteratedShiftCipher {
    fn default() -> Self {
        Self::new(DEFAULT_ROUNDS)
    }
}

impl IteratedShiftCipher {
    /// Create a cipher with the given round count. Zero rounds is the
    /// identity transform.
    pub fn new(rounds: usize) -> Self {
        Self { rounds }
    }

    /// Encrypt `text`, applying one substitution round per iteration.
    ///
    /// # Errors
    ///
    /// Empty key or out-of-domain characters fail before any round
    /// runs; no partial output is produced.
    pub fn encrypt(&self, text: &str, key: &str) -> Result<String> {
        let key = super::encode_key(key)?;
        let mut residues = alphabet::encode(text)?;
        self.encrypt_residues(&mut residues, &key);
        Ok(alphabet::decode(&residues))
    }

    /// Decrypt `text`. Inverse of [`encrypt`](Self::encrypt).
    ///
    /// # Errors
    ///
    /// Same conditions as [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, text: &str, key: &str) -> Result<String> {
        let key = super::encode_key(key)?;
        let mut residues = alphabet::encode(text)?;
        self.decrypt_residues(&mut residues, &key);
        Ok(alphabet::decode(&residues))
    }

    pub(crate) fn encrypt_residues(&self, text: &mut [u8], key: &[u8]) {
        for round in 0..self.rounds {
            substitution::encrypt_residues(text, &rotate_left(key, round));
        }
    }

    pub(crate) fn decrypt_residues(&self, text: &mut [u8], key: &[u8]) {
        for round in (0..self.rounds).rev() {
            substitution::decrypt_residues(text, &rotate_left(key, round));
        }
    }
}

/// Rotate a key left: the first `amount mod len` elements move to the
/// end. Rotation by 0 or by the key length is the identity.
fn rotate_left(key: &[u8], amount: usize) -> Vec<u8> {
    let mut rotated = key.to_vec();
    rotated.rotate_left(amount % key.len());
    rotated
}
