//! Single-round keyed substitution cipher.
//!
//! A keystream addition cipher over Z/91Z: character `i` of the text is
//! shifted by the alphabet residue of `key[i mod len(key)]`. Encrypt
//! adds, decrypt subtracts, so the two are exact inverses for any fixed
//! key (additive group property).

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::Result;

const MODULUS: u8 = ALPHABET_LEN as u8;

/// Encrypt `text` under a repeating `key`.
///
/// # Errors
///
/// Returns [`PassfoldError::EmptyKey`](crate::PassfoldError::EmptyKey)
/// for an empty key, or
/// [`PassfoldError::UnknownSymbol`](crate::PassfoldError::UnknownSymbol)
/// if any character of text or key is outside the alphabet. No partial
/// output is produced on failure.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    let key = super::encode_key(key)?;
    let mut residues = alphabet::encode(text)?;
    encrypt_residues(&mut residues, &key);
    Ok(alphabet::decode(&residues))
}

/// Decrypt `text` under a repeating `key`. Inverse of [`encrypt`].
///
/// # Errors
///
/// Same conditions as [`encrypt`].
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    let key = super::encode_key(key)?;
    let mut residues = alphabet::encode(text)?;
    decrypt_residues(&mut residues, &key);
    Ok(alphabet::decode(&residues))
}

/// One encrypt round over pre-validated residues.
pub(crate) fn encrypt_residues(text: &mut [u8], key: &[u8]) {
    for (i, residue) in text.iter_mut().enumerate() {
        *residue = (*residue + key[i % key.len()]) % MODULUS;
    }
}

/// One decrypt round over pre-validated residues.
pub(crate) fn decrypt_residues(text: &mut [u8], key: &[u8]) {
    for (i, residue) in text.iter_mut().enumerate() {
        *residue = (*residue + MODULUS - key[i % key.len()]) % MODULUS;
    }
}
