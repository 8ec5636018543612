//! The cipher stack protecting folder entry fields.
//!
//! Three layers, innermost first:
//! - [`substitution`]: single-round additive (Vigenere-style) cipher
//!   over the 91-symbol alphabet.
//! - [`iterated`]: N rounds of the substitution cipher, rotating the
//!   key one step further each round.
//! - [`split`]: splits the key in two and chains two independent
//!   iterated passes. This is the cipher the folder state machine uses.
//!
//! For any fixed key each layer is a bijection on strings over the
//! alphabet, so decrypt is an exact inverse of encrypt. The round and
//! part ordering on decrypt must mirror encrypt exactly; it is pinned
//! by the unit tests in each module.

pub mod iterated;
pub mod split;
pub mod substitution;

pub use iterated::IteratedShiftCipher;
pub use split::SplitKeyCipher;

use crate::alphabet;
use crate::error::{PassfoldError, Result};

/// Validate a key and encode it into residues.
///
/// # Errors
///
/// Returns [`PassfoldError::EmptyKey`] for an empty key, or
/// [`PassfoldError::UnknownSymbol`] for out-of-domain characters.
pub(crate) fn encode_key(key: &str) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(PassfoldError::EmptyKey);
    }
    alphabet::encode(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(encode_key(""), Err(PassfoldError::EmptyKey));
    }

    #[test]
    fn test_key_with_unknown_symbol_rejected() {
        assert_eq!(
            encode_key("pass\"word"),
            Err(PassfoldError::UnknownSymbol('"'))
        );
    }
}
