//! The fixed 91-symbol cipher alphabet.
//!
//! Every cipher and verifier operation in this crate is defined over a
//! closed set of 91 symbols and its bijection onto the residues `0..91`.
//! The set is printable ASCII minus the four quote/escape characters
//! `"` `'` `` ` `` `\`, ordered uppercase, lowercase, digits, space,
//! punctuation. Any character outside this set is rejected with
//! [`PassfoldError::UnknownSymbol`], never skipped or substituted.

use once_cell::sync::Lazy;

use crate::error::{PassfoldError, Result};

/// Number of symbols in the alphabet (the cipher modulus).
pub const ALPHABET_LEN: usize = 91;

/// The ordered symbol table. Index in this table is the symbol's residue.
static SYMBOLS: &[u8; ALPHABET_LEN] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789 !#$%&()*+,-./:;<=>?@[]^_{|}~";

/// Inverse table: ASCII code point -> residue.
static INDEX: Lazy<[Option<u8>; 128]> = Lazy::new(|| {
    let mut table = [None; 128];
    for (i, &byte) in SYMBOLS.iter().enumerate() {
        table[byte as usize] = Some(i as u8);
    }
    table
});

/// Look up the residue of a symbol.
///
/// # Errors
///
/// Returns [`PassfoldError::UnknownSymbol`] if the symbol is not one of
/// the 91 permitted characters.
pub fn index_of(symbol: char) -> Result<u8> {
    let code = symbol as usize;
    if code < 128 {
        if let Some(index) = INDEX[code] {
            return Ok(index);
        }
    }
    Err(PassfoldError::UnknownSymbol(symbol))
}

/// Look up the symbol at a residue. Exact inverse of [`index_of`] for
/// `0 <= index < 91`; `None` outside that range.
pub fn symbol_of(index: u8) -> Option<char> {
    SYMBOLS.get(usize::from(index)).map(|&b| b as char)
}

/// The full ordered domain, for "list allowed characters" style output.
pub fn domain() -> impl Iterator<Item = char> {
    SYMBOLS.iter().map(|&b| b as char)
}

/// Encode a string into its residue sequence.
///
/// # Errors
///
/// Returns [`PassfoldError::UnknownSymbol`] on the first out-of-domain
/// character; no partial output is produced.
pub(crate) fn encode(text: &str) -> Result<Vec<u8>> {
    text.chars().map(index_of).collect()
}

/// Decode a residue sequence back into a string.
///
/// Callers guarantee every residue is `< 91` (all cipher arithmetic is
/// performed mod 91), so this is infallible.
pub(crate) fn decode(residues: &[u8]) -> String {
    residues
        .iter()
        .map(|&r| SYMBOLS[usize::from(r)] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_has_91_distinct_symbols() {
        let symbols: Vec<char> = domain().collect();
        assert_eq!(symbols.len(), ALPHABET_LEN);

        let mut deduped = symbols.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ALPHABET_LEN);
    }

    #[test]
    fn test_index_symbol_round_trip() {
        for (i, symbol) in domain().enumerate() {
            let index = index_of(symbol).unwrap();
            assert_eq!(usize::from(index), i);
            assert_eq!(symbol_of(index), Some(symbol));
        }
    }

    #[test]
    fn test_known_positions() {
        assert_eq!(index_of('A').unwrap(), 0);
        assert_eq!(index_of('a').unwrap(), 26);
        assert_eq!(index_of('0').unwrap(), 52);
        assert_eq!(index_of(' ').unwrap(), 62);
        assert_eq!(index_of('!').unwrap(), 63);
        assert_eq!(index_of('~').unwrap(), 90);
    }

    #[test]
    fn test_unknown_symbols_rejected() {
        for symbol in ['"', '\'', '`', '\\', '\n', '\t', 'é', '₿'] {
            assert_eq!(
                index_of(symbol),
                Err(PassfoldError::UnknownSymbol(symbol))
            );
        }
    }

    #[test]
    fn test_symbol_of_out_of_range() {
        assert_eq!(symbol_of(91), None);
        assert_eq!(symbol_of(255), None);
    }

    #[test]
    fn test_encode_rejects_without_partial_output() {
        let result = encode("abc\ndef");
        assert_eq!(result, Err(PassfoldError::UnknownSymbol('\n')));
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let text = "The quick brown fox! 0123456789 {~}";
        assert_eq!(decode(&encode(text).unwrap()), text);
    }
}
