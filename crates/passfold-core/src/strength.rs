//! Key strength estimation.
//!
//! Scores a candidate key's composition against the alphabet's
//! character classes. The formula and its thresholds are carried over
//! from the original system unchanged. They are a heuristic, and
//! compatibility with prior behavior matters more than security
//! soundness, so do not "improve" them.

use crate::alphabet;
use crate::error::Result;

/// Keys shorter than this score exactly 0.0.
const MIN_KEY_LEN: usize = 8;

/// Count caps per character class.
const LOWERCASE_CAP: usize = 14;
const UPPERCASE_CAP: usize = 10;
const SPECIAL_CAP: usize = 8;

/// Ceiling applied when any character class is absent.
const MISSING_CLASS_CEILING: f64 = 0.8;

/// Score a key's composition, returning a value in `[0.0, 1.0]`.
///
/// Counts lowercase, uppercase, and special symbols (any alphabet
/// symbol that is not an ASCII letter), caps them at 14/10/8, and
/// combines the three capped ratios as a Euclidean norm clamped to 1.0.
/// If any class has zero occurrences the score is further clamped to
/// 0.8. Keys under 8 characters score exactly 0.0.
///
/// # Errors
///
/// Returns [`PassfoldError::UnknownSymbol`](crate::PassfoldError::UnknownSymbol)
/// if the key contains characters outside the alphabet domain.
pub fn score_key(key: &str) -> Result<f64> {
    let mut lowercase = 0usize;
    let mut uppercase = 0usize;
    let mut special = 0usize;
    let mut length = 0usize;

    for symbol in key.chars() {
        alphabet::index_of(symbol)?;
        length += 1;
        if symbol.is_ascii_lowercase() {
            lowercase += 1;
        } else if symbol.is_ascii_uppercase() {
            uppercase += 1;
        } else {
            special += 1;
        }
    }

    if length < MIN_KEY_LEN {
        return Ok(0.0);
    }

    let ratios = [
        lowercase.min(LOWERCASE_CAP) as f64 / LOWERCASE_CAP as f64,
        uppercase.min(UPPERCASE_CAP) as f64 / UPPERCASE_CAP as f64,
        special.min(SPECIAL_CAP) as f64 / SPECIAL_CAP as f64,
    ];
    let mut score = ratios.iter().map(|r| r * r).sum::<f64>().sqrt().min(1.0);

    if lowercase == 0 || uppercase == 0 || special == 0 {
        score = score.min(MISSING_CLASS_CEILING);
    }

    Ok(score)
}
