//! The 36-symbol digit alphabet (translates the Java `DIGITS` constant and
//! `verifyValue` check).
//!
//! A digit's numeric value is its position in the ordered alphabet
//! `0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ`.  The lookup is implemented as a
//! direct character-range mapping rather than a linear scan; the
//! accept/reject semantics are identical.

use crate::errors::{Error, Result};

/// The digit alphabet, ordered by numeric value.
pub const DIGIT_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base.
pub const MAX_BASE: u32 = 36;

/// The base of the conversion intermediate.
pub const DECIMAL_BASE: u32 = 10;

/// The numeric value of a digit character, or `None` if the character is
/// not in the alphabet.
///
/// Only uppercase letters are digits; lowercase input is not normalised.
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// The digit character for a value in [0, 36).
///
/// # Panics
/// Panics if `value >= 36`; callers only ever pass remainders modulo a
/// valid base.
pub fn digit_char(value: u32) -> char {
    DIGIT_ALPHABET
        .as_bytes()
        .get(value as usize)
        .map(|&b| b as char)
        .unwrap_or_else(|| panic!("digit value ({value}) out of range [0, 36)"))
}

/// Check that `base` is in [2, 36].
pub fn check_base(base: u32) -> Result<()> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(Error::InvalidBase(base));
    }
    Ok(())
}

/// Check that every character of `digits` is a digit with value `< base`.
///
/// The empty string is vacuously valid for every base.
pub fn check_digits(base: u32, digits: &str) -> Result<()> {
    for c in digits.chars() {
        match digit_value(c) {
            Some(v) if v < base => {}
            _ => return Err(Error::InvalidDigit { digit: c, base }),
        }
    }
    Ok(())
}
