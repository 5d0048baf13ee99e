//! `BasedNumber` — an integer paired with its radix (translates the Java
//! `Number` class).
//!
//! A `BasedNumber` owns a digit string, most significant digit first, and a
//! base in [2, 36].  Construction and digit mutation validate the string
//! against the base; conversion to another base goes through a 64-bit
//! decimal intermediate.

use crate::digits::{check_base, check_digits, digit_char, digit_value, DECIMAL_BASE};
use crate::errors::{Error, Result};

/// A non-negative integer represented as a digit string in a given base.
///
/// Corresponds to the Java `Number` class of the original utility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasedNumber {
    digits: String,
    base: u32,
}

impl BasedNumber {
    /// Create a number from a base and a digit string.
    ///
    /// The empty string is accepted and represents zero.
    ///
    /// # Errors
    /// Returns [`Error::InvalidBase`] when `base` is outside [2, 36], and
    /// [`Error::InvalidDigit`] when any character of `digits` is not a
    /// digit of that base (lowercase letters are not digits).
    pub fn new(base: u32, digits: impl Into<String>) -> Result<Self> {
        let digits = digits.into();
        check_base(base)?;
        check_digits(base, &digits)?;
        Ok(Self { digits, base })
    }

    /// The digit string, most significant digit first.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Replace the digit string, validated against the current base.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDigit`] under the same rule as [`Self::new`];
    /// on failure the value is left untouched.
    pub fn set_digits(&mut self, digits: impl Into<String>) -> Result<()> {
        let digits = digits.into();
        check_digits(self.base, &digits)?;
        self.digits = digits;
        Ok(())
    }

    /// The base in [2, 36].
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Replace the base, range-checked only.
    ///
    /// The existing digits are NOT re-validated against the new base, so a
    /// narrowing change (say 16 to 2 while the digits contain `'A'`) leaves
    /// the value in a base/digit mismatch until the next
    /// [`Self::set_digits`].  This mirrors the original utility.
    ///
    /// # Errors
    /// Returns [`Error::InvalidBase`] when `base` is outside [2, 36]; on
    /// failure the value is left untouched.
    pub fn set_base(&mut self, base: u32) -> Result<()> {
        check_base(base)?;
        self.base = base;
        Ok(())
    }

    /// The numeric value of the digit string as a 64-bit integer.
    ///
    /// Digits are weighted positionally: the digit at position `i` of an
    /// `L`-character string contributes `value · base^(L-1-i)`.  The empty
    /// string evaluates to 0.
    fn decimal_value(&self) -> Result<i64> {
        let base = i64::from(self.base);
        let mut acc: i64 = 0;
        for c in self.digits.chars() {
            let v = digit_value(c).ok_or(Error::InvalidDigit {
                digit: c,
                base: self.base,
            })?;
            acc = acc
                .checked_mul(base)
                .and_then(|acc| acc.checked_add(i64::from(v)))
                .ok_or(Error::Overflow)?;
        }
        Ok(acc)
    }

    /// Convert to base 10.
    ///
    /// A number already in base 10 is returned as a copy, digit string
    /// unchanged.  Otherwise the result carries the accumulated value in
    /// ordinary decimal digits with no leading zeros (zero renders as
    /// `"0"`, as does the empty digit string).
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] when the value exceeds `i64::MAX`.  The
    /// original utility silently overflows here; this translation does not.
    pub fn to_decimal(&self) -> Result<Self> {
        if self.base == DECIMAL_BASE {
            return Ok(self.clone());
        }
        Ok(Self {
            digits: self.decimal_value()?.to_string(),
            base: DECIMAL_BASE,
        })
    }

    /// Convert to the given base.
    ///
    /// Conversion to the current base is a copy; conversion to base 10 is
    /// [`Self::to_decimal`].  Any other target goes through the decimal
    /// intermediate and repeated division: divide while the quotient is
    /// still at least the target base, emitting a digit per remainder, then
    /// emit the final quotient if nonzero.  The result has no leading zeros
    /// (zero itself converts to `"0"`).
    ///
    /// # Errors
    /// Returns [`Error::InvalidBase`] when `base` is outside [2, 36] and
    /// [`Error::Overflow`] from the decimal intermediate.
    pub fn to_base(&self, base: u32) -> Result<Self> {
        check_base(base)?;
        if base == self.base {
            return Ok(self.clone());
        }
        if base == DECIMAL_BASE {
            return self.to_decimal();
        }

        let target = i64::from(base);
        let mut rest = self.decimal_value()?;
        let mut out: Vec<char> = Vec::new();
        loop {
            out.push(digit_char((rest % target) as u32));
            rest /= target;
            if rest < target {
                break;
            }
        }
        if rest != 0 {
            out.push(digit_char(rest as u32));
        }

        Ok(Self {
            digits: out.iter().rev().collect(),
            base,
        })
    }
}

impl std::fmt::Display for BasedNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.digits, self.base)
    }
}
