//! Error types for based-number.
//!
//! The original Java code throws a single `NumberException` with a message
//! string; here the failure modes are separate `thiserror`-derived variants
//! carrying the offending values.

use thiserror::Error;

/// The error type used throughout based-number.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A base outside the supported range [2, 36].
    #[error("base ({0}) out of range [2, 36]")]
    InvalidBase(u32),

    /// A digit character not representable in the declared base.
    ///
    /// Covers both characters whose alphabet value is too large for the
    /// base and characters absent from the alphabet entirely (lowercase
    /// letters included).
    #[error("digit {digit:?} is not valid in base {base}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// The base the digit was checked against.
        base: u32,
    },

    /// The decimal value of the digit string exceeds `i64::MAX`.
    #[error("value exceeds the 64-bit decimal intermediate range")]
    Overflow,
}

/// Shorthand `Result` type used throughout based-number.
pub type Result<T, E = Error> = std::result::Result<T, E>;
