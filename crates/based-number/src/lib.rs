//! # based-number
//!
//! A Rust translation of a small Java utility for positional base
//! conversion.  An integer is represented as a digit string together with
//! its radix, over the radix range [2, 36], using the digit alphabet
//! `0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ`.
//!
//! The central type is [`BasedNumber`]: construction validates that every
//! digit is representable in the declared base, and conversion to another
//! base goes through a 64-bit decimal intermediate.
//!
//! ## Quick start
//!
//! ```rust
//! use based_number::BasedNumber;
//!
//! let n = BasedNumber::new(36, "ZZZZZZ")?;
//! let decimal = n.to_decimal()?;
//! assert_eq!(decimal.digits(), "2176782335");
//! assert_eq!(decimal.to_base(36)?.digits(), "ZZZZZZ");
//! # Ok::<(), based_number::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The digit alphabet and the base range it supports.
pub mod digits;

/// Error types and the crate-wide `Result` alias.
pub mod errors;

/// The `BasedNumber` value type.
pub mod number;

pub use digits::{DECIMAL_BASE, DIGIT_ALPHABET, MAX_BASE, MIN_BASE};
pub use errors::{Error, Result};
pub use number::BasedNumber;
