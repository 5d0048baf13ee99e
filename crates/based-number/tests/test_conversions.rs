//! Tests ported from the original utility's demonstration chain, plus
//! round-trip properties over random values and bases.

use based_number::{BasedNumber, Error, DIGIT_ALPHABET, MAX_BASE, MIN_BASE};
use proptest::prelude::*;

fn number(base: u32, digits: &str) -> BasedNumber {
    BasedNumber::new(base, digits).unwrap()
}

#[test]
fn digit_acceptance_sweep() {
    // a character is accepted iff its alphabet index is < base
    for base in MIN_BASE..=MAX_BASE {
        for (index, digit) in DIGIT_ALPHABET.chars().enumerate() {
            let result = BasedNumber::new(base, digit.to_string());
            if (index as u32) < base {
                assert!(result.is_ok(), "base {base} should accept {digit:?}");
            } else {
                assert_eq!(result, Err(Error::InvalidDigit { digit, base }));
            }
        }
    }
}

#[test]
fn out_of_range_bases_rejected() {
    assert_eq!(BasedNumber::new(1, "0"), Err(Error::InvalidBase(1)));
    assert_eq!(BasedNumber::new(37, "0"), Err(Error::InvalidBase(37)));
}

#[test]
fn zero_across_bases() {
    let zero = number(16, "0");
    for base in MIN_BASE..=MAX_BASE {
        let converted = zero.to_base(base).unwrap();
        assert_eq!(converted.digits(), "0");
        assert_eq!(converted.base(), base);
    }
}

/// The chain exercised by the original's `main`:
/// `ZZZZZZ(36) -> decimal -> base 35 -> base 8 -> decimal`.
#[test]
fn demonstration_chain() {
    let n36 = number(36, "ZZZZZZ");
    let n10a = n36.to_decimal().unwrap();

    // 36^6 - 1
    assert_eq!(n10a.digits(), "2176782335");
    assert_eq!(n10a.base(), 10);
    assert_eq!(n10a.to_base(36).unwrap().digits(), "ZZZZZZ");

    let n35 = n10a.to_base(35).unwrap();
    let n8 = n35.to_base(8).unwrap();
    let n10b = n8.to_decimal().unwrap();

    // the value survives the whole chain
    assert_eq!(n10b.digits(), n10a.digits());
    assert_eq!(format!("{n36}"), "ZZZZZZ(36)");
}

#[test]
fn hex_binary_octal_cross_checks() {
    assert_eq!(number(16, "FF").to_base(2).unwrap().digits(), "11111111");
    assert_eq!(number(2, "11111111").to_base(16).unwrap().digits(), "FF");
    assert_eq!(number(8, "777").to_decimal().unwrap().digits(), "511");
    assert_eq!(number(10, "511").to_base(8).unwrap().digits(), "777");
    assert_eq!(number(10, "35").to_base(36).unwrap().digits(), "Z");
}

proptest! {
    /// Converting to the current base reproduces digits and base exactly.
    #[test]
    fn identity_conversion(value in 0i64..=i64::MAX, base in MIN_BASE..=MAX_BASE) {
        let n = number(10, &value.to_string()).to_base(base).unwrap();
        let same = n.to_base(base).unwrap();
        prop_assert_eq!(same.digits(), n.digits());
        prop_assert_eq!(same.base(), n.base());
    }

    /// Through any two intermediate bases and back, the numeric value is
    /// preserved.
    #[test]
    fn chain_preserves_value(
        value in 0i64..=i64::MAX,
        b1 in MIN_BASE..=MAX_BASE,
        b2 in MIN_BASE..=MAX_BASE,
    ) {
        let decimal = value.to_string();
        let n = number(10, &decimal);
        let back = n.to_base(b1).unwrap().to_base(b2).unwrap().to_base(10).unwrap();
        prop_assert_eq!(back.digits(), decimal.as_str());
    }

    /// Conversions never emit a leading zero (zero itself excepted).
    #[test]
    fn minimal_representation(value in 1i64..=i64::MAX, base in MIN_BASE..=MAX_BASE) {
        let n = number(10, &value.to_string()).to_base(base).unwrap();
        prop_assert!(!n.digits().starts_with('0'), "got {}", n);
    }
}
