#![allow(clippy::float_cmp)]

use alloc::format;

use rstest::rstest;

use super::{scan, scan_with};
use crate::NumberScanner;

#[rstest]
#[case("5,", 5.0)]
#[case("0,", 0.0)]
#[case("123,", 123.0)]
#[case("-0.5,", -0.5)]
#[case("-5e2,", -500.0)]
#[case("5e-2,", 0.05)]
#[case("2.5E-1,", 0.25)]
#[case("-12.5e+3,", -12500.0)]
#[case("3e4,", 30000.0)]
#[case("0.5e1,", 5.0)]
#[case("1e10,", 1e10)]
#[case("0.25}", 0.25)]
#[case("7]", 7.0)]
#[case("42 ", 42.0)]
#[case("9\r", 9.0)]
#[case("8\n", 8.0)]
fn scans_exact_values(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(scan(src).unwrap(), expected);
}

#[rstest]
#[case("1e400,", f64::INFINITY)]
#[case("-1e400,", f64::NEG_INFINITY)]
#[case("1e-400,", 0.0)]
fn extreme_exponents_never_error(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(scan(src).unwrap(), expected);
}

/// Exponent magnitudes 309..=323 sit inside the arithmetic window but a
/// single `10^e` of that size is already infinite; the split scaling must
/// not collapse subnormal-range results to zero.
#[rstest]
#[case("5e-310,", 5e-310)]
#[case("2.5e-320,", 2.5e-320)]
#[case("1e-323,", 1e-323)]
fn subnormal_results_survive_the_fast_path(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(scan(src).unwrap(), expected);
}

/// Same window on the positive side: the finite value 1e299 must not round
/// through an infinite intermediate scale.
#[test]
fn huge_intermediate_scale_does_not_overflow() {
    let val = scan("0.0000000001e309,").unwrap();
    assert!(val.is_finite());
    assert!((val - 1e299).abs() <= 1e299 * 1e-12);
}

/// The transition table tolerates digitless literals such as `-e400`; the
/// reparse fallback must yield NaN for them, the way the original did, not
/// fail.
#[test]
fn digitless_literal_with_huge_exponent_is_nan() {
    assert!(scan("-e400,").unwrap().is_nan());
    assert!(scan("-.e400,").unwrap().is_nan());
}

#[test]
fn terminator_is_not_consumed() {
    let src = "123,";
    let mut scanner = NumberScanner::new();
    scanner.reset('1');
    assert_eq!(scanner.advance(src, 1), Ok(false));
    assert_eq!(scanner.advance(src, 2), Ok(false));
    assert_eq!(scanner.advance(src, 3), Ok(true));
    assert_eq!(scanner.captured(), "123");
    assert_eq!(scanner.value(), 123.0);
}

#[test]
fn sign_slot_without_exponent_digits_means_exponent_zero() {
    assert_eq!(scan("5e+,").unwrap(), 5.0);
    assert_eq!(scan("5e-,").unwrap(), 5.0);
}

#[test]
fn lone_minus_scans_to_negative_zero() {
    let val = scan("-,").unwrap();
    assert_eq!(val, 0.0);
    assert!(val.is_sign_negative());
}

#[test]
fn scanner_reuse_is_independent() {
    let mut scanner = NumberScanner::new();
    assert_eq!(scan_with(&mut scanner, "-1.25e2,").unwrap(), -125.0);
    assert_eq!(scan_with(&mut scanner, "7,").unwrap(), 7.0);
    assert_eq!(scan_with(&mut scanner, "0.5,").unwrap(), 0.5);
}

/// Long fractions and out-of-range exponents must fall back to re-parsing
/// the captured text, which agrees with `str::parse` to the last bit.
#[test]
fn reparse_path_matches_std_parse_exactly() {
    for text in [
        "0.1234567890123456789",
        "1.7976931348623157e308",
        "2.2250738585072014e-308",
        "123456.78912345678901234e-20",
        "-0.00000000000000000000000123456789012345678",
    ] {
        let src = format!("{text},");
        assert_eq!(scan(&src).unwrap(), text.parse::<f64>().unwrap());
    }
}
