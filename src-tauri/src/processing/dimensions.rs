//! Coercion of raw width/height input into pixel sizes.
//!
//! Coercion follows the rules of a JavaScript unary `+`, since that is how the
//! form values have always been interpreted: surrounding whitespace is
//! ignored, empty text is zero, and anything unparsable becomes NaN.
//! Validation is a separate, explicit step ([`to_pixels`] per axis, then
//! [`check_area`] for the pair).

use crate::core::RawDimension;
use crate::utils::{Axis, ResizeError, ResizeResult};

/// Largest accepted target dimension in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// Largest accepted target area. At 4 bytes per pixel this keeps the output
/// buffer around 160 MB.
pub const MAX_PIXELS: u64 = 40_000_000;

/// Coerces a raw dimension to a number. Never fails; bad input yields NaN.
pub fn coerce(raw: &RawDimension) -> f64 {
    match raw {
        RawDimension::Number(n) => *n,
        RawDimension::Null => 0.0,
        RawDimension::Missing => f64::NAN,
        RawDimension::Text(text) => coerce_text(text),
    }
}

fn coerce_text(text: &str) -> f64 {
    let s = text.trim();
    if s.is_empty() {
        return 0.0;
    }

    if let Some(value) = parse_prefixed_integer(s) {
        return value;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust also accepts "inf" and "nan" spellings; JS does not.
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// `0x`, `0o` and `0b` literals. Returns `None` when `s` has no such prefix.
fn parse_prefixed_integer(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}

/// Validates a coerced value and converts it to a pixel count.
///
/// Accepted values are finite and round (half away from zero) to
/// `1..=MAX_DIMENSION`.
pub fn to_pixels(axis: Axis, value: f64) -> ResizeResult<u32> {
    let invalid = || ResizeError::InvalidDimension { axis, value };

    if !value.is_finite() {
        return Err(invalid());
    }

    let rounded = value.round();
    if rounded < 1.0 || rounded > f64::from(MAX_DIMENSION) {
        return Err(invalid());
    }

    Ok(rounded as u32)
}

/// Rejects target sizes whose pixel count exceeds [`MAX_PIXELS`].
pub fn check_area(width: u32, height: u32) -> ResizeResult<()> {
    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(ResizeError::TooLarge { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> f64 {
        coerce(&RawDimension::from(s))
    }

    #[test]
    fn plain_numbers_pass_through() {
        assert_eq!(coerce(&RawDimension::Number(300.0)), 300.0);
        assert_eq!(coerce(&RawDimension::Number(-4.5)), -4.5);
    }

    #[test]
    fn numeric_text_is_parsed() {
        assert_eq!(text("300"), 300.0);
        assert_eq!(text("  200\n"), 200.0);
        assert_eq!(text("1.5"), 1.5);
        assert_eq!(text(".5"), 0.5);
        assert_eq!(text("3e2"), 300.0);
        assert_eq!(text("+42"), 42.0);
        assert_eq!(text("-7"), -7.0);
    }

    #[test]
    fn empty_and_null_coerce_to_zero() {
        assert_eq!(text(""), 0.0);
        assert_eq!(text("   "), 0.0);
        assert_eq!(coerce(&RawDimension::Null), 0.0);
    }

    #[test]
    fn missing_coerces_to_nan() {
        assert!(coerce(&RawDimension::Missing).is_nan());
    }

    #[test]
    fn prefixed_integers_are_parsed() {
        assert_eq!(text("0x10"), 16.0);
        assert_eq!(text("0o17"), 15.0);
        assert_eq!(text("0b101"), 5.0);
        assert!(text("0x").is_nan());
        assert!(text("0xZZ").is_nan());
    }

    #[test]
    fn infinity_uses_js_spelling_only() {
        assert_eq!(text("Infinity"), f64::INFINITY);
        assert_eq!(text("-Infinity"), f64::NEG_INFINITY);
        assert!(text("inf").is_nan());
        assert!(text("infinity").is_nan());
        assert!(text("NaN").is_nan());
    }

    #[test]
    fn garbage_becomes_nan() {
        assert!(text("abc").is_nan());
        assert!(text("300px").is_nan());
        assert!(text("1,000").is_nan());
        assert!(text(".").is_nan());
        assert!(text("e5").is_nan());
    }

    #[test]
    fn valid_values_round_to_pixels() {
        assert_eq!(to_pixels(Axis::Width, 300.0).unwrap(), 300);
        assert_eq!(to_pixels(Axis::Width, 1.5).unwrap(), 2);
        assert_eq!(to_pixels(Axis::Height, 0.5).unwrap(), 1);
        assert_eq!(to_pixels(Axis::Height, 16_384.0).unwrap(), MAX_DIMENSION);
    }

    #[test]
    fn invalid_values_are_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0, 0.4, -3.0, 16_385.0, 65_535.0] {
            let err = to_pixels(Axis::Width, value).unwrap_err();
            assert!(
                matches!(err, ResizeError::InvalidDimension { axis: Axis::Width, .. }),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn area_within_budget_is_accepted() {
        check_area(300, 200).expect("small area");
        check_area(MAX_DIMENSION, 2_441).expect("just under the budget");
    }

    #[test]
    fn area_over_budget_is_rejected() {
        let err = check_area(MAX_DIMENSION, MAX_DIMENSION).unwrap_err();
        assert!(matches!(err, ResizeError::TooLarge { width: 16_384, height: 16_384 }));
        assert!(check_area(10_000, 4_001).is_err());
    }
}
