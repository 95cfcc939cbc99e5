// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Universal numeric parser feeding the scaling functions.

use std::borrow::Cow;

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, Zero};

use super::hex::HexString;
use super::scale::{pow10, MAX_SCALE_DIGITS};
use crate::errors::CodecError;

/// A value accepted by the codec.
///
/// Every native integer type, `BigInt`, `BigUint` and `U256` convert into
/// [`NumericInput::Integer`]; strings into [`NumericInput::Text`].
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput<'a> {
    /// An exact integer amount (not yet scaled)
    Integer(BigInt),
    /// An exact decimal amount
    Decimal(BigDecimal),
    /// A float, interpreted through its shortest round-trip text form
    Float(f64),
    /// Decimal text (`"-12.5"`) or hex text (`"0x1f"`, `"ff"`)
    Text(Cow<'a, str>),
}

impl std::fmt::Display for NumericInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericInput::Integer(v) => write!(f, "{v}"),
            NumericInput::Decimal(v) => write!(f, "{v}"),
            NumericInput::Float(v) => write!(f, "{v}"),
            NumericInput::Text(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! integer_input {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericInput<'_> {
                fn from(value: $t) -> Self {
                    NumericInput::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

integer_input!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for NumericInput<'_> {
    fn from(value: BigInt) -> Self {
        NumericInput::Integer(value)
    }
}

impl From<BigUint> for NumericInput<'_> {
    fn from(value: BigUint) -> Self {
        NumericInput::Integer(BigInt::from(value))
    }
}

impl From<U256> for NumericInput<'_> {
    fn from(value: U256) -> Self {
        NumericInput::Integer(BigInt::from_bytes_be(
            Sign::Plus,
            &value.to_be_bytes::<32>(),
        ))
    }
}

impl From<BigDecimal> for NumericInput<'_> {
    fn from(value: BigDecimal) -> Self {
        NumericInput::Decimal(value)
    }
}

impl From<&BigDecimal> for NumericInput<'_> {
    fn from(value: &BigDecimal) -> Self {
        NumericInput::Decimal(value.clone())
    }
}

impl From<f64> for NumericInput<'_> {
    fn from(value: f64) -> Self {
        NumericInput::Float(value)
    }
}

impl<'a> From<&'a str> for NumericInput<'a> {
    fn from(value: &'a str) -> Self {
        NumericInput::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for NumericInput<'a> {
    fn from(value: &'a String) -> Self {
        NumericInput::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for NumericInput<'_> {
    fn from(value: String) -> Self {
        NumericInput::Text(Cow::Owned(value))
    }
}

impl<'a> From<&'a HexString> for NumericInput<'a> {
    fn from(value: &'a HexString) -> Self {
        NumericInput::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<HexString> for NumericInput<'_> {
    fn from(value: HexString) -> Self {
        NumericInput::Text(Cow::Owned(value.into_string()))
    }
}

/// Whole and fractional digits of a decimal amount, kept apart until the scale is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractionalParts {
    /// Digits before the decimal point
    pub whole: BigUint,
    /// Digits after the decimal point, read as an integer
    pub fraction: BigUint,
    /// How many digits followed the decimal point (leading zeros count)
    pub fraction_digits: u32,
    /// Whether the amount had a leading `-`
    pub negative: bool,
}

/// Result of [`parse_to_big_integer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedNumber {
    /// An integer amount that still has to be multiplied by `10^decimals`
    Integer(BigInt),
    /// Hex input: already the on-chain integer, never rescaled
    PreScaled(BigInt),
    /// A decimal amount with a fractional part
    Fractional(FractionalParts),
}

/// Parse any supported numeric form.
///
/// - Integers pass through as [`ParsedNumber::Integer`].
/// - Decimal text with a single `.` yields [`ParsedNumber::Fractional`]; without
///   one it is a plain [`ParsedNumber::Integer`]. A leading `-` is honoured.
/// - Hex text (`0x` prefix, or hex digits including at least one `a`-`f`) yields
///   [`ParsedNumber::PreScaled`]. `"0x"` alone is zero.
///
/// # Errors
///
/// [`CodecError::NumericFormat`] for anything else: empty text, more than one
/// `.`, stray characters, NaN or infinite floats, or a [`BigDecimal`] whose
/// exponent exceeds [`MAX_SCALE_DIGITS`](crate::codec::MAX_SCALE_DIGITS).
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use txverify::{parse_to_big_integer, ParsedNumber};
///
/// assert_eq!(
///     parse_to_big_integer("-0x10").unwrap(),
///     ParsedNumber::PreScaled(BigInt::from(-16)),
/// );
/// assert!(matches!(parse_to_big_integer("2.50").unwrap(), ParsedNumber::Fractional(_)));
/// assert!(parse_to_big_integer("12abz").is_err());
/// ```
pub fn parse_to_big_integer<'a>(
    value: impl Into<NumericInput<'a>>,
) -> Result<ParsedNumber, CodecError> {
    match value.into() {
        NumericInput::Integer(v) => Ok(ParsedNumber::Integer(v)),
        NumericInput::Decimal(v) => parse_decimal(&v),
        NumericInput::Float(v) => {
            if !v.is_finite() {
                return Err(CodecError::numeric_format(v.to_string(), "not a finite number"));
            }
            // f64's Display is the shortest round-trip form and never uses an exponent
            parse_text(&v.to_string())
        }
        NumericInput::Text(v) => parse_text(&v),
    }
}

fn parse_decimal(value: &BigDecimal) -> Result<ParsedNumber, CodecError> {
    if value.is_zero() {
        return Ok(ParsedNumber::Integer(BigInt::zero()));
    }

    let (int, exponent) = value.as_bigint_and_exponent();
    // Only a positive scale can carry trailing zeros worth dropping
    let (int, exponent) = if exponent > 0 {
        value.normalized().into_bigint_and_exponent()
    } else {
        (int, exponent)
    };

    let digits = exponent
        .checked_abs()
        .and_then(|e| u32::try_from(e).ok())
        .filter(|&d| d <= MAX_SCALE_DIGITS)
        .ok_or_else(|| {
            CodecError::numeric_format(
                format!("{int}e{}", -i128::from(exponent)),
                "exponent too large",
            )
        })?;

    if exponent <= 0 {
        return Ok(ParsedNumber::Integer(int * BigInt::from(pow10(digits))));
    }

    let divisor = pow10(digits);
    let magnitude = int.magnitude();

    Ok(ParsedNumber::Fractional(FractionalParts {
        whole: magnitude / &divisor,
        fraction: magnitude % &divisor,
        fraction_digits: digits,
        negative: int.is_negative(),
    }))
}

fn parse_text(raw: &str) -> Result<ParsedNumber, CodecError> {
    let lowered = raw.to_ascii_lowercase();
    let negative = is_negative(&lowered);
    let body = if negative { &lowered[1..] } else { lowered.as_str() };

    if is_decimal_text(body) {
        return parse_decimal_text(raw, body, negative);
    }

    if is_zero_prefixed(body) || looks_like_bare_hex(body) {
        return parse_hex_digits(raw, strip_zero_prefix(body), negative).map(ParsedNumber::PreScaled);
    }

    Err(CodecError::numeric_format(raw, "not a supported numeric form"))
}

fn is_decimal_text(body: &str) -> bool {
    !body.is_empty()
        && body != "."
        && body.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && body.bytes().filter(|&b| b == b'.').count() <= 1
}

fn looks_like_bare_hex(body: &str) -> bool {
    body.bytes().all(|b| b.is_ascii_hexdigit()) && body.bytes().any(|b| matches!(b, b'a'..=b'f'))
}

fn parse_decimal_text(raw: &str, body: &str, negative: bool) -> Result<ParsedNumber, CodecError> {
    let Some((whole, fraction)) = body.split_once('.') else {
        let magnitude = parse_digits(raw, body, 10)?;
        return Ok(ParsedNumber::Integer(signed(magnitude, negative)));
    };

    let fraction_digits = u32::try_from(fraction.len())
        .map_err(|_| CodecError::numeric_format(raw, "fraction part too long"))?;

    Ok(ParsedNumber::Fractional(FractionalParts {
        whole: parse_digits(raw, whole, 10)?,
        fraction: parse_digits(raw, fraction, 10)?,
        fraction_digits,
        negative,
    }))
}

/// Parse hex digits (no prefix, no sign). Empty digits are zero.
pub(crate) fn parse_hex_digits(
    raw: &str,
    digits: &str,
    negative: bool,
) -> Result<BigInt, CodecError> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::numeric_format(raw, "invalid hex digit"));
    }
    Ok(signed(parse_digits(raw, digits, 16)?, negative))
}

fn parse_digits(raw: &str, digits: &str, radix: u32) -> Result<BigUint, CodecError> {
    if digits.is_empty() {
        return Ok(BigUint::zero());
    }
    BigUint::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| CodecError::numeric_format(raw, "invalid digits"))
}

fn signed(magnitude: BigUint, negative: bool) -> BigInt {
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    BigInt::from_biguint(sign, magnitude)
}

/// Whether the text starts with a `-` sign.
pub fn is_negative(value: &str) -> bool {
    value.starts_with('-')
}

/// Whether the text starts with the `0x` hex prefix.
pub fn is_zero_prefixed(value: &str) -> bool {
    value.starts_with("0x")
}

/// Remove a leading `0x`, if any.
pub fn strip_zero_prefix(value: &str) -> &str {
    value.strip_prefix("0x").unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn fractional(whole: u64, fraction: u64, fraction_digits: u32, negative: bool) -> ParsedNumber {
        ParsedNumber::Fractional(FractionalParts {
            whole: BigUint::from(whole),
            fraction: BigUint::from(fraction),
            fraction_digits,
            negative,
        })
    }

    #[test]
    fn integers_pass_through() {
        assert_eq!(
            parse_to_big_integer(42u64).unwrap(),
            ParsedNumber::Integer(BigInt::from(42))
        );
        assert_eq!(
            parse_to_big_integer(BigInt::from(-7)).unwrap(),
            ParsedNumber::Integer(BigInt::from(-7))
        );
    }

    #[test]
    fn u256_keeps_full_precision() {
        let parsed = parse_to_big_integer(U256::MAX).unwrap();
        let expected = (BigInt::from(1) << 256u32) - 1;
        assert_eq!(parsed, ParsedNumber::Integer(expected));
    }

    #[test]
    fn decimal_text_without_point_is_integer() {
        assert_eq!(
            parse_to_big_integer("-125").unwrap(),
            ParsedNumber::Integer(BigInt::from(-125))
        );
    }

    #[test]
    fn decimal_text_splits_whole_and_fraction() {
        assert_eq!(parse_to_big_integer("12.050").unwrap(), fractional(12, 50, 3, false));
        assert_eq!(parse_to_big_integer("-0.5").unwrap(), fractional(0, 5, 1, true));
    }

    #[test]
    fn leading_or_trailing_point_is_accepted() {
        assert_eq!(parse_to_big_integer(".25").unwrap(), fractional(0, 25, 2, false));
        assert_eq!(parse_to_big_integer("3.").unwrap(), fractional(3, 0, 0, false));
    }

    #[test]
    fn prefixed_hex_is_prescaled() {
        assert_eq!(
            parse_to_big_integer("0xFF").unwrap(),
            ParsedNumber::PreScaled(BigInt::from(255))
        );
        assert_eq!(
            parse_to_big_integer("-0x10").unwrap(),
            ParsedNumber::PreScaled(BigInt::from(-16))
        );
    }

    #[test]
    fn bare_hex_needs_a_letter_digit() {
        assert_eq!(
            parse_to_big_integer("1f").unwrap(),
            ParsedNumber::PreScaled(BigInt::from(31))
        );
        // All-decimal digits read as a decimal integer
        assert_eq!(
            parse_to_big_integer("10").unwrap(),
            ParsedNumber::Integer(BigInt::from(10))
        );
    }

    #[test]
    fn exponent_notation_reads_as_hex_digits() {
        assert_eq!(
            parse_to_big_integer("1e18").unwrap(),
            ParsedNumber::PreScaled(BigInt::from(0x1e18))
        );
    }

    #[test]
    fn empty_hex_is_zero() {
        assert_eq!(
            parse_to_big_integer("0x").unwrap(),
            ParsedNumber::PreScaled(BigInt::zero())
        );
    }

    #[test]
    fn unsupported_forms_are_rejected() {
        for input in ["", "-", ".", "1.2.3", "12abz", "0xfg", " 1", "+5", "--1"] {
            let err = parse_to_big_integer(input).unwrap_err();
            assert!(
                matches!(err, CodecError::NumericFormat { .. }),
                "{input:?} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn floats_use_shortest_text() {
        assert_eq!(parse_to_big_integer(0.1f64).unwrap(), fractional(0, 1, 1, false));
        assert_eq!(
            parse_to_big_integer(1e-7f64).unwrap(),
            fractional(0, 1, 7, false)
        );
        assert!(parse_to_big_integer(f64::NAN).is_err());
        assert!(parse_to_big_integer(f64::INFINITY).is_err());
    }

    #[test]
    fn big_decimals_are_normalized() {
        let value = BigDecimal::from_str("-1.2500").unwrap();
        assert_eq!(parse_to_big_integer(value).unwrap(), fractional(1, 25, 2, true));

        let whole = BigDecimal::from_str("1500").unwrap();
        assert_eq!(
            parse_to_big_integer(whole).unwrap(),
            ParsedNumber::Integer(BigInt::from(1500))
        );
    }

    #[test]
    fn big_decimal_exponent_is_bounded() {
        let huge = BigDecimal::new(BigInt::from(7), i64::MIN);
        let err = parse_to_big_integer(huge).unwrap_err();
        assert_eq!(
            err,
            CodecError::numeric_format("7e9223372036854775808", "exponent too large")
        );

        let tiny = BigDecimal::new(BigInt::from(7), i64::from(MAX_SCALE_DIGITS) + 1);
        assert!(matches!(
            parse_to_big_integer(tiny),
            Err(CodecError::NumericFormat { .. })
        ));

        let zero = BigDecimal::new(BigInt::zero(), i64::MIN);
        assert_eq!(
            parse_to_big_integer(zero).unwrap(),
            ParsedNumber::Integer(BigInt::zero())
        );
    }

    #[test]
    fn prefix_helpers() {
        assert!(is_negative("-0x1"));
        assert!(!is_negative("0x1"));
        assert!(is_zero_prefixed("0xabc"));
        assert_eq!(strip_zero_prefix("0xabc"), "abc");
        assert_eq!(strip_zero_prefix("abc"), "abc");
    }
}
