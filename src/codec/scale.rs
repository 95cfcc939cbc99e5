// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Scaling between decimal amounts and on-chain integers.

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint, Sign};

use super::hex::HexString;
use super::parse::{parse_to_big_integer, NumericInput, ParsedNumber};
use crate::errors::CodecError;

/// Largest power of ten the codec will multiply or divide by.
///
/// Token scales sit far below this; exponents and scales past it are
/// rejected with [`CodecError::NumericFormat`].
pub const MAX_SCALE_DIGITS: u32 = 1_000;

/// `10^exp` as an unbounded integer.
pub(crate) fn pow10(exp: u32) -> BigUint {
    BigUint::from(10u8).pow(exp)
}

pub(crate) fn check_scale(decimals: u32) -> Result<(), CodecError> {
    if decimals > MAX_SCALE_DIGITS {
        return Err(CodecError::numeric_format(
            decimals.to_string(),
            "scale too large",
        ));
    }
    Ok(())
}

/// Turn a parsed amount into the on-chain integer for the given scale.
///
/// - [`ParsedNumber::Integer`] is multiplied by `10^decimals`.
/// - [`ParsedNumber::PreScaled`] is returned unchanged.
/// - [`ParsedNumber::Fractional`] becomes
///   `whole × 10^decimals + fraction × 10^decimals / 10^fraction_digits`.
///
/// # Errors
///
/// - [`CodecError::FractionOverflow`] when the fraction has more digits than
///   `decimals`
/// - [`CodecError::NumericFormat`] when `decimals` exceeds [`MAX_SCALE_DIGITS`]
pub fn to_big_number(parsed: ParsedNumber, decimals: u32) -> Result<BigInt, CodecError> {
    check_scale(decimals)?;
    match parsed {
        ParsedNumber::Integer(value) => Ok(value * BigInt::from(pow10(decimals))),
        ParsedNumber::PreScaled(value) => Ok(value),
        ParsedNumber::Fractional(parts) => {
            if parts.fraction_digits > decimals {
                return Err(CodecError::FractionOverflow {
                    fraction_digits: parts.fraction_digits,
                    decimals,
                });
            }

            let scale = pow10(decimals);
            // Exact: fraction_digits <= decimals
            let fraction = parts.fraction * &scale / pow10(parts.fraction_digits);
            let magnitude = parts.whole * &scale + fraction;

            let sign = if parts.negative {
                Sign::Minus
            } else {
                Sign::Plus
            };
            Ok(BigInt::from_biguint(sign, magnitude))
        }
    }
}

/// Convert a human amount into the on-chain integer, rendered as hex.
///
/// Computes `amount × 10^decimals` exactly. Hex input is taken as already
/// scaled and only canonicalized.
///
/// # Errors
///
/// - [`CodecError::NumericFormat`] if `amount` is not a supported form, or
///   its exponent or `decimals` exceeds [`MAX_SCALE_DIGITS`]
/// - [`CodecError::FractionOverflow`] if `amount` has more than `decimals`
///   fractional digits
///
/// # Examples
///
/// ```rust
/// use txverify::{to_scaled_hex, CodecError};
///
/// assert_eq!(to_scaled_hex(1u64, 18).unwrap().as_str(), "0xde0b6b3a7640000");
/// assert_eq!(to_scaled_hex("-0.5", 1).unwrap().as_str(), "-0x5");
/// assert!(matches!(
///     to_scaled_hex("1.123", 2),
///     Err(CodecError::FractionOverflow { .. })
/// ));
/// ```
pub fn to_scaled_hex<'a>(
    amount: impl Into<NumericInput<'a>>,
    decimals: u32,
) -> Result<HexString, CodecError> {
    let parsed = parse_to_big_integer(amount)?;
    let scaled = to_big_number(parsed, decimals)?;
    Ok(HexString::from_bigint(&scaled))
}

/// Convert an on-chain integer back into an exact decimal amount.
///
/// The integer (hex or plain integer text, or any integer type) is split into
/// `value / 10^decimals` and `value mod 10^decimals` and recombined as a
/// [`BigDecimal`], so arbitrarily large whole parts keep full precision.
///
/// # Errors
///
/// [`CodecError::NumericFormat`] if the value is not an integer or `decimals`
/// exceeds [`MAX_SCALE_DIGITS`].
///
/// # Examples
///
/// ```rust
/// use bigdecimal::BigDecimal;
/// use std::str::FromStr;
/// use txverify::scaled_hex_to_decimal;
///
/// let amount = scaled_hex_to_decimal("0x14d1120d7b160000", 18).unwrap();
/// assert_eq!(amount, BigDecimal::from_str("1.5").unwrap());
/// ```
pub fn scaled_hex_to_decimal<'a>(
    hex: impl Into<NumericInput<'a>>,
    decimals: u32,
) -> Result<BigDecimal, CodecError> {
    check_scale(decimals)?;
    let input = hex.into();
    let text = input.to_string();

    let value = match parse_to_big_integer(input)? {
        ParsedNumber::Integer(v) | ParsedNumber::PreScaled(v) => v,
        ParsedNumber::Fractional(_) => {
            return Err(CodecError::numeric_format(
                text,
                "scaled value must be an integer",
            ))
        }
    };

    let scale = BigInt::from(pow10(decimals));
    let whole = &value / &scale;
    let fraction = &value % &scale;

    Ok(BigDecimal::new(whole, 0) + BigDecimal::new(fraction, i64::from(decimals)))
}
