// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Display formatting for decimal amounts

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::codec::{pow10, scaled_hex_to_decimal, NumericInput, MAX_SCALE_DIGITS};
use crate::errors::CodecError;

/// Render an amount as fixed-point text with at most `decimals` fractional digits.
///
/// Values are rounded half away from zero to `decimals` places, trailing zero
/// digits (and a dangling `.`) are removed, and exponential notation is never
/// produced. No grouping separators are inserted.
///
/// # Errors
///
/// [`CodecError::NumericFormat`] when rendering would need more than
/// [`MAX_SCALE_DIGITS`] digits past the value's own precision, e.g. a
/// non-zero value with exponent `1e9`.
///
/// # Examples
///
/// ```rust
/// use bigdecimal::BigDecimal;
/// use std::str::FromStr;
/// use txverify::format_amount;
///
/// let tiny = BigDecimal::from_str("1E-8").unwrap();
/// assert_eq!(format_amount(&tiny, 18).unwrap(), "0.00000001");
///
/// let price = BigDecimal::from_str("1250.500").unwrap();
/// assert_eq!(format_amount(&price, 6).unwrap(), "1250.5");
/// ```
pub fn format_amount(value: &BigDecimal, decimals: u32) -> Result<String, CodecError> {
    let scaled = rescale(value, decimals)?;
    if scaled.is_zero() {
        return Ok("0".to_string());
    }

    let width = decimals as usize;
    let mut digits = scaled.magnitude().to_str_radix(10);
    if digits.len() <= width {
        digits = format!("{}{digits}", "0".repeat(width + 1 - digits.len()));
    }

    let (whole, fraction) = digits.split_at(digits.len() - width);
    let fraction = fraction.trim_end_matches('0');
    let sign = if scaled.is_negative() { "-" } else { "" };

    if fraction.is_empty() {
        Ok(format!("{sign}{whole}"))
    } else {
        // Always use decimal notation, never scientific notation
        Ok(format!("{sign}{whole}.{fraction}"))
    }
}

/// Convert an on-chain integer to a decimal amount and format it.
///
/// # Errors
///
/// Same as [`scaled_hex_to_decimal`].
///
/// # Examples
///
/// ```rust
/// use txverify::format_scaled;
///
/// assert_eq!(format_scaled("0x14d1120d7b160000", 18).unwrap(), "1.5");
/// ```
pub fn format_scaled<'a>(
    hex: impl Into<NumericInput<'a>>,
    decimals: u32,
) -> Result<String, CodecError> {
    let value = scaled_hex_to_decimal(hex, decimals)?;
    format_amount(&value, decimals)
}

/// `value × 10^decimals` as an integer, rounded half away from zero.
fn rescale(value: &BigDecimal, decimals: u32) -> Result<BigInt, CodecError> {
    if value.is_zero() {
        return Ok(BigInt::zero());
    }

    let (int, exponent) = value.as_bigint_and_exponent();
    let too_large = || {
        CodecError::numeric_format(
            format!("{int}e{}", -i128::from(exponent)),
            "exponent too large",
        )
    };
    let shift = i64::from(decimals)
        .checked_sub(exponent)
        .ok_or_else(too_large)?;

    if shift >= 0 {
        let shift = u32::try_from(shift)
            .ok()
            .filter(|&s| s <= MAX_SCALE_DIGITS)
            .ok_or_else(too_large)?;
        return Ok(&int * BigInt::from(pow10(shift)));
    }

    // |int| < 10^bits, so dropping more digits than that rounds to zero
    let drop = shift.unsigned_abs();
    if drop > int.magnitude().bits() {
        return Ok(BigInt::zero());
    }
    let drop = u32::try_from(drop).map_err(|_| too_large())?;

    let divisor = BigInt::from(pow10(drop));
    let quotient = &int / &divisor;
    let remainder = &int % &divisor;
    if remainder.abs() * 2 >= divisor {
        Ok(quotient + int.signum())
    } else {
        Ok(quotient)
    }
}
