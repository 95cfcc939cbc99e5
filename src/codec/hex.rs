// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical hex text for on-chain integers.

use alloy_primitives::U256;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, Zero};
use serde::{Deserialize, Deserializer, Serialize};

use super::parse::{is_negative, parse_hex_digits, strip_zero_prefix};
use crate::errors::CodecError;

/// A scaled integer rendered as lowercase hex.
///
/// Canonical form is `0x` followed by the digits with no leading zeros, so zero
/// is `0x0`. Negative values carry a leading `-` (`-0x1f`). Values are only
/// produced by the codec; there is no way to wrap arbitrary text.
///
/// # Examples
///
/// ```rust
/// use txverify::HexString;
///
/// let hex = HexString::parse("0x000FF").unwrap();
/// assert_eq!(hex.as_str(), "0xff");
/// assert_eq!(HexString::from(0u64).as_str(), "0x0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexString(String);

impl HexString {
    pub(crate) fn from_bigint(value: &BigInt) -> Self {
        let digits = value.magnitude().to_str_radix(16);
        if value.is_negative() {
            Self(format!("-0x{digits}"))
        } else {
            Self(format!("0x{digits}"))
        }
    }

    /// Canonicalize hex text.
    ///
    /// Accepts an optional `-`, an optional `0x` prefix and hex digits in either
    /// case. Digits are always read as base 16, so `"10"` is sixteen.
    /// `"0x"` is zero.
    ///
    /// # Errors
    ///
    /// [`CodecError::NumericFormat`] when the text contains non-hex characters.
    pub fn parse(text: &str) -> Result<Self, CodecError> {
        let lowered = text.to_ascii_lowercase();
        let negative = is_negative(&lowered);
        let body = if negative { &lowered[1..] } else { lowered.as_str() };
        let value = parse_hex_digits(text, strip_zero_prefix(body), negative)?;
        Ok(Self::from_bigint(&value))
    }

    /// The canonical text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the canonical text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether this is `0x0`.
    pub fn is_zero(&self) -> bool {
        self.0 == "0x0"
    }

    /// The integer this text represents.
    pub fn to_bigint(&self) -> BigInt {
        let negative = is_negative(&self.0);
        let body = if negative { &self.0[1..] } else { self.0.as_str() };
        // Canonical text always holds valid hex digits
        let magnitude =
            BigUint::parse_bytes(strip_zero_prefix(body).as_bytes(), 16).unwrap_or_default();
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        BigInt::from_biguint(sign, magnitude)
    }
}

impl std::fmt::Display for HexString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for HexString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HexString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&BigInt> for HexString {
    fn from(value: &BigInt) -> Self {
        Self::from_bigint(value)
    }
}

impl From<BigInt> for HexString {
    fn from(value: BigInt) -> Self {
        Self::from_bigint(&value)
    }
}

impl From<BigUint> for HexString {
    fn from(value: BigUint) -> Self {
        if value.is_zero() {
            return Self("0x0".to_string());
        }
        Self(format!("0x{}", value.to_str_radix(16)))
    }
}

impl From<u64> for HexString {
    fn from(value: u64) -> Self {
        Self(format!("{value:#x}"))
    }
}

impl From<U256> for HexString {
    fn from(value: U256) -> Self {
        Self::from(BigUint::from_bytes_be(&value.to_be_bytes::<32>()))
    }
}

impl<'de> Deserialize<'de> for HexString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
