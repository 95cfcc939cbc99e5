// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Lossless conversion between human decimal amounts and on-chain scaled integers.
//!
//! On-chain amounts are integers equal to `decimal_amount × 10^decimals`, usually
//! rendered as `0x`-prefixed hex. This module converts in both directions without
//! ever routing the integer part through a floating-point type.
//!
//! # Type Relationships
//!
//! ```text
//! NumericInput (int, BigDecimal, f64, decimal or hex text)
//!     |
//!     | parse_to_big_integer
//!     ↓
//! ParsedNumber (Integer | PreScaled | Fractional)
//!     |
//!     | to_big_number(decimals)
//!     ↓
//! BigInt (scaled) ──render──> HexString
//!     |
//!     | scaled_hex_to_decimal(decimals)
//!     ↓
//! BigDecimal (exact)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use std::str::FromStr;
//! use txverify::{scaled_hex_to_decimal, to_scaled_hex};
//!
//! let wei = to_scaled_hex("1.5", 18).unwrap();
//! assert_eq!(wei.as_str(), "0x14d1120d7b160000");
//!
//! let eth = scaled_hex_to_decimal(&wei, 18).unwrap();
//! assert_eq!(eth, BigDecimal::from_str("1.5").unwrap());
//!
//! // Hex input is already scaled and is not multiplied again
//! assert_eq!(to_scaled_hex("0xff", 6).unwrap().as_str(), "0xff");
//! ```

mod hex;
mod parse;
mod scale;

pub use hex::HexString;
pub use parse::{
    is_negative, is_zero_prefixed, parse_to_big_integer, strip_zero_prefix, FractionalParts,
    NumericInput, ParsedNumber,
};
pub use scale::{scaled_hex_to_decimal, to_big_number, to_scaled_hex, MAX_SCALE_DIGITS};

pub(crate) use scale::{check_scale, pow10};
