// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Receiver/amount extraction from ERC20 `transfer` call data
//!
//! The decoder does not read the selector. It looks for the 12 zero bytes that
//! left-pad the receiver address in `transfer(address,uint256)` call data, treats
//! everything before them as the selector, and reads the two 32-byte words that
//! follow. Call data for any other function shape is misread; callers that need
//! a general ABI decoder should use `alloy-sol-types` directly.

use alloy_primitives::Address;
use tracing::warn;

use crate::codec::HexString;

/// Zero padding in front of an address argument (12 bytes as hex)
const ADDRESS_PADDING: &str = "000000000000000000000000";

/// One ABI word as hex digits
const WORD_DIGITS: usize = 64;

/// Receiver and amount read from `transfer(address,uint256)` call data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInput {
    /// The transfer recipient
    pub receiver: Address,
    /// Raw token amount (not normalized for decimals)
    pub amount: HexString,
}

/// Decode `transfer(address,uint256)` call data.
///
/// Returns `None` for empty call data (`0x`, a plain value transfer) and for
/// data that does not have the expected shape.
///
/// # Examples
///
/// ```rust
/// use txverify::decode_input;
///
/// let input = concat!(
///     "0xa9059cbb",
///     "000000000000000000000000000000000000000000000000000000000000dead",
///     "0000000000000000000000000000000000000000000000000000000000000064",
/// );
/// let decoded = decode_input(input).unwrap();
/// assert_eq!(decoded.amount.as_str(), "0x64");
///
/// assert!(decode_input("0x").is_none());
/// ```
pub fn decode_input(input: &str) -> Option<DecodedInput> {
    if input == "0x" || !input.is_ascii() {
        return None;
    }

    let Some(selector_len) = find_selector_end(input) else {
        warn!(input_len = input.len(), "No address padding found in call data");
        return None;
    };
    let args = &input[selector_len..];

    if args.len() < WORD_DIGITS {
        warn!(
            args_len = args.len(),
            "Call data too short for a transfer receiver word"
        );
        return None;
    }

    let receiver_digits = args.get(ADDRESS_PADDING.len()..WORD_DIGITS)?;
    let Ok(receiver) = format!("0x{receiver_digits}").parse::<Address>() else {
        warn!(receiver_digits, "Receiver word is not a valid address");
        return None;
    };

    let amount_digits = args[WORD_DIGITS..].trim_start_matches('0');
    let amount = match HexString::parse(&format!("0x{amount_digits}")) {
        Ok(amount) => amount,
        Err(e) => {
            warn!(error = %e, "Amount word is not valid hex");
            return None;
        }
    };

    Some(DecodedInput { receiver, amount })
}

/// Length of the shortest non-empty prefix followed directly by the address padding.
fn find_selector_end(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    (1..input.len()).find(|&start| bytes[start..].starts_with(ADDRESS_PADDING.as_bytes()))
}
