// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Format validators for addresses, transaction hashes and transfer parameters.

use alloy_primitives::{Address, B256};
use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::errors::{AddressRole, TransactionError, VerificationError};

fn is_prefixed_hex(value: &str, digits: usize) -> bool {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .is_some_and(|hex| hex.len() == digits && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Whether `value` is a 20-byte address: `0x` followed by 40 hex digits.
///
/// Mixed case is accepted without checking the EIP-55 checksum.
pub fn validate_address(value: &str) -> bool {
    is_prefixed_hex(value, 40)
}

/// Whether `value` is a 32-byte transaction or block hash: `0x` followed by 64 hex digits.
pub fn validate_transaction_hash(value: &str) -> bool {
    is_prefixed_hex(value, 64)
}

/// Parse an address argument, tagging failures with the argument's role.
pub fn parse_address(value: &str, role: AddressRole) -> Result<Address, VerificationError> {
    if !validate_address(value) {
        return Err(VerificationError::invalid_address(role, value));
    }
    value
        .parse::<Address>()
        .map_err(|_| VerificationError::invalid_address(role, value))
}

pub(crate) fn parse_transaction_hash(value: &str) -> Result<B256, TransactionError> {
    if !validate_transaction_hash(value) {
        return Err(TransactionError::invalid_identifier(value));
    }
    value
        .parse::<B256>()
        .map_err(|_| TransactionError::invalid_identifier(value))
}

/// Validate the parameters of a transfer before building or checking it.
///
/// The amount must be strictly positive; sender, receiver and (when given)
/// token must be well-formed addresses. Checks run in that order and the
/// first failure is returned.
///
/// # Examples
///
/// ```rust
/// use bigdecimal::BigDecimal;
/// use txverify::{validate_transfer_params, VerificationError};
///
/// let from = "0x1111111111111111111111111111111111111111";
/// let to = "0x2222222222222222222222222222222222222222";
///
/// assert!(validate_transfer_params(from, to, &BigDecimal::from(5), None).is_ok());
/// assert!(matches!(
///     validate_transfer_params(from, to, &BigDecimal::from(0), None),
///     Err(VerificationError::InvalidAmount { .. })
/// ));
/// ```
pub fn validate_transfer_params(
    from: &str,
    to: &str,
    amount: &BigDecimal,
    token_address: Option<&str>,
) -> Result<(), VerificationError> {
    if *amount <= BigDecimal::zero() {
        return Err(VerificationError::invalid_amount(
            "the amount cannot be zero or less than zero",
        ));
    }

    parse_address(from, AddressRole::Sender)?;
    parse_address(to, AddressRole::Receiver)?;
    if let Some(token) = token_address {
        parse_address(token, AddressRole::Token)?;
    }

    Ok(())
}
