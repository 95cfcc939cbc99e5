// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for transfer verification.

use std::time::Duration;

use super::{CodecError, TransactionError};
use crate::source::BoxError;

/// Which argument an address error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressRole {
    /// Sender of a transfer
    Sender,
    /// Receiver of a transfer
    Receiver,
    /// ERC20 token contract
    Token,
}

impl std::fmt::Display for AddressRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressRole::Sender => write!(f, "sender"),
            AddressRole::Receiver => write!(f, "receiver"),
            AddressRole::Token => write!(f, "token"),
        }
    }
}

/// Errors that can occur during transfer verification.
///
/// A `false` verification result is not an error: these variants cover bad
/// arguments, failures of the underlying lookups, and the bounded wait
/// running out.
#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    /// An address argument is malformed.
    #[error("Invalid {role} address: {value}")]
    InvalidAddress {
        /// Which argument was rejected
        role: AddressRole,
        /// The rejected value
        value: String,
    },

    /// A transfer amount argument is out of range.
    #[error("Invalid amount: {reason}")]
    InvalidAmount {
        /// Why the amount was rejected
        reason: String,
    },

    /// The transaction status did not resolve within the caller's bound.
    #[error("Transaction {hash} did not resolve within {waited:?}")]
    Timeout {
        /// The transaction being waited on
        hash: String,
        /// How long we waited
        waited: Duration,
    },

    /// The caller cancelled the wait.
    #[error("Wait for transaction {hash} was cancelled")]
    Cancelled {
        /// The transaction being waited on
        hash: String,
    },

    /// Amount conversion failed.
    #[error("Amount conversion failed: {0}")]
    Codec(#[from] CodecError),

    /// Fetching the transaction record failed.
    #[error(transparent)]
    Transaction(#[from] TransactionError),

    /// A block height or token decimals lookup failed. The provider's error
    /// is passed through unchanged.
    #[error(transparent)]
    Source(BoxError),
}

impl VerificationError {
    /// Create an `InvalidAddress` error.
    pub fn invalid_address(role: AddressRole, value: impl Into<String>) -> Self {
        VerificationError::InvalidAddress {
            role,
            value: value.into(),
        }
    }

    /// Create an `InvalidAmount` error.
    pub fn invalid_amount(reason: impl Into<String>) -> Self {
        VerificationError::InvalidAmount {
            reason: reason.into(),
        }
    }
}
