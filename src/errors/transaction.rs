// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for building a [`TransactionRecord`](crate::TransactionRecord).

use crate::source::BoxError;

/// Errors that can occur while fetching and validating a transaction.
///
/// Construction is all-or-nothing: any of these errors means no record was
/// produced.
///
/// # Examples
///
/// ```rust,no_run
/// use txverify::{TransactionError, TransactionRecord};
///
/// # async fn example(source: impl txverify::ChainSource) {
/// match TransactionRecord::fetch(&source, "0x1234").await {
///     Err(TransactionError::InvalidIdentifier { value }) => {
///         eprintln!("not a transaction hash: {value}");
///     }
///     Err(TransactionError::Transport(e)) => eprintln!("provider failed: {e}"),
///     Err(e) => eprintln!("other error: {e}"),
///     Ok(record) => println!("fetched {}", record.hash()),
/// }
/// # }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The transaction hash is not `0x` followed by 64 hex digits.
    #[error("Invalid transaction id: {value}")]
    InvalidIdentifier {
        /// The rejected identifier
        value: String,
    },

    /// The fetched transaction body or receipt does not match the expected schema.
    ///
    /// This also covers a provider answering `null` for the transaction body,
    /// which means the node does not know the hash.
    #[error("Invalid transaction data for {hash}: {reason}")]
    InvalidTransactionData {
        /// The transaction hash being fetched
        hash: String,
        /// What failed validation
        reason: String,
    },

    /// The provider call itself failed. The provider's error is passed
    /// through unchanged.
    #[error(transparent)]
    Transport(BoxError),
}

impl TransactionError {
    /// Create an `InvalidIdentifier` error.
    pub fn invalid_identifier(value: impl Into<String>) -> Self {
        TransactionError::InvalidIdentifier {
            value: value.into(),
        }
    }

    /// Create an `InvalidTransactionData` error.
    pub fn invalid_data(hash: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        TransactionError::InvalidTransactionData {
            hash: hash.to_string(),
            reason: reason.into(),
        }
    }
}
