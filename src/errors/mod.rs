// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the txverify library.
//!
//! Each module has its own error type so callers can match on exactly the
//! failures an operation can produce:
//!
//! - [`CodecError`] - Amount parsing and scaling failures
//! - [`TransactionError`] - Fetching and validating a transaction record
//! - [`VerificationError`] - Bad verification arguments, lookups, bounded waits
//! - [`ConfigError`] - Malformed network configuration
//!
//! [`TxVerifyError`] wraps all of them for callers who just want `?`.
//!
//! # Examples
//!
//! ```rust,no_run
//! use txverify::{TransferVerifier, TxVerifyError, to_scaled_hex};
//!
//! # async fn example(verifier: TransferVerifier<impl txverify::ChainSource>) -> Result<(), TxVerifyError> {
//! let hex = to_scaled_hex("1.5", 18)?;
//! let record = verifier.fetch("0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060").await?;
//! println!("{hex} {}", record.value());
//! # Ok(())
//! # }
//! ```

mod codec;
mod config;
mod transaction;
mod verification;

pub use codec::CodecError;
pub use config::ConfigError;
pub use transaction::TransactionError;
pub use verification::{AddressRole, VerificationError};

/// Unified error type for all txverify operations.
///
/// Module-specific errors convert into it via `From`, so `?` works across
/// codec, fetch and verification calls in one function.
#[derive(Debug, thiserror::Error)]
pub enum TxVerifyError {
    /// Error from amount conversion.
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Error from fetching a transaction record.
    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),

    /// Error from transfer verification.
    #[error("Verification error: {0}")]
    Verification(#[from] VerificationError),

    /// Error from network configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
