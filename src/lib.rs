// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Verify EVM coin and ERC20 token transfers from transaction data.
//!
//! - [`codec`] converts human decimal amounts to and from the scaled hex
//!   integers used on-chain, with arbitrary precision
//! - [`format_amount`] renders decimal amounts without exponential notation
//! - [`TransactionRecord`] fetches a transaction and its receipt and merges them
//! - [`decode_input`] pulls receiver and amount out of `transfer` call data
//! - [`TransferVerifier`] decides whether a record is the transfer you expected
//!
//! # Example
//!
//! ```rust,no_run
//! use alloy_chains::NamedChain;
//! use bigdecimal::BigDecimal;
//! use tokio_util::sync::CancellationToken;
//! use txverify::{NetworkConfig, TransferStatus, TransferVerifier, VerifierConfig};
//!
//! # async fn example() -> Result<(), txverify::TxVerifyError> {
//! let network = NetworkConfig::for_chain(NamedChain::Mainnet, "https://eth.llamarpc.com")?;
//! let verifier = TransferVerifier::with_config(network.connect(), VerifierConfig::from(&network));
//!
//! let hash = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";
//! let (record, status) = verifier.wait(hash, &CancellationToken::new()).await?;
//!
//! if status == TransferStatus::Confirmed {
//!     let paid = verifier
//!         .verify_transfer_with_data(
//!             &record,
//!             "0x2222222222222222222222222222222222222222",
//!             &BigDecimal::from(1),
//!             None,
//!         )
//!         .await?;
//!     println!("paid: {paid}, see {:?}", verifier.explorer_url(&record));
//! }
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod config;
mod decoder;
pub mod errors;
mod format;
mod record;
mod source;
mod spans;
mod status;
mod validation;
mod verifier;

pub use codec::{
    parse_to_big_integer, scaled_hex_to_decimal, to_big_number, to_scaled_hex, FractionalParts,
    HexString, NumericInput, ParsedNumber, MAX_SCALE_DIGITS,
};
pub use config::{HttpChainSource, NetworkConfig, VerifierConfig, VerifierConfigBuilder};
pub use decoder::{decode_input, DecodedInput};
pub use errors::{
    AddressRole, CodecError, ConfigError, TransactionError, TxVerifyError, VerificationError,
};
pub use format::{format_amount, format_scaled};
pub use record::TransactionRecord;
pub use source::{AlloyChainSource, BoxError, ChainSource};
pub use status::{classify, confirmations_at, is_valid, TransferStatus};
pub use validation::{
    parse_address, validate_address, validate_transaction_hash, validate_transfer_params,
};
pub use verifier::TransferVerifier;
