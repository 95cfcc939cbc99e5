// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Coin and token transfer verification against fetched records
//!
//! [`TransferVerifier`] pairs a [`ChainSource`] with a [`VerifierConfig`]. The
//! checks themselves are synchronous and work on a [`TransactionRecord`] the
//! caller already holds; only decimals lookups, confirmations and the bounded
//! wait go back to the source.
//!
//! A verification that does not match returns `Ok(false)`. Errors are reserved
//! for malformed arguments and failed lookups.

use std::time::Duration;

use alloy_primitives::{Address, B256};
use bigdecimal::BigDecimal;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, Instrument};

use crate::codec::scaled_hex_to_decimal;
use crate::config::VerifierConfig;
use crate::errors::{AddressRole, TransactionError, VerificationError};
use crate::record::TransactionRecord;
use crate::source::ChainSource;
use crate::spans;
use crate::status::{classify, confirmations_at, is_valid, TransferStatus};
use crate::validation::{parse_address, parse_transaction_hash};

/// Verifies transfers using a chain source.
///
/// # Example
///
/// ```rust,no_run
/// use bigdecimal::BigDecimal;
/// use txverify::{NetworkConfig, TransferVerifier, VerifierConfig};
///
/// # async fn example() -> Result<(), txverify::TxVerifyError> {
/// let network = NetworkConfig::new("http://localhost:8545")?;
/// let verifier = TransferVerifier::with_config(network.connect(), VerifierConfig::from(&network));
///
/// let record = verifier
///     .fetch("0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060")
///     .await?;
/// let paid = verifier
///     .verify_transfer_with_data(
///         &record,
///         "0x2222222222222222222222222222222222222222",
///         &BigDecimal::from(1),
///         None,
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TransferVerifier<S> {
    source: S,
    config: VerifierConfig,
}

impl<S: ChainSource> TransferVerifier<S> {
    /// Create a verifier with default configuration
    pub fn new(source: S) -> Self {
        Self::with_config(source, VerifierConfig::default())
    }

    /// Create a verifier with explicit configuration
    pub fn with_config(source: S, config: VerifierConfig) -> Self {
        Self { source, config }
    }

    /// Get a reference to the chain source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get the configuration
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Fetch a record through this verifier's source.
    ///
    /// See [`TransactionRecord::fetch`].
    pub async fn fetch(&self, hash: &str) -> Result<TransactionRecord, TransactionError> {
        TransactionRecord::fetch(&self.source, hash).await
    }

    /// Whether the record is a successful transfer of a non-zero coin value.
    pub fn verify_coin_transfer(&self, record: &TransactionRecord) -> bool {
        is_valid(record) && !record.value().is_zero()
    }

    /// Whether the record is a successful call with non-empty call data.
    ///
    /// The call target is not compared with `token_address`; the address is
    /// only checked for shape.
    ///
    /// # Errors
    ///
    /// [`VerificationError::InvalidAddress`] if `token_address` is malformed.
    pub fn verify_token_transfer(
        &self,
        record: &TransactionRecord,
        token_address: &str,
    ) -> Result<bool, VerificationError> {
        parse_address(token_address, AddressRole::Token)?;
        Ok(is_valid(record) && !record.input().is_empty())
    }

    /// Whether the record moved exactly `amount` coins to `receiver`.
    ///
    /// The on-chain value is converted with `coin_decimals` and compared to
    /// `amount` exactly; `1.0` and `1` are equal.
    ///
    /// # Errors
    ///
    /// - [`VerificationError::InvalidAddress`] if `receiver` is malformed
    /// - [`VerificationError::Codec`] if the on-chain value cannot be converted
    pub fn verify_coin_transfer_with_data(
        &self,
        record: &TransactionRecord,
        receiver: &str,
        amount: &BigDecimal,
        coin_decimals: u32,
    ) -> Result<bool, VerificationError> {
        let receiver = parse_address(receiver, AddressRole::Receiver)?;
        if !self.verify_coin_transfer(record) {
            return Ok(false);
        }

        let value = scaled_hex_to_decimal(record.value(), coin_decimals)?;
        let matches = record.to() == Some(receiver) && value == *amount;
        debug!(
            tx_hash = %record.hash(),
            %value,
            expected = %amount,
            matches,
            "Checked coin transfer"
        );
        Ok(matches)
    }

    /// Whether the record's `transfer` call data sends exactly `amount` tokens to `receiver`.
    ///
    /// Call data that does not decode gives `Ok(false)`.
    ///
    /// # Errors
    ///
    /// - [`VerificationError::InvalidAddress`] if `receiver` or `token_address` is malformed
    /// - [`VerificationError::Codec`] if the decoded amount cannot be converted
    pub fn verify_token_transfer_with_data(
        &self,
        record: &TransactionRecord,
        receiver: &str,
        amount: &BigDecimal,
        token_address: &str,
        token_decimals: u32,
    ) -> Result<bool, VerificationError> {
        let receiver = parse_address(receiver, AddressRole::Receiver)?;
        if !self.verify_token_transfer(record, token_address)? {
            return Ok(false);
        }

        let Some(decoded) = record.decode_input() else {
            return Ok(false);
        };

        let value = scaled_hex_to_decimal(&decoded.amount, token_decimals)?;
        let matches = decoded.receiver == receiver && value == *amount;
        debug!(
            tx_hash = %record.hash(),
            %value,
            expected = %amount,
            matches,
            "Checked token transfer"
        );
        Ok(matches)
    }

    /// Token check when `token_address` is given, coin check otherwise.
    ///
    /// Only `None` selects the coin check. `Some("")` is treated as a
    /// malformed token address, not as "no token".
    ///
    /// # Errors
    ///
    /// As [`verify_token_transfer`](Self::verify_token_transfer).
    pub fn verify_transfer(
        &self,
        record: &TransactionRecord,
        token_address: Option<&str>,
    ) -> Result<bool, VerificationError> {
        match token_address {
            Some(token) => self.verify_token_transfer(record, token),
            None => Ok(self.verify_coin_transfer(record)),
        }
    }

    /// Full transfer check, resolving decimals automatically.
    ///
    /// Coin transfers use the configured coin decimals. Token transfers look
    /// up `decimals()` on the token contract; the lookup is skipped when the
    /// record cannot match anyway.
    ///
    /// Pass `None` for a coin transfer. An empty string is a malformed token
    /// address and fails with [`VerificationError::InvalidAddress`].
    ///
    /// # Errors
    ///
    /// - [`VerificationError::InvalidAddress`] for malformed addresses
    /// - [`VerificationError::Source`] if the decimals lookup fails
    /// - [`VerificationError::Codec`] if an amount cannot be converted
    pub async fn verify_transfer_with_data(
        &self,
        record: &TransactionRecord,
        receiver: &str,
        amount: &BigDecimal,
        token_address: Option<&str>,
    ) -> Result<bool, VerificationError> {
        let token = token_address
            .map(|token| parse_address(token, AddressRole::Token))
            .transpose()?;

        self.verify_transfer_with_data_inner(record, receiver, amount, token_address, token)
            .instrument(spans::verify_transfer(record.hash(), token))
            .await
    }

    async fn verify_transfer_with_data_inner(
        &self,
        record: &TransactionRecord,
        receiver: &str,
        amount: &BigDecimal,
        token_address: Option<&str>,
        token: Option<Address>,
    ) -> Result<bool, VerificationError> {
        let (Some(token_address), Some(token)) = (token_address, token) else {
            return self.verify_coin_transfer_with_data(
                record,
                receiver,
                amount,
                self.config.coin_decimals,
            );
        };

        parse_address(receiver, AddressRole::Receiver)?;
        if !self.verify_token_transfer(record, token_address)? {
            return Ok(false);
        }

        let decimals = self
            .source
            .token_decimals(token)
            .await
            .map_err(VerificationError::Source)?;
        debug!(token = %token, decimals, "Resolved token decimals");

        self.verify_token_transfer_with_data(record, receiver, amount, token_address, decimals)
    }

    /// Blocks mined since the record's block.
    ///
    /// Pending records give 0 without querying the source.
    ///
    /// # Errors
    ///
    /// [`VerificationError::Source`] if the chain height lookup fails.
    pub async fn confirmations(&self, record: &TransactionRecord) -> Result<u64, VerificationError> {
        if record.block_number().is_none() {
            return Ok(0);
        }
        let height = self
            .source
            .block_number()
            .await
            .map_err(VerificationError::Source)?;
        Ok(confirmations_at(record, height))
    }

    /// Refetch a transaction until it is confirmed or failed.
    ///
    /// The record is fetched immediately and then every
    /// [`poll_interval`](VerifierConfig::poll_interval). Fetch errors end the
    /// wait; they are not retried.
    ///
    /// # Errors
    ///
    /// - [`VerificationError::Timeout`] if `timeout` elapses first
    /// - [`VerificationError::Cancelled`] if `cancel` fires first
    /// - [`VerificationError::Transaction`] if a fetch fails
    pub async fn wait_for_status(
        &self,
        hash: &str,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<(TransactionRecord, TransferStatus), VerificationError> {
        let tx_hash = parse_transaction_hash(hash)?;
        let span = spans::wait_for_status(tx_hash, timeout, self.config.poll_interval);

        let poll = self.poll_until_resolved(tx_hash);

        async {
            tokio::select! {
                biased;

                _ = cancel.cancelled() => {
                    debug!("Wait cancelled");
                    Err(VerificationError::Cancelled { hash: hash.to_string() })
                }
                result = tokio::time::timeout(timeout, poll) => match result {
                    Ok(resolved) => resolved,
                    Err(_) => {
                        debug!(waited = ?timeout, "Wait timed out");
                        Err(VerificationError::Timeout {
                            hash: hash.to_string(),
                            waited: timeout,
                        })
                    }
                },
            }
        }
        .instrument(span)
        .await
    }

    async fn poll_until_resolved(
        &self,
        tx_hash: B256,
    ) -> Result<(TransactionRecord, TransferStatus), VerificationError> {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            let record = TransactionRecord::fetch_by_hash(&self.source, tx_hash)
                .instrument(spans::fetch_record(tx_hash))
                .await?;
            let status = classify(Some(&record));
            trace!(attempt, %status, "Polled transaction");

            if status.is_terminal() {
                return Ok((record, status));
            }
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    /// [`wait_for_status`](Self::wait_for_status) bounded by the configured
    /// [`wait_timeout`](VerifierConfig::wait_timeout).
    pub async fn wait(
        &self,
        hash: &str,
        cancel: &CancellationToken,
    ) -> Result<(TransactionRecord, TransferStatus), VerificationError> {
        self.wait_for_status(hash, self.config.wait_timeout, cancel)
            .await
    }

    /// Explorer link for the record, when an explorer is configured.
    pub fn explorer_url(&self, record: &TransactionRecord) -> Option<String> {
        self.config.explorer_url.as_ref().map(|base| {
            format!(
                "{}/tx/{}",
                base.as_str().trim_end_matches('/'),
                record.hash()
            )
        })
    }
}
