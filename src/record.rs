// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction records built from a transaction body and its receipt
//!
//! A [`TransactionRecord`] only exists once both lookups have succeeded and
//! passed schema validation. There are no setters: a record is a snapshot of
//! what the node reported at fetch time. To observe a pending transaction
//! getting mined, fetch it again (see
//! [`TransferVerifier::wait_for_status`](crate::TransferVerifier::wait_for_status)).

use alloy_primitives::{Address, Bytes, B256, U256, U64};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn, Instrument};

use crate::codec::HexString;
use crate::decoder::{decode_input, DecodedInput};
use crate::errors::TransactionError;
use crate::source::ChainSource;
use crate::spans;
use crate::validation::parse_transaction_hash;

/// Schema for `eth_getTransactionByHash` results
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionBody {
    hash: B256,
    from: Address,
    #[serde(default)]
    to: Option<Address>,
    value: U256,
    input: Bytes,
    #[serde(default)]
    block_number: Option<U64>,
}

/// Schema for `eth_getTransactionReceipt` results
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReceiptBody {
    transaction_hash: B256,
    block_number: U64,
    gas_used: U64,
    #[serde(default)]
    status: Option<U64>,
}

/// A validated transaction merged with the outcome fields of its receipt.
///
/// # Examples
///
/// ```rust,no_run
/// use txverify::{ChainSource, TransactionRecord};
///
/// # async fn example(source: impl ChainSource) -> Result<(), txverify::TransactionError> {
/// let record = TransactionRecord::fetch(
///     &source,
///     "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060",
/// )
/// .await?;
///
/// if record.block_number().is_none() {
///     println!("{} is still pending", record.hash());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    hash: B256,
    from: Address,
    to: Option<Address>,
    value: HexString,
    input: Bytes,
    block_number: Option<u64>,
    status: Option<bool>,
    gas_used: Option<u64>,
}

impl TransactionRecord {
    /// Fetch a transaction and its receipt and merge them.
    ///
    /// Both lookups are issued concurrently. A `null` receipt means the
    /// transaction has not been mined; the record is still built, with no
    /// status or gas used.
    ///
    /// # Errors
    ///
    /// - [`TransactionError::InvalidIdentifier`] if `hash` is not a 32-byte hex hash
    /// - [`TransactionError::InvalidTransactionData`] if the node does not know
    ///   the transaction, or either response fails schema validation
    /// - [`TransactionError::Transport`] with the source's error, unchanged
    pub async fn fetch<S>(source: &S, hash: &str) -> Result<Self, TransactionError>
    where
        S: ChainSource + ?Sized,
    {
        let hash = parse_transaction_hash(hash)?;
        Self::fetch_by_hash(source, hash)
            .instrument(spans::fetch_record(hash))
            .await
    }

    pub(crate) async fn fetch_by_hash<S>(source: &S, hash: B256) -> Result<Self, TransactionError>
    where
        S: ChainSource + ?Sized,
    {
        let (body, receipt) = tokio::join!(
            source.transaction_by_hash(hash),
            source.transaction_receipt(hash)
        );

        let body = body.map_err(TransactionError::Transport)?;
        let receipt = receipt.map_err(TransactionError::Transport)?;

        Self::from_json(hash, body, receipt)
    }

    /// Build a record from already-fetched JSON.
    ///
    /// Applies the same validation as [`fetch`](Self::fetch). Useful when the
    /// caller batches RPC calls through its own transport.
    pub fn from_json(hash: B256, body: Value, receipt: Value) -> Result<Self, TransactionError> {
        let body = parse_body(hash, body)?;
        let receipt = parse_receipt(hash, receipt)?;

        let mut block_number = body.block_number.map(|n| n.to::<u64>());
        let (status, gas_used) = match receipt {
            Some(outcome) => {
                match block_number {
                    Some(block) if block != outcome.block_number => {
                        return Err(TransactionError::invalid_data(
                            hash,
                            format!(
                                "receipt is for block {} but transaction is in block {block}",
                                outcome.block_number
                            ),
                        ));
                    }
                    // Mined between the two lookups
                    None => block_number = Some(outcome.block_number),
                    Some(_) => {}
                }
                (outcome.status, Some(outcome.gas_used))
            }
            None => (None, None),
        };

        debug!(
            tx_hash = %hash,
            block_number = ?block_number,
            status = ?status,
            gas_used = ?gas_used,
            "Merged transaction body and receipt"
        );

        Ok(Self {
            hash,
            from: body.from,
            to: body.to,
            value: HexString::from(body.value),
            input: body.input,
            block_number,
            status,
            gas_used,
        })
    }

    /// Transaction hash
    pub fn hash(&self) -> B256 {
        self.hash
    }

    /// Sender
    pub fn from(&self) -> Address {
        self.from
    }

    /// Recipient; `None` for contract creation
    pub fn to(&self) -> Option<Address> {
        self.to
    }

    /// Native value transferred, in the chain's smallest unit
    pub fn value(&self) -> &HexString {
        &self.value
    }

    /// Call data
    pub fn input(&self) -> &Bytes {
        &self.input
    }

    /// Call data as `0x`-prefixed lowercase hex (`0x` when empty)
    pub fn input_hex(&self) -> String {
        self.input.to_string()
    }

    /// Block the transaction was mined in; `None` while pending
    pub fn block_number(&self) -> Option<u64> {
        self.block_number
    }

    /// Execution status from the receipt; `None` until a receipt exists
    pub fn status(&self) -> Option<bool> {
        self.status
    }

    /// Gas used from the receipt; `None` until a receipt exists
    pub fn gas_used(&self) -> Option<u64> {
        self.gas_used
    }

    /// Decode the call data as an ERC20 `transfer`. See [`decode_input`].
    pub fn decode_input(&self) -> Option<DecodedInput> {
        decode_input(&self.input_hex())
    }
}

fn parse_body(hash: B256, body: Value) -> Result<TransactionBody, TransactionError> {
    if body.is_null() {
        return Err(TransactionError::invalid_data(hash, "transaction not found"));
    }

    let body: TransactionBody = serde_json::from_value(body).map_err(|e| {
        warn!(tx_hash = %hash, error = %e, "Transaction body failed schema validation");
        TransactionError::invalid_data(hash, format!("transaction body: {e}"))
    })?;

    if body.hash != hash {
        return Err(TransactionError::invalid_data(
            hash,
            format!("node returned transaction {}", body.hash),
        ));
    }

    Ok(body)
}

/// The receipt fields merged into a record
struct ReceiptOutcome {
    block_number: u64,
    status: Option<bool>,
    gas_used: u64,
}

/// `Ok(None)` while there is no receipt yet.
fn parse_receipt(hash: B256, receipt: Value) -> Result<Option<ReceiptOutcome>, TransactionError> {
    if receipt.is_null() {
        debug!(tx_hash = %hash, "No receipt yet");
        return Ok(None);
    }

    let receipt: ReceiptBody = serde_json::from_value(receipt).map_err(|e| {
        warn!(tx_hash = %hash, error = %e, "Receipt failed schema validation");
        TransactionError::invalid_data(hash, format!("receipt: {e}"))
    })?;

    if receipt.transaction_hash != hash {
        return Err(TransactionError::invalid_data(
            hash,
            format!("node returned receipt for {}", receipt.transaction_hash),
        ));
    }

    let status = match receipt.status.map(|s| s.to::<u64>()) {
        None => None,
        Some(0) => Some(false),
        Some(1) => Some(true),
        Some(other) => {
            return Err(TransactionError::invalid_data(
                hash,
                format!("receipt status {other} is not 0 or 1"),
            ))
        }
    };

    Ok(Some(ReceiptOutcome {
        block_number: receipt.block_number.to::<u64>(),
        status,
        gas_used: receipt.gas_used.to::<u64>(),
    }))
}
