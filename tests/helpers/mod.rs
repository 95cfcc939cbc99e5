// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for txverify integration tests
//!
//! Provides a mock [`ChainSource`] and JSON fixture builders so verification
//! logic can be tested without a real node.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use alloy_primitives::{Address, B256};
use async_trait::async_trait;
use serde_json::{json, Value};
use txverify::{BoxError, ChainSource};

pub const TX_HASH: &str = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";
pub const SENDER: &str = "0x1111111111111111111111111111111111111111";
pub const RECEIVER: &str = "0x2222222222222222222222222222222222222222";
pub const TOKEN: &str = "0x3333333333333333333333333333333333333333";

type Canned = Result<Value, String>;

/// Mock ChainSource for testing record construction and verification
///
/// Transaction and receipt responses are queued. Each lookup pops the next
/// response, and the last one is repeated once the queue runs down, so a
/// polling test can script "pending, pending, mined".
///
/// # Example
///
/// ```rust,ignore
/// let source = MockChainSource::new()
///     .with_transaction(tx_body(TX_HASH, RECEIVER, "0x1", "0x", Some(100)))
///     .with_receipt(receipt(TX_HASH, 100, Some(true)))
///     .with_block_number(110);
/// ```
#[derive(Default)]
pub struct MockChainSource {
    transactions: Mutex<VecDeque<Canned>>,
    receipts: Mutex<VecDeque<Canned>>,
    block_number: Option<Result<u64, String>>,
    decimals: HashMap<Address, u32>,
    transaction_calls: AtomicUsize,
    block_number_calls: AtomicUsize,
    decimals_calls: AtomicUsize,
}

impl MockChainSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a transaction body response
    pub fn with_transaction(self, body: Value) -> Self {
        self.transactions.lock().unwrap().push_back(Ok(body));
        self
    }

    /// Queue a transport failure for the transaction lookup
    pub fn with_transaction_error(self, message: &str) -> Self {
        self.transactions
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    /// Queue a receipt response (`Value::Null` for pending)
    pub fn with_receipt(self, receipt: Value) -> Self {
        self.receipts.lock().unwrap().push_back(Ok(receipt));
        self
    }

    /// Queue a transport failure for the receipt lookup
    pub fn with_receipt_error(self, message: &str) -> Self {
        self.receipts
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    pub fn with_block_number(mut self, height: u64) -> Self {
        self.block_number = Some(Ok(height));
        self
    }

    pub fn with_block_number_error(mut self, message: &str) -> Self {
        self.block_number = Some(Err(message.to_string()));
        self
    }

    pub fn with_decimals(mut self, token: &str, decimals: u32) -> Self {
        self.decimals.insert(token.parse().unwrap(), decimals);
        self
    }

    pub fn transaction_calls(&self) -> usize {
        self.transaction_calls.load(Ordering::SeqCst)
    }

    pub fn block_number_calls(&self) -> usize {
        self.block_number_calls.load(Ordering::SeqCst)
    }

    pub fn decimals_calls(&self) -> usize {
        self.decimals_calls.load(Ordering::SeqCst)
    }
}

fn next_response(queue: &Mutex<VecDeque<Canned>>) -> Result<Value, BoxError> {
    let mut queue = queue.lock().unwrap();
    let response = if queue.len() > 1 {
        queue.pop_front()
    } else {
        queue.front().cloned()
    };
    match response {
        Some(Ok(value)) => Ok(value),
        Some(Err(message)) => Err(message.into()),
        None => Ok(Value::Null),
    }
}

#[async_trait]
impl ChainSource for MockChainSource {
    async fn transaction_by_hash(&self, _hash: B256) -> Result<Value, BoxError> {
        self.transaction_calls.fetch_add(1, Ordering::SeqCst);
        next_response(&self.transactions)
    }

    async fn transaction_receipt(&self, _hash: B256) -> Result<Value, BoxError> {
        next_response(&self.receipts)
    }

    async fn block_number(&self) -> Result<u64, BoxError> {
        self.block_number_calls.fetch_add(1, Ordering::SeqCst);
        match &self.block_number {
            Some(Ok(height)) => Ok(*height),
            Some(Err(message)) => Err(message.clone().into()),
            None => Err("no block number configured".into()),
        }
    }

    async fn token_decimals(&self, token: Address) -> Result<u32, BoxError> {
        self.decimals_calls.fetch_add(1, Ordering::SeqCst);
        self.decimals
            .get(&token)
            .copied()
            .ok_or_else(|| format!("execution reverted: no decimals for {token}").into())
    }
}

/// Helper to create an `eth_getTransactionByHash` result
pub fn tx_body(hash: &str, to: &str, value: &str, input: &str, block: Option<u64>) -> Value {
    json!({
        "hash": hash,
        "from": SENDER,
        "to": to,
        "value": value,
        "input": input,
        "blockNumber": block.map(|b| format!("{b:#x}")),
        "nonce": "0x0",
        "gas": "0x5208",
        "gasPrice": "0x3b9aca00",
    })
}

/// Helper to create an `eth_getTransactionReceipt` result
pub fn receipt(hash: &str, block: u64, status: Option<bool>) -> Value {
    json!({
        "transactionHash": hash,
        "blockNumber": format!("{block:#x}"),
        "gasUsed": "0x5208",
        "status": status.map(|ok| if ok { "0x1" } else { "0x0" }),
        "logs": [],
    })
}

/// `transfer(address,uint256)` call data with the given receiver and raw amount
pub fn transfer_input(receiver: &str, amount: u128) -> String {
    format!(
        "0xa9059cbb{:0>64}{:064x}",
        receiver.trim_start_matches("0x"),
        amount
    )
}
