// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for txverify operations.
//!
//! Instead of `#[instrument]` attributes on the operations themselves, each
//! instrumented operation has a span helper here. Async callers attach the
//! span with [`tracing::Instrument`] so the future stays `Send`:
//!
//! ```rust,ignore
//! pub async fn my_operation(&self, hash: B256) -> Result<T> {
//!     self.my_operation_inner(hash)
//!         .instrument(spans::my_operation(hash))
//!         .await
//! }
//! ```

use alloy_primitives::{Address, B256};
use std::time::Duration;
use tracing::{Level, Span};

/// Create span for fetching and merging a transaction body and receipt.
///
/// Parent: wait_for_status span when polling, otherwise the caller's span
/// Children: none (RPC calls are made by the chain source)
#[inline]
pub(crate) fn fetch_record(tx_hash: B256) -> Span {
    tracing::debug_span!("txverify.fetch_record", tx_hash = %tx_hash)
}

/// Create span for waiting on a transaction to resolve.
///
/// Parent: None (root span for this operation)
/// Children: fetch_record spans (one per poll)
#[inline]
pub(crate) fn wait_for_status(tx_hash: B256, timeout: Duration, poll_interval: Duration) -> Span {
    tracing::span!(
        Level::INFO,
        "txverify.wait_for_status",
        tx_hash = %tx_hash,
        timeout = ?timeout,
        poll_interval = ?poll_interval,
    )
}

/// Create span for a full transfer check including decimals lookup.
///
/// Parent: None (root span for this operation)
/// Children: none
#[inline]
pub(crate) fn verify_transfer(tx_hash: B256, token_address: Option<Address>) -> Span {
    tracing::span!(
        Level::INFO,
        "txverify.verify_transfer",
        tx_hash = %tx_hash,
        token_address = ?token_address,
    )
}
