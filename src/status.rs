// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction lifecycle classification

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::TransactionRecord;

/// Where a transaction is in its lifecycle, as far as one fetch can tell.
///
/// `Failed` and `Confirmed` are terminal. `Pending` may become either one
/// on a later fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    /// No record was available
    Unknown,
    /// Not mined, or mined without a merged receipt status yet
    Pending,
    /// Mined and reverted
    Failed,
    /// Mined and succeeded
    Confirmed,
}

impl TransferStatus {
    /// Whether no later fetch can change this status
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Failed | Self::Confirmed)
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Pending => write!(f, "pending"),
            Self::Failed => write!(f, "failed"),
            Self::Confirmed => write!(f, "confirmed"),
        }
    }
}

/// Classify a record.
///
/// A mined transaction whose receipt carries no status (pre-Byzantium
/// receipts, or a receipt not merged yet) is `Pending`.
///
/// # Examples
///
/// ```rust
/// use txverify::{classify, TransferStatus};
///
/// assert_eq!(classify(None), TransferStatus::Unknown);
/// ```
pub fn classify(record: Option<&TransactionRecord>) -> TransferStatus {
    let Some(record) = record else {
        return TransferStatus::Unknown;
    };
    if record.block_number().is_none() {
        return TransferStatus::Pending;
    }
    match record.status() {
        Some(true) => TransferStatus::Confirmed,
        Some(false) => TransferStatus::Failed,
        None => TransferStatus::Pending,
    }
}

/// Whether the transaction is mined and succeeded
pub fn is_valid(record: &TransactionRecord) -> bool {
    classify(Some(record)) == TransferStatus::Confirmed
}

/// Blocks mined after the record's block, given the current chain height.
///
/// Pending records and heights behind the record's block (a lagging node)
/// give 0.
pub fn confirmations_at(record: &TransactionRecord, current_height: u64) -> u64 {
    record
        .block_number()
        .map_or(0, |block| current_height.saturating_sub(block))
}
