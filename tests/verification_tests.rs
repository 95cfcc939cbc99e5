// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end verification scenarios against a mock chain source

mod helpers;

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use bigdecimal::BigDecimal;
use helpers::{receipt, transfer_input, tx_body, MockChainSource, RECEIVER, TOKEN, TX_HASH};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use txverify::{
    classify, TransactionError, TransactionRecord, TransferStatus, TransferVerifier,
    VerificationError, VerifierConfig, VerifierConfigBuilder,
};

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

fn fast_config() -> VerifierConfig {
    VerifierConfigBuilder::minimal()
        .poll_interval(Duration::from_millis(10))
        .build()
}

fn mined_coin_transfer() -> MockChainSource {
    MockChainSource::new()
        .with_transaction(tx_body(
            TX_HASH,
            RECEIVER,
            "0xde0b6b3a7640000",
            "0x",
            Some(100),
        ))
        .with_receipt(receipt(TX_HASH, 100, Some(true)))
}

fn mined_token_transfer(amount: u128) -> MockChainSource {
    MockChainSource::new()
        .with_transaction(tx_body(
            TX_HASH,
            TOKEN,
            "0x0",
            &transfer_input(RECEIVER, amount),
            Some(100),
        ))
        .with_receipt(receipt(TX_HASH, 100, Some(true)))
}

fn pending_transfer() -> MockChainSource {
    MockChainSource::new()
        .with_transaction(tx_body(TX_HASH, RECEIVER, "0x1", "0x", None))
        .with_receipt(Value::Null)
}

#[tokio::test]
async fn test_coin_transfer_matches_exact_amount() {
    let verifier = TransferVerifier::new(mined_coin_transfer());
    let record = verifier.fetch(TX_HASH).await.unwrap();

    assert_eq!(classify(Some(&record)), TransferStatus::Confirmed);
    assert!(verifier.verify_coin_transfer(&record));
    assert!(verifier
        .verify_coin_transfer_with_data(&record, RECEIVER, &dec("1.0"), 18)
        .unwrap());
    assert!(!verifier
        .verify_coin_transfer_with_data(&record, RECEIVER, &dec("2.0"), 18)
        .unwrap());
}

#[tokio::test]
async fn test_coin_receiver_comparison_ignores_case() {
    let verifier = TransferVerifier::new(
        MockChainSource::new()
            .with_transaction(tx_body(
                TX_HASH,
                "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
                "0xde0b6b3a7640000",
                "0x",
                Some(100),
            ))
            .with_receipt(receipt(TX_HASH, 100, Some(true))),
    );
    let record = verifier.fetch(TX_HASH).await.unwrap();

    assert!(verifier
        .verify_coin_transfer_with_data(
            &record,
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            &dec("1"),
            18
        )
        .unwrap());
}

#[tokio::test]
async fn test_token_transfer_matches_decoded_input() {
    let verifier = TransferVerifier::new(mined_token_transfer(100));
    let record = verifier.fetch(TX_HASH).await.unwrap();

    assert!(verifier.verify_token_transfer(&record, TOKEN).unwrap());
    assert!(verifier
        .verify_token_transfer_with_data(&record, RECEIVER, &dec("100"), TOKEN, 0)
        .unwrap());
    assert!(!verifier
        .verify_token_transfer_with_data(&record, RECEIVER, &dec("99"), TOKEN, 0)
        .unwrap());
    assert!(verifier
        .verify_token_transfer_with_data(&record, RECEIVER, &dec("0.0001"), TOKEN, 6)
        .unwrap());
}

#[tokio::test]
async fn test_verify_transfer_with_data_looks_up_token_decimals() {
    let source = Arc::new(mined_token_transfer(2_500_000).with_decimals(TOKEN, 6));
    let verifier = TransferVerifier::new(Arc::clone(&source));
    let record = verifier.fetch(TX_HASH).await.unwrap();

    assert!(verifier
        .verify_transfer_with_data(&record, RECEIVER, &dec("2.5"), Some(TOKEN))
        .await
        .unwrap());
    assert_eq!(source.decimals_calls(), 1);
}

#[tokio::test]
async fn test_verify_transfer_with_data_uses_coin_decimals() {
    let source = Arc::new(mined_coin_transfer());
    let verifier = TransferVerifier::new(Arc::clone(&source));
    let record = verifier.fetch(TX_HASH).await.unwrap();

    assert!(verifier
        .verify_transfer_with_data(&record, RECEIVER, &dec("1"), None)
        .await
        .unwrap());
    assert_eq!(source.decimals_calls(), 0);
}

#[tokio::test]
async fn test_decimals_lookup_failure_passes_through() {
    let verifier = TransferVerifier::new(mined_token_transfer(100));
    let record = verifier.fetch(TX_HASH).await.unwrap();

    let err = verifier
        .verify_transfer_with_data(&record, RECEIVER, &dec("100"), Some(TOKEN))
        .await
        .unwrap_err();
    assert!(matches!(err, VerificationError::Source(_)));
    assert!(err.to_string().contains("execution reverted"));
}

#[tokio::test]
async fn test_pending_transfer_never_verifies() {
    let verifier = TransferVerifier::new(pending_transfer());
    let record = verifier.fetch(TX_HASH).await.unwrap();

    assert_eq!(classify(Some(&record)), TransferStatus::Pending);
    assert_eq!(record.status(), None);
    assert_eq!(record.gas_used(), None);
    assert!(!verifier.verify_coin_transfer(&record));
    assert!(!verifier.verify_token_transfer(&record, TOKEN).unwrap());
    assert!(!verifier
        .verify_coin_transfer_with_data(&record, RECEIVER, &dec("1"), 18)
        .unwrap());
}

#[tokio::test]
async fn test_failed_transfer_never_verifies() {
    let verifier = TransferVerifier::new(
        MockChainSource::new()
            .with_transaction(tx_body(TX_HASH, RECEIVER, "0x1", "0x", Some(100)))
            .with_receipt(receipt(TX_HASH, 100, Some(false))),
    );
    let record = verifier.fetch(TX_HASH).await.unwrap();

    assert_eq!(classify(Some(&record)), TransferStatus::Failed);
    assert!(!verifier.verify_coin_transfer(&record));
}

#[tokio::test]
async fn test_empty_input_is_not_a_token_transfer() {
    let verifier = TransferVerifier::new(mined_coin_transfer());
    let record = verifier.fetch(TX_HASH).await.unwrap();

    assert_eq!(record.decode_input(), None);
    assert!(!verifier.verify_token_transfer(&record, TOKEN).unwrap());
    assert!(!verifier
        .verify_token_transfer_with_data(&record, RECEIVER, &dec("1"), TOKEN, 18)
        .unwrap());
}

#[tokio::test]
async fn test_confirmations_floor_at_zero() {
    let source = Arc::new(
        MockChainSource::new()
            .with_transaction(tx_body(TX_HASH, RECEIVER, "0x1", "0x", Some(105)))
            .with_receipt(receipt(TX_HASH, 105, Some(true)))
            .with_block_number(100),
    );
    let verifier = TransferVerifier::new(Arc::clone(&source));
    let record = verifier.fetch(TX_HASH).await.unwrap();

    assert_eq!(verifier.confirmations(&record).await.unwrap(), 0);
    assert_eq!(source.block_number_calls(), 1);
}

#[tokio::test]
async fn test_confirmations_count_blocks_since_inclusion() {
    let verifier = TransferVerifier::new(mined_coin_transfer().with_block_number(112));
    let record = verifier.fetch(TX_HASH).await.unwrap();

    assert_eq!(verifier.confirmations(&record).await.unwrap(), 12);
}

#[tokio::test]
async fn test_pending_confirmations_skip_height_lookup() {
    let source = Arc::new(pending_transfer().with_block_number(500));
    let verifier = TransferVerifier::new(Arc::clone(&source));
    let record = verifier.fetch(TX_HASH).await.unwrap();

    assert_eq!(verifier.confirmations(&record).await.unwrap(), 0);
    assert_eq!(source.block_number_calls(), 0);
}

#[tokio::test]
async fn test_height_lookup_failure_passes_through() {
    let verifier = TransferVerifier::new(mined_coin_transfer().with_block_number_error("node down"));
    let record = verifier.fetch(TX_HASH).await.unwrap();

    let err = verifier.confirmations(&record).await.unwrap_err();
    assert_eq!(err.to_string(), "node down");
}

#[tokio::test]
async fn test_invalid_hash_makes_no_lookups() {
    let source = Arc::new(mined_coin_transfer());
    let verifier = TransferVerifier::new(Arc::clone(&source));

    let err = verifier.fetch("0x1234").await.unwrap_err();
    assert!(matches!(err, TransactionError::InvalidIdentifier { .. }));
    assert_eq!(source.transaction_calls(), 0);
}

#[tokio::test]
async fn test_transport_error_passes_through_verbatim() {
    let source = MockChainSource::new()
        .with_transaction_error("connection refused")
        .with_receipt(Value::Null);

    let err = TransactionRecord::fetch(&source, TX_HASH).await.unwrap_err();
    assert!(matches!(err, TransactionError::Transport(_)));
    assert_eq!(err.to_string(), "connection refused");
}

#[tokio::test]
async fn test_receipt_transport_error_fails_fetch() {
    let source = MockChainSource::new()
        .with_transaction(tx_body(TX_HASH, RECEIVER, "0x1", "0x", Some(100)))
        .with_receipt_error("429 Too Many Requests");

    let err = TransactionRecord::fetch(&source, TX_HASH).await.unwrap_err();
    assert_eq!(err.to_string(), "429 Too Many Requests");
}

#[tokio::test]
async fn test_unknown_transaction_is_invalid_data() {
    let source = MockChainSource::new()
        .with_transaction(Value::Null)
        .with_receipt(Value::Null);

    let err = TransactionRecord::fetch(&source, TX_HASH).await.unwrap_err();
    assert!(matches!(err, TransactionError::InvalidTransactionData { .. }));
}

#[tokio::test]
async fn test_wait_resolves_once_mined() {
    let source = Arc::new(
        MockChainSource::new()
            .with_transaction(tx_body(TX_HASH, RECEIVER, "0x1", "0x", None))
            .with_transaction(tx_body(TX_HASH, RECEIVER, "0x1", "0x", None))
            .with_transaction(tx_body(TX_HASH, RECEIVER, "0x1", "0x", Some(100)))
            .with_receipt(Value::Null)
            .with_receipt(Value::Null)
            .with_receipt(receipt(TX_HASH, 100, Some(true))),
    );
    let verifier = TransferVerifier::with_config(Arc::clone(&source), fast_config());

    let (record, status) = verifier
        .wait_for_status(TX_HASH, Duration::from_secs(5), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(status, TransferStatus::Confirmed);
    assert_eq!(record.block_number(), Some(100));
    assert_eq!(source.transaction_calls(), 3);
}

#[tokio::test]
async fn test_wait_resolves_failed_transactions() {
    let verifier = TransferVerifier::with_config(
        MockChainSource::new()
            .with_transaction(tx_body(TX_HASH, RECEIVER, "0x1", "0x", Some(100)))
            .with_receipt(receipt(TX_HASH, 100, Some(false))),
        fast_config(),
    );

    let (_, status) = verifier
        .wait_for_status(TX_HASH, Duration::from_secs(5), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(status, TransferStatus::Failed);
}

#[tokio::test]
async fn test_wait_times_out_while_pending() {
    let verifier = TransferVerifier::with_config(pending_transfer(), fast_config());

    let err = verifier
        .wait_for_status(TX_HASH, Duration::from_millis(100), &CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        VerificationError::Timeout { hash, waited } => {
            assert_eq!(hash, TX_HASH);
            assert_eq!(waited, Duration::from_millis(100));
        }
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_wait_stops_when_cancelled() {
    let verifier = TransferVerifier::with_config(pending_transfer(), fast_config());
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let err = verifier
        .wait_for_status(TX_HASH, Duration::from_secs(30), &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, VerificationError::Cancelled { .. }));
}

#[tokio::test]
async fn test_wait_already_cancelled_makes_no_lookups() {
    let source = Arc::new(pending_transfer());
    let verifier = TransferVerifier::with_config(Arc::clone(&source), fast_config());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = verifier
        .wait_for_status(TX_HASH, Duration::from_secs(30), &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, VerificationError::Cancelled { .. }));
    assert_eq!(source.transaction_calls(), 0);
}

#[tokio::test]
async fn test_wait_does_not_retry_transport_errors() {
    let source = Arc::new(
        MockChainSource::new()
            .with_transaction_error("connection reset")
            .with_receipt(Value::Null),
    );
    let verifier = TransferVerifier::with_config(Arc::clone(&source), fast_config());

    let err = verifier
        .wait_for_status(TX_HASH, Duration::from_secs(5), &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        VerificationError::Transaction(TransactionError::Transport(_))
    ));
    assert_eq!(source.transaction_calls(), 1);
}

#[tokio::test]
async fn test_wait_uses_configured_timeout() {
    let config = VerifierConfigBuilder::minimal()
        .poll_interval(Duration::from_millis(10))
        .wait_timeout(Duration::from_millis(60))
        .build();
    let verifier = TransferVerifier::with_config(pending_transfer(), config);

    let err = verifier
        .wait(TX_HASH, &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, VerificationError::Timeout { .. }));
}
