/// Example verifying a coin or ERC20 transfer on a live network
///
/// This example shows how to:
/// 1. Build a NetworkConfig for a known chain and connect to it
/// 2. Wait (bounded) for a transaction to be mined
/// 3. Check the receiver and amount, looking up token decimals when needed
/// 4. Print confirmations and an explorer link
///
/// Run with:
/// ```bash
/// CHAIN_ID=1 \
/// RPC_URL=https://eth.llamarpc.com \
/// TX_HASH=0x... \
/// RECEIVER=0x... \
/// AMOUNT=1.5 \
/// TOKEN_ADDRESS=0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48 \
/// RUST_LOG=txverify=debug \
/// cargo run --example verify_transfer
/// ```
///
/// Leave TOKEN_ADDRESS unset to verify a native coin transfer.
use alloy_chains::NamedChain;
use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use std::env;
use std::str::FromStr;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;
use txverify::{format_amount, NetworkConfig, TransferStatus, TransferVerifier, VerifierConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenvy::dotenv().ok();

    let chain_id: u64 = env::var("CHAIN_ID")
        .unwrap_or_else(|_| "1".to_string())
        .parse()
        .context("CHAIN_ID must be a number")?;
    let chain = NamedChain::try_from(chain_id)
        .ok()
        .context("Unknown CHAIN_ID")?;
    let rpc_url = env::var("RPC_URL").context("RPC_URL environment variable not set")?;
    let tx_hash = env::var("TX_HASH").context("TX_HASH environment variable not set")?;
    let receiver = env::var("RECEIVER").context("RECEIVER environment variable not set")?;
    let amount = env::var("AMOUNT").context("AMOUNT environment variable not set")?;
    let amount = BigDecimal::from_str(&amount).context("AMOUNT must be a decimal number")?;
    let token = env::var("TOKEN_ADDRESS").ok();

    let network = NetworkConfig::for_chain(chain, &rpc_url)?;
    let verifier = TransferVerifier::with_config(network.connect(), VerifierConfig::from(&network));

    info!(chain = %chain, tx_hash, "Waiting for transaction");

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let (record, status) = verifier.wait(&tx_hash, &cancel).await?;

    println!("\n=== Transfer Verification ===");
    println!("Status:        {status}");
    println!("From:          {}", record.from());
    println!(
        "To:            {}",
        record
            .to()
            .map_or_else(|| "(contract creation)".to_string(), |to| to.to_string())
    );
    println!("Block:         {:?}", record.block_number());
    println!("Gas used:      {:?}", record.gas_used());

    if status == TransferStatus::Confirmed {
        let matches = verifier
            .verify_transfer_with_data(&record, &receiver, &amount, token.as_deref())
            .await?;
        let confirmations = verifier.confirmations(&record).await?;

        println!(
            "Expected:      {} to {receiver}",
            format_amount(&amount, 18)?
        );
        println!("Matches:       {matches}");
        println!("Confirmations: {confirmations}");
    }

    if let Some(url) = verifier.explorer_url(&record) {
        println!("Explorer:      {url}");
    }

    Ok(())
}
