// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The chain lookups the verifier depends on
//!
//! [`ChainSource`] is the seam between the verification core and whatever talks
//! to a node. Transaction bodies and receipts are returned as raw JSON so that
//! schema validation happens in one place ([`TransactionRecord::fetch`]), no
//! matter which transport produced them.
//!
//! [`AlloyChainSource`] implements the trait on top of any alloy
//! [`Provider`], for any [`Network`].
//!
//! [`TransactionRecord::fetch`]: crate::TransactionRecord::fetch

use std::marker::PhantomData;

use alloy_network::{Ethereum, Network};
use alloy_primitives::{Address, B256};
use alloy_provider::Provider;
use async_trait::async_trait;
use serde_json::Value;

/// Boxed provider error, passed through to callers unchanged.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

alloy_sol_types::sol! {
    #[sol(rpc)]
    interface IERC20Metadata {
        function decimals() external view returns (uint8);
    }
}

/// External lookups consumed by the verifier.
///
/// Implementations must not retry or reinterpret failures: whatever error the
/// transport produced is what the caller sees.
#[async_trait]
pub trait ChainSource: Send + Sync {
    /// `eth_getTransactionByHash`. `Value::Null` when the node doesn't know the hash.
    async fn transaction_by_hash(&self, hash: B256) -> Result<Value, BoxError>;

    /// `eth_getTransactionReceipt`. `Value::Null` while the transaction is pending.
    async fn transaction_receipt(&self, hash: B256) -> Result<Value, BoxError>;

    /// Current chain height.
    async fn block_number(&self) -> Result<u64, BoxError>;

    /// ERC20 `decimals()` of a token contract.
    async fn token_decimals(&self, token: Address) -> Result<u32, BoxError>;
}

#[async_trait]
impl<S: ChainSource + ?Sized> ChainSource for std::sync::Arc<S> {
    async fn transaction_by_hash(&self, hash: B256) -> Result<Value, BoxError> {
        (**self).transaction_by_hash(hash).await
    }

    async fn transaction_receipt(&self, hash: B256) -> Result<Value, BoxError> {
        (**self).transaction_receipt(hash).await
    }

    async fn block_number(&self) -> Result<u64, BoxError> {
        (**self).block_number().await
    }

    async fn token_decimals(&self, token: Address) -> Result<u32, BoxError> {
        (**self).token_decimals(token).await
    }
}

/// [`ChainSource`] backed by an alloy provider.
///
/// # Example
///
/// ```rust,ignore
/// use alloy_provider::ProviderBuilder;
/// use txverify::AlloyChainSource;
///
/// let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);
/// let source = AlloyChainSource::new(provider);
/// ```
#[derive(Debug, Clone)]
pub struct AlloyChainSource<P, N = Ethereum> {
    provider: P,
    network_marker: PhantomData<N>,
}

impl<P, N> AlloyChainSource<P, N>
where
    P: Provider<N>,
    N: Network,
{
    /// Wrap a provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            network_marker: PhantomData,
        }
    }

    /// Get a reference to the inner provider
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P, N> ChainSource for AlloyChainSource<P, N>
where
    P: Provider<N> + Send + Sync,
    N: Network,
{
    async fn transaction_by_hash(&self, hash: B256) -> Result<Value, BoxError> {
        let value = self
            .provider
            .raw_request::<_, Value>("eth_getTransactionByHash".into(), (hash,))
            .await?;
        Ok(value)
    }

    async fn transaction_receipt(&self, hash: B256) -> Result<Value, BoxError> {
        let value = self
            .provider
            .raw_request::<_, Value>("eth_getTransactionReceipt".into(), (hash,))
            .await?;
        Ok(value)
    }

    async fn block_number(&self) -> Result<u64, BoxError> {
        Ok(self.provider.get_block_number().await?)
    }

    async fn token_decimals(&self, token: Address) -> Result<u32, BoxError> {
        let contract = IERC20Metadata::IERC20MetadataInstance::<_, N>::new(token, &self.provider);
        let decimals = contract.decimals().call().await?;
        Ok(u32::from(decimals))
    }
}
