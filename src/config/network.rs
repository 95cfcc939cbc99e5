// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-network settings and the provider factory

use alloy_chains::NamedChain;
use alloy_network::AnyNetwork;
use alloy_provider::{ProviderBuilder, RootProvider};
use tracing::debug;
use url::Url;

use crate::errors::ConfigError;
use crate::source::AlloyChainSource;

use super::constants::DEFAULT_COIN_DECIMALS;

/// Chain source produced by [`NetworkConfig::connect`]
pub type HttpChainSource = AlloyChainSource<RootProvider<AnyNetwork>, AnyNetwork>;

/// Where to reach a network and how to present it.
///
/// # Example
///
/// ```rust
/// use alloy_chains::NamedChain;
/// use txverify::NetworkConfig;
///
/// let network = NetworkConfig::for_chain(NamedChain::Mainnet, "https://eth.llamarpc.com")?;
/// assert_eq!(network.coin_decimals, 18);
/// assert!(network.explorer_url.is_some());
/// # Ok::<(), txverify::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// JSON-RPC endpoint
    pub rpc_url: Url,
    /// Block explorer base URL, used to build transaction links
    pub explorer_url: Option<Url>,
    /// Decimals of the native coin
    pub coin_decimals: u32,
}

impl NetworkConfig {
    /// Network with an RPC endpoint, no explorer and 18 coin decimals.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidUrl`] if `rpc_url` does not parse.
    pub fn new(rpc_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            rpc_url: parse_url("rpc", rpc_url)?,
            explorer_url: None,
            coin_decimals: DEFAULT_COIN_DECIMALS,
        })
    }

    /// Network for a known chain, with its Etherscan-family explorer when one exists.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidUrl`] if `rpc_url` does not parse.
    pub fn for_chain(chain: NamedChain, rpc_url: &str) -> Result<Self, ConfigError> {
        let mut config = Self::new(rpc_url)?;
        if let Some((_, explorer)) = chain.etherscan_urls() {
            config.explorer_url = Some(parse_url("explorer", explorer)?);
        }
        Ok(config)
    }

    /// Set the explorer base URL
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidUrl`] if `explorer_url` does not parse.
    pub fn with_explorer_url(mut self, explorer_url: &str) -> Result<Self, ConfigError> {
        self.explorer_url = Some(parse_url("explorer", explorer_url)?);
        Ok(self)
    }

    /// Set the native coin decimals
    #[must_use]
    pub fn with_coin_decimals(mut self, decimals: u32) -> Self {
        self.coin_decimals = decimals;
        self
    }

    /// Create an HTTP chain source for this network.
    ///
    /// Recommended fillers are disabled: the verifier only reads, so a plain
    /// `RootProvider` is enough.
    pub fn connect(&self) -> HttpChainSource {
        debug!(rpc_url = %self.rpc_url, "Connecting HTTP provider");
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .network::<AnyNetwork>()
            .connect_http(self.rpc_url.clone());
        AlloyChainSource::new(provider)
    }
}

fn parse_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    value.parse::<Url>().map_err(|e| ConfigError::InvalidUrl {
        field,
        reason: e.to_string(),
    })
}
