// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for txverify operations
//!
//! Two explicit objects replace any process-wide provider state:
//! [`NetworkConfig`] says where a network lives, and [`VerifierConfig`] says how
//! the verifier behaves on it.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use txverify::VerifierConfig;
//!
//! // 18 coin decimals, poll every 2s, give up after 120s
//! let config = VerifierConfig::default();
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use std::time::Duration;
//! use txverify::VerifierConfigBuilder;
//!
//! let config = VerifierConfigBuilder::new()
//!     .coin_decimals(8)
//!     .poll_interval(Duration::from_secs(5))
//!     .build();
//! ```
//!
//! # Example: Local node or tests
//!
//! ```rust
//! use txverify::VerifierConfig;
//!
//! let config = VerifierConfig::minimal();
//! ```

use std::time::Duration;

use url::Url;

pub mod constants;
mod network;

pub use network::{HttpChainSource, NetworkConfig};

use constants::{
    DEFAULT_COIN_DECIMALS, DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT, MINIMAL_POLL_INTERVAL,
    MINIMAL_WAIT_TIMEOUT,
};

/// Configuration for [`TransferVerifier`](crate::TransferVerifier)
///
/// Use [`VerifierConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Decimals of the native coin, used by coin transfer checks
    /// Default: 18
    pub coin_decimals: u32,

    /// Delay between refetches while waiting on a transaction
    /// Default: 2 seconds
    pub poll_interval: Duration,

    /// Default bound for [`wait_for_status`](crate::TransferVerifier::wait_for_status)
    /// Default: 120 seconds
    pub wait_timeout: Duration,

    /// Explorer base URL for transaction links
    /// Default: None
    pub explorer_url: Option<Url>,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            coin_decimals: DEFAULT_COIN_DECIMALS,
            poll_interval: DEFAULT_POLL_INTERVAL,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            explorer_url: None,
        }
    }
}

impl VerifierConfig {
    /// Create config with fast polling and a short wait bound
    ///
    /// Suitable for testing or local dev nodes that mine instantly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use txverify::VerifierConfig;
    ///
    /// let config = VerifierConfig::minimal();
    /// assert!(config.poll_interval < Duration::from_secs(1));
    /// ```
    pub fn minimal() -> Self {
        Self {
            poll_interval: MINIMAL_POLL_INTERVAL,
            wait_timeout: MINIMAL_WAIT_TIMEOUT,
            ..Self::default()
        }
    }
}

impl From<&NetworkConfig> for VerifierConfig {
    fn from(network: &NetworkConfig) -> Self {
        Self {
            coin_decimals: network.coin_decimals,
            explorer_url: network.explorer_url.clone(),
            ..Self::default()
        }
    }
}

/// Builder for [`VerifierConfig`]
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use txverify::VerifierConfigBuilder;
///
/// let config = VerifierConfigBuilder::new()
///     .wait_timeout(Duration::from_secs(30))
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct VerifierConfigBuilder {
    config: VerifierConfig,
}

impl VerifierConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the fast-polling settings of [`VerifierConfig::minimal`]
    pub fn minimal() -> Self {
        Self {
            config: VerifierConfig::minimal(),
        }
    }

    /// Start from a network's coin decimals and explorer
    pub fn from_network(network: &NetworkConfig) -> Self {
        Self {
            config: VerifierConfig::from(network),
        }
    }

    /// Set native coin decimals
    pub fn coin_decimals(mut self, decimals: u32) -> Self {
        self.config.coin_decimals = decimals;
        self
    }

    /// Set delay between refetches
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval = interval;
        self
    }

    /// Set default wait bound
    pub fn wait_timeout(mut self, timeout: Duration) -> Self {
        self.config.wait_timeout = timeout;
        self
    }

    /// Set explorer base URL
    pub fn explorer_url(mut self, url: Url) -> Self {
        self.config.explorer_url = Some(url);
        self
    }

    /// Build the final configuration
    pub fn build(self) -> VerifierConfig {
        self.config
    }
}
