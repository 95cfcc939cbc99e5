// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for network configuration.

/// Errors raised while building a [`NetworkConfig`](crate::NetworkConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A configured URL could not be parsed.
    #[error("Invalid {field} URL: {reason}")]
    InvalidUrl {
        /// Which setting held the URL (`rpc` or `explorer`)
        field: &'static str,
        /// The parser's message
        reason: String,
    },
}
