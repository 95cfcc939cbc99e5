// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Default values shared by the configuration types

use std::time::Duration;

/// Decimals of the native coin on EVM chains (wei per ether)
pub const DEFAULT_COIN_DECIMALS: u32 = 18;

/// Delay between refetches while waiting on a pending transaction
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Upper bound on waiting for a pending transaction to resolve
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(120);

/// Poll interval used by [`VerifierConfig::minimal`](super::VerifierConfig::minimal)
pub const MINIMAL_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Wait timeout used by [`VerifierConfig::minimal`](super::VerifierConfig::minimal)
pub const MINIMAL_WAIT_TIMEOUT: Duration = Duration::from_secs(5);
