//! CLI configuration loaded from environment variables.

use std::path::PathBuf;

use anyhow::{Context, Result};
use quiet_core::constants::DEFAULT_ACCOUNT;
use quiet_core::network::Network;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Network used when `--network` is not given.
    pub network: Network,
    /// BIP-352 account index.
    pub account: u32,
    /// Wallet state file used when `--wallet` is not given.
    pub wallet_path: PathBuf,
}

impl CliConfig {
    /// Load configuration from `QUIET_NETWORK`, `QUIET_ACCOUNT` and
    /// `QUIET_WALLET`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let network = match get("QUIET_NETWORK") {
            Some(s) => s.parse().context("QUIET_NETWORK")?,
            None => Network::Testnet,
        };

        let account = match get("QUIET_ACCOUNT") {
            Some(s) => s
                .parse()
                .context("QUIET_ACCOUNT must be a non-negative integer")?,
            None => DEFAULT_ACCOUNT,
        };

        let wallet_path = get("QUIET_WALLET")
            .map(PathBuf::from)
            .unwrap_or_else(default_wallet_path);

        Ok(CliConfig {
            network,
            account,
            wallet_path,
        })
    }
}

fn default_wallet_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".quiet")
        .join("wallet.json")
}
