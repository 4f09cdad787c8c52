//! Per-network wallet state: owned UTXOs and cached public keys.
//!
//! The [`Wallet`] is plain data owned by the host application. Everything
//! here reads it; nothing derives keys or touches the mnemonic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use quiet_core::address::SilentPaymentAddress;
use quiet_core::crypto::parse_public_key_hex;
use quiet_core::network::Network;
use quiet_core::types::{NetworkPublicKeys, PublicKeys, Utxo};

use crate::error::WalletError;

/// Wallet state across all networks, with one active network.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// The active network.
    pub network: Network,
    /// Owned outputs per network.
    #[serde(default)]
    pub utxos: BTreeMap<Network, Vec<Utxo>>,
    /// Cached public keys; empty strings until projected.
    #[serde(default)]
    pub public_keys: PublicKeys,
}

impl Wallet {
    /// A fresh wallet on `network` with no outputs and no keys.
    pub fn new(network: Network) -> Self {
        Self {
            network,
            utxos: BTreeMap::new(),
            public_keys: PublicKeys::default(),
        }
    }

    pub fn with_public_keys(mut self, public_keys: PublicKeys) -> Self {
        self.public_keys = public_keys;
        self
    }

    pub fn with_utxos(mut self, network: Network, utxos: Vec<Utxo>) -> Self {
        self.utxos.insert(network, utxos);
        self
    }

    /// Outputs held on `network`.
    pub fn utxos_for(&self, network: Network) -> &[Utxo] {
        self.utxos.get(&network).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total value in satoshis of the active network's outputs.
    ///
    /// Other networks are not counted. Saturates at `u64::MAX`.
    pub fn balance(&self) -> u64 {
        self.utxos_for(self.network)
            .iter()
            .fold(0u64, |sum, utxo| sum.saturating_add(utxo.value))
    }

    /// Cached public keys of the active network.
    pub fn keys(&self) -> &NetworkPublicKeys {
        self.public_keys.get(self.network)
    }

    /// True iff both public keys of the active network are non-empty.
    pub fn is_initialized(&self) -> bool {
        self.keys().is_populated()
    }

    /// The active network's silent payment address, from cached keys.
    pub fn address(&self) -> Result<String, WalletError> {
        if !self.is_initialized() {
            return Err(WalletError::NotInitialized(self.network));
        }
        let keys = self.keys();
        let scan = parse_public_key_hex(&keys.scan_public_key)?;
        let spend = parse_public_key_hex(&keys.spend_public_key)?;
        Ok(SilentPaymentAddress::new(scan, spend).encode(self.network))
    }
}
