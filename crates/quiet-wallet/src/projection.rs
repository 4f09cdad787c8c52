//! Public key projection: hex public keys per network, scan-only key sets
//! for watch-only operation, and silent payment addresses.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use quiet_core::address::SilentPaymentAddress;
use quiet_core::network::Network;
use quiet_core::types::{NetworkPublicKeys, PublicKeys};

use crate::error::WalletError;
use crate::keys::{KeyDeriver, PathDerivation};

/// Scan private key plus spend public key: enough to detect incoming
/// payments, never enough to spend them.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ScanOnlyKeySet {
    /// Hex-encoded 32-byte scan private key.
    pub scan_priv_key: String,
    /// Hex-encoded 33-byte compressed spend public key.
    pub spend_pub_key: String,
}

impl fmt::Debug for ScanOnlyKeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanOnlyKeySet")
            .field("scan_priv_key", &"[REDACTED]")
            .field("spend_pub_key", &self.spend_pub_key)
            .finish()
    }
}

impl<P: PathDerivation> KeyDeriver<P> {
    /// Hex-encoded scan and spend public keys for one network.
    pub fn project_public_keys(
        &self,
        mnemonic: &str,
        network: Network,
    ) -> Result<NetworkPublicKeys, WalletError> {
        let keys = self.derive_keys(mnemonic, network)?;
        Ok(NetworkPublicKeys {
            scan_public_key: keys.scan.public_hex(),
            spend_public_key: keys.spend.public_hex(),
        })
    }

    /// Public keys for every network, each from an independent derivation.
    ///
    /// Networks are derived in [`Network::ALL`] order. Any failure aborts
    /// the whole call.
    pub fn project_all_networks(&self, mnemonic: &str) -> Result<PublicKeys, WalletError> {
        let keys = PublicKeys::try_from_fn(|network| self.project_public_keys(mnemonic, network))?;
        tracing::debug!("projected public keys for all networks");
        Ok(keys)
    }

    /// Watch-only key material for one network.
    pub fn project_scan_only(
        &self,
        mnemonic: &str,
        network: Network,
    ) -> Result<ScanOnlyKeySet, WalletError> {
        let keys = self.derive_keys(mnemonic, network)?;
        Ok(ScanOnlyKeySet {
            scan_priv_key: keys.scan.secret_hex(),
            spend_pub_key: keys.spend.public_hex(),
        })
    }

    /// The wallet's silent payment address on `network`.
    pub fn address(&self, mnemonic: &str, network: Network) -> Result<String, WalletError> {
        let keys = self.derive_keys(mnemonic, network)?;
        let address = SilentPaymentAddress::new(keys.scan.public_key(), keys.spend.public_key());
        Ok(address.encode(network))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::tests::{FixedPath, MNEMONIC, deriver, key};
    use crate::keys::{RawKeyPair, RawKeySet};

    #[test]
    fn public_keys_are_compressed_hex() {
        let keys = deriver().project_public_keys(MNEMONIC, Network::Mainnet).unwrap();
        for k in [&keys.scan_public_key, &keys.spend_public_key] {
            assert_eq!(k.len(), 66);
            assert!(k.starts_with("02") || k.starts_with("03"));
        }
        assert!(keys.is_populated());
    }

    #[test]
    fn all_networks_are_populated() {
        let all = deriver().project_all_networks(MNEMONIC).unwrap();
        for (network, keys) in all.iter() {
            assert!(keys.is_populated(), "{network} not populated");
        }
    }

    #[test]
    fn all_networks_match_single_projection() {
        let d = deriver();
        let all = d.project_all_networks(MNEMONIC).unwrap();
        for network in Network::ALL {
            assert_eq!(all.get(network), &d.project_public_keys(MNEMONIC, network).unwrap());
        }
    }

    #[test]
    fn all_networks_separate_mainnet() {
        let all = deriver().project_all_networks(MNEMONIC).unwrap();
        assert_ne!(all.mainnet, all.testnet);
        assert_eq!(all.testnet, all.regtest);
        assert_eq!(all.testnet, all.signet);
    }

    #[test]
    fn all_networks_fail_entirely() {
        let set = RawKeySet {
            scan: RawKeyPair { secret: Some(key(1).secret_key()), public: None },
            spend: RawKeyPair::default(),
        };
        let d = KeyDeriver::new(FixedPath::new(set));
        assert!(matches!(
            d.project_all_networks(MNEMONIC),
            Err(WalletError::KeyDerivation(_))
        ));
        // Aborted on the first network
        assert_eq!(d.path().calls(), 1);
    }

    #[test]
    fn all_networks_derive_each_network_fresh() {
        let set = RawKeySet {
            scan: RawKeyPair { secret: Some(key(1).secret_key()), public: Some(key(1).public_key()) },
            spend: RawKeyPair { secret: Some(key(2).secret_key()), public: Some(key(2).public_key()) },
        };
        let d = KeyDeriver::new(FixedPath::new(set));
        d.project_all_networks(MNEMONIC).unwrap();
        assert_eq!(d.path().calls(), Network::ALL.len());
    }

    #[test]
    fn scan_only_pairs_scan_secret_with_spend_public() {
        let d = deriver();
        let keys = d.derive_keys(MNEMONIC, Network::Signet).unwrap();
        let scan_only = d.project_scan_only(MNEMONIC, Network::Signet).unwrap();
        assert_eq!(scan_only.scan_priv_key, keys.scan.secret_hex());
        assert_eq!(scan_only.spend_pub_key, keys.spend.public_hex());
        assert_ne!(scan_only.scan_priv_key, keys.spend.secret_hex());
    }

    #[test]
    fn scan_only_json_field_names() {
        let scan_only = deriver().project_scan_only(MNEMONIC, Network::Mainnet).unwrap();
        let json = serde_json::to_value(&scan_only).unwrap();
        assert!(json.get("scan_priv_key").is_some());
        assert!(json.get("spend_pub_key").is_some());
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn scan_only_debug_hides_secret() {
        let scan_only = deriver().project_scan_only(MNEMONIC, Network::Mainnet).unwrap();
        let debug = format!("{scan_only:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains(&scan_only.scan_priv_key));
    }

    #[test]
    fn address_decodes_to_projected_keys() {
        let d = deriver();
        for network in Network::ALL {
            let encoded = d.address(MNEMONIC, network).unwrap();
            assert!(encoded.starts_with(&format!("{}1q", network.hrp())));
            let decoded = SilentPaymentAddress::decode(&encoded, network).unwrap();
            let keys = d.project_public_keys(MNEMONIC, network).unwrap();
            assert_eq!(hex::encode(decoded.scan_key().serialize()), keys.scan_public_key);
            assert_eq!(hex::encode(decoded.spend_key().serialize()), keys.spend_public_key);
        }
    }
}
