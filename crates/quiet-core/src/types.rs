//! Wallet data model shared between the key core and its host application.
//!
//! Field names serialize in camelCase to match the wallet's JSON state.
//! All monetary values are in satoshis.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::network::Network;

/// Silent payment metadata attached to a received output.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SilentPaymentData {
    /// Hex-encoded 32-byte tweak scalar for this output.
    pub tweak: String,
    /// Label index, when the output was paid to a labeled address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<u32>,
}

/// An unspent output owned by the wallet.
///
/// Only `value` and `silent_payment` are interpreted here. Every other
/// field is carried through untouched in `extra`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Utxo {
    /// Output value in satoshis.
    pub value: u64,
    /// Present when this output is a silent payment receipt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silent_payment: Option<SilentPaymentData>,
    /// Fields owned by the host wallet (outpoint, script, height, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Utxo {
    /// An output without silent payment metadata.
    pub fn new(value: u64) -> Self {
        Self {
            value,
            silent_payment: None,
            extra: Map::new(),
        }
    }

    /// A silent payment output with the given hex tweak.
    pub fn silent_payment(value: u64, tweak: impl Into<String>) -> Self {
        Self {
            value,
            silent_payment: Some(SilentPaymentData {
                tweak: tweak.into(),
                label: None,
            }),
            extra: Map::new(),
        }
    }

    /// Mark a silent payment output as paid to label `m`.
    pub fn with_label(mut self, m: u32) -> Self {
        if let Some(sp) = self.silent_payment.as_mut() {
            sp.label = Some(m);
        }
        self
    }
}

/// Hex-encoded scan and spend public keys for one network.
///
/// Empty strings mark a wallet whose keys have not been derived yet.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPublicKeys {
    pub scan_public_key: String,
    pub spend_public_key: String,
}

impl NetworkPublicKeys {
    /// True when both keys are non-empty.
    pub fn is_populated(&self) -> bool {
        !self.scan_public_key.is_empty() && !self.spend_public_key.is_empty()
    }
}

/// Public keys for every network.
///
/// One field per network makes a partially keyed map unrepresentable.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PublicKeys {
    pub mainnet: NetworkPublicKeys,
    pub testnet: NetworkPublicKeys,
    pub regtest: NetworkPublicKeys,
    pub signet: NetworkPublicKeys,
}

impl PublicKeys {
    /// Build the map by producing each network's keys in [`Network::ALL`] order.
    ///
    /// Stops at the first error; no partially built value escapes.
    pub fn try_from_fn<E>(
        mut f: impl FnMut(Network) -> Result<NetworkPublicKeys, E>,
    ) -> Result<Self, E> {
        Ok(Self {
            mainnet: f(Network::Mainnet)?,
            testnet: f(Network::Testnet)?,
            regtest: f(Network::Regtest)?,
            signet: f(Network::Signet)?,
        })
    }

    /// Keys for one network.
    pub fn get(&self, network: Network) -> &NetworkPublicKeys {
        match network {
            Network::Mainnet => &self.mainnet,
            Network::Testnet => &self.testnet,
            Network::Regtest => &self.regtest,
            Network::Signet => &self.signet,
        }
    }

    /// Mutable keys for one network.
    pub fn get_mut(&mut self, network: Network) -> &mut NetworkPublicKeys {
        match network {
            Network::Mainnet => &mut self.mainnet,
            Network::Testnet => &mut self.testnet,
            Network::Regtest => &mut self.regtest,
            Network::Signet => &mut self.signet,
        }
    }

    /// `(network, keys)` pairs in [`Network::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Network, &NetworkPublicKeys)> {
        Network::ALL.into_iter().map(move |n| (n, self.get(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(tag: &str) -> NetworkPublicKeys {
        NetworkPublicKeys {
            scan_public_key: format!("{tag}-scan"),
            spend_public_key: format!("{tag}-spend"),
        }
    }

    #[test]
    fn utxo_json_uses_camel_case() {
        let utxo = Utxo::silent_payment(1000, "ab");
        let json = serde_json::to_value(&utxo).unwrap();
        assert_eq!(json["value"], 1000);
        assert_eq!(json["silentPayment"]["tweak"], "ab");
        assert!(json["silentPayment"].get("label").is_none());
    }

    #[test]
    fn utxo_without_silent_payment_omits_field() {
        let json = serde_json::to_value(Utxo::new(5)).unwrap();
        assert!(json.get("silentPayment").is_none());
    }

    #[test]
    fn utxo_keeps_opaque_fields() {
        let raw = r#"{"value":42,"txid":"00ff","vout":3,"silentPayment":{"tweak":"01","label":2}}"#;
        let utxo: Utxo = serde_json::from_str(raw).unwrap();
        assert_eq!(utxo.value, 42);
        assert_eq!(utxo.extra["txid"], "00ff");
        assert_eq!(utxo.extra["vout"], 3);
        assert_eq!(utxo.silent_payment.as_ref().unwrap().label, Some(2));

        let back: Utxo = serde_json::from_value(serde_json::to_value(&utxo).unwrap()).unwrap();
        assert_eq!(back, utxo);
    }

    #[test]
    fn with_label_ignores_plain_outputs() {
        assert_eq!(Utxo::new(1).with_label(3).silent_payment, None);
        let labeled = Utxo::silent_payment(1, "00").with_label(3);
        assert_eq!(labeled.silent_payment.unwrap().label, Some(3));
    }

    #[test]
    fn default_public_keys_are_unpopulated() {
        let pk = PublicKeys::default();
        assert!(pk.iter().all(|(_, k)| !k.is_populated()));
    }

    #[test]
    fn populated_requires_both_halves() {
        let mut k = keys("a");
        assert!(k.is_populated());
        k.spend_public_key.clear();
        assert!(!k.is_populated());
    }

    #[test]
    fn try_from_fn_visits_networks_in_order() {
        let mut seen = Vec::new();
        let pk = PublicKeys::try_from_fn::<()>(|n| {
            seen.push(n);
            Ok(keys(n.as_str()))
        })
        .unwrap();
        assert_eq!(seen, Network::ALL.to_vec());
        assert_eq!(pk.get(Network::Regtest), &keys("regtest"));
    }

    #[test]
    fn try_from_fn_stops_on_error() {
        let mut calls = 0;
        let result = PublicKeys::try_from_fn(|n| {
            calls += 1;
            if n == Network::Regtest { Err("boom") } else { Ok(keys("x")) }
        });
        assert_eq!(result.unwrap_err(), "boom");
        assert_eq!(calls, 3);
    }

    #[test]
    fn get_mut_targets_one_network() {
        let mut pk = PublicKeys::default();
        *pk.get_mut(Network::Signet) = keys("s");
        assert!(pk.get(Network::Signet).is_populated());
        assert!(!pk.get(Network::Testnet).is_populated());
    }

    #[test]
    fn public_keys_json_is_keyed_by_network() {
        let mut pk = PublicKeys::default();
        *pk.get_mut(Network::Mainnet) = keys("m");
        let json = serde_json::to_value(&pk).unwrap();
        assert_eq!(json["mainnet"]["scanPublicKey"], "m-scan");
        assert_eq!(json["signet"]["spendPublicKey"], "");
    }
}
