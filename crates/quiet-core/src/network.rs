//! Bitcoin networks and the parameters each one selects.
//!
//! A single mnemonic yields key material for every network. Mainnet uses
//! its own derivation parameter set (coin type 0); Testnet, Regtest and
//! Signet share the test parameter set (coin type 1) and differ only in
//! the address prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Network selecting derivation parameters and address encoding rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Bitcoin mainnet (HRP: "sp").
    Mainnet,
    /// Bitcoin testnet (HRP: "tsp").
    Testnet,
    /// Local regression-test network (HRP: "sprt").
    Regtest,
    /// Bitcoin signet (HRP: "tsp").
    Signet,
}

impl Network {
    /// Every network, in the fixed order used for fan-out derivation.
    pub const ALL: [Network; 4] = [
        Network::Mainnet,
        Network::Testnet,
        Network::Regtest,
        Network::Signet,
    ];

    /// Derivation flag: true only for mainnet.
    pub fn is_mainnet(&self) -> bool {
        matches!(self, Network::Mainnet)
    }

    /// BIP-44 coin type used in the derivation path.
    pub fn coin_type(&self) -> u32 {
        coin_type(self.is_mainnet())
    }

    /// Human-readable prefix for silent payment addresses.
    pub fn hrp(&self) -> &'static str {
        match self {
            Network::Mainnet => "sp",
            Network::Testnet | Network::Signet => "tsp",
            Network::Regtest => "sprt",
        }
    }

    /// Lowercase network name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
            Network::Signet => "signet",
        }
    }
}

/// BIP-44 coin type for the mainnet or the shared test parameter set.
pub fn coin_type(mainnet: bool) -> u32 {
    if mainnet { 0 } else { 1 }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "bitcoin" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            "signet" => Ok(Network::Signet),
            _ => Err(CoreError::UnknownNetwork(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_fixed_order() {
        assert_eq!(
            Network::ALL,
            [Network::Mainnet, Network::Testnet, Network::Regtest, Network::Signet]
        );
    }

    #[test]
    fn only_mainnet_is_mainnet() {
        let flags: Vec<bool> = Network::ALL.iter().map(Network::is_mainnet).collect();
        assert_eq!(flags, vec![true, false, false, false]);
    }

    #[test]
    fn test_networks_share_coin_type() {
        assert_eq!(Network::Mainnet.coin_type(), 0);
        assert_eq!(Network::Testnet.coin_type(), 1);
        assert_eq!(Network::Regtest.coin_type(), 1);
        assert_eq!(Network::Signet.coin_type(), 1);
    }

    #[test]
    fn hrps() {
        assert_eq!(Network::Mainnet.hrp(), "sp");
        assert_eq!(Network::Testnet.hrp(), "tsp");
        assert_eq!(Network::Signet.hrp(), "tsp");
        assert_eq!(Network::Regtest.hrp(), "sprt");
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("Regtest".parse::<Network>().unwrap(), Network::Regtest);
        assert_eq!("SIGNET".parse::<Network>().unwrap(), Network::Signet);
    }

    #[test]
    fn from_str_unknown() {
        assert_eq!(
            "litecoin".parse::<Network>().unwrap_err(),
            CoreError::UnknownNetwork("litecoin".into())
        );
    }

    #[test]
    fn display_roundtrips_through_from_str() {
        for network in Network::ALL {
            assert_eq!(network.to_string().parse::<Network>().unwrap(), network);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Network::Signet).unwrap();
        assert_eq!(json, "\"signet\"");
        let back: Network = serde_json::from_str("\"mainnet\"").unwrap();
        assert_eq!(back, Network::Mainnet);
    }
}
