//! Wallet error types.

use quiet_core::error::{AddressError, CoreError};
use quiet_core::network::Network;
use thiserror::Error;

/// Errors that can occur in key core operations.
///
/// Every variant is deterministic in its inputs; retrying the same call
/// yields the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// A required key half is absent or invalid after derivation.
    #[error("key derivation: {0}")]
    KeyDerivation(String),

    /// The coin carries no silent payment metadata.
    #[error("unsupported coin type: output has no silent payment data")]
    UnsupportedCoinType,

    /// Tweak addition rejected its inputs.
    #[error("key recovery: {0}")]
    KeyRecovery(String),

    /// Invalid BIP-39 mnemonic phrase.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// Wallet public keys for the active network have not been set.
    #[error("wallet not initialized for {0}")]
    NotInitialized(Network),

    /// Error from a quiet-core primitive.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Address encoding or decoding error.
    #[error(transparent)]
    Address(#[from] AddressError),
}

impl WalletError {
    pub(crate) fn missing(half: &str, branch: &str) -> Self {
        Self::KeyDerivation(format!("{branch} {half} key absent after derivation"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unsupported_coin_type() {
        let e = WalletError::UnsupportedCoinType;
        assert_eq!(
            e.to_string(),
            "unsupported coin type: output has no silent payment data"
        );
    }

    #[test]
    fn display_missing_half() {
        let e = WalletError::missing("private", "spend");
        assert_eq!(
            e.to_string(),
            "key derivation: spend private key absent after derivation"
        );
    }

    #[test]
    fn display_not_initialized() {
        let e = WalletError::NotInitialized(Network::Signet);
        assert_eq!(e.to_string(), "wallet not initialized for signet");
    }

    #[test]
    fn from_core_error() {
        let wallet: WalletError = CoreError::InvalidScalar.into();
        assert_eq!(wallet, WalletError::Core(CoreError::InvalidScalar));
        assert_eq!(wallet.to_string(), "scalar out of range");
    }

    #[test]
    fn from_address_error() {
        let wallet: WalletError = AddressError::InvalidChecksum.into();
        assert_eq!(wallet, WalletError::Address(AddressError::InvalidChecksum));
    }

    #[test]
    fn clone_and_eq() {
        let e1 = WalletError::KeyRecovery("zero sum".into());
        assert_eq!(e1.clone(), e1);
    }
}
