//! BIP-352 labels.
//!
//! A label `m` lets one wallet publish several addresses that share a scan
//! key. The labeled spend key is `B_m = B_spend + hash_label(b_scan, m)·G`;
//! label 0 is reserved for change.

use secp256k1::{PublicKey, Scalar, SecretKey};

use quiet_core::address::SilentPaymentAddress;
use quiet_core::constants::{CHANGE_LABEL, LABEL_TAG};
use quiet_core::crypto::{secp, tagged_hash};
use quiet_core::network::Network;

use crate::error::WalletError;
use crate::keys::{KeyDeriver, PathDerivation};

/// `hash_BIP0352/Label(ser256(b_scan) || ser32(m))` as a scalar.
pub fn label_tweak(scan_secret: &SecretKey, m: u32) -> Result<Scalar, WalletError> {
    let mut msg = [0u8; 36];
    msg[..32].copy_from_slice(&scan_secret.secret_bytes());
    msg[32..].copy_from_slice(&m.to_be_bytes());
    Scalar::from_be_bytes(tagged_hash(LABEL_TAG, &msg))
        .map_err(|_| WalletError::KeyDerivation(format!("label {m} tweak out of range")))
}

/// Spend public key for label `m`.
pub fn labeled_spend_key(
    spend_public: &PublicKey,
    scan_secret: &SecretKey,
    m: u32,
) -> Result<PublicKey, WalletError> {
    let tweak = label_tweak(scan_secret, m)?;
    spend_public
        .add_exp_tweak(secp(), &tweak)
        .map_err(|e| WalletError::KeyDerivation(format!("label {m} spend key: {e}")))
}

impl<P: PathDerivation> KeyDeriver<P> {
    /// Silent payment address for label `m` on `network`.
    pub fn labeled_address(
        &self,
        mnemonic: &str,
        network: Network,
        m: u32,
    ) -> Result<String, WalletError> {
        let keys = self.derive_keys(mnemonic, network)?;
        let spend = labeled_spend_key(&keys.spend.public_key(), &keys.scan.secret_key(), m)?;
        tracing::debug!(%network, label = m, "derived labeled address");
        Ok(SilentPaymentAddress::new(keys.scan.public_key(), spend).encode(network))
    }

    /// The change address (label 0) on `network`.
    pub fn change_address(&self, mnemonic: &str, network: Network) -> Result<String, WalletError> {
        self.labeled_address(mnemonic, network, CHANGE_LABEL)
    }
}
