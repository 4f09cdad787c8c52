//! Output key recovery.
//!
//! A silent payment output is locked to `B_spend + t·G`, where `t` is the
//! per-output tweak found while scanning. The matching private key is
//! `b_spend + t mod n`. Outputs paid to a labeled address also carry the
//! label tweak: `b_spend + hash_label(b_scan, m) + t`.

use std::fmt;

use secp256k1::{PublicKey, Scalar, SecretKey};
use zeroize::Zeroize;

use quiet_core::crypto::{parse_scalar_hex, secp};
use quiet_core::network::Network;
use quiet_core::types::Utxo;

use crate::error::WalletError;
use crate::keys::{KeyDeriver, PathDerivation};
use crate::labels::label_tweak;

/// The private key that spends one specific silent payment output.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SpendingKey(SecretKey);

impl SpendingKey {
    /// The underlying secret key. Handle with care.
    pub fn secret_key(&self) -> SecretKey {
        self.0
    }

    pub fn secret_bytes(&self) -> [u8; 32] {
        self.0.secret_bytes()
    }

    /// Hex of the 32-byte private key.
    pub fn to_hex(&self) -> String {
        let mut bytes = self.secret_bytes();
        let encoded = hex::encode(bytes);
        bytes.zeroize();
        encoded
    }

    /// The output's public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_secret_key(secp(), &self.0)
    }
}

impl fmt::Debug for SpendingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpendingKey")
            .field("public_key", &hex::encode(self.public_key().serialize()))
            .finish_non_exhaustive()
    }
}

fn add_tweak(key: SecretKey, tweak: &Scalar, what: &str) -> Result<SecretKey, WalletError> {
    key.add_tweak(tweak)
        .map_err(|e| WalletError::KeyRecovery(format!("{what}: {e}")))
}

impl<P: PathDerivation> KeyDeriver<P> {
    /// Recover the private key that spends `coin` on `network`.
    ///
    /// Fails with [`WalletError::UnsupportedCoinType`] before touching the
    /// mnemonic if `coin` has no silent payment data, and with
    /// [`WalletError::KeyRecovery`] if the tweak is malformed or the sum
    /// is zero.
    pub fn recover_spend_private_key(
        &self,
        coin: &Utxo,
        network: Network,
        mnemonic: &str,
    ) -> Result<SpendingKey, WalletError> {
        let sp = coin
            .silent_payment
            .as_ref()
            .ok_or(WalletError::UnsupportedCoinType)?;
        let tweak = parse_scalar_hex(&sp.tweak)
            .map_err(|e| WalletError::KeyRecovery(format!("output tweak: {e}")))?;

        let keys = self.derive_keys(mnemonic, network)?;
        let mut secret = keys.spend.secret_key();
        if let Some(m) = sp.label {
            let label = label_tweak(&keys.scan.secret_key(), m)
                .map_err(|e| WalletError::KeyRecovery(e.to_string()))?;
            secret = add_tweak(secret, &label, "label tweak")?;
        }
        let secret = add_tweak(secret, &tweak, "output tweak")?;

        tracing::debug!(%network, label = ?sp.label, "recovered output spending key");
        Ok(SpendingKey(secret))
    }
}
