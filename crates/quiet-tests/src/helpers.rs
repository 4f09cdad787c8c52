//! Shared test helpers.

use bip39::{Language, Mnemonic};
use quiet_core::types::Utxo;
use secp256k1::Scalar;

/// BIP-39 reference phrase: eleven "abandon" and "about".
pub const ABANDON: &str = "abandon abandon abandon abandon abandon abandon \
                           abandon abandon abandon abandon abandon about";

/// A second fixed phrase from the BIP-39 reference vectors.
pub const ZOO: &str = "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong";

/// English mnemonic for 16 bytes of entropy.
pub fn mnemonic_from_entropy(entropy: [u8; 16]) -> String {
    match Mnemonic::from_entropy_in(Language::English, &entropy) {
        Ok(m) => m.to_string(),
        Err(e) => panic!("16-byte entropy is always valid: {e}"),
    }
}

/// Hex tweak for `bytes`, if it is a valid scalar.
pub fn tweak_hex(bytes: [u8; 32]) -> Option<String> {
    Scalar::from_be_bytes(bytes).ok().map(|_| hex::encode(bytes))
}

/// Silent payment outputs with the given values and a fixed tweak.
pub fn sp_utxos(values: &[u64]) -> Vec<Utxo> {
    values
        .iter()
        .map(|&v| Utxo::silent_payment(v, format!("{:064x}", 7)))
        .collect()
}
