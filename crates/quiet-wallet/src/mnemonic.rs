//! BIP-39 mnemonic handling: phrase to seed, and fresh phrase generation.

use bip39::{Language, Mnemonic};
use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::WalletError;
use crate::keys::Seed;

/// Parse a BIP-39 mnemonic phrase and stretch it into a 64-byte seed.
///
/// Normalizes whitespace and converts to lowercase before parsing. The
/// passphrase is always empty.
pub fn mnemonic_to_seed(phrase: &str) -> Result<Seed, WalletError> {
    let normalized = Zeroizing::new(
        phrase
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase(),
    );
    let m = Mnemonic::parse_in(Language::English, normalized.as_str())
        .map(Zeroizing::new)
        .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;
    Ok(Seed::from_bytes(m.to_seed_normalized("")))
}

/// Generate a new English mnemonic of 12 or 24 words from OS randomness.
pub fn generate_mnemonic(word_count: usize) -> Result<String, WalletError> {
    let entropy_len = match word_count {
        12 => 16,
        24 => 32,
        n => {
            return Err(WalletError::InvalidMnemonic(format!(
                "unsupported word count {n} (expected 12 or 24)"
            )));
        }
    };
    let mut entropy = Zeroizing::new(vec![0u8; entropy_len]);
    rand::rngs::OsRng.fill_bytes(&mut entropy);
    let m = Mnemonic::from_entropy_in(Language::English, &entropy)
        .map(Zeroizing::new)
        .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;
    Ok(m.to_string())
}
