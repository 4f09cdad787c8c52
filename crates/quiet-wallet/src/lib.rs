//! # quiet-wallet: BIP-352 silent payment key core.
//!
//! Derives network-scoped scan/spend key pairs from a single BIP-39
//! mnemonic, projects them into public key material and addresses,
//! recovers the one-time private key of a received silent payment output,
//! and answers balance and initialization queries over wallet state.
//!
//! Nothing secret is cached: every call re-derives from the mnemonic.
//!
//! # Modules
//!
//! - [`error`]: `WalletError` enum
//! - [`mnemonic`]: BIP-39 phrase to seed, phrase generation
//! - [`keys`]: Seed, KeyPair, BIP-352 path derivation, `KeyDeriver`
//! - [`projection`]: Public keys, scan-only keys, addresses
//! - [`labels`]: BIP-352 labels
//! - [`recovery`]: Output spending key recovery by tweak addition
//! - [`wallet`]: Wallet state, balance and initialization

pub mod error;
pub mod keys;
pub mod labels;
pub mod mnemonic;
pub mod projection;
pub mod recovery;
pub mod wallet;

// Re-exports for convenient access
pub use error::WalletError;
pub use keys::{
    Bip352Path, KeyDeriver, KeyPair, PathDerivation, RawKeyPair, RawKeySet, ScanSpendKeys, Seed,
};
pub use labels::{label_tweak, labeled_spend_key};
pub use mnemonic::{generate_mnemonic, mnemonic_to_seed};
pub use projection::ScanOnlyKeySet;
pub use recovery::SpendingKey;
pub use wallet::Wallet;
