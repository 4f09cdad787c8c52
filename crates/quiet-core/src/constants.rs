//! Protocol constants. All monetary values in satoshis (1 BTC = 10^8 sats).

pub const COIN: u64 = 100_000_000;

/// Upper bound on the total bitcoin supply in satoshis.
pub const MAX_MONEY: u64 = 21_000_000 * COIN;

/// BIP-43 purpose field for the BIP-352 derivation paths.
pub const BIP352_PURPOSE: u32 = 352;

/// Hardened child index selecting the spend key branch.
pub const SPEND_BRANCH: u32 = 0;

/// Hardened child index selecting the scan key branch.
pub const SCAN_BRANCH: u32 = 1;

/// Account used when none is configured.
pub const DEFAULT_ACCOUNT: u32 = 0;

/// Silent payment address version produced by the encoder.
pub const SP_ADDRESS_VERSION: u8 = 0;

/// Highest version value; reserved and always rejected.
pub const SP_ADDRESS_MAX_VERSION: u8 = 31;

/// Maximum length of an encoded silent payment address.
///
/// BIP-352 lifts the 90 character Bech32 limit to 1023.
pub const SP_ADDRESS_MAX_LEN: usize = 1023;

/// Length in bytes of a compressed secp256k1 public key.
pub const PUBLIC_KEY_LEN: usize = 33;

/// Length in bytes of a secp256k1 scalar (private key or tweak).
pub const SCALAR_LEN: usize = 32;

/// `scan || spend` payload length of a version 0 address.
pub const SP_PAYLOAD_LEN: usize = 2 * PUBLIC_KEY_LEN;

/// Tag for the tagged hash that produces label tweaks.
pub const LABEL_TAG: &str = "BIP0352/Label";

/// Label index reserved for change outputs.
pub const CHANGE_LABEL: u32 = 0;
