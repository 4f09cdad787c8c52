//! Seed management and BIP-352 scan/spend key derivation.
//!
//! A BIP-39 seed becomes a BIP-32 master key, from which two hardened
//! branches are derived:
//!
//! ```text
//! scan:  m/352'/coin'/account'/1'/0
//! spend: m/352'/coin'/account'/0'/0
//! ```
//!
//! `coin` is 0 on mainnet and 1 on every test network, so Testnet, Regtest
//! and Signet share one key set.

use std::fmt;
use std::str::FromStr;

use bip32::{DerivationPath, XPrv};
use secp256k1::{PublicKey, SecretKey};
use zeroize::{Zeroize, ZeroizeOnDrop};

use quiet_core::constants::{BIP352_PURPOSE, DEFAULT_ACCOUNT, SCAN_BRANCH, SPEND_BRANCH};
use quiet_core::crypto::{parse_public_key, secret_key_from_bytes};
use quiet_core::network::{Network, coin_type};

use crate::error::WalletError;
use crate::mnemonic::mnemonic_to_seed;

/// A 64-byte BIP-39 seed.
///
/// Secret material is zeroized on drop to prevent leaking key material
/// in freed memory.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    bytes: [u8; 64],
}

impl Seed {
    /// Create a seed from raw bytes.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self { bytes }
    }

    /// Get the raw seed bytes. Handle with care.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.bytes
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// A complete secp256k1 key pair. Both halves are always present.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KeyPair {
    secret: SecretKey,
    public: PublicKey,
}

impl KeyPair {
    /// Build a key pair, computing the public half from the secret.
    pub fn from_secret_key(secret: SecretKey) -> Self {
        let public = PublicKey::from_secret_key(quiet_core::crypto::secp(), &secret);
        Self { secret, public }
    }

    /// The private half. Handle with care.
    pub fn secret_key(&self) -> SecretKey {
        self.secret
    }

    /// The public half.
    pub fn public_key(&self) -> PublicKey {
        self.public
    }

    /// Hex of the 32-byte private key.
    pub fn secret_hex(&self) -> String {
        hex::encode(self.secret.secret_bytes())
    }

    /// Hex of the 33-byte compressed public key.
    pub fn public_hex(&self) -> String {
        hex::encode(self.public.serialize())
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_hex())
            .finish_non_exhaustive()
    }
}

/// Scan and spend key pairs for one network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanSpendKeys {
    pub scan: KeyPair,
    pub spend: KeyPair,
}

/// Key halves as produced by a path derivation, before validation.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawKeyPair {
    pub secret: Option<SecretKey>,
    pub public: Option<PublicKey>,
}

impl RawKeyPair {
    /// Require both halves, naming the first missing one.
    fn complete(self, branch: &str) -> Result<KeyPair, WalletError> {
        let secret = self.secret.ok_or_else(|| WalletError::missing("private", branch))?;
        let public = self.public.ok_or_else(|| WalletError::missing("public", branch))?;
        Ok(KeyPair { secret, public })
    }
}

/// Raw scan and spend halves.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawKeySet {
    pub scan: RawKeyPair,
    pub spend: RawKeyPair,
}

/// Maps a seed to raw scan/spend key halves.
///
/// `mainnet` selects the mainnet parameter set; every other network uses
/// the shared test parameter set. Implementations must be deterministic.
pub trait PathDerivation: Send + Sync {
    fn derive(&self, seed: &Seed, mainnet: bool) -> Result<RawKeySet, WalletError>;
}

/// BIP-32 derivation along the BIP-352 paths for one account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bip352Path {
    account: u32,
}

impl Bip352Path {
    pub fn new(account: u32) -> Self {
        Self { account }
    }

    pub fn account(&self) -> u32 {
        self.account
    }

    /// Textual derivation path for one branch.
    pub fn path(&self, mainnet: bool, branch: u32) -> String {
        let coin = coin_type(mainnet);
        format!("m/{BIP352_PURPOSE}'/{coin}'/{}'/{branch}'/0", self.account)
    }

    fn derive_branch(&self, master: &XPrv, mainnet: bool, branch: u32) -> Result<RawKeyPair, WalletError> {
        let path = DerivationPath::from_str(&self.path(mainnet, branch))
            .map_err(|e| WalletError::KeyDerivation(format!("invalid derivation path: {e}")))?;

        let mut child = master.clone();
        for child_number in path.into_iter() {
            child = child
                .derive_child(child_number)
                .map_err(|e| WalletError::KeyDerivation(format!("child derivation failed: {e}")))?;
        }

        let secret = secret_key_from_bytes(&child.private_key().to_bytes()).ok();
        let public = parse_public_key(&child.public_key().to_bytes()).ok();
        Ok(RawKeyPair { secret, public })
    }
}

impl Default for Bip352Path {
    fn default() -> Self {
        Self::new(DEFAULT_ACCOUNT)
    }
}

impl PathDerivation for Bip352Path {
    fn derive(&self, seed: &Seed, mainnet: bool) -> Result<RawKeySet, WalletError> {
        let master = XPrv::new(seed.as_bytes())
            .map_err(|e| WalletError::KeyDerivation(format!("failed to create master key: {e}")))?;
        let scan = self.derive_branch(&master, mainnet, SCAN_BRANCH)?;
        let spend = self.derive_branch(&master, mainnet, SPEND_BRANCH)?;
        tracing::trace!(mainnet, account = self.account, "derived BIP-352 branches");
        Ok(RawKeySet { scan, spend })
    }
}

/// Entry point for every key operation.
///
/// Holds only derivation parameters, never key material; each call
/// re-derives from the mnemonic it is given.
#[derive(Clone, Debug)]
pub struct KeyDeriver<P = Bip352Path> {
    path: P,
}

impl KeyDeriver<Bip352Path> {
    /// BIP-352 derivation for `account`.
    pub fn for_account(account: u32) -> Self {
        Self::new(Bip352Path::new(account))
    }
}

impl Default for KeyDeriver<Bip352Path> {
    fn default() -> Self {
        Self::for_account(DEFAULT_ACCOUNT)
    }
}

impl<P: PathDerivation> KeyDeriver<P> {
    pub fn new(path: P) -> Self {
        Self { path }
    }

    /// The path derivation in use.
    pub fn path(&self) -> &P {
        &self.path
    }

    /// Derive the scan and spend key pairs of `network` from `mnemonic`.
    ///
    /// Fails with [`WalletError::KeyDerivation`] if any key half is absent.
    pub fn derive_keys(&self, mnemonic: &str, network: Network) -> Result<ScanSpendKeys, WalletError> {
        let seed = mnemonic_to_seed(mnemonic)?;
        let raw = self.path.derive(&seed, network.is_mainnet())?;
        let keys = ScanSpendKeys {
            scan: raw.scan.complete("scan")?,
            spend: raw.spend.complete("spend")?,
        };
        tracing::debug!(%network, "derived scan/spend keys");
        Ok(keys)
    }
}
