//! Error types for Quiet core primitives.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid HRP")] InvalidHrp,
    #[error("HRP mismatch: expected {expected}, got {got}")] HrpMismatch { expected: String, got: String },
    #[error("invalid length")] InvalidLength,
    #[error("invalid checksum")] InvalidChecksum,
    #[error("invalid character: {0}")] InvalidCharacter(char),
    #[error("invalid version: {0}")] InvalidVersion(u8),
    #[error("invalid padding bits")] InvalidPadding,
    #[error("invalid {0} public key")] InvalidPublicKey(&'static str),
    #[error("missing separator")] MissingSeparator,
    #[error("mixed case")] MixedCase,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown network: {0}")] UnknownNetwork(String),
    #[error("invalid hex: {0}")] InvalidHex(String),
    #[error("scalar out of range")] InvalidScalar,
    #[error("invalid public key bytes")] InvalidPublicKey,
    #[error(transparent)] Address(#[from] AddressError),
}
