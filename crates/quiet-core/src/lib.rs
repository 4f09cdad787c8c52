//! # quiet-core
//! Foundation types for Quiet silent payments: networks, the BIP-352
//! address codec, secp256k1 helpers and the wallet data model.

pub mod address;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod network;
pub mod types;
