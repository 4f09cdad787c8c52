//! secp256k1 helpers shared by the wallet crates.
//!
//! Wraps the `secp256k1` crate: a process-wide verification/signing
//! context, hex parsing for scalars and compressed points, and the BIP-340
//! style tagged hash used for BIP-352 label tweaks.

use std::sync::LazyLock;

use secp256k1::{All, PublicKey, Scalar, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};

use crate::constants::{PUBLIC_KEY_LEN, SCALAR_LEN};
use crate::error::CoreError;

static SECP: LazyLock<Secp256k1<All>> = LazyLock::new(Secp256k1::new);

/// Shared secp256k1 context. Holds no key material.
pub fn secp() -> &'static Secp256k1<All> {
    &SECP
}

/// Decode a hex string into exactly `N` bytes.
pub fn decode_hex_array<const N: usize>(s: &str) -> Result<[u8; N], CoreError> {
    let bytes = hex::decode(s.trim()).map_err(|e| CoreError::InvalidHex(e.to_string()))?;
    bytes.as_slice().try_into().map_err(|_| {
        CoreError::InvalidHex(format!("expected {N} bytes, got {}", bytes.len()))
    })
}

/// Build a secret key from 32 big-endian bytes. Rejects zero and values
/// >= the curve order.
pub fn secret_key_from_bytes(bytes: &[u8]) -> Result<SecretKey, CoreError> {
    SecretKey::from_byte_array(bytes.try_into().map_err(|_| CoreError::InvalidScalar)?)
        .map_err(|_| CoreError::InvalidScalar)
}

/// Parse a 32-byte big-endian hex scalar. Rejects values >= the curve order.
pub fn parse_scalar_hex(s: &str) -> Result<Scalar, CoreError> {
    let bytes: [u8; SCALAR_LEN] = decode_hex_array(s)?;
    Scalar::from_be_bytes(bytes).map_err(|_| CoreError::InvalidScalar)
}

/// Parse a 33-byte compressed public key.
pub fn parse_public_key(bytes: &[u8; PUBLIC_KEY_LEN]) -> Result<PublicKey, CoreError> {
    PublicKey::from_slice(bytes).map_err(|_| CoreError::InvalidPublicKey)
}

/// Parse a hex-encoded 33-byte compressed public key.
pub fn parse_public_key_hex(s: &str) -> Result<PublicKey, CoreError> {
    let bytes: [u8; PUBLIC_KEY_LEN] = decode_hex_array(s)?;
    parse_public_key(&bytes)
}

/// `SHA256(SHA256(tag) || SHA256(tag) || msg)`.
pub fn tagged_hash(tag: &str, msg: &[u8]) -> [u8; 32] {
    let tag_hash = Sha256::digest(tag.as_bytes());
    let mut hasher = Sha256::new();
    hasher.update(&tag_hash);
    hasher.update(&tag_hash);
    hasher.update(msg);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// secp256k1 group order n.
    const CURVE_ORDER_HEX: &str =
        "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

    fn generator() -> PublicKey {
        let mut one = [0u8; 32];
        one[31] = 1;
        let sk = secret_key_from_bytes(&one).unwrap();
        PublicKey::from_secret_key(secp(), &sk)
    }

    #[test]
    fn decode_hex_array_exact_length() {
        let bytes: [u8; 4] = decode_hex_array("deadbeef").unwrap();
        assert_eq!(bytes, [0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn decode_hex_array_wrong_length() {
        let err = decode_hex_array::<4>("dead").unwrap_err();
        assert!(matches!(err, CoreError::InvalidHex(_)));
    }

    #[test]
    fn decode_hex_array_not_hex() {
        assert!(decode_hex_array::<1>("zz").is_err());
    }

    #[test]
    fn parse_scalar_accepts_small_values() {
        let s = format!("{:064x}", 7u8);
        assert!(parse_scalar_hex(&s).is_ok());
    }

    #[test]
    fn parse_scalar_rejects_curve_order() {
        assert_eq!(
            parse_scalar_hex(CURVE_ORDER_HEX).unwrap_err(),
            CoreError::InvalidScalar
        );
    }

    #[test]
    fn parse_scalar_rejects_short_input() {
        assert!(matches!(
            parse_scalar_hex("01").unwrap_err(),
            CoreError::InvalidHex(_)
        ));
    }

    #[test]
    fn secret_key_rejects_zero() {
        assert_eq!(
            secret_key_from_bytes(&[0u8; 32]).unwrap_err(),
            CoreError::InvalidScalar
        );
    }

    #[test]
    fn secret_key_rejects_wrong_length() {
        assert!(secret_key_from_bytes(&[1u8; 31]).is_err());
    }

    #[test]
    fn parse_generator_point() {
        let g = generator();
        let parsed = parse_public_key_hex(&hex::encode(g.serialize())).unwrap();
        assert_eq!(parsed, g);
    }

    #[test]
    fn parse_public_key_rejects_bad_prefix() {
        let mut bytes = generator().serialize();
        bytes[0] = 0x05;
        assert_eq!(parse_public_key(&bytes).unwrap_err(), CoreError::InvalidPublicKey);
    }

    #[test]
    fn tagged_hash_depends_on_tag() {
        let msg = b"quiet";
        assert_ne!(tagged_hash("BIP0352/Label", msg), tagged_hash("BIP0352/Inputs", msg));
    }

    #[test]
    fn tagged_hash_differs_from_plain_sha256() {
        let msg = b"quiet";
        let plain: [u8; 32] = Sha256::digest(msg).into();
        assert_ne!(tagged_hash("", msg), plain);
    }

    #[test]
    fn tagged_hash_deterministic() {
        assert_eq!(tagged_hash("t", b"m"), tagged_hash("t", b"m"));
    }
}
