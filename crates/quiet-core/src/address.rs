//! Silent payment address encoding ([BIP-352]).
//!
//! Addresses use Bech32m ([BIP-350]) with network-specific prefixes:
//! - Mainnet: `sp1...`
//! - Testnet and Signet: `tsp1...`
//! - Regtest: `sprt1...`
//!
//! The data part is a version value (currently 0) followed by the 33-byte
//! scan public key and the 33-byte spend public key. BIP-352 raises the
//! Bech32 length limit from 90 to 1023 characters.
//!
//! [BIP-350]: https://github.com/bitcoin/bips/blob/master/bip-0350.mediawiki
//! [BIP-352]: https://github.com/bitcoin/bips/blob/master/bip-0352.mediawiki

use secp256k1::PublicKey;

use crate::constants::{
    PUBLIC_KEY_LEN, SP_ADDRESS_MAX_LEN, SP_ADDRESS_MAX_VERSION, SP_ADDRESS_VERSION,
    SP_PAYLOAD_LEN,
};
use crate::crypto::parse_public_key;
use crate::error::AddressError;
use crate::network::Network;

/// Bech32m checksum constant (BIP-350).
const BECH32M_CONST: u32 = 0x2bc830a3;

/// Bech32 character set for encoding 5-bit values.
const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Length of the Bech32m checksum in 5-bit values.
const CHECKSUM_LEN: usize = 6;

/// A silent payment address: the recipient's scan and spend public keys.
///
/// The network is not part of the value; it is supplied when encoding and
/// checked when decoding, since Testnet and Signet share a prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SilentPaymentAddress {
    version: u8,
    scan: PublicKey,
    spend: PublicKey,
}

impl SilentPaymentAddress {
    /// Create a version 0 address from scan and spend public keys.
    pub fn new(scan: PublicKey, spend: PublicKey) -> Self {
        Self {
            version: SP_ADDRESS_VERSION,
            scan,
            spend,
        }
    }

    /// Create an address from raw compressed public keys.
    pub fn from_bytes(
        scan: &[u8; PUBLIC_KEY_LEN],
        spend: &[u8; PUBLIC_KEY_LEN],
    ) -> Result<Self, AddressError> {
        let scan = parse_public_key(scan).map_err(|_| AddressError::InvalidPublicKey("scan"))?;
        let spend =
            parse_public_key(spend).map_err(|_| AddressError::InvalidPublicKey("spend"))?;
        Ok(Self::new(scan, spend))
    }

    /// The scan public key.
    pub fn scan_key(&self) -> PublicKey {
        self.scan
    }

    /// The spend public key.
    pub fn spend_key(&self) -> PublicKey {
        self.spend
    }

    /// The address version value.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Encode this address as a Bech32m string for `network`.
    ///
    /// Encoding always emits the current version.
    pub fn encode(&self, network: Network) -> String {
        let hrp = network.hrp();
        let mut key_bytes = [0u8; SP_PAYLOAD_LEN];
        key_bytes[..PUBLIC_KEY_LEN].copy_from_slice(&self.scan.serialize());
        key_bytes[PUBLIC_KEY_LEN..].copy_from_slice(&self.spend.serialize());
        let data_5bit = to_5bit(&key_bytes);

        let mut payload = Vec::with_capacity(1 + data_5bit.len());
        payload.push(SP_ADDRESS_VERSION);
        payload.extend_from_slice(&data_5bit);

        let checksum = bech32m_create_checksum(hrp, &payload);

        let mut result = String::with_capacity(hrp.len() + 1 + payload.len() + CHECKSUM_LEN);
        result.push_str(hrp);
        result.push('1');
        for &d in payload.iter().chain(checksum.iter()) {
            result.push(CHARSET[d as usize] as char);
        }
        result
    }

    /// Decode a Bech32m silent payment address for `network`.
    ///
    /// Versions 1 through 30 are accepted by reading the first 66 bytes of
    /// the payload. Version 31 is rejected.
    pub fn decode(s: &str, network: Network) -> Result<Self, AddressError> {
        if s.len() > SP_ADDRESS_MAX_LEN {
            return Err(AddressError::InvalidLength);
        }

        let has_lower = s.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = s.chars().any(|c| c.is_ascii_uppercase());
        if has_lower && has_upper {
            return Err(AddressError::MixedCase);
        }

        let s_lower = s.to_ascii_lowercase();

        let sep_pos = s_lower.rfind('1').ok_or(AddressError::MissingSeparator)?;
        if sep_pos == 0 {
            return Err(AddressError::InvalidHrp);
        }
        // Need at least the version char and the checksum after the separator
        if sep_pos + 2 + CHECKSUM_LEN > s_lower.len() {
            return Err(AddressError::InvalidLength);
        }

        let hrp = &s_lower[..sep_pos];
        let data_part = &s_lower[sep_pos + 1..];

        let mut data = Vec::with_capacity(data_part.len());
        for c in data_part.chars() {
            let pos = CHARSET
                .iter()
                .position(|&ch| ch as char == c)
                .ok_or(AddressError::InvalidCharacter(c))?;
            data.push(pos as u8);
        }

        if !bech32m_verify_checksum(hrp, &data) {
            return Err(AddressError::InvalidChecksum);
        }

        if hrp != network.hrp() {
            return Err(AddressError::HrpMismatch {
                expected: network.hrp().to_string(),
                got: hrp.to_string(),
            });
        }

        let payload = &data[..data.len() - CHECKSUM_LEN];
        let version = payload[0];
        if version >= SP_ADDRESS_MAX_VERSION {
            return Err(AddressError::InvalidVersion(version));
        }

        let key_bytes =
            convert_bits(&payload[1..], 5, 8, false).ok_or(AddressError::InvalidPadding)?;
        let keys_ok = if version == SP_ADDRESS_VERSION {
            key_bytes.len() == SP_PAYLOAD_LEN
        } else {
            key_bytes.len() >= SP_PAYLOAD_LEN
        };
        if !keys_ok {
            return Err(AddressError::InvalidLength);
        }

        let mut scan = [0u8; PUBLIC_KEY_LEN];
        let mut spend = [0u8; PUBLIC_KEY_LEN];
        scan.copy_from_slice(&key_bytes[..PUBLIC_KEY_LEN]);
        spend.copy_from_slice(&key_bytes[PUBLIC_KEY_LEN..SP_PAYLOAD_LEN]);

        let mut address = Self::from_bytes(&scan, &spend)?;
        address.version = version;
        Ok(address)
    }
}

/// Encode raw scan and spend public keys as a silent payment address.
pub fn encode_address(
    scan: &[u8; PUBLIC_KEY_LEN],
    spend: &[u8; PUBLIC_KEY_LEN],
    network: Network,
) -> Result<String, AddressError> {
    Ok(SilentPaymentAddress::from_bytes(scan, spend)?.encode(network))
}

// --- Bech32m internals ---

/// Compute the Bech32m polymod over a sequence of 5-bit values.
fn bech32m_polymod(values: &[u8]) -> u32 {
    const GEN: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];
    let mut chk: u32 = 1;
    for &v in values {
        let b = chk >> 25;
        chk = ((chk & 0x1ffffff) << 5) ^ (v as u32);
        for (i, &g) in GEN.iter().enumerate() {
            if (b >> i) & 1 != 0 {
                chk ^= g;
            }
        }
    }
    chk
}

/// Expand the HRP for Bech32m checksum computation.
fn bech32m_hrp_expand(hrp: &str) -> Vec<u8> {
    let mut ret = Vec::with_capacity(hrp.len() * 2 + 1);
    ret.extend(hrp.bytes().map(|c| c >> 5));
    ret.push(0);
    ret.extend(hrp.bytes().map(|c| c & 31));
    ret
}

/// Create the 6-value Bech32m checksum for the given HRP and data.
fn bech32m_create_checksum(hrp: &str, data: &[u8]) -> Vec<u8> {
    let mut values = bech32m_hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0; CHECKSUM_LEN]);
    let polymod = bech32m_polymod(&values) ^ BECH32M_CONST;
    (0..CHECKSUM_LEN)
        .map(|i| ((polymod >> (5 * (5 - i))) & 31) as u8)
        .collect()
}

/// Verify the Bech32m checksum for the given HRP and data (including checksum).
fn bech32m_verify_checksum(hrp: &str, data: &[u8]) -> bool {
    let mut values = bech32m_hrp_expand(hrp);
    values.extend_from_slice(data);
    bech32m_polymod(&values) == BECH32M_CONST
}

/// Regroup bytes into padded 5-bit values.
fn to_5bit(data: &[u8]) -> Vec<u8> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut ret = Vec::with_capacity((data.len() * 8).div_ceil(5));
    for &value in data {
        acc = (acc << 8) | value as u32;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            ret.push(((acc >> bits) & 31) as u8);
        }
    }
    if bits > 0 {
        ret.push(((acc << (5 - bits)) & 31) as u8);
    }
    ret
}

/// Convert between bit widths (e.g. 5-bit Bech32 groups back to bytes).
fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> Option<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut ret = Vec::new();
    let maxv = (1u32 << to_bits) - 1;
    for &value in data {
        let v = value as u32;
        if v >> from_bits != 0 {
            return None;
        }
        acc = ((acc << from_bits) | v) & 0xffff;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            ret.push(((acc >> bits) & maxv) as u8);
        }
    }
    if pad {
        if bits > 0 {
            ret.push(((acc << (to_bits - bits)) & maxv) as u8);
        }
    } else if bits >= from_bits || ((acc << (to_bits - bits)) & maxv) != 0 {
        return None;
    }
    Some(ret)
}
