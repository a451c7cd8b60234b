//! MaxCoin addresses
//!
//! Address = Base58Check(ADDRESS_VERSION || RIPEMD160(SHA256(pubkey)))

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::base58check::{decode_checked, encode_checked, Base58CheckError};
use crate::constants::{ADDRESS_VERSION, PUBKEY_HASH_LEN};
use crate::crypto::{hash160, Hash160};

/// Address errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error(transparent)]
    Codec(#[from] Base58CheckError),
    #[error("Invalid address length: expected 20 bytes, found {0}")]
    InvalidLength(usize),
}

/// Derive the address string for a public key
pub fn derive_address(pubkey: &[u8]) -> String {
    encode_pubkey_hash(&hash160(pubkey))
}

fn encode_pubkey_hash(pubkey_hash: &Hash160) -> String {
    let mut payload = Vec::with_capacity(1 + PUBKEY_HASH_LEN);
    payload.push(ADDRESS_VERSION);
    payload.extend_from_slice(pubkey_hash.as_bytes());

    encode_checked(&payload)
}

/// True iff the string carries a valid checksum and the address version
pub fn validate_address(address: &str) -> bool {
    decode_checked(address, ADDRESS_VERSION).is_ok()
}

/// Decode an address back to its public key hash
pub fn decode_address(address: &str) -> Result<Hash160, AddressError> {
    let data = decode_checked(address, ADDRESS_VERSION)?;
    Hash160::from_slice(&data).ok_or(AddressError::InvalidLength(data.len()))
}

/// A decoded, checksum-verified address
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address {
    encoded: String,
    pubkey_hash: Hash160,
}

impl Address {
    /// Derive from raw public key bytes
    pub fn from_public_key(pubkey: &[u8]) -> Self {
        Self::from_pubkey_hash(hash160(pubkey))
    }

    /// Build from an already computed public key hash
    pub fn from_pubkey_hash(pubkey_hash: Hash160) -> Self {
        Self {
            encoded: encode_pubkey_hash(&pubkey_hash),
            pubkey_hash,
        }
    }

    /// The 20-byte public key hash
    pub fn pubkey_hash(&self) -> &Hash160 {
        &self.pubkey_hash
    }

    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pubkey_hash = decode_address(s)?;
        Ok(Self {
            encoded: s.to_string(),
            pubkey_hash,
        })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.encoded)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encoded)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WIF_VERSION;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    const KNOWN_PUBKEY_B64: &str =
        "BNX5V3mm0Uqu4ZVTB4AQ9IReam0vdsS3va8cuz4A909fVaJC2sqZcsnUL7sOWwz9U1HJehP0UW1tcfKvmfvAJkY=";
    const KNOWN_ADDRESS: &str = "mQ1MSBXTRvV4ArwDksPiUBLWCmt7t9AkDi";

    fn known_pubkey() -> Vec<u8> {
        STANDARD.decode(KNOWN_PUBKEY_B64).unwrap()
    }

    #[test]
    fn test_known_vector() {
        let pubkey = known_pubkey();
        assert_eq!(pubkey.len(), 65);

        let address = derive_address(&pubkey);
        assert_eq!(address, KNOWN_ADDRESS);
        assert!(validate_address(&address));

        let raw = bs58::decode(&address).into_vec().unwrap();
        assert_eq!(raw.len(), 25);
        assert_eq!(raw[0], ADDRESS_VERSION);
    }

    #[test]
    fn test_known_pubkey_hash() {
        let hash = decode_address(KNOWN_ADDRESS).unwrap();
        assert_eq!(hash.to_hex(), "55dcf3682421130b50fa12734e4934f41c4a445b");
        assert_eq!(hash, hash160(&known_pubkey()));
    }

    #[test]
    fn test_address_shape() {
        let address = derive_address(&[0u8; 33]);
        assert!(address.starts_with(crate::constants::ADDRESS_PREFIX));
        assert_eq!(address.len(), 34);
    }

    #[test]
    fn test_zero_hash_address() {
        let address = Address::from_pubkey_hash(Hash160([0u8; 20]));
        assert_eq!(address.as_str(), "mGBMJwnh6qyNxgLXh9e4LnwYEVLmGZqetb");
    }

    #[test]
    fn test_wrong_version_rejected() {
        let mut payload = vec![WIF_VERSION];
        payload.extend_from_slice(&[7u8; 20]);
        let foreign = encode_checked(&payload);

        assert!(!validate_address(&foreign));
        assert_eq!(
            decode_address(&foreign),
            Err(AddressError::Codec(Base58CheckError::VersionMismatch {
                expected: ADDRESS_VERSION,
                found: WIF_VERSION,
            }))
        );
    }

    #[test]
    fn test_wrong_length_body() {
        let mut payload = vec![ADDRESS_VERSION];
        payload.extend_from_slice(&[7u8; 19]);
        let short = encode_checked(&payload);

        // Framing is valid, the body is not a 20-byte hash
        assert!(validate_address(&short));
        assert_eq!(decode_address(&short), Err(AddressError::InvalidLength(19)));
    }

    #[test]
    fn test_corrupted_character() {
        let mut chars: Vec<char> = KNOWN_ADDRESS.chars().collect();
        chars[10] = if chars[10] == 'x' { 'y' } else { 'x' };
        let corrupted: String = chars.into_iter().collect();
        assert!(!validate_address(&corrupted));
    }

    #[test]
    fn test_parse_and_display() {
        let address: Address = KNOWN_ADDRESS.parse().unwrap();
        assert_eq!(address.to_string(), KNOWN_ADDRESS);
        assert_eq!(address, Address::from_public_key(&known_pubkey()));
        assert!("not-an-address".parse::<Address>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let address: Address = KNOWN_ADDRESS.parse().unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{}\"", KNOWN_ADDRESS));

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
        assert!(serde_json::from_str::<Address>("\"mQ1MSBXTRvV4ArwDksPiUBLWCmt7t9AkDj\"").is_err());
    }
}
