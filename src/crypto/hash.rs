//! Hash primitives
//!
//! Three distinct hash families, never interchangeable:
//! SHA-256 and RIPEMD-160 derive payloads, Keccak-256 derives checksums.

use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sha3::Keccak256;
use std::fmt;

/// 32-byte hash output
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash256(pub [u8; 32]);

/// 20-byte hash output (public key hash)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash160(pub [u8; 20]);

impl Hash256 {
    /// Create hash from hex string
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let mut arr = [0u8; 32];
        hex::decode_to_slice(hex, &mut arr)?;
        Ok(Hash256(arr))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Hash160 {
    /// Create hash from a slice, `None` unless it is exactly 20 bytes
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let arr: [u8; 20] = bytes.try_into().ok()?;
        Some(Hash160(arr))
    }

    /// Create hash from hex string
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let mut arr = [0u8; 20];
        hex::decode_to_slice(hex, &mut arr)?;
        Ok(Hash160(arr))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex())
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash160({})", self.to_hex())
    }
}

impl fmt::Display for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// SHA-256 of arbitrary bytes
pub fn sha256(data: &[u8]) -> Hash256 {
    Hash256(Sha256::digest(data).into())
}

/// Keccak-256 of arbitrary bytes (original Keccak padding, not FIPS-202 SHA3)
pub fn keccak256(data: &[u8]) -> Hash256 {
    Hash256(Keccak256::digest(data).into())
}

/// RIPEMD-160 of arbitrary bytes
pub fn ripemd160(data: &[u8]) -> Hash160 {
    Hash160(Ripemd160::digest(data).into())
}

/// RIPEMD-160(SHA-256(data)), the public key hash
pub fn hash160(data: &[u8]) -> Hash160 {
    let first = sha256(data);
    ripemd160(&first.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        let hash = sha256(b"abc");
        assert_eq!(
            hash.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_keccak256_known_vector() {
        // Pre-standard Keccak, differs from SHA3-256("")
        let hash = keccak256(b"");
        assert_eq!(
            hash.to_hex(),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_ripemd160_known_vector() {
        let hash = ripemd160(b"abc");
        assert_eq!(hash.to_hex(), "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc");
    }

    #[test]
    fn test_hash_families_distinct() {
        let data = b"maxcoin";
        assert_ne!(sha256(data), keccak256(data));
    }

    #[test]
    fn test_hash160_is_ripemd_of_sha256() {
        let data = b"public key";
        assert_eq!(hash160(data), ripemd160(sha256(data).as_bytes()));
    }

    #[test]
    fn test_hex_roundtrip() {
        let hash = hash160(b"test");
        let recovered = Hash160::from_hex(&hash.to_hex()).unwrap();
        assert_eq!(hash, recovered);

        let hash = sha256(b"test");
        let recovered = Hash256::from_hex(&hash.to_hex()).unwrap();
        assert_eq!(hash, recovered);
    }

    #[test]
    fn test_hash160_from_slice_length() {
        assert!(Hash160::from_slice(&[0u8; 20]).is_some());
        assert!(Hash160::from_slice(&[0u8; 19]).is_none());
        assert!(Hash160::from_slice(&[0u8; 21]).is_none());
    }
}
