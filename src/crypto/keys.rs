//! secp256k1 key source
//!
//! Supplies raw private and public key bytes to the address and WIF codecs.
//! Uses the k256 ECDSA signing key; only the SEC1 encodings leave this module.

use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;
use thiserror::Error;

use crate::constants::PRIVATE_KEY_LEN;
use crate::encoding::{derive_address, derive_wif, Compression};

/// Key errors
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("Invalid private key")]
    InvalidPrivateKey,
    #[error("Invalid public key")]
    InvalidPublicKey,
    #[error("Invalid public key encoding: {0}")]
    InvalidPublicKeyEncoding(String),
}

/// 32-byte secp256k1 private key
#[derive(Clone)]
pub struct PrivateKey(SigningKey);

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

/// SEC1-encoded public key (33 bytes compressed, 65 bytes uncompressed)
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey(pub Vec<u8>);

impl PrivateKey {
    /// Generate a new random private key
    pub fn generate() -> Self {
        PrivateKey(SigningKey::random(&mut OsRng))
    }

    /// Create from raw bytes (must be a 32-byte scalar in range)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(KeyError::InvalidPrivateKey);
        }
        SigningKey::from_slice(bytes)
            .map(PrivateKey)
            .map_err(|_| KeyError::InvalidPrivateKey)
    }

    /// Get the corresponding public key in the requested SEC1 form
    pub fn public_key(&self, compression: Compression) -> PublicKey {
        let point = self
            .0
            .verifying_key()
            .as_affine()
            .to_encoded_point(compression.is_compressed());
        PublicKey(point.as_bytes().to_vec())
    }

    /// Export to bytes
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes().into()
    }

    /// Encode as WIF
    pub fn to_wif(&self, compression: Compression) -> String {
        derive_wif(&self.to_bytes(), compression)
    }
}

impl PublicKey {
    /// Create from SEC1 bytes, checking the point is on the curve
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        k256::PublicKey::from_sec1_bytes(bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(PublicKey(bytes.to_vec()))
    }

    /// Whether this is the 33-byte compressed form
    pub fn compression(&self) -> Compression {
        match self.0.first() {
            Some(0x02) | Some(0x03) => Compression::Compressed,
            _ => Compression::Uncompressed,
        }
    }

    /// Convert to address
    pub fn to_address(&self) -> String {
        derive_address(&self.0)
    }

    /// Export to bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({})", hex::encode(&self.0))
    }
}
