//! Key pair implementation
//!
//! Couples a private key with its public key, address and WIF export.
//! The key pair carries its compression tag so that a WIF import
//! reconstructs the same public key, and therefore the same address.

use serde::Serialize;
use thiserror::Error;

use crate::crypto::{Hash160, KeyError, PrivateKey, PublicKey};
use crate::encoding::{decode_wif, Address, Compression, WifError};

/// Wallet errors
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Invalid key: {0}")]
    Key(#[from] KeyError),
    #[error("Invalid WIF: {0}")]
    Wif(#[from] WifError),
}

/// A wallet key pair
#[derive(Debug, Clone)]
pub struct KeyPair {
    /// Private key
    private_key: PrivateKey,
    /// Public key in the form selected by `compression`
    pub public_key: PublicKey,
    /// Address (derived from public key)
    pub address: Address,
    /// Public key form
    pub compression: Compression,
}

/// Printable view of a key pair
#[derive(Debug, Clone, Serialize)]
pub struct KeySummary {
    pub address: Address,
    pub public_key: String,
    pub pubkey_hash: Hash160,
    pub wif: String,
    pub compression: Compression,
}

impl KeyPair {
    /// Generate a new random keypair
    pub fn generate(compression: Compression) -> Self {
        Self::from_private_key(PrivateKey::generate(), compression)
    }

    /// Import from private key bytes
    pub fn from_private_key_bytes(
        bytes: &[u8],
        compression: Compression,
    ) -> Result<Self, WalletError> {
        let private_key = PrivateKey::from_bytes(bytes)?;
        Ok(Self::from_private_key(private_key, compression))
    }

    /// Import from a WIF string, honouring its compression marker
    pub fn from_wif(wif: &str) -> Result<Self, WalletError> {
        let decoded = decode_wif(wif)?;
        Self::from_private_key_bytes(&decoded.key, decoded.compression)
    }

    fn from_private_key(private_key: PrivateKey, compression: Compression) -> Self {
        let public_key = private_key.public_key(compression);
        let address = Address::from_public_key(public_key.as_bytes());

        Self {
            private_key,
            public_key,
            address,
            compression,
        }
    }

    /// Export private key bytes
    pub fn private_key_bytes(&self) -> [u8; 32] {
        self.private_key.to_bytes()
    }

    /// Export as WIF
    pub fn to_wif(&self) -> String {
        self.private_key.to_wif(self.compression)
    }

    /// Get the public key hash carried by the address
    pub fn pubkey_hash(&self) -> Hash160 {
        *self.address.pubkey_hash()
    }

    /// Summary suitable for display or JSON export
    pub fn summary(&self) -> KeySummary {
        KeySummary {
            address: self.address.clone(),
            public_key: hex::encode(self.public_key.as_bytes()),
            pubkey_hash: self.pubkey_hash(),
            wif: self.to_wif(),
            compression: self.compression,
        }
    }
}
