//! Wallet Import Format
//!
//! WIF = Base58Check(WIF_VERSION || privkey || [0x01 if compressed])
//!
//! Compression is carried as an explicit tag. When decoding, the tag is
//! recovered from the decoded length against the declared key length;
//! the first-character convention ('5' vs 'K'/'L') is only a pre-check.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::base58check::{decode_checked, encode_checked, Base58CheckError};
use crate::constants::{
    COMPRESSION_MARKER, PRIVATE_KEY_LEN, WIF_COMPRESSED_PREFIXES, WIF_UNCOMPRESSED_PREFIX,
    WIF_VERSION,
};

/// WIF errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WifError {
    #[error(transparent)]
    Codec(#[from] Base58CheckError),
    #[error("Unexpected WIF prefix: {0:?}")]
    UnexpectedPrefix(Option<char>),
    #[error("Key length mismatch: expected {expected} bytes plus optional marker, found {found}")]
    KeyLengthMismatch { expected: usize, found: usize },
    #[error("Missing compression marker: found trailing byte 0x{0:02x}")]
    MissingCompressionMarker(u8),
}

/// Public key form signalled by a WIF string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compression {
    Uncompressed,
    Compressed,
}

impl Compression {
    pub fn is_compressed(self) -> bool {
        matches!(self, Compression::Compressed)
    }
}

impl From<bool> for Compression {
    fn from(compressed: bool) -> Self {
        if compressed {
            Compression::Compressed
        } else {
            Compression::Uncompressed
        }
    }
}

/// A decoded WIF private key
#[derive(Clone, PartialEq, Eq)]
pub struct Wif {
    pub key: Vec<u8>,
    pub compression: Compression,
}

impl Wif {
    pub fn new(key: Vec<u8>, compression: Compression) -> Self {
        Self { key, compression }
    }

    /// Re-encode as a WIF string
    pub fn encode(&self) -> String {
        derive_wif(&self.key, self.compression)
    }
}

impl std::fmt::Debug for Wif {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Wif([REDACTED], {:?})", self.compression)
    }
}

/// Encode a private key as WIF
pub fn derive_wif(privkey: &[u8], compression: Compression) -> String {
    let mut payload = Vec::with_capacity(privkey.len() + 2);
    payload.push(WIF_VERSION);
    payload.extend_from_slice(privkey);
    if compression.is_compressed() {
        payload.push(COMPRESSION_MARKER);
    }

    encode_checked(&payload)
}

/// True iff the string carries a valid checksum and the WIF version
pub fn validate_wif(wif: &str) -> bool {
    decode_checked(wif, WIF_VERSION).is_ok()
}

/// Classify a WIF string by its first character without decoding it.
///
/// Only meaningful for 32-byte keys; any other prefix is reported.
pub fn is_compressed_wif(wif: &str) -> Result<bool, WifError> {
    match wif.chars().next() {
        Some(c) if WIF_COMPRESSED_PREFIXES.contains(&c) => Ok(true),
        Some(c) if c == WIF_UNCOMPRESSED_PREFIX => Ok(false),
        other => Err(WifError::UnexpectedPrefix(other)),
    }
}

/// Decode a WIF string holding a 32-byte private key
pub fn decode_wif(wif: &str) -> Result<Wif, WifError> {
    decode_wif_with_len(wif, PRIVATE_KEY_LEN)
}

/// Decode a WIF string holding a private key of `key_len` bytes
pub fn decode_wif_with_len(wif: &str, key_len: usize) -> Result<Wif, WifError> {
    let mut data = decode_checked(wif, WIF_VERSION)?;

    let compression = if data.len() == key_len {
        Compression::Uncompressed
    } else if data.len().checked_sub(1) == Some(key_len) {
        let marker = data[key_len];
        if marker != COMPRESSION_MARKER {
            return Err(WifError::MissingCompressionMarker(marker));
        }
        data.truncate(key_len);
        Compression::Compressed
    } else {
        return Err(WifError::KeyLengthMismatch {
            expected: key_len,
            found: data.len(),
        });
    };

    Ok(Wif::new(data, compression))
}

/// Recover the raw 32-byte private key, without the compression marker
pub fn recover_privkey(wif: &str) -> Result<Vec<u8>, WifError> {
    decode_wif(wif).map(|w| w.key)
}

/// Recover a raw private key of `key_len` bytes
pub fn recover_privkey_with_len(wif: &str, key_len: usize) -> Result<Vec<u8>, WifError> {
    decode_wif_with_len(wif, key_len).map(|w| w.key)
}
