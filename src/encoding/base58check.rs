//! Base58Check framing
//!
//! `version || data || keccak256(version || data)[0..4]`, base-58 encoded
//! with the Bitcoin alphabet. Leading zero bytes map to leading '1's.

use thiserror::Error;

use crate::constants::CHECKSUM_LEN;
use crate::crypto::keccak256;

/// Base58Check decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base58CheckError {
    #[error("Malformed base58 encoding: {0}")]
    MalformedEncoding(String),
    #[error("Decoded payload too short: {len} bytes")]
    TooShort { len: usize },
    #[error("Checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: String, found: String },
    #[error("Version mismatch: expected 0x{expected:02x}, found 0x{found:02x}")]
    VersionMismatch { expected: u8, found: u8 },
}

impl From<bs58::decode::Error> for Base58CheckError {
    fn from(e: bs58::decode::Error) -> Self {
        Base58CheckError::MalformedEncoding(e.to_string())
    }
}

/// First 4 bytes of Keccak-256 over the versioned payload
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = keccak256(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash.0[..CHECKSUM_LEN]);
    out
}

/// Append the checksum to a versioned payload and base-58 encode it
pub fn encode_checked(payload: &[u8]) -> String {
    let mut with_checksum = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    with_checksum.extend_from_slice(payload);
    with_checksum.extend_from_slice(&checksum(payload));

    bs58::encode(&with_checksum).into_string()
}

/// Decode a Base58Check string and return the data with the version stripped.
///
/// The checksum is verified before the version, so a well-formed string
/// from another context reports `VersionMismatch` rather than corruption.
pub fn decode_checked(text: &str, expected_version: u8) -> Result<Vec<u8>, Base58CheckError> {
    let decoded = bs58::decode(text).into_vec()?;

    if decoded.len() < 1 + CHECKSUM_LEN {
        return Err(Base58CheckError::TooShort { len: decoded.len() });
    }

    let (body, found) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    let expected = checksum(body);
    if found != &expected[..] {
        return Err(Base58CheckError::ChecksumMismatch {
            expected: hex::encode(expected),
            found: hex::encode(found),
        });
    }

    let version = body[0];
    if version != expected_version {
        return Err(Base58CheckError::VersionMismatch {
            expected: expected_version,
            found: version,
        });
    }

    Ok(body[1..].to_vec())
}
