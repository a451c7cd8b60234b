//! Wallet module - key pairs and boundary parsing of public keys

mod wallet;

pub use wallet::*;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::crypto::KeyError;

/// Parse a public key given as hex or base64 text into raw bytes.
///
/// Hex is tried first; base64 is the fallback.
pub fn parse_public_key(text: &str) -> Result<Vec<u8>, KeyError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(KeyError::InvalidPublicKeyEncoding("empty input".to_string()));
    }

    if let Ok(bytes) = hex::decode(text) {
        return Ok(bytes);
    }

    STANDARD
        .decode(text)
        .map_err(|e| KeyError::InvalidPublicKeyEncoding(e.to_string()))
}
