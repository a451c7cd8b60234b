//! MaxCoin (MAX) Address Core Library
//!
//! Versioned, checksummed Base58Check encoding for addresses and
//! Wallet Import Format (WIF) private keys.
//!
//! Payloads are derived with SHA-256 and RIPEMD-160, checksums with Keccak-256.

pub mod crypto;
pub mod encoding;
pub mod wallet;

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Version byte prepended to address payloads (base58 'm')
    pub const ADDRESS_VERSION: u8 = 0x6E;

    /// Version byte prepended to WIF payloads
    pub const WIF_VERSION: u8 = 0x80;

    /// Number of Keccak-256 bytes appended as checksum
    pub const CHECKSUM_LEN: usize = 4;

    /// Trailing WIF byte signalling a compressed public key
    pub const COMPRESSION_MARKER: u8 = 0x01;

    /// Length of a secp256k1 private key
    pub const PRIVATE_KEY_LEN: usize = 32;

    /// Length of the RIPEMD-160 digest carried by an address
    pub const PUBKEY_HASH_LEN: usize = 20;

    /// Chain name (short form)
    pub const CHAIN_NAME: &str = "MAX";

    /// Full chain name
    pub const CHAIN_FULL_NAME: &str = "MaxCoin";

    /// First character of every well-formed address
    pub const ADDRESS_PREFIX: char = 'm';

    /// First character of an uncompressed 32-byte WIF key
    pub const WIF_UNCOMPRESSED_PREFIX: char = '5';

    /// First characters of a compressed 32-byte WIF key
    pub const WIF_COMPRESSED_PREFIXES: [char; 2] = ['K', 'L'];
}
