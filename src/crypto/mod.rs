//! Cryptography module - hash primitives and the secp256k1 key source

mod hash;
mod keys;

pub use hash::*;
pub use keys::*;
