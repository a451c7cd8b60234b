//! Encoding module - Base58Check framing, addresses and WIF keys

mod address;
mod base58check;
mod wif;

pub use address::*;
pub use base58check::*;
pub use wif::*;
