//! # Primitive Entities
//!
//! Fixed-width primitives shared by the escrow core and the event bus.

/// 32-byte SHA-256 digest.
pub type Hash = [u8; 32];

/// 20-byte principal address (party or token contract).
pub type Address = [u8; 20];

/// 32-byte hashlock preimage.
pub type Secret = [u8; 32];

/// Fungible token amount.
pub type Amount = u64;

/// Unix timestamp in seconds.
pub type Timestamp = u64;

/// Render the first four bytes of a digest as hex, for log lines.
#[must_use]
pub fn short_hex(hash: &Hash) -> String {
    hex::encode(&hash[..4])
}

/// Render a full digest as hex.
#[must_use]
pub fn full_hex(hash: &Hash) -> String {
    hex::encode(hash)
}
