//! # Secure Secret Type
//!
//! Wrapper for the initiator-held secret that zeroizes memory on drop.
//!
//! ## Security
//!
//! Until it is deliberately revealed by a claim, the secret is the only
//! thing standing between the escrowed funds and the counterparty. This
//! wrapper ensures the bytes are zeroed when dropped, preventing:
//!
//! - Memory dumps from revealing secrets
//! - Cold boot attacks
//! - Core dump exposure
//!
//! Once a claim reveals the secret it is permanently public, and the plain
//! `Secret` array stored on the agreement is the right representation.

use serde::{Deserialize, Serialize};
use shared_types::Secret;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secure secret that zeroizes on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecureSecret {
    /// The secret bytes.
    inner: Secret,
}

impl SecureSecret {
    /// Create a new secure secret from bytes.
    pub fn new(bytes: Secret) -> Self {
        Self { inner: bytes }
    }

    /// Create from a slice (copies into fixed array).
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != 32 {
            return None;
        }
        let mut inner = [0u8; 32];
        inner.copy_from_slice(slice);
        Some(Self { inner })
    }

    /// Get the secret bytes (use carefully!).
    ///
    /// # Security
    ///
    /// Avoid keeping references to the returned slice.
    /// Use immediately and let go.
    pub fn as_bytes(&self) -> &Secret {
        &self.inner
    }

    /// Expose as array, e.g. to submit a claim.
    pub fn expose(&self) -> Secret {
        self.inner
    }
}

impl std::fmt::Debug for SecureSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the actual secret
        f.write_str("SecureSecret(***)")
    }
}

// Serialization that doesn't expose raw bytes in logs
impl Serialize for SecureSecret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&hex::encode(self.inner))
    }
}

impl<'de> Deserialize<'de> for SecureSecret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        Self::from_slice(&bytes).ok_or_else(|| serde::de::Error::custom("invalid secret length"))
    }
}
