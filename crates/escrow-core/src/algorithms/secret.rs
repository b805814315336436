//! # Secret Generation and Verification
//!
//! Hashlock operations. SHA-256 only; weak hash functions never enter the
//! claim path.

use crate::domain::SecureSecret;
use rand::RngCore;
use sha2::{Digest, Sha256};
use shared_types::{Hash, Secret};

/// Generate a cryptographically secure random secret.
///
/// The initiator keeps this private until claiming the counter-leg; the
/// zeroizing wrapper keeps it out of memory dumps until then.
pub fn generate_random_secret() -> SecureSecret {
    let mut secret = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut secret);
    SecureSecret::new(secret)
}

/// Derive a 32-byte secret from an arbitrary human-chosen seed.
///
/// Wallets let users pick a passphrase of any length; hashing it once
/// normalizes it to the fixed preimage width. The hashlock is then the
/// hash of *this* value, so the commitment is a double hash of the seed.
pub fn secret_from_seed(seed: &str) -> Secret {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    let result = hasher.finalize();
    let mut secret = [0u8; 32];
    secret.copy_from_slice(&result);
    secret
}

/// Create a hashlock from a secret using SHA-256.
pub fn create_hash_lock(secret: &Secret) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(secret);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Verify that a secret matches a hashlock.
pub fn verify_secret(secret: &Secret, secret_hash: &Hash) -> bool {
    let computed_hash = create_hash_lock(secret);
    computed_hash == *secret_hash
}
