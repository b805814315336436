//! # Agreement Identifier Derivation
//!
//! The id is a pure, deterministic function of the six creation parameters.
//! It doubles as the duplicate-prevention key: recomputing the same tuple
//! always yields the same id, and any single-field change yields a fresh
//! one. No sequence counter exists anywhere in the system.

use crate::domain::ProposalTerms;
use sha2::{Digest, Sha256};
use shared_types::Hash;

/// Derive the agreement id from the canonical tuple encoding.
///
/// Fields are fed to SHA-256 in declaration order; integers little-endian.
/// The encoding is unambiguous because every field is fixed-width.
pub fn derive_agreement_id(terms: &ProposalTerms) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(terms.initiator);
    hasher.update(terms.counterparty);
    hasher.update(terms.secret_hash);
    hasher.update(terms.deadline.to_le_bytes());
    hasher.update(terms.token);
    hasher.update(terms.amount.to_le_bytes());

    let result = hasher.finalize();
    let mut id = [0u8; 32];
    id.copy_from_slice(&result);
    id
}
