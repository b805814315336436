//! # Algorithms Module
//!
//! Pure functions: identifier derivation, hashlock operations, and swap
//! deadline planning.

pub mod agreement_id;
pub mod secret;
pub mod swap;

pub use agreement_id::derive_agreement_id;
pub use secret::{create_hash_lock, generate_random_secret, secret_from_seed, verify_secret};
pub use swap::{plan_swap_deadlines, validate_swap_deadlines};
