//! # Escrow Core
//!
//! Hash time-locked escrow agreements (HTLC) for trustless atomic swaps.
//!
//! Two counterparties exchange fungible tokens, potentially on two
//! independent ledgers, without a trusted intermediary: either both
//! transfers complete or both are reversible.
//!
//! ## How a swap works
//!
//! | Step | Action |
//! |------|--------|
//! | Lockup | Initiator escrows tokens behind `sha256(secret)` and a deadline |
//! | Claim | Counterparty reveals the secret, receives the tokens |
//! | Refund | After the deadline, the initiator recovers unclaimed tokens |
//! | Reveal | A successful claim publishes the secret for the mirror leg |
//!
//! ## Module Structure
//!
//! ```text
//! escrow-core/
//! ├── domain/          # Agreement, status machine, errors, invariants
//! ├── algorithms/      # Id derivation, hashlock, swap deadline planning
//! ├── ports/           # EscrowApi, TokenLedger, LedgerClock
//! ├── adapters/        # In-memory token ledger, manual/system clocks
//! └── service.rs       # EscrowService: the agreement state machine
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{InMemoryTokenLedger, ManualClock, SystemClock};
pub use algorithms::{
    create_hash_lock, derive_agreement_id, generate_random_secret, plan_swap_deadlines,
    secret_from_seed, validate_swap_deadlines, verify_secret,
};
pub use domain::{
    invariant_authorized_claimer, invariant_authorized_refunder, invariant_deadline_ordering,
    invariant_secret_matches, Agreement, AgreementStatus, EscrowError, ProposalTerms,
    SecureSecret, SwapConfig,
};
pub use ports::{EscrowApi, FailingLedger, LedgerClock, TokenLedger, TokenLedgerError};
pub use service::EscrowService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
