//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits for the escrow core.

mod clock;
mod token_ledger;

pub use clock::{ManualClock, SystemClock};
pub use token_ledger::InMemoryTokenLedger;
