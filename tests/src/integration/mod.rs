//! Cross-crate integration scenarios.

mod cross_ledger;
