//! # Swap Deadline Planning
//!
//! Helpers for coordinating the two legs of a cross-ledger swap. These run
//! off-chain, before either proposal is created; the escrow operations
//! themselves never consult them.

use crate::domain::{invariant_deadline_ordering, EscrowError, SwapConfig};
use shared_types::Timestamp;

/// Validate deadline ordering for a two-leg swap.
///
/// The responder leg must expire first, leaving the responder enough time
/// to claim with the revealed secret before the initiator can refund.
pub fn validate_swap_deadlines(
    initiator_deadline: Timestamp,
    responder_deadline: Timestamp,
    config: &SwapConfig,
) -> Result<(), EscrowError> {
    invariant_deadline_ordering(
        initiator_deadline,
        responder_deadline,
        config.min_deadline_margin_secs,
    )
}

/// Calculate recommended deadlines for both legs of a swap.
///
/// Returns `(initiator_deadline, responder_deadline)` with the configured
/// margin between them.
pub fn plan_swap_deadlines(now: Timestamp, config: &SwapConfig) -> (Timestamp, Timestamp) {
    let responder_deadline = now + config.default_responder_timeout_secs;
    let initiator_deadline = now
        + config
            .default_initiator_timeout_secs
            .max(config.default_responder_timeout_secs + config.min_deadline_margin_secs);

    (initiator_deadline, responder_deadline)
}
