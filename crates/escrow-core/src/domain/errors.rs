//! # Domain Errors
//!
//! Error types for escrow operations. Every operation is all-or-nothing: a
//! rejected call leaves the agreement store and escrow balances unchanged.
//! None of these are retried internally; callers decide whether to resubmit.

use shared_types::{short_hex, Hash, Timestamp};
use thiserror::Error;

/// Escrow error types.
#[derive(Debug, Error)]
pub enum EscrowError {
    /// Proposal deadline is not strictly in the future.
    #[error("deadline time must be in the future")]
    InvalidDeadline,

    /// Proposal amount is zero.
    #[error("token amount must be greater than zero")]
    InvalidAmount,

    /// An agreement with the same derived id already exists.
    #[error("duplicate agreement already exists: {}", short_hex(.0))]
    DuplicateAgreement(Hash),

    /// No agreement with this id.
    #[error("agreement not found: {}", short_hex(.0))]
    NotFound(Hash),

    /// Caller is not the party this operation is reserved for.
    #[error("{0}")]
    Unauthorized(&'static str),

    /// Agreement was already claimed.
    #[error("Tokens already claimed")]
    AlreadyClaimed,

    /// Agreement was already refunded.
    #[error("Tokens already refunded")]
    AlreadyRefunded,

    /// Supplied secret does not hash to the agreement's secret hash.
    #[error("secretlock hash does not match")]
    SecretMismatch,

    /// Refund attempted before the agreement deadline.
    #[error("Deadline not yet reached")]
    DeadlineNotReached,

    /// The token ledger rejected or failed a transfer.
    #[error("token transfer failed: {0}")]
    TransferFailed(String),

    /// Responder deadline does not precede the initiator deadline by the
    /// required margin. Only produced by the swap-planning helpers; the
    /// core operations never check this (caller obligation).
    #[error("deadline ordering violated: initiator={initiator_deadline}, responder={responder_deadline}, required margin={required_margin}s")]
    DeadlineOrderingViolation {
        /// Initiator-side deadline (the later leg).
        initiator_deadline: Timestamp,
        /// Responder-side deadline (the earlier leg).
        responder_deadline: Timestamp,
        /// Required margin in seconds.
        required_margin: u64,
    },
}

/// Message used when a non-counterparty attempts to claim.
pub const ERR_CLAIMER_NOT_COUNTERPARTY: &str = "Claimer is not counterparty";

/// Message used when a non-initiator attempts to refund.
pub const ERR_REFUNDER_NOT_INITIATOR: &str = "Refunder is not initiator";
