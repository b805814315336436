//! # Domain Value Objects
//!
//! Immutable value types for the agreement state machine.

use serde::{Deserialize, Serialize};

/// Agreement state machine.
///
/// `Locked` is the initial state; `Claimed` and `Refunded` are terminal and
/// mutually exclusive. The status field is the sole concurrency guard: a
/// call whose precondition on status no longer holds is rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgreementStatus {
    /// Funds escrowed, awaiting claim or refund.
    #[default]
    Locked,
    /// Secret revealed, funds transferred to the counterparty.
    Claimed,
    /// Past deadline, funds returned to the initiator.
    Refunded,
}

impl AgreementStatus {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: AgreementStatus) -> bool {
        matches!(
            (self, next),
            (Self::Locked, Self::Claimed) | (Self::Locked, Self::Refunded)
        )
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Claimed | Self::Refunded)
    }
}
