//! # Domain Entities
//!
//! The escrow agreement record and its creation parameters.

use super::errors::EscrowError;
use super::value_objects::AgreementStatus;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, Hash, Secret, Timestamp};

/// The six creation parameters an agreement id is derived from.
///
/// Full tuple equality is the duplicate-prevention key: changing any single
/// field (including the deadline) yields a fresh, independent agreement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProposalTerms {
    /// Party locking the funds; may later refund.
    pub initiator: Address,
    /// Party that may claim with the secret.
    pub counterparty: Address,
    /// SHA-256 commitment to the secret, public from creation.
    pub secret_hash: Hash,
    /// Absolute timestamp after which refund becomes permitted.
    pub deadline: Timestamp,
    /// Escrowed token.
    pub token: Address,
    /// Escrowed amount (must be positive).
    pub amount: Amount,
}

/// Hash time-locked escrow agreement: the unit of escrow.
///
/// Created `Locked`, mutated exactly once to `Claimed` or `Refunded`, never
/// deleted (retained for auditability and secret-reveal visibility).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Agreement {
    /// Deterministic identifier derived from the creation tuple.
    pub id: Hash,
    /// Party that locked the funds and may later refund.
    pub initiator: Address,
    /// Party that may claim with the secret.
    pub counterparty: Address,
    /// Hashlock: SHA-256 of the secret.
    pub secret_hash: Hash,
    /// Timestamp after which refund is allowed.
    pub deadline: Timestamp,
    /// Escrowed token.
    pub token: Address,
    /// Escrowed amount.
    pub amount: Amount,
    /// Current state.
    pub status: AgreementStatus,
    /// Plaintext secret, set at claim time and permanently public after.
    pub revealed_secret: Option<Secret>,
    /// Ledger time at creation.
    pub created_at: Timestamp,
}

impl Agreement {
    /// Create a new locked agreement.
    pub fn new(id: Hash, terms: ProposalTerms, created_at: Timestamp) -> Self {
        Self {
            id,
            initiator: terms.initiator,
            counterparty: terms.counterparty,
            secret_hash: terms.secret_hash,
            deadline: terms.deadline,
            token: terms.token,
            amount: terms.amount,
            status: AgreementStatus::Locked,
            revealed_secret: None,
            created_at,
        }
    }

    /// Check whether the refund window has opened.
    pub fn is_deadline_reached(&self, now: Timestamp) -> bool {
        now >= self.deadline
    }

    /// Commit the claim: terminal status plus the revealed secret.
    ///
    /// Only guards the status transition; authorization and secret checks
    /// belong to the service layer.
    pub fn mark_claimed(&mut self, secret: Secret) -> Result<(), EscrowError> {
        match self.status {
            AgreementStatus::Locked => {
                self.status = AgreementStatus::Claimed;
                self.revealed_secret = Some(secret);
                Ok(())
            }
            AgreementStatus::Claimed => Err(EscrowError::AlreadyClaimed),
            AgreementStatus::Refunded => Err(EscrowError::AlreadyRefunded),
        }
    }

    /// Commit the refund.
    pub fn mark_refunded(&mut self) -> Result<(), EscrowError> {
        match self.status {
            AgreementStatus::Locked => {
                self.status = AgreementStatus::Refunded;
                Ok(())
            }
            AgreementStatus::Claimed => Err(EscrowError::AlreadyClaimed),
            AgreementStatus::Refunded => Err(EscrowError::AlreadyRefunded),
        }
    }

    /// Undo a terminal commit whose payout transfer failed.
    ///
    /// The record returns to `Locked` with no revealed secret, as if the
    /// rejected call had never happened.
    pub(crate) fn rollback_to_locked(&mut self) {
        self.status = AgreementStatus::Locked;
        self.revealed_secret = None;
    }
}

/// Deadline-planning configuration for two-leg swaps.
///
/// The margin is a protocol-level requirement between the two legs of a
/// cross-ledger swap, not something the core enforces per agreement.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SwapConfig {
    /// Minimum margin by which the initiator leg must outlive the responder
    /// leg (1 hour).
    pub min_deadline_margin_secs: u64,
    /// Default initiator-leg lifetime in seconds (5 hours).
    pub default_initiator_timeout_secs: u64,
    /// Default responder-leg lifetime in seconds (3 hours).
    pub default_responder_timeout_secs: u64,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            min_deadline_margin_secs: 3600,         // 1 hour
            default_initiator_timeout_secs: 5 * 3600, // 5 hours
            default_responder_timeout_secs: 3 * 3600, // 3 hours
        }
    }
}
