//! # Domain Invariants
//!
//! Business rules for escrow agreements and two-leg swaps.

use super::entities::Agreement;
use super::errors::EscrowError;
use shared_types::{Address, Hash, Secret, Timestamp};

/// Invariant: deadline ordering between the two legs of a swap.
///
/// The initiator leg MUST outlive the responder leg by the margin, so the
/// responder has time to claim with the revealed secret before the
/// initiator's refund window opens. The core never checks this itself; it
/// is an obligation of whoever coordinates the two ledgers.
pub fn invariant_deadline_ordering(
    initiator_deadline: Timestamp,
    responder_deadline: Timestamp,
    min_margin_secs: u64,
) -> Result<(), EscrowError> {
    if initiator_deadline < responder_deadline + min_margin_secs {
        return Err(EscrowError::DeadlineOrderingViolation {
            initiator_deadline,
            responder_deadline,
            required_margin: min_margin_secs,
        });
    }
    Ok(())
}

/// Invariant: the supplied secret hashes to the agreement's commitment.
pub fn invariant_secret_matches(secret: &Secret, secret_hash: &Hash) -> bool {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(secret);
    let result = hasher.finalize();
    result.as_slice() == secret_hash
}

/// Invariant: only the designated counterparty can claim.
pub fn invariant_authorized_claimer(agreement: &Agreement, claimer: &Address) -> bool {
    agreement.counterparty == *claimer
}

/// Invariant: only the initiator can refund.
pub fn invariant_authorized_refunder(agreement: &Agreement, refunder: &Address) -> bool {
    agreement.initiator == *refunder
}
