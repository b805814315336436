//! # Escrow Service
//!
//! Application service implementing the `EscrowApi` inbound port: proposal
//! creation, secret-gated claim, and deadline-gated refund over a single
//! agreement store.
//!
//! ## Atomicity
//!
//! Every state-changing call holds the store's write lock for its whole
//! validate-commit-transfer sequence, so calls execute in a single global
//! total order and each is all-or-nothing with respect to the others. The
//! terminal status is committed *before* the external token call; a token
//! implementation that re-enters can only observe already-terminal state.
//! A failed payout triggers an explicit compensating rollback to `Locked`,
//! leaving the store as if the call had been rejected outright.

use crate::algorithms::derive_agreement_id;
use crate::domain::{
    invariant_authorized_claimer, invariant_authorized_refunder, invariant_secret_matches,
    Agreement, AgreementStatus, EscrowError, ProposalTerms, ERR_CLAIMER_NOT_COUNTERPARTY,
    ERR_REFUNDER_NOT_INITIATOR,
};
use crate::ports::inbound::EscrowApi;
use crate::ports::outbound::{LedgerClock, TokenLedger};
use async_trait::async_trait;
use shared_bus::{EscrowEvent, EventPublisher};
use shared_types::{short_hex, Address, Amount, Hash, Secret, Timestamp};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Escrow service: owns the agreement store, pulls from and pays out via
/// the token ledger, and publishes lifecycle events after each commit.
pub struct EscrowService<L: TokenLedger, C: LedgerClock> {
    /// The agreement store: the sole mutable state of the core.
    agreements: RwLock<HashMap<Hash, Agreement>>,
    ledger: L,
    clock: C,
    bus: Arc<dyn EventPublisher>,
}

impl<L: TokenLedger, C: LedgerClock> EscrowService<L, C> {
    /// Create a new escrow service.
    pub fn new(ledger: L, clock: C, bus: Arc<dyn EventPublisher>) -> Self {
        Self {
            agreements: RwLock::new(HashMap::new()),
            ledger,
            clock,
            bus,
        }
    }

    /// Number of agreements ever created (records are never deleted).
    pub async fn agreement_count(&self) -> usize {
        self.agreements.read().await.len()
    }

    fn ensure_locked(agreement: &Agreement) -> Result<(), EscrowError> {
        match agreement.status {
            AgreementStatus::Locked => Ok(()),
            AgreementStatus::Claimed => Err(EscrowError::AlreadyClaimed),
            AgreementStatus::Refunded => Err(EscrowError::AlreadyRefunded),
        }
    }
}

#[async_trait]
impl<L: TokenLedger, C: LedgerClock> EscrowApi for EscrowService<L, C> {
    async fn create_proposal(
        &self,
        caller: Address,
        counterparty: Address,
        secret_hash: Hash,
        deadline: Timestamp,
        token: Address,
        amount: Amount,
    ) -> Result<Hash, EscrowError> {
        let now = self.clock.now();
        if deadline <= now {
            return Err(EscrowError::InvalidDeadline);
        }
        if amount == 0 {
            return Err(EscrowError::InvalidAmount);
        }

        let terms = ProposalTerms {
            initiator: caller,
            counterparty,
            secret_hash,
            deadline,
            token,
            amount,
        };
        let id = derive_agreement_id(&terms);

        let mut agreements = self.agreements.write().await;
        if agreements.contains_key(&id) {
            return Err(EscrowError::DuplicateAgreement(id));
        }

        // Pull funds before any record exists: a failed pull leaves no
        // partial state to clean up.
        self.ledger
            .transfer_from(token, caller, amount)
            .await
            .map_err(|e| EscrowError::TransferFailed(e.to_string()))?;

        agreements.insert(id, Agreement::new(id, terms, now));

        info!(
            "[escrow] Locked agreement {} ({} of token {})",
            short_hex(&id),
            amount,
            short_hex_addr(&token),
        );

        self.bus
            .publish(EscrowEvent::Lockup {
                id,
                initiator: caller,
                counterparty,
                secret_hash,
                token,
                amount,
                deadline,
            })
            .await;

        Ok(id)
    }

    async fn withdraw(
        &self,
        caller: Address,
        id: Hash,
        secret: Secret,
    ) -> Result<(), EscrowError> {
        let mut agreements = self.agreements.write().await;
        let agreement = agreements.get_mut(&id).ok_or(EscrowError::NotFound(id))?;

        if !invariant_authorized_claimer(agreement, &caller) {
            return Err(EscrowError::Unauthorized(ERR_CLAIMER_NOT_COUNTERPARTY));
        }
        Self::ensure_locked(agreement)?;
        if !invariant_secret_matches(&secret, &agreement.secret_hash) {
            return Err(EscrowError::SecretMismatch);
        }

        // Commit terminal state before the external call.
        agreement.mark_claimed(secret)?;

        if let Err(e) = self
            .ledger
            .transfer(agreement.token, agreement.counterparty, agreement.amount)
            .await
        {
            warn!(
                "[escrow] Claim payout failed for {}, rolling back: {e}",
                short_hex(&id)
            );
            agreement.rollback_to_locked();
            return Err(EscrowError::TransferFailed(e.to_string()));
        }

        info!("[escrow] Claimed agreement {}", short_hex(&id));

        self.bus.publish(EscrowEvent::Claim { id, secret }).await;

        Ok(())
    }

    async fn refund(&self, caller: Address, id: Hash) -> Result<(), EscrowError> {
        let now = self.clock.now();

        let mut agreements = self.agreements.write().await;
        let agreement = agreements.get_mut(&id).ok_or(EscrowError::NotFound(id))?;

        if !invariant_authorized_refunder(agreement, &caller) {
            return Err(EscrowError::Unauthorized(ERR_REFUNDER_NOT_INITIATOR));
        }
        Self::ensure_locked(agreement)?;
        if !agreement.is_deadline_reached(now) {
            return Err(EscrowError::DeadlineNotReached);
        }

        // Commit terminal state before the external call.
        agreement.mark_refunded()?;

        if let Err(e) = self
            .ledger
            .transfer(agreement.token, agreement.initiator, agreement.amount)
            .await
        {
            warn!(
                "[escrow] Refund payout failed for {}, rolling back: {e}",
                short_hex(&id)
            );
            agreement.rollback_to_locked();
            return Err(EscrowError::TransferFailed(e.to_string()));
        }

        info!("[escrow] Refunded agreement {}", short_hex(&id));

        self.bus.publish(EscrowEvent::Refund { id }).await;

        Ok(())
    }

    async fn get_agreement(&self, id: &Hash) -> Option<Agreement> {
        self.agreements.read().await.get(id).cloned()
    }
}

/// Render the first four bytes of an address as hex, for log lines.
fn short_hex_addr(addr: &Address) -> String {
    hex::encode(&addr[..4])
}
