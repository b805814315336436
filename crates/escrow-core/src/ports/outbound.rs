//! # Outbound Ports
//!
//! Traits for the external collaborators the core calls: the token ledger
//! and the ledger clock. Any non-success from the ledger surfaces as
//! `TransferFailed` in the enclosing operation and aborts it.

use async_trait::async_trait;
use shared_types::{Address, Amount, Timestamp};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Errors a token ledger can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenLedgerError {
    /// Holder balance too low for the transfer.
    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance {
        /// Balance currently held.
        have: Amount,
        /// Amount the transfer requires.
        need: Amount,
    },

    /// Escrow allowance too low for the pull.
    #[error("insufficient allowance: approved {approved}, need {need}")]
    InsufficientAllowance {
        /// Amount approved to the escrow.
        approved: Amount,
        /// Amount the pull requires.
        need: Amount,
    },

    /// The ledger rejected the transfer for its own reasons.
    #[error("transfer rejected: {0}")]
    Rejected(String),
}

/// Token ledger - outbound port.
///
/// Mirrors the two transfer shapes of an allowance-based fungible token:
/// an allowance-gated pull into escrow at proposal time, and an
/// escrow-initiated push at claim or refund time.
#[async_trait]
pub trait TokenLedger: Send + Sync {
    /// Pull `amount` of `token` from `owner` into escrow. Requires the
    /// owner to have pre-approved at least `amount` to the escrow.
    async fn transfer_from(
        &self,
        token: Address,
        owner: Address,
        amount: Amount,
    ) -> Result<(), TokenLedgerError>;

    /// Push `amount` of `token` from escrow to `to`.
    async fn transfer(
        &self,
        token: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenLedgerError>;
}

#[async_trait]
impl<T: TokenLedger + ?Sized> TokenLedger for Arc<T> {
    async fn transfer_from(
        &self,
        token: Address,
        owner: Address,
        amount: Amount,
    ) -> Result<(), TokenLedgerError> {
        (**self).transfer_from(token, owner, amount).await
    }

    async fn transfer(
        &self,
        token: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenLedgerError> {
        (**self).transfer(token, to, amount).await
    }
}

/// Ledger clock - outbound port.
///
/// The block-timestamp analog: monotonic, coarse-grained, read at the start
/// of each state-changing call. Nothing here assumes sub-second precision.
pub trait LedgerClock: Send + Sync {
    /// Current ledger time, unix seconds.
    fn now(&self) -> Timestamp;
}

impl<T: LedgerClock + ?Sized> LedgerClock for Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Ledger wrapper that can be told to fail pulls or payouts.
///
/// Used to exercise the abort and rollback paths without a misbehaving
/// token implementation.
pub struct FailingLedger<L> {
    inner: L,
    fail_pulls: AtomicBool,
    fail_payouts: AtomicBool,
}

impl<L: TokenLedger> FailingLedger<L> {
    /// Wrap a ledger; both failure modes start disabled.
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            fail_pulls: AtomicBool::new(false),
            fail_payouts: AtomicBool::new(false),
        }
    }

    /// Access the wrapped ledger (e.g. to mint or approve in tests).
    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// Make subsequent `transfer_from` calls fail.
    pub fn set_fail_pulls(&self, fail: bool) {
        self.fail_pulls.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent `transfer` calls fail.
    pub fn set_fail_payouts(&self, fail: bool) {
        self.fail_payouts.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl<L: TokenLedger> TokenLedger for FailingLedger<L> {
    async fn transfer_from(
        &self,
        token: Address,
        owner: Address,
        amount: Amount,
    ) -> Result<(), TokenLedgerError> {
        if self.fail_pulls.load(Ordering::SeqCst) {
            return Err(TokenLedgerError::Rejected("pull disabled".to_string()));
        }
        self.inner.transfer_from(token, owner, amount).await
    }

    async fn transfer(
        &self,
        token: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenLedgerError> {
        if self.fail_payouts.load(Ordering::SeqCst) {
            return Err(TokenLedgerError::Rejected("payout disabled".to_string()));
        }
        self.inner.transfer(token, to, amount).await
    }
}
