//! # Inbound Ports
//!
//! API trait defining what the escrow core can do. The caller's identity is
//! an explicit authenticated-principal parameter on every state-changing
//! call, never ambient context.

use crate::domain::{Agreement, EscrowError};
use async_trait::async_trait;
use shared_types::{Address, Amount, Hash, Secret, Timestamp};

/// Escrow API - inbound port.
#[async_trait]
pub trait EscrowApi: Send + Sync {
    /// Create a proposal: escrow `amount` of `token` from the caller (the
    /// initiator) behind `secret_hash` until `deadline`.
    ///
    /// Returns the derived agreement id.
    async fn create_proposal(
        &self,
        caller: Address,
        counterparty: Address,
        secret_hash: Hash,
        deadline: Timestamp,
        token: Address,
        amount: Amount,
    ) -> Result<Hash, EscrowError>;

    /// Claim an agreement's escrow by revealing the secret. The caller must
    /// be the agreement's counterparty. Valid at any time before refund.
    async fn withdraw(&self, caller: Address, id: Hash, secret: Secret)
        -> Result<(), EscrowError>;

    /// Return an agreement's escrow to its initiator after the deadline.
    /// The caller must be the agreement's initiator.
    async fn refund(&self, caller: Address, id: Hash) -> Result<(), EscrowError>;

    /// Get the full agreement record, including `status` and, once claimed,
    /// `revealed_secret`. This is how an off-chain watcher discovers a
    /// revealed secret to drive the next leg of a swap.
    async fn get_agreement(&self, id: &Hash) -> Option<Agreement>;
}
