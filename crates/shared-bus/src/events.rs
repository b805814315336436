//! # Escrow Events
//!
//! Defines the event schema emitted by the escrow core. Watchers treat this
//! as the wire contract: a `Claim` event is the only place (besides the read
//! accessor) where a revealed secret becomes visible off-chain.

use serde::{Deserialize, Serialize};
use shared_types::{short_hex, Address, Amount, Hash, Secret, Timestamp};

/// All events that flow through the escrow event bus.
///
/// Exactly one event is published per successful state-changing operation,
/// after the commit and the token transfer have both succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscrowEvent {
    /// A new agreement was created and its funds pulled into escrow.
    ///
    /// Carries everything a counterparty needs to create the mirror
    /// agreement on another ledger. The secret itself is never part of
    /// this event, only its hash.
    Lockup {
        /// Derived agreement identifier.
        id: Hash,
        /// Party that locked the funds and may later refund.
        initiator: Address,
        /// Party that may claim with the secret.
        counterparty: Address,
        /// SHA-256 commitment to the secret.
        secret_hash: Hash,
        /// Escrowed token.
        token: Address,
        /// Escrowed amount.
        amount: Amount,
        /// Timestamp after which refund is permitted.
        deadline: Timestamp,
    },

    /// An agreement was claimed; the secret is now public.
    Claim {
        /// Agreement identifier.
        id: Hash,
        /// The plaintext preimage supplied by the claimant.
        secret: Secret,
    },

    /// An agreement was refunded to its initiator after the deadline.
    Refund {
        /// Agreement identifier.
        id: Hash,
    },
}

impl EscrowEvent {
    /// Get the topic this event belongs to.
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::Lockup { .. } => EventTopic::Lockup,
            Self::Claim { .. } => EventTopic::Claim,
            Self::Refund { .. } => EventTopic::Refund,
        }
    }

    /// Get the agreement this event refers to.
    #[must_use]
    pub fn agreement_id(&self) -> &Hash {
        match self {
            Self::Lockup { id, .. } | Self::Claim { id, .. } | Self::Refund { id } => id,
        }
    }

    /// Short identifier for log lines.
    #[must_use]
    pub fn short_id(&self) -> String {
        short_hex(self.agreement_id())
    }
}

/// Topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventTopic {
    /// Agreement creation events.
    Lockup,
    /// Claim events (secret reveals).
    Claim,
    /// Refund events.
    Refund,
    /// All events (no filtering).
    All,
}

/// Filter for event subscriptions.
///
/// A relayer watching for a specific swap subscribes by agreement id; a
/// generic indexer subscribes by topic or to everything.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Agreement ids to include. Empty means all agreements.
    pub agreement_ids: Vec<Hash>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            agreement_ids: Vec::new(),
        }
    }

    /// Create a filter for events about specific agreements.
    #[must_use]
    pub fn agreements(agreement_ids: Vec<Hash>) -> Self {
        Self {
            topics: Vec::new(),
            agreement_ids,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &EscrowEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let id_match =
            self.agreement_ids.is_empty() || self.agreement_ids.contains(event.agreement_id());

        topic_match && id_match
    }
}
