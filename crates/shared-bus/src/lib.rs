//! # Shared Bus - Escrow Event Log
//!
//! Append-only notifications consumed by off-chain watchers coordinating
//! multi-ledger swaps. The escrow core publishes here after each successful
//! state commit; relayers subscribe and react (e.g. read a revealed secret
//! from a `Claim` event and trigger the matching claim on another ledger).
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │ Escrow Core  │                    │   Watcher    │
//! │              │    publish()       │  (relayer)   │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```
//!
//! ## Guarantees
//!
//! - Events are recorded in an ordered history in publish order, which the
//!   core makes equal to commit order.
//! - Live delivery uses a broadcast channel; slow subscribers may lag and
//!   drop live events, but the history keeps the full record.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EscrowEvent, EventFilter, EventTopic};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, EventSubscriber, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before backpressure.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
