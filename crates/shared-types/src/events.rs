//! # Notification Types
//!
//! Every successful state-changing operation emits one or more `Event`s
//! describing the mutation. Events are delivered through the injected
//! `EventSink` capability so components stay testable with a recording sink
//! and deployments can route notifications wherever they need.
//!
//! ## Ordering Guarantees
//!
//! - `mint` emits `Transfer` (from the null account) **then** `Mint`.
//! - `burn`/`burn_from` emit `Burn` **then** `Transfer` (to the null account).
//!
//! Consumers relying on event order depend on these two rules only.

use crate::entities::{AccountId, U256};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// A notification describing one committed mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Balance moved between two accounts. Mint and burn use the null
    /// account as the synthetic counterparty.
    Transfer {
        from: AccountId,
        to: AccountId,
        amount: U256,
    },
    /// Allowance set to a new value (covers approve, increase, decrease).
    /// `amount` is the resulting allowance, not the delta.
    Approval {
        owner: AccountId,
        spender: AccountId,
        amount: U256,
    },
    /// Supply expanded into `to`.
    Mint { to: AccountId, amount: U256 },
    /// Minting permanently finished.
    MintFinished,
    /// Supply contracted out of `burner`'s balance.
    Burn { burner: AccountId, amount: U256 },
    /// Global pause engaged.
    Paused,
    /// Global pause released.
    Unpaused,
    /// Per-account freeze toggled.
    FrozenFunds { target: AccountId, frozen: bool },
    /// Verification entry created for a previously unknown account.
    CustomerAdded { customer: AccountId, rank: u8 },
    /// Verification entry upgraded to a higher (or equal) rank.
    CustomerUpdated { customer: AccountId, rank: u8 },
    /// Verification entry removed; `rank` carries the deleted level for audit.
    CustomerDeleted { customer: AccountId, rank: u8 },
}

/// Outbound notification port. Implementations must be cheap and infallible;
/// publishing happens after the owning component has already committed.
pub trait EventSink: Send + Sync {
    fn publish(&self, event: Event);
}

/// Sink that drops every event. Default wiring for deployments that do not
/// observe notifications.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn publish(&self, _event: Event) {}
}

/// Sink that records every event in order. Used by tests and audit tooling.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<Event>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events published so far, in publish order.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    /// The most recently published event, if any.
    pub fn last(&self) -> Option<Event> {
        self.events.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventSink for MemorySink {
    fn publish(&self, event: Event) {
        self.events.lock().push(event);
    }
}
