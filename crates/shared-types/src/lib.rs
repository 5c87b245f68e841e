//! # Shared Types Crate
//!
//! Domain primitives and notification types shared by every ledger component.
//!
//! ## Clusters
//!
//! - **Identity & Amounts**: `AccountId`, `NULL_ACCOUNT`, `U256`
//! - **Notifications**: `Event`, the `EventSink` port, and its in-memory adapters
//!
//! Components never duplicate these definitions locally; the access-control,
//! registry, ledger, and exchange crates all depend on this crate.

pub mod entities;
pub mod events;

pub use entities::*;
pub use events::*;
