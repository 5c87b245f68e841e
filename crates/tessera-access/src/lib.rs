//! # tessera-access
//!
//! Access Control component for the Tessera Ledger.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: one `AccessControl` instance owns every
//!   role set and global flag; the ledger, registry, and exchange crates
//!   hold an `Arc` to the same instance rather than duplicating state.
//! - **Shared Authorization Predicate**: every gated operation in the
//!   workspace funnels through [`AccessControl::require`] with an explicit
//!   [`Permission`], so no call site hand-rolls its own role check.
//!
//! ## Owned State
//!
//! Owner set, bot set, global pause flag, frozen-account set, the one-way
//! minting-finished flag, and the exchange pricing/treasury fields
//! (buy/sell price, treasury wallet).

pub mod domain;

pub use domain::*;
