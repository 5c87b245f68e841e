//! # tessera-airdrop
//!
//! Batch distributor: pays the same amount to every recipient out of a
//! funded source account, or to none of them.
//!
//! ## Role in System
//!
//! A thin ledger client. It owns no balances of its own; it drives the
//! ledger's transfer path on behalf of the account it fronts, so every drop
//! is pause/freeze-gated, logged, and notified like any other transfer.

pub mod domain;

pub use domain::*;
