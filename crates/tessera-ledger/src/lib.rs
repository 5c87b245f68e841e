//! # tessera-ledger
//!
//! Account Ledger component for the Tessera Ledger.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: authoritative balances, allowances, and
//!   total supply for every account.
//! - Every mutating operation first passes the shared access-control gates
//!   (role, pause, freeze) and, on success, mirrors the balance movement
//!   into the append-only transaction log before notifying.
//!
//! ## Invariant
//!
//! `total_supply == Σ balances` holds after every operation; mint and burn
//! are the only operations that change either side.
//!
//! ## Log Coupling
//!
//! The log is an injected [`ports::TransactionWriter`] capability, invoked
//! strictly post-commit, so ledger and log are testable in isolation. The
//! production adapter is [`adapters::InMemoryTransactionLog`], which also
//! serves the audit reads (`get`, `count`).

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
