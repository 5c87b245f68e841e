//! # tessera-registry
//!
//! Verification Registry component for the Tessera Ledger.
//!
//! ## Role in System
//!
//! - Stores one hierarchical KYC level per account, written only by owners
//!   and bots through the shared access-control predicate.
//! - Writes are upgrade-only: a lower-ranked level never replaces a higher
//!   one, and the rejected downgrade is a defined no-op rather than an error.
//! - Consulted by the exchange engine to gate the purchase path in
//!   verification-required deployments.

pub mod domain;

pub use domain::*;
