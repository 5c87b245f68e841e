//! # tessera-exchange
//!
//! Buy/sell exchange engine: trades ledger units against a base-currency
//! reserve held by the engine's own account.
//!
//! ## Role in System
//!
//! The engine is a ledger client with a privileged holding account. A buy
//! moves units from the holding account to the purchaser and grows the
//! reserve; a sell moves units back and pays out of the reserve. All role,
//! pause, and freeze decisions come from the shared access controller, and
//! purchaser eligibility from the verification registry.

pub mod domain;

pub use domain::*;
