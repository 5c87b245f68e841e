//! # Core Domain Primitives
//!
//! Identifier and amount types used across all components.
//!
//! ## Type Decisions
//!
//! - `AccountId` is an opaque 20-byte identifier. The ledger never inspects
//!   it beyond equality and the null check; authentication of callers happens
//!   in the external execution environment.
//! - Amounts use `U256` so balances, allowances, and supply share one
//!   practically unbounded unsigned width with checked arithmetic.

// Re-export U256 from primitive-types for use across all components
pub use primitive_types::U256;

/// A 20-byte opaque account identifier.
pub type AccountId = [u8; 20];

/// The null account. Used as the synthetic counterparty for mint and burn
/// transfers and rejected as a recipient everywhere else.
pub const NULL_ACCOUNT: AccountId = [0u8; 20];

/// True when `id` is the null account.
pub fn is_null(id: &AccountId) -> bool {
    *id == NULL_ACCOUNT
}
