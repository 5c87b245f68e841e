use shared_types::{AccountId, U256};

/// Post-commit log-writer capability injected into the ledger.
///
/// `append` is invoked exactly once per balance-moving success (transfer,
/// transfer_from, and the synthetic mint/burn transfers), after the balance
/// mutation has committed. Implementations must be infallible: the ledger
/// never rolls back a committed mutation because of its audit mirror.
pub trait TransactionWriter: Send + Sync {
    fn append(&self, from: AccountId, to: AccountId, amount: U256);
}
