use shared_types::U256;
use tessera_ledger::LedgerError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AirdropError {
    /// No recipients supplied.
    #[error("empty recipient batch")]
    EmptyBatch,

    /// `amount * recipients` exceeds the 256-bit width.
    #[error("arithmetic overflow")]
    Overflow,

    /// Source balance cannot fund the whole batch.
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: U256, available: U256 },

    /// A ledger precondition failed mid-batch.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}
