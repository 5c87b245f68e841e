use shared_types::U256;
use tessera_access::AccessError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Caller lacks the role the operation requires.
    #[error("unauthorized caller")]
    Unauthorized,

    /// Global pause is active.
    #[error("ledger is paused")]
    Paused,

    /// Caller's account is frozen.
    #[error("account is frozen")]
    FrozenAccount,

    /// The null account was supplied as a counterparty.
    #[error("null account supplied")]
    ZeroAccount,

    /// Sender balance below the requested amount.
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: U256, available: U256 },

    /// Spender allowance below the requested amount.
    #[error("insufficient allowance: required {required}, available {available}")]
    InsufficientAllowance { required: U256, available: U256 },

    /// Minting has been permanently finished.
    #[error("minting finished")]
    MintingFinished,

    /// A checked arithmetic step would exceed the 256-bit width.
    #[error("arithmetic overflow")]
    Overflow,

    /// The exchange engine binding is one-time.
    #[error("exchange engine already bound")]
    EngineAlreadyBound,

    /// Log index at or beyond the record count.
    #[error("log index out of range: {index} >= {count}")]
    IndexOutOfRange { index: usize, count: usize },
}

impl From<AccessError> for LedgerError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::MintingFinished => LedgerError::MintingFinished,
            AccessError::Unauthorized | AccessError::LastOwner => LedgerError::Unauthorized,
        }
    }
}
