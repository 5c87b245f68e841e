use tessera_access::AccessError;
use tessera_ledger::LedgerError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExchangeError {
    /// Caller lacks the role the operation requires.
    #[error("unauthorized caller")]
    Unauthorized,

    /// Global pause is active.
    #[error("exchange is paused")]
    Paused,

    /// Caller's account is frozen.
    #[error("account is frozen")]
    FrozenAccount,

    /// Purchaser has no verification entry.
    #[error("purchaser is not verified")]
    NotVerified,

    /// Payment too small to buy a single unit at the current price.
    #[error("payment buys zero units")]
    ZeroPurchase,

    /// Zero-amount sell.
    #[error("sell amount below minimum")]
    BelowMinimum,

    /// Withdrawal requested before a treasury wallet was configured.
    #[error("treasury wallet not set")]
    WalletNotSet,

    /// Reserve cannot cover the requested payout.
    #[error("insufficient reserve")]
    InsufficientReserve,

    /// Engine's holding account is not bound to the ledger.
    #[error("exchange engine not bound to ledger")]
    EngineNotBound,

    /// A checked arithmetic step would exceed the 256-bit width.
    #[error("arithmetic overflow")]
    Overflow,

    /// A ledger precondition failed inside the trade.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

impl From<AccessError> for ExchangeError {
    fn from(_: AccessError) -> Self {
        ExchangeError::Unauthorized
    }
}
