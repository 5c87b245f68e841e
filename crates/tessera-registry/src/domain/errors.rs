use tessera_access::AccessError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Caller is neither an owner nor a bot.
    #[error("unauthorized caller")]
    Unauthorized,

    /// The null account cannot carry a verification level.
    #[error("null account supplied")]
    ZeroAccount,

    /// The all-zero credential is the absence sentinel and cannot be stored.
    #[error("sentinel verification level supplied")]
    InvalidLevel,

    /// Batch is empty or exceeds the per-call ceiling.
    #[error("invalid batch: {len} entries (allowed 1..={max})")]
    InvalidBatch { len: usize, max: usize },

    /// No entry exists for the account being removed.
    #[error("account has no verification entry")]
    NotFound,
}

impl From<AccessError> for RegistryError {
    fn from(_: AccessError) -> Self {
        // The registry only ever asks for OwnerOrBot; every access failure
        // surfaces as an authorization failure.
        RegistryError::Unauthorized
    }
}
