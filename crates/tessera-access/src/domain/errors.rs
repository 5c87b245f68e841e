use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Caller does not hold the permission the operation requires.
    #[error("unauthorized caller")]
    Unauthorized,

    /// Minting has been permanently finished; the flag is one-way.
    #[error("minting finished")]
    MintingFinished,

    /// Removing this owner would leave the owner set empty.
    #[error("cannot remove the last owner")]
    LastOwner,
}
