use pocketbook_domain::{AccountId, TransactionId};
use thiserror::Error;

/// Input rejected before it reaches the ledger collections.
///
/// Messages are user-facing and shown verbatim by the shell.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Enter a valid amount")]
    InvalidAmount,
    #[error("Enter a description")]
    EmptyDescription,
    #[error("Description must be at most {max} characters")]
    DescriptionTooLong { max: usize },
    #[error("Select different accounts")]
    SameAccountTransfer,
    #[error("A transfer needs a destination account")]
    MissingDestination,
    #[error("Only transfers can have a destination account")]
    UnexpectedDestination,
    #[error("Unknown account `{0}`")]
    UnknownAccount(AccountId),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Account already exists: {0}")]
    DuplicateAccount(AccountId),
    #[error("Transaction already exists: {0}")]
    DuplicateTransaction(TransactionId),
}
