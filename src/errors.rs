use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Failures reported by the backing household/ledger store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Error type for active-household resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("household data access failed: {0}")]
    DataAccess(#[from] StoreError),
    /// The default-household rollback itself failed, leaving household
    /// `household` orphaned in the backend.
    #[error("household {household} orphaned: membership insert failed ({cause}), rollback failed ({rollback})")]
    Compensation {
        household: Uuid,
        cause: StoreError,
        rollback: StoreError,
    },
}

/// Rejections of malformed caller input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount must not be negative: {0}")]
    NegativeAmount(Decimal),
    #[error("description exceeds 500 characters: {0}")]
    DescriptionTooLong(usize),
    #[error("invalid month key: {0}")]
    InvalidMonth(String),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("unparsable amount: {0}")]
    UnparsableAmount(String),
}

/// Errors surfaced by household membership operations.
#[derive(Debug, Error)]
pub enum MembershipError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
