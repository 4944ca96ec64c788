//! Error types for the payment service.

use rust_decimal::Decimal;

use crate::domain::{PaymentId, UserId};

/// Domain-level errors (business rule and argument violations).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Amount is required")]
    MissingAmount,

    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("Payment id is required")]
    MissingPaymentId,

    #[error("User id is required")]
    MissingUserId,

    #[error("User is required")]
    MissingUser,

    #[error("User {0} is not active")]
    InactiveUser(UserId),

    #[error("Message is required")]
    MissingMessage,

    #[error("Payment is required")]
    MissingPayment,
}

/// Repository-level errors (data access failures).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Payment {0} already exists")]
    DuplicatePayment(PaymentId),

    #[error("{0} not found")]
    NotFound(String),
}

/// The two failure kinds callers of the payment core distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input was malformed or broke a business rule; retrying unchanged fails again.
    InvalidArgument,
    /// A referenced user or payment does not exist.
    NotFound,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::NotFound => "not_found",
        }
    }
}

/// Application-level errors returned by the payment service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            AppError::NotFound(_) => ErrorKind::NotFound,
        }
    }

    /// The human-readable detail without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            AppError::InvalidArgument(msg) | AppError::NotFound(msg) => msg,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::InvalidArgument(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(e) => e.into(),
            RepoError::DuplicatePayment(_) => AppError::InvalidArgument(err.to_string()),
            RepoError::NotFound(what) => AppError::NotFound(what),
        }
    }
}
