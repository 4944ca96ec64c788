//! Payment domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserId;
use crate::error::DomainError;

/// Repository-assigned identifier for a stored Payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random PaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A payment made on behalf of a user.
///
/// `payment_id` stays `None` until a repository stores the payment; `user_id`
/// is a plain reference to the paying user and carries no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: Option<PaymentId>,
    pub user_id: UserId,
    pub amount: Decimal,
    pub message: String,
}

impl Payment {
    /// Creates an unsaved payment.
    ///
    /// # Validation
    /// - Amount must be strictly positive
    pub fn new(
        user_id: impl Into<UserId>,
        amount: Decimal,
        message: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::NonPositiveAmount(amount));
        }

        Ok(Self {
            payment_id: None,
            user_id: user_id.into(),
            amount,
            message: message.into(),
        })
    }

    /// Whether a repository has assigned this payment an identifier.
    pub fn is_saved(&self) -> bool {
        self.payment_id.is_some()
    }
}
