//! Validation port.

use rust_decimal::Decimal;

use crate::domain::{PaymentId, User, UserId};
use crate::error::DomainError;

/// Pure argument and business-rule checks.
///
/// No check mutates anything; callers compose them in the order their
/// operation needs.
#[cfg_attr(feature = "mocks", mockall::automock)]
pub trait ValidationService: Send + Sync + 'static {
    /// Fails if `amount` is unset or not strictly positive.
    fn validate_amount(&self, amount: Option<Decimal>) -> Result<(), DomainError>;

    fn validate_payment_id(&self, id: Option<PaymentId>) -> Result<(), DomainError>;

    fn validate_user_id(&self, id: Option<UserId>) -> Result<(), DomainError>;

    /// Fails if `user` is unset or not active.
    fn validate_user<'a>(&self, user: Option<&'a User>) -> Result<(), DomainError>;

    fn validate_message<'a>(&self, message: Option<&'a str>) -> Result<(), DomainError>;
}
