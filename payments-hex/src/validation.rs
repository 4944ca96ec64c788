//! Basic input validation.

use rust_decimal::Decimal;

use payments_types::{DomainError, PaymentId, User, UserId, ValidationService};

/// Stateless validator implementing the payment business rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicValidationService;

impl BasicValidationService {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationService for BasicValidationService {
    fn validate_amount(&self, amount: Option<Decimal>) -> Result<(), DomainError> {
        match amount {
            None => Err(DomainError::MissingAmount),
            Some(amount) if amount <= Decimal::ZERO => Err(DomainError::NonPositiveAmount(amount)),
            Some(_) => Ok(()),
        }
    }

    fn validate_payment_id(&self, id: Option<PaymentId>) -> Result<(), DomainError> {
        id.map(|_| ()).ok_or(DomainError::MissingPaymentId)
    }

    fn validate_user_id(&self, id: Option<UserId>) -> Result<(), DomainError> {
        id.map(|_| ()).ok_or(DomainError::MissingUserId)
    }

    fn validate_user(&self, user: Option<&User>) -> Result<(), DomainError> {
        let user = user.ok_or(DomainError::MissingUser)?;
        if !user.is_active() {
            return Err(DomainError::InactiveUser(user.id));
        }
        Ok(())
    }

    fn validate_message(&self, message: Option<&str>) -> Result<(), DomainError> {
        message.map(|_| ()).ok_or(DomainError::MissingMessage)
    }
}
