//! Payment Application Service
//!
//! Orchestrates validation and repository calls through the ports.
//! Contains NO infrastructure logic - pure business orchestration.

use rust_decimal::Decimal;

use payments_types::{
    AppError, DomainError, Payment, PaymentId, PaymentRepository, UserId, UserRepository,
    ValidationService,
};

/// Application service for payment operations.
///
/// Generic over its three collaborators - adapters are injected at compile time.
/// This enables:
/// - Swapping repositories without code changes
/// - Testing with in-memory repos or mocks
/// - Compile-time checks for port implementation
pub struct PaymentService<U, P, V>
where
    U: UserRepository,
    P: PaymentRepository,
    V: ValidationService,
{
    users: U,
    payments: P,
    validator: V,
}

impl<U, P, V> PaymentService<U, P, V>
where
    U: UserRepository,
    P: PaymentRepository,
    V: ValidationService,
{
    /// Creates a new payment service from its collaborators.
    pub fn new(users: U, payments: P, validator: V) -> Self {
        Self {
            users,
            payments,
            validator,
        }
    }

    /// Returns a reference to the underlying user repository.
    pub fn users(&self) -> &U {
        &self.users
    }

    /// Returns a reference to the underlying payment repository.
    pub fn payments(&self) -> &P {
        &self.payments
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Creates and stores a payment on behalf of an active user.
    ///
    /// The payment repository is only touched once every check has passed.
    #[tracing::instrument(skip(self))]
    pub fn create_payment(
        &self,
        user_id: Option<UserId>,
        amount: Option<Decimal>,
    ) -> Result<Payment, AppError> {
        // Both argument checks run before either failure is reported.
        let user_id_check = self.validator.validate_user_id(user_id);
        let amount_check = self.validator.validate_amount(amount);
        user_id_check?;
        amount_check?;

        let Some(user_id) = user_id else {
            return Err(DomainError::MissingUserId.into());
        };
        let Some(amount) = amount else {
            return Err(DomainError::MissingAmount.into());
        };

        let user = self.users.find_by_id(Some(user_id))?;
        let Some(found) = user.as_ref() else {
            tracing::warn!(%user_id, "payment requested for unknown user");
            return Err(AppError::NotFound(format!("User {}", user_id)));
        };

        self.validator.validate_user(user.as_ref())?;

        let message = format!("Payment from user {}", found.name);
        let payment = Payment::new(user_id, amount, message)?;
        let saved = self.payments.save(Some(payment))?;

        tracing::info!(payment_id = ?saved.payment_id, %user_id, %amount, "payment created");
        Ok(saved)
    }

    /// Replaces the message of a stored payment.
    #[tracing::instrument(skip(self))]
    pub fn edit_payment_message(
        &self,
        payment_id: Option<PaymentId>,
        message: Option<String>,
    ) -> Result<Payment, AppError> {
        let payment_id_check = self.validator.validate_payment_id(payment_id);
        let message_check = self.validator.validate_message(message.as_deref());
        payment_id_check?;
        message_check?;

        let Some(payment_id) = payment_id else {
            return Err(DomainError::MissingPaymentId.into());
        };
        let Some(message) = message else {
            return Err(DomainError::MissingMessage.into());
        };

        self.payments
            .edit_message(payment_id, message)
            .map_err(Into::into)
    }

    /// Lists payments whose amount is strictly greater than `threshold`.
    #[tracing::instrument(skip(self))]
    pub fn get_all_by_amount_exceeding(&self, threshold: Decimal) -> Result<Vec<Payment>, AppError> {
        let payments = self.payments.find_all()?;

        Ok(payments
            .into_iter()
            .filter(|payment| payment.amount > threshold)
            .collect())
    }
}
