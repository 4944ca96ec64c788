//! Data Transfer Objects (DTOs) for requests and responses.
//!
//! Request fields are optional so that missing input reaches the
//! validation gate instead of failing deserialization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Payment, PaymentId, UserId};

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a payment for a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub amount: Option<Decimal>,
}

/// Request to replace the message of a stored payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditPaymentMessageRequest {
    #[serde(default)]
    pub payment_id: Option<PaymentId>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Lookup of a single payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FindPaymentRequest {
    #[serde(default)]
    pub payment_id: Option<PaymentId>,
}

/// Filter for payments whose amount is strictly greater than `threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountExceedingQuery {
    pub threshold: Decimal,
}

/// A stored payment as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub payment_id: Option<PaymentId>,
    pub user_id: UserId,
    pub amount: Decimal,
    pub message: String,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            payment_id: payment.payment_id,
            user_id: payment.user_id,
            amount: payment.amount,
            message: payment.message,
        }
    }
}
