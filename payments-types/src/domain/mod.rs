//! Domain models for the payment service.

pub mod payment;
pub mod user;

pub use payment::{Payment, PaymentId};
pub use user::{User, UserId, UserStatus};
