//! Repository port traits.
//!
//! Adapters (the in-memory stores, test doubles) implement these traits.
//! Parameters the caller may leave unset are `Option`s; an unset identifier
//! is an invalid argument, not a miss.

use crate::domain::{Payment, PaymentId, User, UserId};
use crate::error::RepoError;

/// Read access to users.
#[cfg_attr(feature = "mocks", mockall::automock)]
pub trait UserRepository: Send + Sync + 'static {
    /// Gets a user by ID. Fails with an invalid argument if `id` is unset.
    fn find_by_id(&self, id: Option<UserId>) -> Result<Option<User>, RepoError>;
}

/// Storage for payments. Owns identity assignment.
///
/// `save` and `edit_message` MUST be atomic with respect to each other.
#[cfg_attr(feature = "mocks", mockall::automock)]
pub trait PaymentRepository: Send + Sync + 'static {
    /// Assigns a fresh identifier to `payment` and stores it.
    ///
    /// Fails with an invalid argument if `payment` is unset or already
    /// carries an identifier present in the store.
    fn save(&self, payment: Option<Payment>) -> Result<Payment, RepoError>;

    /// Gets a payment by ID. Fails with an invalid argument if `id` is unset.
    fn find_by_id(&self, id: Option<PaymentId>) -> Result<Option<Payment>, RepoError>;

    /// Snapshot of every stored payment, in insertion order.
    fn find_all(&self) -> Result<Vec<Payment>, RepoError>;

    /// Replaces the message of a stored payment and returns the updated record.
    fn edit_message(&self, id: PaymentId, message: String) -> Result<Payment, RepoError>;
}
