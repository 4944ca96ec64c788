//! In-memory repository adapters.

use std::collections::HashMap;

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::{debug, warn};

use payments_types::{
    DomainError, Payment, PaymentId, PaymentRepository, RepoError, User, UserId, UserRepository,
};

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// User store keyed by the externally assigned user id.
///
/// The payment core only reads from it; seeding happens through
/// [`InMemoryUserRepository::with_users`] or [`InMemoryUserRepository::insert`].
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Creates an empty user repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with `users`. Later duplicates win.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|user| (user.id, user)).collect();
        Self {
            users: RwLock::new(users),
        }
    }

    /// Adds or replaces a user, returning the previous record for that id.
    pub fn insert(&self, user: User) -> Option<User> {
        self.users.write().insert(user.id, user)
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_id(&self, id: Option<UserId>) -> Result<Option<User>, RepoError> {
        let id = id.ok_or(DomainError::MissingUserId)?;
        Ok(self.users.read().get(&id).cloned())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payments
// ─────────────────────────────────────────────────────────────────────────────

/// Payment store that assigns identifiers on save.
///
/// One lock guards the whole map, so the duplicate check, id assignment and
/// insert in `save` happen as a single step. Iteration follows insertion order.
#[derive(Debug, Default)]
pub struct InMemoryPaymentRepository {
    payments: RwLock<IndexMap<PaymentId, Payment>>,
}

impl InMemoryPaymentRepository {
    /// Creates an empty payment repository.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.payments.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.read().is_empty()
    }
}

impl PaymentRepository for InMemoryPaymentRepository {
    fn save(&self, payment: Option<Payment>) -> Result<Payment, RepoError> {
        let mut payment = payment.ok_or(DomainError::MissingPayment)?;
        let mut payments = self.payments.write();

        if let Some(existing) = payment.payment_id.filter(|id| payments.contains_key(id)) {
            warn!(payment_id = %existing, "rejecting save of an already stored payment");
            return Err(RepoError::DuplicatePayment(existing));
        }

        let id = loop {
            let candidate = PaymentId::new();
            if !payments.contains_key(&candidate) {
                break candidate;
            }
        };

        payment.payment_id = Some(id);
        payments.insert(id, payment.clone());
        debug!(payment_id = %id, user_id = %payment.user_id, amount = %payment.amount, "payment saved");

        Ok(payment)
    }

    fn find_by_id(&self, id: Option<PaymentId>) -> Result<Option<Payment>, RepoError> {
        let id = id.ok_or(DomainError::MissingPaymentId)?;
        Ok(self.payments.read().get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Payment>, RepoError> {
        Ok(self.payments.read().values().cloned().collect())
    }

    fn edit_message(&self, id: PaymentId, message: String) -> Result<Payment, RepoError> {
        let mut payments = self.payments.write();
        let Some(payment) = payments.get_mut(&id) else {
            warn!(payment_id = %id, "cannot edit message of unknown payment");
            return Err(RepoError::NotFound(format!("Payment {}", id)));
        };

        payment.message = message;
        debug!(payment_id = %id, "payment message edited");

        Ok(payment.clone())
    }
}
