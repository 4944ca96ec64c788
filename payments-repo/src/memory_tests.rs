//! In-memory repository tests.

#[cfg(test)]
mod tests {
    use payments_types::{
        DomainError, Payment, PaymentId, PaymentRepository, RepoError, User, UserId,
        UserRepository, UserStatus,
    };
    use rust_decimal_macros::dec;

    use crate::{InMemoryPaymentRepository, InMemoryUserRepository};

    /// Repository holding three saved payments of 100, 200 and 300.
    fn setup_repo() -> (InMemoryPaymentRepository, Vec<Payment>) {
        let repo = InMemoryPaymentRepository::new();
        let saved = [(1, dec!(100)), (2, dec!(200)), (3, dec!(300))]
            .into_iter()
            .map(|(user, amount)| {
                let payment = Payment::new(user, amount, format!("message{}", user)).unwrap();
                repo.save(Some(payment)).unwrap()
            })
            .collect();
        (repo, saved)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // save
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_save_assigns_identifier() {
        let repo = InMemoryPaymentRepository::new();
        let payment = Payment::new(4, dec!(400), "message4").unwrap();

        let saved = repo.save(Some(payment.clone())).unwrap();

        assert!(saved.payment_id.is_some());
        assert_eq!(saved.user_id, payment.user_id);
        assert_eq!(saved.amount, payment.amount);
        assert_eq!(saved.message, payment.message);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_save_issues_fresh_identifiers() {
        let (repo, saved) = setup_repo();
        let another = repo
            .save(Some(Payment::new(1, dec!(100), "message1").unwrap()))
            .unwrap();

        let mut ids: Vec<PaymentId> = saved.iter().filter_map(|p| p.payment_id).collect();
        ids.push(another.payment_id.unwrap());
        ids.sort_by_key(|id| *id.as_uuid());
        ids.dedup();

        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_save_absent_payment_fails() {
        let repo = InMemoryPaymentRepository::new();

        let result = repo.save(None);

        assert_eq!(result, Err(RepoError::Domain(DomainError::MissingPayment)));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_save_already_stored_payment_fails() {
        let (repo, saved) = setup_repo();
        let before = repo.find_all().unwrap();

        let result = repo.save(Some(saved[0].clone()));

        assert!(matches!(result, Err(RepoError::DuplicatePayment(id)) if Some(id) == saved[0].payment_id));
        assert_eq!(repo.find_all().unwrap(), before);
    }

    #[test]
    fn test_save_with_unknown_identifier_gets_new_one() {
        let repo = InMemoryPaymentRepository::new();
        let stale = PaymentId::new();
        let mut payment = Payment::new(1, dec!(10), "stale id").unwrap();
        payment.payment_id = Some(stale);

        let saved = repo.save(Some(payment)).unwrap();

        assert_ne!(saved.payment_id, Some(stale));
        assert!(repo.find_by_id(Some(stale)).unwrap().is_none());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // find_by_id / find_all
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_find_by_id() {
        let (repo, saved) = setup_repo();

        let found = repo.find_by_id(saved[0].payment_id).unwrap();

        assert_eq!(found, Some(saved[0].clone()));
    }

    #[test]
    fn test_find_by_id_absent_fails() {
        let (repo, _) = setup_repo();

        let result = repo.find_by_id(None);

        assert_eq!(result, Err(RepoError::Domain(DomainError::MissingPaymentId)));
    }

    #[test]
    fn test_find_by_id_unknown_is_empty() {
        let (repo, _) = setup_repo();

        let found = repo.find_by_id(Some(PaymentId::new())).unwrap();

        assert!(found.is_none());
    }

    #[test]
    fn test_find_all_in_insertion_order() {
        let (repo, saved) = setup_repo();

        let all = repo.find_all().unwrap();

        assert_eq!(all, saved);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // edit_message
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_edit_message() {
        let (repo, saved) = setup_repo();
        let id = saved[0].payment_id.unwrap();

        let edited = repo
            .edit_message(id, "New Message for Payment ID 1".to_string())
            .unwrap();

        assert_eq!(edited.message, "New Message for Payment ID 1");
        assert_eq!(edited.payment_id, Some(id));
        assert_eq!(edited.user_id, saved[0].user_id);
        assert_eq!(edited.amount, saved[0].amount);
        assert_eq!(repo.find_by_id(Some(id)).unwrap(), Some(edited));

        // Other payments are untouched.
        assert_eq!(repo.find_all().unwrap()[1..], saved[1..]);
    }

    #[test]
    fn test_edit_message_unknown_id_fails() {
        let (repo, saved) = setup_repo();

        let result = repo.edit_message(PaymentId::new(), "Message for Random UUID".to_string());

        assert!(matches!(result, Err(RepoError::NotFound(_))));
        assert_eq!(repo.find_all().unwrap(), saved);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // users
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_find_user() {
        let repo = InMemoryUserRepository::with_users([
            User::new(1, "John", UserStatus::Active),
            User::new(2, "Mary", UserStatus::Inactive),
        ]);

        let user = repo.find_by_id(Some(UserId::new(2))).unwrap().unwrap();

        assert_eq!(user.name, "Mary");
        assert_eq!(user.status, UserStatus::Inactive);
        assert!(repo.find_by_id(Some(UserId::new(3))).unwrap().is_none());
    }

    #[test]
    fn test_find_user_absent_id_fails() {
        let repo = InMemoryUserRepository::new();

        let result = repo.find_by_id(None);

        assert_eq!(result, Err(RepoError::Domain(DomainError::MissingUserId)));
    }

    #[test]
    fn test_insert_user_replaces() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.insert(User::new(1, "John", UserStatus::Active)).is_none());

        let previous = repo.insert(User::new(1, "John", UserStatus::Inactive));

        assert_eq!(previous.map(|u| u.status), Some(UserStatus::Active));
        assert_eq!(repo.len(), 1);
    }
}
