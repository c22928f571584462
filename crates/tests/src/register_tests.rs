use gate::SessionStorage;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, UserRole};

use crate::common::{signed_in, test_gate, SEEDED, STORAGE_KEY};

#[tokio::test]
async fn known_email_conflicts_regardless_of_role() {
    let (mut gate, _storage) = test_gate();
    for &(email, _) in SEEDED {
        let err = gate
            .register("Someone", email, "pw", UserRole::Rider)
            .await
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::RegistrationConflict);
        assert_eq!(err.message, "User already exists");
    }
    assert!(gate.current_user().is_none());
}

#[tokio::test]
async fn email_comparison_is_case_sensitive() {
    let (mut gate, _storage) = test_gate();
    let user = gate
        .register("Upper Case", "Rider@Example.com", "pw", UserRole::Rider)
        .await
        .unwrap();
    assert_eq!(user.email, "Rider@Example.com");
}

#[tokio::test]
async fn new_account_id_uses_role_prefix() {
    for (role, id) in [(UserRole::Rider, "r4"), (UserRole::Driver, "d4"), (UserRole::Staff, "s4")] {
        let (mut gate, storage) = test_gate();
        let user = gate
            .register("Nina New", "nina@example.com", "pw", role)
            .await
            .unwrap();
        assert_eq!(user.id, id);
        assert!(storage.read(STORAGE_KEY).unwrap().unwrap().contains(id));
    }
}

#[tokio::test]
async fn conflict_keeps_existing_session() {
    let (mut gate, _storage) = signed_in(UserRole::Driver).await;
    gate.register("Dup", "staff@example.com", "pw", UserRole::Staff)
        .await
        .unwrap_err();
    assert_eq!(gate.current_user().map(|u| u.id.as_str()), Some("d1"));
}
