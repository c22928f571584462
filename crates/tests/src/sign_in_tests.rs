use gate::SessionStorage;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, UserRole, ALL_ROLES};

use crate::common::{test_gate, SEEDED, STORAGE_KEY};

#[tokio::test]
async fn every_seeded_triple_signs_in() {
    for &(email, role) in SEEDED {
        let (mut gate, _storage) = test_gate();
        let user = gate.authenticate(email, "password", role).await.unwrap();
        assert_eq!(user.email, email);
        assert_eq!(user.role, role);
        assert!(user.profile_image.is_some());
    }
}

#[tokio::test]
async fn session_record_never_carries_the_password() {
    for &(email, role) in SEEDED {
        let (mut gate, storage) = test_gate();
        let user = gate.authenticate(email, "password", role).await.unwrap();
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        let stored = storage.read(STORAGE_KEY).unwrap().unwrap();
        assert!(!stored.contains("password"));
    }
}

#[tokio::test]
async fn any_mismatch_is_an_authentication_failure() {
    let (mut gate, _storage) = test_gate();
    for &(email, role) in SEEDED {
        for &other in ALL_ROLES.iter().filter(|&&r| r != role) {
            let err = gate.authenticate(email, "password", other).await.unwrap_err();
            assert_eq!(err.kind, AppErrorKind::AuthenticationFailure);
        }
        let err = gate.authenticate(email, "Password", role).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::AuthenticationFailure);
    }
    let err = gate
        .authenticate("RIDER@example.com", "password", UserRole::Rider)
        .await
        .unwrap_err();
    assert_eq!(err.message, "Invalid credentials or role");
    assert!(gate.current_user().is_none());
}
