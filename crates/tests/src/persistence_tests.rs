use gate::{AccessDecision, SessionStatus, SessionStorage};
use pretty_assertions::assert_eq;
use shared_types::{UserRole, ALL_ROLES};

use crate::common::{gate_over, signed_in, STORAGE_KEY};

#[tokio::test]
async fn reload_restores_the_same_decisions() {
    for &role in ALL_ROLES {
        let (gate, storage) = signed_in(role).await;
        let reloaded = gate_over(storage);
        assert_eq!(reloaded.current_user(), gate.current_user());
        for &required in ALL_ROLES {
            assert_eq!(reloaded.authorize(required), gate.authorize(required));
        }
    }
}

#[tokio::test]
async fn signed_out_state_survives_reload() {
    let (mut gate, storage) = signed_in(UserRole::Rider).await;
    gate.end_session();
    assert_eq!(storage.read(STORAGE_KEY).unwrap(), None);
    let reloaded = gate_over(storage);
    assert_eq!(reloaded.status(), SessionStatus::Anonymous);
}

#[test]
fn unreadable_record_is_discarded() {
    let storage = gate::MemoryStorage::new();
    storage.write(STORAGE_KEY, "{not json").unwrap();
    let gate = gate_over(storage.clone());
    assert_eq!(gate.authorize(UserRole::Rider), AccessDecision::RedirectToLogin);
    assert_eq!(storage.read(STORAGE_KEY).unwrap(), None);
}

#[tokio::test]
async fn record_is_plain_session_json() {
    let (_gate, storage) = signed_in(UserRole::Driver).await;
    let raw = storage.read(STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["id"], "d1");
    assert_eq!(value["email"], "driver@example.com");
    assert_eq!(value["role"], "driver");
}
