use gate::{AccessDecision, AuthService, MemoryStorage, NoDelay, SessionGate, UserDirectory};
use pretty_assertions::assert_eq;
use shared_types::{UserRole, ALL_ROLES};

use crate::common::{signed_in, test_gate, STORAGE_KEY};

#[test]
fn unrestored_gate_is_pending() {
    let gate = SessionGate::new(
        MemoryStorage::new(),
        STORAGE_KEY,
        AuthService::new(UserDirectory::seeded(), NoDelay),
    );
    for &role in ALL_ROLES {
        assert_eq!(gate.authorize(role), AccessDecision::Pending);
    }
}

#[test]
fn anonymous_visitor_is_sent_to_login() {
    let (gate, _storage) = test_gate();
    for &role in ALL_ROLES {
        let decision = gate.authorize(role);
        assert_eq!(decision, AccessDecision::RedirectToLogin);
        assert_eq!(decision.redirect_path(), Some("/login"));
    }
}

#[tokio::test]
async fn wrong_role_is_sent_to_own_home() {
    for &signed_as in ALL_ROLES {
        let (gate, _storage) = signed_in(signed_as).await;
        for &required in ALL_ROLES {
            let decision = gate.authorize(required);
            if required == signed_as {
                assert_eq!(decision, AccessDecision::Granted);
            } else {
                assert_eq!(decision, AccessDecision::RedirectToHome(signed_as));
                assert_eq!(decision.redirect_path(), Some(signed_as.home_path()));
            }
        }
    }
}

#[tokio::test]
async fn end_session_redirects_to_login() {
    let (mut gate, _storage) = signed_in(UserRole::Staff).await;
    gate.end_session();
    assert!(gate.current_user().is_none());
    assert_eq!(gate.authorize(UserRole::Staff), AccessDecision::RedirectToLogin);
}
