use std::time::Duration;

use gate::{AccessDecision, AuthService, FixedDelay, MemoryStorage, SessionGate, UserDirectory};
use pretty_assertions::assert_eq;
use shared_types::{SessionConfig, UserRole};
use tokio::time::Instant;

use crate::common::STORAGE_KEY;

#[tokio::test(start_paused = true)]
async fn sign_in_waits_for_configured_latency() {
    let config = SessionConfig {
        storage_key: STORAGE_KEY.into(),
        latency_ms: 1000,
    };
    let mut gate = SessionGate::from_config(MemoryStorage::new(), &config);
    gate.restore();

    let started = Instant::now();
    gate.authenticate("staff@example.com", "password", UserRole::Staff)
        .await
        .unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn failures_also_wait() {
    let mut gate = SessionGate::new(
        MemoryStorage::new(),
        STORAGE_KEY,
        AuthService::new(UserDirectory::seeded(), FixedDelay::from_millis(250)),
    );
    gate.restore();

    let started = Instant::now();
    gate.authenticate("staff@example.com", "wrong", UserRole::Staff)
        .await
        .unwrap_err();
    assert!(started.elapsed() >= Duration::from_millis(250));
    assert_eq!(gate.authorize(UserRole::Staff), AccessDecision::RedirectToLogin);
}

#[test]
fn attempt_in_flight_is_pending() {
    let mut gate = SessionGate::new(
        MemoryStorage::new(),
        STORAGE_KEY,
        AuthService::new(UserDirectory::seeded(), FixedDelay::from_millis(1000)),
    );
    gate.restore();
    let _service = gate.begin_attempt();
    assert_eq!(gate.authorize(UserRole::Rider), AccessDecision::Pending);
}
