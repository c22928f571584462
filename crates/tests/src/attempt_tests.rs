use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gate::{
    AccessDecision, AuthService, FixedDelay, MemoryStorage, SessionGate, SessionStorage,
    UserDirectory,
};
use pretty_assertions::assert_eq;
use shared_types::UserRole;
use tokio::sync::oneshot;
use tokio::task::LocalSet;
use tokio::time::timeout;

use crate::common::STORAGE_KEY;

type SlowGate = SessionGate<MemoryStorage, FixedDelay>;

fn slow_gate(storage: MemoryStorage) -> SlowGate {
    let mut gate = SessionGate::new(
        storage,
        STORAGE_KEY,
        AuthService::new(UserDirectory::seeded(), FixedDelay::from_millis(1000)),
    );
    gate.restore();
    gate
}

#[tokio::test(start_paused = true)]
async fn sign_in_dropped_mid_delay_falls_back_to_login() {
    let mut gate = slow_gate(MemoryStorage::new());

    let outcome = timeout(
        Duration::from_millis(500),
        gate.authenticate("rider@example.com", "password", UserRole::Rider),
    )
    .await;
    assert!(outcome.is_err());

    tokio::time::advance(Duration::from_secs(10)).await;
    assert_eq!(gate.authorize(UserRole::Rider), AccessDecision::RedirectToLogin);
    assert!(gate.current_user().is_none());
}

#[tokio::test(start_paused = true)]
async fn registration_dropped_mid_delay_keeps_signed_in_user() {
    let mut gate = slow_gate(MemoryStorage::new());
    gate.authenticate("staff@example.com", "password", UserRole::Staff)
        .await
        .unwrap();

    let outcome = timeout(
        Duration::from_millis(200),
        gate.register("Late Comer", "late@example.com", "pw", UserRole::Rider),
    )
    .await;
    assert!(outcome.is_err());

    assert_eq!(gate.authorize(UserRole::Staff), AccessDecision::Granted);
}

/// The app drives attempts on a task of their own; the form only listens.
/// A form that stops listening must not stop the sign-in.
#[tokio::test(start_paused = true)]
async fn detached_attempt_completes_after_listener_leaves() {
    let storage = MemoryStorage::new();
    let gate = Rc::new(RefCell::new(slow_gate(storage.clone())));

    LocalSet::new()
        .run_until(async {
            let (tx, rx) = oneshot::channel();
            let service = gate.borrow_mut().begin_attempt();
            let shared = Rc::clone(&gate);
            let task = tokio::task::spawn_local(async move {
                let result = service
                    .authenticate("driver@example.com", "password", UserRole::Driver)
                    .await;
                let result = shared.borrow_mut().complete_attempt(result);
                let _ = tx.send(result);
            });

            assert!(timeout(Duration::from_millis(300), rx).await.is_err());
            assert_eq!(
                gate.borrow().authorize(UserRole::Driver),
                AccessDecision::Pending
            );

            task.await.unwrap();
        })
        .await;

    assert_eq!(gate.borrow().authorize(UserRole::Driver), AccessDecision::Granted);
    assert!(storage.read(STORAGE_KEY).unwrap().is_some());
}
