use gate::{AuthService, MemoryStorage, NoDelay, SessionGate, UserDirectory};
use shared_types::UserRole;

pub const STORAGE_KEY: &str = "user";

/// The seeded (email, role) pairs; every one uses password `password`.
pub const SEEDED: &[(&str, UserRole)] = &[
    ("rider@example.com", UserRole::Rider),
    ("driver@example.com", UserRole::Driver),
    ("staff@example.com", UserRole::Staff),
];

pub type TestGate = SessionGate<MemoryStorage, NoDelay>;

/// A restored gate with no simulated latency over the given storage.
pub fn gate_over(storage: MemoryStorage) -> TestGate {
    let mut gate = SessionGate::new(
        storage,
        STORAGE_KEY,
        AuthService::new(UserDirectory::seeded(), NoDelay),
    );
    gate.restore();
    gate
}

/// A fresh gate plus a handle on its storage.
pub fn test_gate() -> (TestGate, MemoryStorage) {
    let storage = MemoryStorage::new();
    (gate_over(storage.clone()), storage)
}

/// A gate already signed in as the seeded account for `role`.
pub async fn signed_in(role: UserRole) -> (TestGate, MemoryStorage) {
    let (mut gate, storage) = test_gate();
    let email = SEEDED
        .iter()
        .find(|(_, r)| *r == role)
        .map(|(email, _)| *email)
        .expect("every role has a seeded account");
    gate.authenticate(email, "password", role)
        .await
        .expect("seeded credentials sign in");
    (gate, storage)
}
