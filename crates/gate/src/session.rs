use shared_types::SessionUser;
use tracing::{debug, info, warn};

use crate::storage::SessionStorage;

/// Where the client stands with respect to sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// Not yet rehydrated from storage, or a credential check is in flight.
    Resolving,
    Anonymous,
    Active(SessionUser),
}

impl SessionStatus {
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionStatus::Active(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_resolving(&self) -> bool {
        matches!(self, SessionStatus::Resolving)
    }
}

/// The active session, mirrored to persistent storage.
///
/// The record is only ever replaced or cleared as a whole. Storage failures
/// are logged and never surface to the caller.
#[derive(Debug)]
pub struct Session<S> {
    storage: S,
    key: String,
    user: Option<SessionUser>,
    loading: bool,
}

impl<S: SessionStorage> Session<S> {
    /// A session that has not read storage yet; its status is `Resolving`
    /// until [`Session::restore`] runs.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            user: None,
            loading: true,
        }
    }

    pub fn status(&self) -> SessionStatus {
        match (&self.user, self.loading) {
            (_, true) => SessionStatus::Resolving,
            (Some(user), false) => SessionStatus::Active(user.clone()),
            (None, false) => SessionStatus::Anonymous,
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Rehydrate from storage. A record that does not parse is removed.
    pub fn restore(&mut self) -> SessionStatus {
        self.user = match self.storage.read(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<SessionUser>(&raw) {
                Ok(user) => {
                    debug!(email = %user.email, role = %user.role, "Restored session");
                    Some(user)
                }
                Err(e) => {
                    warn!(key = %self.key, error = %e, "Discarding unreadable session record");
                    self.remove_record();
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Could not read session storage");
                None
            }
        };
        self.loading = false;
        self.status()
    }

    /// Mark a credential check as in flight.
    pub fn begin_attempt(&mut self) {
        self.loading = true;
    }

    /// Leave the in-flight state without changing the session.
    pub fn end_attempt(&mut self) {
        self.loading = false;
    }

    /// Replace the session with `user` and persist it.
    pub fn activate(&mut self, user: SessionUser) {
        match serde_json::to_string(&user) {
            Ok(json) => {
                if let Err(e) = self.storage.write(&self.key, &json) {
                    warn!(key = %self.key, error = %e, "Could not persist session");
                }
            }
            Err(e) => warn!(error = %e, "Could not serialize session"),
        }
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop the session from memory and storage.
    pub fn clear(&mut self) {
        if let Some(user) = self.user.take() {
            info!(email = %user.email, "Signed out");
        }
        self.remove_record();
        self.loading = false;
    }

    fn remove_record(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            warn!(key = %self.key, error = %e, "Could not remove session record");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageError};
    use pretty_assertions::assert_eq;
    use shared_types::UserRole;

    fn rider() -> SessionUser {
        SessionUser {
            id: "r1".into(),
            name: "John Rider".into(),
            email: "rider@example.com".into(),
            role: UserRole::Rider,
            profile_image: None,
        }
    }

    /// Storage whose every call fails.
    struct BrokenStorage;

    impl SessionStorage for BrokenStorage {
        fn read(&self, _: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }
        fn write(&self, _: &str, _: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
        fn remove(&self, _: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn new_session_is_resolving() {
        let session = Session::new(MemoryStorage::new(), "user");
        assert_eq!(session.status(), SessionStatus::Resolving);
    }

    #[test]
    fn restore_without_record_is_anonymous() {
        let mut session = Session::new(MemoryStorage::new(), "user");
        assert_eq!(session.restore(), SessionStatus::Anonymous);
    }

    #[test]
    fn activate_persists_and_restore_reads_back() {
        let storage = MemoryStorage::new();
        let mut first = Session::new(storage.clone(), "user");
        first.restore();
        first.activate(rider());

        let raw = storage.read("user").unwrap().unwrap();
        assert_eq!(
            raw,
            r#"{"id":"r1","name":"John Rider","email":"rider@example.com","role":"rider"}"#
        );

        let mut second = Session::new(storage, "user");
        assert_eq!(second.restore(), SessionStatus::Active(rider()));
    }

    #[test]
    fn corrupt_record_is_removed() {
        let storage = MemoryStorage::new();
        storage.write("user", "{not json").unwrap();
        let mut session = Session::new(storage.clone(), "user");
        assert_eq!(session.restore(), SessionStatus::Anonymous);
        assert_eq!(storage.read("user").unwrap(), None);
    }

    #[test]
    fn unknown_role_in_record_is_discarded() {
        let storage = MemoryStorage::new();
        storage
            .write("user", r#"{"id":"x1","name":"X","email":"x@example.com","role":"admin"}"#)
            .unwrap();
        let mut session = Session::new(storage.clone(), "user");
        assert_eq!(session.restore(), SessionStatus::Anonymous);
        assert_eq!(storage.read("user").unwrap(), None);
    }

    #[test]
    fn clear_removes_record() {
        let storage = MemoryStorage::new();
        let mut session = Session::new(storage.clone(), "user");
        session.restore();
        session.activate(rider());
        session.clear();
        assert_eq!(session.status(), SessionStatus::Anonymous);
        assert_eq!(storage.read("user").unwrap(), None);
    }

    #[test]
    fn storage_failures_do_not_block_sign_in() {
        let mut session = Session::new(BrokenStorage, "user");
        assert_eq!(session.restore(), SessionStatus::Anonymous);
        session.activate(rider());
        assert_eq!(session.status(), SessionStatus::Active(rider()));
        session.clear();
        assert_eq!(session.status(), SessionStatus::Anonymous);
    }

    #[test]
    fn attempt_in_flight_reports_resolving() {
        let mut session = Session::new(MemoryStorage::new(), "user");
        session.restore();
        session.begin_attempt();
        assert!(session.status().is_resolving());
        session.end_attempt();
        assert_eq!(session.status(), SessionStatus::Anonymous);
    }
}
