use shared_types::{AppError, SessionConfig, SessionUser, UserRole};

use crate::access::{authorize, AccessDecision};
use crate::directory::UserDirectory;
use crate::latency::{FixedDelay, Latency};
use crate::service::AuthService;
use crate::session::{Session, SessionStatus};
use crate::storage::SessionStorage;
use tracing::debug;

/// The session gate: one owned value combining the auth service and the
/// session it feeds.
///
/// `authenticate` and `register` hold `&mut self` across the simulated
/// latency; dropping either future mid-delay leaves the session as it was.
/// Callers that keep the gate inside shared UI state use the split
/// form instead:
///
/// ```ignore
/// let service = gate.write().begin_attempt();
/// let result = service.authenticate(email, password, role).await;
/// let result = gate.write().complete_attempt(result);
/// ```
pub struct SessionGate<S, L> {
    session: Session<S>,
    service: AuthService<L>,
}

impl<S: SessionStorage> SessionGate<S, FixedDelay> {
    /// Seeded directory, delay and storage key taken from config.
    pub fn from_config(storage: S, config: &SessionConfig) -> Self {
        Self::new(
            storage,
            &config.storage_key,
            AuthService::new(UserDirectory::seeded(), FixedDelay::from_config(config)),
        )
    }
}

impl<S: SessionStorage, L: Latency> SessionGate<S, L> {
    pub fn new(storage: S, storage_key: &str, service: AuthService<L>) -> Self {
        Self {
            session: Session::new(storage, storage_key),
            service,
        }
    }

    /// Rehydrate the session from storage; call once at start-up.
    pub fn restore(&mut self) -> SessionStatus {
        self.session.restore()
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.session.user()
    }

    pub fn authorize(&self, required: UserRole) -> AccessDecision {
        authorize(&self.session.status(), required)
    }

    pub async fn authenticate(
        &mut self,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<SessionUser, AppError> {
        let service = self.service.clone();
        let attempt = InFlight::begin(&mut self.session);
        let result = service.authenticate(email, password, role).await;
        attempt.settle(result)
    }

    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<SessionUser, AppError> {
        let service = self.service.clone();
        let attempt = InFlight::begin(&mut self.session);
        let result = service.register(name, email, password, role).await;
        attempt.settle(result)
    }

    pub fn end_session(&mut self) {
        self.session.clear();
    }

    /// Enter the in-flight state and hand out the service to await on.
    pub fn begin_attempt(&mut self) -> AuthService<L> {
        self.session.begin_attempt();
        self.service.clone()
    }

    /// Apply the outcome of an attempt started with [`Self::begin_attempt`].
    /// A failure leaves the previous session untouched.
    pub fn complete_attempt(
        &mut self,
        result: Result<SessionUser, AppError>,
    ) -> Result<SessionUser, AppError> {
        apply_outcome(&mut self.session, &result);
        result
    }

    /// Leave the in-flight state when the outcome of a split attempt will
    /// never arrive. The previous session stays as it was.
    pub fn abandon_attempt(&mut self) {
        self.session.end_attempt();
    }
}

fn apply_outcome<S: SessionStorage>(
    session: &mut Session<S>,
    result: &Result<SessionUser, AppError>,
) {
    match result {
        Ok(user) => session.activate(user.clone()),
        Err(_) => session.end_attempt(),
    }
}

/// An attempt running against a borrowed session. Dropping it before
/// [`InFlight::settle`] clears the in-flight flag so the gate never stays
/// pending.
struct InFlight<'a, S: SessionStorage> {
    session: &'a mut Session<S>,
    settled: bool,
}

impl<'a, S: SessionStorage> InFlight<'a, S> {
    fn begin(session: &'a mut Session<S>) -> Self {
        session.begin_attempt();
        Self {
            session,
            settled: false,
        }
    }

    fn settle(
        mut self,
        result: Result<SessionUser, AppError>,
    ) -> Result<SessionUser, AppError> {
        apply_outcome(self.session, &result);
        self.settled = true;
        result
    }
}

impl<S: SessionStorage> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        if !self.settled {
            debug!("Attempt dropped before it finished");
            self.session.end_attempt();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latency::NoDelay;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;
    use shared_types::AppErrorKind;

    fn gate(storage: MemoryStorage) -> SessionGate<MemoryStorage, NoDelay> {
        let mut gate = SessionGate::new(
            storage,
            "user",
            AuthService::new(UserDirectory::seeded(), NoDelay),
        );
        gate.restore();
        gate
    }

    #[tokio::test]
    async fn sign_in_grants_own_dashboard_only() {
        let mut gate = gate(MemoryStorage::new());
        gate.authenticate("driver@example.com", "password", UserRole::Driver)
            .await
            .unwrap();
        assert_eq!(gate.authorize(UserRole::Driver), AccessDecision::Granted);
        assert_eq!(
            gate.authorize(UserRole::Staff),
            AccessDecision::RedirectToHome(UserRole::Driver)
        );
    }

    #[tokio::test]
    async fn failed_sign_in_keeps_previous_session() {
        let mut gate = gate(MemoryStorage::new());
        gate.authenticate("staff@example.com", "password", UserRole::Staff)
            .await
            .unwrap();
        let err = gate
            .authenticate("rider@example.com", "nope", UserRole::Rider)
            .await
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::AuthenticationFailure);
        assert_eq!(gate.current_user().map(|u| u.id.as_str()), Some("s1"));
    }

    #[tokio::test]
    async fn end_session_redirects_every_role_to_login() {
        let storage = MemoryStorage::new();
        let mut gate = gate(storage.clone());
        gate.authenticate("rider@example.com", "password", UserRole::Rider)
            .await
            .unwrap();
        gate.end_session();
        for &role in shared_types::ALL_ROLES {
            assert_eq!(gate.authorize(role), AccessDecision::RedirectToLogin);
        }
        assert_eq!(storage.read("user").unwrap(), None);
    }

    #[tokio::test]
    async fn registration_becomes_active_session() {
        let storage = MemoryStorage::new();
        let mut gate = gate(storage.clone());
        let user = gate
            .register("Nina New", "nina@example.com", "pw", UserRole::Staff)
            .await
            .unwrap();
        assert_eq!(user.id, "s4");
        assert_eq!(gate.authorize(UserRole::Staff), AccessDecision::Granted);
        assert!(storage.read("user").unwrap().unwrap().contains("nina@example.com"));
    }

    #[test]
    fn split_attempt_reports_pending_while_in_flight() {
        let mut gate = gate(MemoryStorage::new());
        let _service = gate.begin_attempt();
        assert_eq!(gate.authorize(UserRole::Rider), AccessDecision::Pending);
        let _ = gate.complete_attempt(Err(AppError::authentication_failure()));
        assert_eq!(gate.authorize(UserRole::Rider), AccessDecision::RedirectToLogin);
    }

    #[tokio::test]
    async fn abandoned_split_attempt_keeps_previous_session() {
        let mut gate = gate(MemoryStorage::new());
        gate.authenticate("rider@example.com", "password", UserRole::Rider)
            .await
            .unwrap();
        let service = gate.begin_attempt();
        assert_eq!(gate.authorize(UserRole::Rider), AccessDecision::Pending);
        drop(service);
        gate.abandon_attempt();
        assert_eq!(gate.authorize(UserRole::Rider), AccessDecision::Granted);
    }

    #[test]
    fn from_config_uses_configured_key() {
        let config = SessionConfig {
            storage_key: "rideshare.session".into(),
            latency_ms: 0,
        };
        let storage = MemoryStorage::new();
        let mut gate = SessionGate::from_config(storage.clone(), &config);
        gate.restore();
        gate.complete_attempt(Ok(SessionUser {
            id: "r1".into(),
            name: "John Rider".into(),
            email: "rider@example.com".into(),
            role: UserRole::Rider,
            profile_image: None,
        }))
        .unwrap();
        assert!(storage.read("rideshare.session").unwrap().is_some());
        assert_eq!(storage.read("user").unwrap(), None);
    }
}
