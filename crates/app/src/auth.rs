use std::future::Future;

use dioxus::prelude::*;
use futures::channel::oneshot::{self, Canceled};
use gate::{app_config, platform_storage, AccessDecision, FixedDelay, PlatformStorage, SessionGate};
use shared_types::{AppError, SessionUser, UserRole};
use tracing::warn;

/// The gate as wired for the running client.
pub type AppGate = SessionGate<PlatformStorage, FixedDelay>;

/// Global authentication state.
///
/// Wraps the session gate in a signal so every view that asks for the
/// status re-renders when a sign-in completes or the session ends.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub gate: Signal<AppGate>,
}

impl AuthState {
    /// Build the gate from config and rehydrate the stored session.
    pub fn restore() -> Self {
        let mut gate = SessionGate::from_config(platform_storage(), &app_config().session);
        gate.restore();
        Self {
            gate: Signal::new(gate),
        }
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.gate.read().current_user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.gate.read().current_user().is_some()
    }

    pub fn authorize(&self, role: UserRole) -> AccessDecision {
        self.gate.read().authorize(role)
    }

    /// Sign in. The attempt runs on its own task so leaving the form mid-delay
    /// cannot cancel it; the returned future only listens for the outcome.
    pub async fn authenticate(
        &self,
        email: String,
        password: String,
        role: UserRole,
    ) -> Result<SessionUser, AppError> {
        let mut gate = self.gate;
        let service = gate.write().begin_attempt();
        self.detach(async move { service.authenticate(&email, &password, role).await })
            .await
    }

    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
        role: UserRole,
    ) -> Result<SessionUser, AppError> {
        let mut gate = self.gate;
        let service = gate.write().begin_attempt();
        self.detach(async move { service.register(&name, &email, &password, role).await })
            .await
    }

    /// Drive `attempt` on an app-lifetime task and apply its outcome to the
    /// gate there. The signal is never borrowed across the delay.
    async fn detach<F>(&self, attempt: F) -> Result<SessionUser, AppError>
    where
        F: Future<Output = Result<SessionUser, AppError>> + 'static,
    {
        let mut gate = self.gate;
        let (tx, rx) = oneshot::channel();
        spawn_forever(async move {
            let result = attempt.await;
            let result = gate.write().complete_attempt(result);
            // The form may be gone by now.
            let _ = tx.send(result);
        });

        match rx.await {
            Ok(result) => result,
            Err(Canceled) => {
                warn!("Attempt finished without reporting an outcome");
                Err(AppError::authentication_failure())
            }
        }
    }

    pub fn end_session(&mut self) {
        self.gate.write().end_session();
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
