use std::sync::Arc;

use shared_types::{AppError, SessionUser, UserRole};
use tracing::{info, warn};
use uuid::Uuid;

use crate::directory::UserDirectory;
use crate::latency::Latency;

/// Number of avatars the placeholder image service serves.
const AVATAR_COUNT: u128 = 70;

/// Credential checks against the user directory.
///
/// Cheap to clone; the UI clones it out of the gate so no state borrow is
/// held while the simulated latency elapses.
pub struct AuthService<L> {
    directory: Arc<UserDirectory>,
    latency: Arc<L>,
}

impl<L> Clone for AuthService<L> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
            latency: Arc::clone(&self.latency),
        }
    }
}

impl<L: Latency> AuthService<L> {
    pub fn new(directory: UserDirectory, latency: L) -> Self {
        Self {
            directory: Arc::new(directory),
            latency: Arc::new(latency),
        }
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Resolve an (email, password, role) triple to its session record.
    ///
    /// Every mismatch yields the same `AuthenticationFailure`.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<SessionUser, AppError> {
        self.latency.wait().await;

        match self.directory.find(email, password, role) {
            Some(account) => {
                info!(email, %role, "Sign-in accepted");
                Ok(account.to_session_user())
            }
            None => {
                warn!(email, %role, "Sign-in rejected");
                Err(AppError::authentication_failure())
            }
        }
    }

    /// Build a session record for a new account.
    ///
    /// The directory is not extended, so the new account can't sign in
    /// again after its session ends.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        _password: &str,
        role: UserRole,
    ) -> Result<SessionUser, AppError> {
        self.latency.wait().await;

        if self.directory.contains_email(email) {
            warn!(email, "Registration rejected: email already known");
            return Err(AppError::registration_conflict());
        }

        let user = SessionUser {
            id: format!("{}{}", role.id_prefix(), self.directory.len() + 1),
            name: name.to_string(),
            email: email.to_string(),
            role,
            profile_image: Some(random_avatar()),
        };
        info!(email, id = %user.id, %role, "Registered account");
        Ok(user)
    }
}

fn random_avatar() -> String {
    let index = Uuid::new_v4().as_u128() % AVATAR_COUNT;
    format!("https://i.pravatar.cc/150?img={index}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latency::NoDelay;
    use pretty_assertions::assert_eq;
    use shared_types::AppErrorKind;

    fn service() -> AuthService<NoDelay> {
        AuthService::new(UserDirectory::seeded(), NoDelay)
    }

    #[tokio::test]
    async fn authenticate_strips_password() {
        let user = service()
            .authenticate("rider@example.com", "password", UserRole::Rider)
            .await
            .unwrap();
        assert_eq!(user.id, "r1");
        assert_eq!(user.name, "John Rider");
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
    }

    #[tokio::test]
    async fn wrong_role_and_wrong_password_are_indistinguishable() {
        let svc = service();
        let wrong_role = svc
            .authenticate("rider@example.com", "password", UserRole::Staff)
            .await
            .unwrap_err();
        let wrong_password = svc
            .authenticate("rider@example.com", "hunter2", UserRole::Rider)
            .await
            .unwrap_err();
        assert_eq!(wrong_role, wrong_password);
        assert_eq!(wrong_role.kind, AppErrorKind::AuthenticationFailure);
        assert_eq!(wrong_role.message, "Invalid credentials or role");
    }

    #[tokio::test]
    async fn register_synthesizes_id_from_role_and_directory_size() {
        let user = service()
            .register("Nina New", "nina@example.com", "secret", UserRole::Driver)
            .await
            .unwrap();
        assert_eq!(user.id, "d4");
        assert_eq!(user.role, UserRole::Driver);
        let avatar = user.profile_image.unwrap();
        let index: u32 = avatar
            .strip_prefix("https://i.pravatar.cc/150?img=")
            .unwrap()
            .parse()
            .unwrap();
        assert!(index < 70);
    }

    #[tokio::test]
    async fn register_conflicts_only_on_exact_email() {
        let svc = service();
        let err = svc
            .register("Dup", "staff@example.com", "x", UserRole::Rider)
            .await
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::RegistrationConflict);
        assert_eq!(err.message, "User already exists");

        assert!(svc
            .register("Dup", "Staff@example.com", "x", UserRole::Rider)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn register_does_not_extend_directory() {
        let svc = service();
        svc.register("Nina", "nina@example.com", "pw", UserRole::Rider)
            .await
            .unwrap();
        assert_eq!(svc.directory().len(), 3);
        assert!(svc
            .authenticate("nina@example.com", "pw", UserRole::Rider)
            .await
            .is_err());
    }
}
