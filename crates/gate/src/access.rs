use shared_types::UserRole;

use crate::session::SessionStatus;

/// Outcome of a role check for a guarded route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session still resolving; render a placeholder.
    Pending,
    Granted,
    RedirectToLogin,
    /// Signed in under another role; send the user to that role's home.
    RedirectToHome(UserRole),
}

impl AccessDecision {
    /// Path to navigate to, if the decision is a redirect.
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            AccessDecision::RedirectToLogin => Some("/login"),
            AccessDecision::RedirectToHome(role) => Some(role.home_path()),
            AccessDecision::Pending | AccessDecision::Granted => None,
        }
    }
}

pub fn authorize(status: &SessionStatus, required: UserRole) -> AccessDecision {
    match status {
        SessionStatus::Resolving => AccessDecision::Pending,
        SessionStatus::Anonymous => AccessDecision::RedirectToLogin,
        SessionStatus::Active(user) if user.role != required => {
            AccessDecision::RedirectToHome(user.role)
        }
        SessionStatus::Active(_) => AccessDecision::Granted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{SessionUser, ALL_ROLES};

    fn active(role: UserRole) -> SessionStatus {
        SessionStatus::Active(SessionUser {
            id: "x1".into(),
            name: "Test User".into(),
            email: "test@example.com".into(),
            role,
            profile_image: None,
        })
    }

    #[test]
    fn full_decision_table() {
        for &required in ALL_ROLES {
            assert_eq!(authorize(&SessionStatus::Resolving, required), AccessDecision::Pending);
            assert_eq!(
                authorize(&SessionStatus::Anonymous, required),
                AccessDecision::RedirectToLogin
            );
            for &held in ALL_ROLES {
                let expected = if held == required {
                    AccessDecision::Granted
                } else {
                    AccessDecision::RedirectToHome(held)
                };
                assert_eq!(authorize(&active(held), required), expected);
            }
        }
    }

    #[test]
    fn redirect_paths() {
        assert_eq!(AccessDecision::RedirectToLogin.redirect_path(), Some("/login"));
        assert_eq!(
            AccessDecision::RedirectToHome(UserRole::Driver).redirect_path(),
            Some("/driver")
        );
        assert_eq!(AccessDecision::Granted.redirect_path(), None);
        assert_eq!(AccessDecision::Pending.redirect_path(), None);
    }
}
