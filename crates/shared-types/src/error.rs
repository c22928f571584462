use serde::{Deserialize, Serialize};
use std::fmt;

/// Message shown for any failed sign-in. Wrong password and wrong role
/// produce the same text.
pub const AUTHENTICATION_FAILURE_MESSAGE: &str = "Invalid credentials or role";

/// Message shown when registering an email that is already known.
pub const REGISTRATION_CONFLICT_MESSAGE: &str = "User already exists";

/// Categorization of session gate errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Email, password and role did not match a known account.
    AuthenticationFailure,
    /// The email is already registered.
    RegistrationConflict,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::AuthenticationFailure => write!(f, "AuthenticationFailure"),
            AppErrorKind::RegistrationConflict => write!(f, "RegistrationConflict"),
        }
    }
}

/// User-facing error raised by the session gate. Shown as a toast and
/// never retried.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn authentication_failure() -> Self {
        Self {
            kind: AppErrorKind::AuthenticationFailure,
            message: AUTHENTICATION_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn registration_conflict() -> Self {
        Self {
            kind: AppErrorKind::RegistrationConflict,
            message: REGISTRATION_CONFLICT_MESSAGE.to_string(),
        }
    }

    /// Fallback toast text when an error arrives without a message.
    pub fn friendly_message(&self) -> String {
        if self.message.is_empty() {
            match self.kind {
                AppErrorKind::AuthenticationFailure => "Login failed".to_string(),
                AppErrorKind::RegistrationConflict => "Registration failed".to_string(),
            }
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_failure_has_fixed_message() {
        let err = AppError::authentication_failure();
        assert_eq!(err.kind, AppErrorKind::AuthenticationFailure);
        assert_eq!(err.message, "Invalid credentials or role");
    }

    #[test]
    fn registration_conflict_has_fixed_message() {
        let err = AppError::registration_conflict();
        assert_eq!(err.kind, AppErrorKind::RegistrationConflict);
        assert_eq!(err.message, "User already exists");
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::authentication_failure();
        assert_eq!(
            format!("{}", err),
            "AuthenticationFailure: Invalid credentials or role"
        );
    }

    #[test]
    fn friendly_message_falls_back_per_kind() {
        let mut err = AppError::registration_conflict();
        err.message.clear();
        assert_eq!(err.friendly_message(), "Registration failed");

        let mut err = AppError::authentication_failure();
        err.message.clear();
        assert_eq!(err.friendly_message(), "Login failed");
    }

    #[test]
    fn error_roundtrip_through_json() {
        let err = AppError::registration_conflict();
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
