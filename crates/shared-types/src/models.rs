use serde::{Deserialize, Serialize};

use crate::UserRole;

/// A known account in the demo user directory.
///
/// Carries the plaintext password used by the credential check, so it is
/// deliberately not `Serialize`: only [`SessionUser`] ever reaches storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub profile_image: Option<String>,
}

impl Account {
    /// Exact, case-sensitive match on all three credential fields.
    pub fn matches(&self, email: &str, password: &str, role: UserRole) -> bool {
        self.email == email && self.password == password && self.role == role
    }

    /// Drop the secret and keep the public part of the record.
    pub fn to_session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            profile_image: self.profile_image.clone(),
        }
    }
}

/// The authenticated user held as the active session.
///
/// Serialized as `{id, name, email, role, profileImage?}` under the session
/// storage key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(
        rename = "profileImage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_image: Option<String>,
}

impl SessionUser {
    /// Up to two uppercase initials for avatar fallbacks.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account {
            id: "r1".into(),
            name: "John Rider".into(),
            email: "rider@example.com".into(),
            password: "password".into(),
            role: UserRole::Rider,
            profile_image: Some("https://i.pravatar.cc/150?img=1".into()),
        }
    }

    #[test]
    fn matches_requires_all_three_fields() {
        let a = account();
        assert!(a.matches("rider@example.com", "password", UserRole::Rider));
        assert!(!a.matches("rider@example.com", "password", UserRole::Driver));
        assert!(!a.matches("rider@example.com", "Password", UserRole::Rider));
        assert!(!a.matches("Rider@example.com", "password", UserRole::Rider));
    }

    #[test]
    fn session_user_json_has_no_password() {
        let json = serde_json::to_string(&account().to_session_user()).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("\"profileImage\""));
        assert!(json.contains("\"role\":\"rider\""));
    }

    #[test]
    fn missing_profile_image_is_omitted_and_defaults() {
        let mut user = account().to_session_user();
        user.profile_image = None;
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("profileImage"));

        let parsed: SessionUser =
            serde_json::from_str(r#"{"id":"d9","name":"X","email":"x@y.z","role":"driver"}"#)
                .unwrap();
        assert_eq!(parsed.profile_image, None);
        assert_eq!(parsed.role, UserRole::Driver);
    }

    #[test]
    fn initials_take_first_two_words() {
        let user = account().to_session_user();
        assert_eq!(user.initials(), "JR");
    }
}
