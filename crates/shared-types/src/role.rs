use serde::{Deserialize, Serialize};
use std::fmt;

/// Role attached to every account and session.
///
/// - `Rider`: books rides, sees ride history and payment methods.
/// - `Driver`: manages ride requests and earnings.
/// - `Staff`: platform operations: users, rides, analytics.
///
/// The set is closed. Parsing an unknown string yields `None` instead of
/// quietly picking a fallback role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Rider,
    Driver,
    Staff,
}

/// All roles in display order.
pub const ALL_ROLES: &[UserRole] = &[UserRole::Rider, UserRole::Driver, UserRole::Staff];

impl UserRole {
    /// Lowercase key used in storage and form values.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Rider => "rider",
            UserRole::Driver => "driver",
            UserRole::Staff => "staff",
        }
    }

    /// Parse a lowercase role key. Matching is exact.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "rider" => Some(UserRole::Rider),
            "driver" => Some(UserRole::Driver),
            "staff" => Some(UserRole::Staff),
            _ => None,
        }
    }

    /// Human-readable name for selectors and headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Rider => "Rider",
            UserRole::Driver => "Driver",
            UserRole::Staff => "Staff",
        }
    }

    /// Path of the dashboard a session with this role lands on.
    pub fn home_path(&self) -> &'static str {
        match self {
            UserRole::Rider => "/rider",
            UserRole::Driver => "/driver",
            UserRole::Staff => "/staff",
        }
    }

    /// Single-letter prefix used when synthesizing account ids (`r4`, `d4`, ...).
    pub fn id_prefix(&self) -> char {
        match self {
            UserRole::Rider => 'r',
            UserRole::Driver => 'd',
            UserRole::Staff => 's',
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_parse_roundtrip() {
        for role in ALL_ROLES {
            assert_eq!(UserRole::parse(role.as_str()), Some(*role));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_mixed_case() {
        assert_eq!(UserRole::parse("admin"), None);
        assert_eq!(UserRole::parse("Rider"), None);
        assert_eq!(UserRole::parse(""), None);
    }

    #[test]
    fn home_paths_are_distinct() {
        assert_eq!(UserRole::Rider.home_path(), "/rider");
        assert_eq!(UserRole::Driver.home_path(), "/driver");
        assert_eq!(UserRole::Staff.home_path(), "/staff");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Driver).unwrap(), "\"driver\"");
        let parsed: UserRole = serde_json::from_str("\"staff\"").unwrap();
        assert_eq!(parsed, UserRole::Staff);
    }

    #[test]
    fn deserialize_rejects_unknown_role() {
        assert!(serde_json::from_str::<UserRole>("\"admin\"").is_err());
    }

    #[test]
    fn id_prefix_matches_first_letter() {
        for role in ALL_ROLES {
            assert!(role.as_str().starts_with(role.id_prefix()));
        }
    }
}
