use shared_types::{Account, UserRole};

/// The fixed set of accounts the demo accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDirectory {
    accounts: Vec<Account>,
}

impl UserDirectory {
    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// One account per role, all with password `password`.
    pub fn seeded() -> Self {
        Self::from_accounts(vec![
            seed("r1", "John Rider", "rider@example.com", UserRole::Rider, 1),
            seed("d1", "Dave Driver", "driver@example.com", UserRole::Driver, 2),
            seed("s1", "Sarah Staff", "staff@example.com", UserRole::Staff, 3),
        ])
    }

    /// Exact match on email, password and role.
    pub fn find(&self, email: &str, password: &str, role: UserRole) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.matches(email, password, role))
    }

    /// Case-sensitive email lookup used by registration.
    pub fn contains_email(&self, email: &str) -> bool {
        self.accounts.iter().any(|account| account.email == email)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

fn seed(id: &str, name: &str, email: &str, role: UserRole, avatar: u8) -> Account {
    Account {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: "password".to_string(),
        role,
        profile_image: Some(format!("https://i.pravatar.cc/150?img={avatar}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_directory_has_one_account_per_role() {
        let dir = UserDirectory::seeded();
        assert_eq!(dir.len(), 3);
        for &role in shared_types::ALL_ROLES {
            assert_eq!(dir.accounts().iter().filter(|a| a.role == role).count(), 1);
        }
    }

    #[test]
    fn find_requires_all_three_fields() {
        let dir = UserDirectory::seeded();
        assert!(dir.find("driver@example.com", "password", UserRole::Driver).is_some());
        assert!(dir.find("driver@example.com", "password", UserRole::Rider).is_none());
        assert!(dir.find("driver@example.com", "Password", UserRole::Driver).is_none());
        assert!(dir.find("Driver@example.com", "password", UserRole::Driver).is_none());
    }

    #[test]
    fn contains_email_is_case_sensitive() {
        let dir = UserDirectory::seeded();
        assert!(dir.contains_email("staff@example.com"));
        assert!(!dir.contains_email("STAFF@example.com"));
    }
}
