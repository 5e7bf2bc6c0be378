//! Identity roles known to the application.

use serde::{Deserialize, Serialize};

/// A role an account can be assigned.
///
/// Roles are persisted by name; this enum is the fixed set the application
/// seeds and checks against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleName {
    /// Staff with full access to the back office.
    Admin,
    /// Shoppers placing orders.
    Customer,
}

impl RoleName {
    /// Every role, in seeding order.
    pub const ALL: [Self; 2] = [Self::Admin, Self::Customer];

    /// The persisted role name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Customer => "Customer",
        }
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoleName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("invalid role: {s}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_all_roles() {
        let names: Vec<_> = RoleName::ALL.iter().map(RoleName::as_str).collect();
        assert_eq!(names, ["Admin", "Customer"]);
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("admin".parse::<RoleName>().unwrap(), RoleName::Admin);
        assert_eq!("CUSTOMER".parse::<RoleName>().unwrap(), RoleName::Customer);
        assert!("manager".parse::<RoleName>().is_err());
    }
}
