use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Account role as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UserRole {
    #[default]
    Customer,
    Admin,
    Superadmin,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Admin => "admin",
            UserRole::Superadmin => "superadmin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Customer => "Customer",
            UserRole::Admin => "Admin",
            UserRole::Superadmin => "Super Admin",
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![UserRole::Customer, UserRole::Admin, UserRole::Superadmin]
    }

    /// Parse a role code. The login endpoint reports plain accounts as `user`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "customer" | "user" => Some(UserRole::Customer),
            "admin" => Some(UserRole::Admin),
            "superadmin" => Some(UserRole::Superadmin),
            _ => None,
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Superadmin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        UserRole::from_code(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown role: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_alias() {
        assert_eq!(UserRole::from_code("user"), Some(UserRole::Customer));
        assert_eq!(UserRole::from_code("SuperAdmin"), Some(UserRole::Superadmin));
        assert_eq!(UserRole::from_code("root"), None);
    }

    #[test]
    fn test_roundtrip_code() {
        for role in UserRole::all() {
            let json = serde_json::to_string(&role).unwrap();
            let back: UserRole = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }
}
