pub mod gate;
pub mod session;

use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "Message", default)]
    pub message: String,
    pub user: AuthUser,
    #[serde(rename = "Token")]
    pub token: String,
    #[serde(rename = "refreshToken", default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

/// Capability flags attached to an admin account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub can_add_superadmin: bool,
    #[serde(default)]
    pub can_add_admin: bool,
    #[serde(default)]
    pub can_add_records: bool,
    #[serde(default)]
    pub can_update_records: bool,
    #[serde(default)]
    pub can_read_records: bool,
    #[serde(default)]
    pub can_delete_records: bool,
}

/// One of the six independent permission flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    AddSuperadmin,
    AddAdmin,
    AddRecords,
    UpdateRecords,
    ReadRecords,
    DeleteRecords,
}

impl Permission {
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::AddSuperadmin => self.can_add_superadmin,
            Capability::AddAdmin => self.can_add_admin,
            Capability::AddRecords => self.can_add_records,
            Capability::UpdateRecords => self.can_update_records,
            Capability::ReadRecords => self.can_read_records,
            Capability::DeleteRecords => self.can_delete_records,
        }
    }
}

/// Signed-in account as returned by the login endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub role: UserRole,
    #[serde(default)]
    pub permission: Vec<Permission>,
}

impl AuthUser {
    /// The API sends a one-element list; only the first entry counts
    pub fn permissions(&self) -> Permission {
        self.permission.first().cloned().unwrap_or_default()
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.permissions().allows(capability)
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Up to two initials for the avatar in the header
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN_JSON: &str = r#"{
        "success": true,
        "Message": "Logged in",
        "user": {
            "email": "ops@shop.io",
            "name": "Ops Team",
            "role": "superadmin",
            "permission": [{
                "_id": "p1",
                "can_add_superadmin": true,
                "can_add_admin": true,
                "can_add_records": true,
                "can_update_records": false,
                "can_read_records": true,
                "can_delete_records": false
            }]
        },
        "Token": "jwt-token"
    }"#;

    #[test]
    fn test_parse_login_response() {
        let response: LoginResponse = serde_json::from_str(LOGIN_JSON).unwrap();
        assert_eq!(response.token, "jwt-token");
        assert_eq!(response.refresh_token, None);
        assert_eq!(response.user.role, UserRole::Superadmin);
        assert!(response.user.can(Capability::AddAdmin));
        assert!(!response.user.can(Capability::DeleteRecords));
    }

    #[test]
    fn test_missing_permissions_deny_everything() {
        let user = AuthUser {
            email: "a@b.io".into(),
            name: String::new(),
            role: UserRole::Admin,
            permission: vec![],
        };
        assert!(!user.can(Capability::ReadRecords));
        assert_eq!(user.display_name(), "a@b.io");
    }

    #[test]
    fn test_initials() {
        let response: LoginResponse = serde_json::from_str(LOGIN_JSON).unwrap();
        assert_eq!(response.user.initials(), "OT");
    }
}
