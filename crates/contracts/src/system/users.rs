use serde::{Deserialize, Serialize};

use crate::enums::UserRole;
use crate::shared::list_view::Searchable;
use crate::shared::validation::{
    require, validate_email, ValidationError, MIN_PASSWORD_LEN,
};
use crate::system::auth::Permission;

/// localStorage key of the user picked for editing
pub const SELECTED_USER_KEY: &str = "user-storage";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPermission {
    #[serde(rename = "_id", default)]
    pub id: String,
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
    #[serde(default)]
    pub is_customer: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub permission_component: Vec<UserPermission>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.full_name(),
            self.email.clone(),
            self.role.display_name().to_string(),
        ]
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub user: Option<User>,
}

/// Body of the create and update calls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub phone_number: String,
    /// Blank on update keeps the current password
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub password: String,
    pub role: UserRole,
}

impl UserForm {
    pub fn new_admin() -> Self {
        Self {
            role: UserRole::Admin,
            ..Self::default()
        }
    }

    /// Prefill from an existing user; the password is never carried over
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
            password: String::new(),
            role: user.role,
        }
    }

    /// Checks for the add form, where a password is mandatory
    pub fn validate_new(&self, permission: &Permission) -> Result<(), ValidationError> {
        self.validate_common(permission)?;
        require("Password", &self.password)?;
        self.validate_password_length()
    }

    /// Checks for the edit form
    pub fn validate_update(&self, permission: &Permission) -> Result<(), ValidationError> {
        self.validate_common(permission)?;
        if self.password.is_empty() {
            Ok(())
        } else {
            self.validate_password_length()
        }
    }

    fn validate_common(&self, permission: &Permission) -> Result<(), ValidationError> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(ValidationError::Invalid(
                "First name and last name are required".into(),
            ));
        }
        validate_email(&self.email)?;
        if !allowed_roles(permission).contains(&self.role) {
            return Err(ValidationError::Invalid(format!(
                "You are not allowed to assign the {} role",
                self.role.display_name()
            )));
        }
        Ok(())
    }

    fn validate_password_length(&self) -> Result<(), ValidationError> {
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            Err(ValidationError::TooShort {
                field: "Password",
                min: MIN_PASSWORD_LEN,
            })
        } else {
            Ok(())
        }
    }
}

/// Update takes the target as `?user_id=`
#[derive(Debug, Clone, Serialize)]
pub struct UserIdQuery<'a> {
    pub user_id: &'a str,
}

/// Roles the signed-in account may hand out on the add/edit forms
pub fn allowed_roles(permission: &Permission) -> Vec<UserRole> {
    let mut roles = Vec::new();
    if permission.can_add_admin {
        roles.push(UserRole::Admin);
    }
    if permission.can_add_superadmin {
        roles.push(UserRole::Superadmin);
    }
    roles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(role: UserRole) -> UserForm {
        UserForm {
            first_name: "Tariq".into(),
            last_name: "Mir".into(),
            email: "tariq@shop.io".into(),
            phone_number: String::new(),
            password: "secret1".into(),
            role,
        }
    }

    fn admin_only() -> Permission {
        Permission {
            can_add_admin: true,
            ..Permission::default()
        }
    }

    #[test]
    fn test_allowed_roles_follow_permissions() {
        assert!(allowed_roles(&Permission::default()).is_empty());
        assert_eq!(allowed_roles(&admin_only()), vec![UserRole::Admin]);
        let all = Permission {
            can_add_admin: true,
            can_add_superadmin: true,
            ..Permission::default()
        };
        assert_eq!(
            allowed_roles(&all),
            vec![UserRole::Admin, UserRole::Superadmin]
        );
    }

    #[test]
    fn test_new_user_validation() {
        assert!(form(UserRole::Admin).validate_new(&admin_only()).is_ok());
        assert!(form(UserRole::Superadmin)
            .validate_new(&admin_only())
            .is_err());

        let mut short = form(UserRole::Admin);
        short.password = "abc".into();
        assert_eq!(
            short.validate_new(&admin_only()),
            Err(ValidationError::TooShort {
                field: "Password",
                min: 6
            })
        );

        let mut bad_email = form(UserRole::Admin);
        bad_email.email = "tariq@shop".into();
        assert_eq!(
            bad_email.validate_new(&admin_only()),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_update_keeps_blank_password() {
        let mut edit = form(UserRole::Admin);
        edit.password.clear();
        assert!(edit.validate_update(&admin_only()).is_ok());
        let body = serde_json::to_value(&edit).unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body["role"], "admin");
    }

    #[test]
    fn test_parse_user_list() {
        let raw = r#"{"success":true,"message":"ok","users":[
            {"_id":"u1","first_name":"Ana","last_name":"Lee","email":"ana@shop.io",
             "role":"superadmin","permission_component":[{"_id":"p","can_add_admin":true}]}
        ]}"#;
        let list: UserListResponse = serde_json::from_str(raw).unwrap();
        let user = &list.users[0];
        assert_eq!(user.full_name(), "Ana Lee");
        assert_eq!(user.role, UserRole::Superadmin);
        assert!(user.permission_component[0].can_add_admin);
        assert!(user.matches_filter("ANA"));
        assert!(user.matches_filter("super"));
    }
}
