//! Session state owned by the dashboard shell.
//!
//! `anonymous -> authenticated` on login, `authenticated -> anonymous` on
//! logout or on any 401. The refresh token is kept but never used for renewal.

use serde::{Deserialize, Serialize};

use super::{AuthUser, Capability};
use crate::enums::UserRole;

/// localStorage key of the persisted session
pub const SESSION_STORAGE_KEY: &str = "auth-storage";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    Authenticated,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionState {
    pub user: Option<AuthUser>,
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub role: Option<UserRole>,
    pub is_authenticated: bool,
}

impl SessionState {
    pub fn signed_in(user: AuthUser, token: String, refresh_token: Option<String>) -> Self {
        let mut state = Self::default();
        state.sign_in(user, token, refresh_token);
        state
    }

    pub fn sign_in(&mut self, user: AuthUser, token: String, refresh_token: Option<String>) {
        self.role = Some(user.role);
        self.user = Some(user);
        self.token = Some(token);
        self.refresh_token = refresh_token;
        self.is_authenticated = true;
    }

    /// Drop every session field
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_authenticated && self.token.as_deref().is_some_and(|t| !t.is_empty()) {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase() == SessionPhase::Authenticated
    }

    /// Value of the `Authorization` header, if a token is present
    pub fn bearer(&self) -> Option<String> {
        self.token
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bearer {t}"))
    }

    /// UI affordance check. Not a security boundary.
    pub fn can(&self, capability: Capability) -> bool {
        self.user.as_ref().is_some_and(|u| u.can(capability))
    }

    /// Restore a persisted session. Corrupt or half-written data yields an
    /// anonymous session.
    pub fn from_storage(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match serde_json::from_str::<SessionState>(raw) {
            Ok(state) if state.is_active() => state,
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::Permission;

    fn admin() -> AuthUser {
        AuthUser {
            email: "admin@shop.io".into(),
            name: "Admin".into(),
            role: UserRole::Admin,
            permission: vec![Permission {
                can_delete_records: true,
                ..Permission::default()
            }],
        }
    }

    #[test]
    fn test_sign_in_then_clear() {
        let mut session = SessionState::default();
        assert_eq!(session.phase(), SessionPhase::Anonymous);

        session.sign_in(admin(), "t0k".into(), Some("r3f".into()));
        assert_eq!(session.phase(), SessionPhase::Authenticated);
        assert_eq!(session.role, Some(UserRole::Admin));
        assert_eq!(session.bearer().as_deref(), Some("Bearer t0k"));
        assert!(session.can(Capability::DeleteRecords));
        assert!(!session.can(Capability::AddAdmin));

        session.clear();
        assert!(session.user.is_none());
        assert!(session.token.is_none());
        assert!(session.refresh_token.is_none());
        assert!(session.role.is_none());
        assert!(!session.is_authenticated);
        assert_eq!(session.bearer(), None);
    }

    #[test]
    fn test_storage_roundtrip() {
        let session = SessionState::signed_in(admin(), "t0k".into(), None);
        let raw = serde_json::to_string(&session).unwrap();
        assert!(raw.contains("\"isAuthenticated\":true"));
        assert_eq!(SessionState::from_storage(Some(&raw)), session);
    }

    #[test]
    fn test_corrupt_storage_is_anonymous() {
        assert_eq!(SessionState::from_storage(Some("{not json")), SessionState::default());
        assert_eq!(SessionState::from_storage(None), SessionState::default());
        let no_token = r#"{"isAuthenticated":true,"token":null}"#;
        assert!(!SessionState::from_storage(Some(no_token)).is_active());
    }
}
