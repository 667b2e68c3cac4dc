//! Route gate for the dashboard area.

use super::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const REDIRECT_PARAM: &str = "redirect";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    /// Send the visitor to the login page, remembering where they were going
    RedirectToLogin { from: String },
}

/// Everything under `/dashboard` needs a session
pub fn is_protected(path: &str) -> bool {
    path == DASHBOARD_PATH || path.starts_with("/dashboard/")
}

pub fn check(path: &str, session: &SessionState) -> GateDecision {
    if !is_protected(path) || session.is_active() {
        GateDecision::Allow
    } else {
        GateDecision::RedirectToLogin {
            from: path.to_string(),
        }
    }
}

/// `/login?redirect=...` for a blocked path
pub fn login_url(from: &str) -> String {
    format!(
        "{LOGIN_PATH}?{REDIRECT_PARAM}={}",
        urlencoding::encode(from)
    )
}

/// Where to go after a successful login. Only dashboard paths are honoured so
/// a crafted link cannot bounce the user off-site.
pub fn post_login_target(redirect: Option<&str>) -> String {
    match redirect.map(str::trim) {
        Some(path) if is_protected(path) && !path.contains("//") => path.to_string(),
        _ => DASHBOARD_PATH.to_string(),
    }
}

/// A 401 ends the session. Clears every field of `session` and returns the
/// login URL, carrying `from` when it is a dashboard path.
pub fn end_session(session: &mut SessionState, from: &str) -> String {
    session.clear();
    if is_protected(from) {
        login_url(from)
    } else {
        LOGIN_PATH.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::UserRole;
    use crate::system::auth::AuthUser;

    fn active() -> SessionState {
        SessionState::signed_in(
            AuthUser {
                email: "a@shop.io".into(),
                name: "A".into(),
                role: UserRole::Admin,
                permission: vec![],
            },
            "tok".into(),
            None,
        )
    }

    #[test]
    fn test_anonymous_is_sent_to_login() {
        let session = SessionState::default();
        assert_eq!(
            check("/dashboard/orders", &session),
            GateDecision::RedirectToLogin {
                from: "/dashboard/orders".into()
            }
        );
        assert_eq!(check("/login", &session), GateDecision::Allow);
        assert_eq!(check("/", &session), GateDecision::Allow);
        assert_eq!(check("/dashboard/orders", &active()), GateDecision::Allow);
    }

    #[test]
    fn test_prefix_must_be_a_segment() {
        assert!(is_protected("/dashboard"));
        assert!(is_protected("/dashboard/brand/add"));
        assert!(!is_protected("/dashboards"));
    }

    #[test]
    fn test_login_url_encodes_path() {
        assert_eq!(
            login_url("/dashboard/orders/a1"),
            "/login?redirect=%2Fdashboard%2Forders%2Fa1"
        );
    }

    #[test]
    fn test_end_session_clears_state() {
        let mut session = active();
        let target = end_session(&mut session, "/dashboard/orders?page=2");
        assert_eq!(target, "/login?redirect=%2Fdashboard%2Forders%3Fpage%3D2");
        assert!(session.user.is_none());
        assert!(session.token.is_none());
        assert!(session.refresh_token.is_none());
        assert!(session.role.is_none());
        assert!(!session.is_authenticated);
        assert!(!session.is_active());
    }

    #[test]
    fn test_end_session_outside_dashboard() {
        let mut session = active();
        assert_eq!(end_session(&mut session, "/login"), LOGIN_PATH);
        assert_eq!(session, SessionState::default());
    }

    #[test]
    fn test_post_login_target() {
        assert_eq!(post_login_target(None), "/dashboard");
        assert_eq!(
            post_login_target(Some("/dashboard/orders")),
            "/dashboard/orders"
        );
        assert_eq!(post_login_target(Some("https://evil.test")), "/dashboard");
        assert_eq!(post_login_target(Some("/dashboard//evil")), "/dashboard");
        assert_eq!(post_login_target(Some("/login")), "/dashboard");
    }
}
