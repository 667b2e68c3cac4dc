use contracts::system::auth::gate;
use contracts::system::auth::session::SessionState;
use contracts::system::auth::{AuthUser, Capability, LoginResponse, Permission};
use leptos::prelude::*;

use super::storage;
use crate::shared::api_utils::ApiClient;

/// The signed-in account. Created once by `App`, handed down via context,
/// mirrored to localStorage on every change.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    /// Pick up the session persisted by an earlier visit
    pub fn restore() -> Self {
        let state = storage::load_session();
        if state.is_active() {
            log::info!("session restored");
        }
        Self {
            state: RwSignal::new(state),
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.with(|s| s.is_active())
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.state.with(|s| s.user.clone())
    }

    pub fn permissions(&self) -> Permission {
        self.state
            .with(|s| s.user.as_ref().map(|u| u.permissions()).unwrap_or_default())
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.state.with(|s| s.can(capability))
    }

    /// anonymous -> authenticated
    pub fn sign_in(&self, response: LoginResponse) {
        self.state.update(|s| {
            s.sign_in(response.user, response.token, response.refresh_token);
            storage::save_session(s);
        });
        log::info!("signed in");
    }

    /// Replace the profile, keeping the token
    pub fn update_user(&self, user: AuthUser) {
        self.state.update(|s| {
            if s.is_active() {
                s.role = Some(user.role);
                s.user = Some(user);
                storage::save_session(s);
            }
        });
    }

    /// authenticated -> anonymous, on logout or 401
    pub fn end(&self) {
        if self.state.with_untracked(|s| !s.is_active()) {
            return;
        }
        self.state.update(SessionState::clear);
        storage::clear_session();
        log::info!("session ended");
    }

    /// A 401 arrived while on `from`. Returns the login URL to go to.
    pub fn expire(&self, from: &str) -> String {
        let mut target = String::new();
        self.state.update(|s| target = gate::end_session(s, from));
        storage::clear_session();
        log::info!("session expired");
        target
    }

    /// HTTP client carrying the current token
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.state.with_untracked(|s| s.bearer()))
    }
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not provided in context")
}
