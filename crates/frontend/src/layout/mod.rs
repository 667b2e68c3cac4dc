pub mod left;
pub mod top_header;

use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Outlet;
use top_header::TopHeader;

use crate::system::auth::api;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireSession;
use crate::system::auth::policy::use_api_errors;

/// Visibility of the collapsible zones
#[derive(Clone, Copy)]
pub struct LayoutState {
    pub left_open: RwSignal<bool>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|v| *v = !*v);
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

/// Dashboard shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Outlet              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    provide_context(LayoutState::new());

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Left>
                    <left::sidebar::Sidebar />
                </left::Left>
                <div class="app-main">
                    <Outlet />
                </div>
            </div>
        </div>
    }
}

/// Everything under `/dashboard`: gate first, then the shell
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();

    // Refresh the stored profile; a dead token surfaces here as a 401
    Effect::new(move |_| {
        if !session.snapshot().is_active() {
            return;
        }
        let client = session.client();
        spawn_local(async move {
            match api::me(&client).await {
                Ok(user) => session.update_user(user),
                Err(ApiError::Unauthenticated) => errors.report(ApiError::Unauthenticated),
                Err(e) => log::warn!("profile refresh failed: {e}"),
            }
        });
    });

    view! {
        <RequireSession>
            <Shell />
        </RequireSession>
    }
}
