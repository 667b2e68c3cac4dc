//! TopHeader: brand, sidebar toggle, signed-in account and logout.

use contracts::system::auth::gate::LOGIN_PATH;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::LayoutState;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::icons::icon;
use crate::system::auth::api;
use crate::system::auth::context::use_session;

#[component]
pub fn TopHeader() -> impl IntoView {
    let layout = use_context::<LayoutState>().expect("LayoutState not provided in context");
    let session = use_session();
    let navigate = use_navigate();
    let confirm_logout = RwSignal::new(false);

    // The server call is best effort; local state is cleared regardless
    let logout = move |_| {
        let client = session.client();
        session.end();
        navigate(LOGIN_PATH, Default::default());
        spawn_local(async move {
            if let Err(e) = api::logout(&client).await {
                log::warn!("logout call failed: {e}");
            }
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| layout.toggle_left()
                    title=move || if layout.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("layers")}
                </button>
                <span class="top-header__title">"Store Admin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span class="top-header__avatar">
                        {move || session.user().map(|u| u.initials()).unwrap_or_default()}
                    </span>
                    <div class="top-header__user-info">
                        <span>
                            {move || session.user()
                                .map(|u| u.display_name().to_string())
                                .unwrap_or_else(|| "Guest".to_string())}
                        </span>
                        <small>
                            {move || session.user().map(|u| u.role.display_name()).unwrap_or_default()}
                        </small>
                    </div>
                </div>

                <button class="top-header__icon-btn" on:click=move |_| confirm_logout.set(true) title="Log out">
                    {icon("log-out")}
                </button>
            </div>

            <ConfirmDialog
                open=confirm_logout
                title="Log out"
                message=Signal::derive(|| "Are you sure you want to log out?".to_string())
                confirm_label="Log out"
                on_confirm=Callback::new(logout)
            />
        </div>
    }
}
