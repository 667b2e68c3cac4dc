use contracts::system::auth::gate::{self, GateDecision};
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::context::use_session;

/// Renders `children` only with an active session; otherwise redirects to
/// the login page carrying the requested path.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();

    let allowed = Memo::new(move |_| {
        // Track the session so a logout elsewhere re-evaluates the gate
        let _ = session.is_active();
        let path = location.pathname.get();
        gate::check(&path, &session.snapshot()) == GateDecision::Allow
    });

    let to_login = move || {
        let from = format!(
            "{}{}",
            location.pathname.get_untracked(),
            location.search.get_untracked()
        );
        view! { <Redirect path=gate::login_url(&from) /> }
    };

    view! {
        <Show when=move || allowed.get() fallback=to_login>
            {children()}
        </Show>
    }
}
