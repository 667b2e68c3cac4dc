use leptos::prelude::*;
use leptos_router::components::A;

use contracts::system::auth::gate::DASHBOARD_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href=DASHBOARD_PATH>"Back to dashboard"</A>
        </div>
    }
}
