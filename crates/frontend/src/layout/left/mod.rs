pub mod sidebar;

use leptos::prelude::*;

use super::LayoutState;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let layout = use_context::<LayoutState>().expect("LayoutState not provided in context");

    view! {
        <div data-zone="left" class="left" class:hidden=move || !layout.left_open.get()>
            {children()}
        </div>
    }
}
