//! PageFrame: root wrapper of every dashboard page.
//!
//! Sets `id` to `"{entity}--{kind}"` (e.g. `"brand--list"`) and
//! `data-page-kind` on the root element, plus the header row with title,
//! optional back link and actions.

use leptos::prelude::*;
use leptos_router::components::A;

use super::icons::icon;

pub const PAGE_KIND_LIST: &str = "list";
pub const PAGE_KIND_FORM: &str = "form";
pub const PAGE_KIND_DETAIL: &str = "detail";
pub const PAGE_KIND_DASHBOARD: &str = "dashboard";

#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// One of the PAGE_KIND_* constants
    kind: &'static str,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Target of the back arrow, for add/edit pages
    #[prop(optional)]
    back: Option<&'static str>,
    #[prop(optional, into)] actions: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    let class = match kind {
        PAGE_KIND_FORM => "page page--form",
        PAGE_KIND_DETAIL => "page page--detail",
        PAGE_KIND_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-kind=kind>
            <div class="page__header">
                <div class="page__header-left">
                    {back.map(|href| view! {
                        <A href=href attr:class="page__back" attr:title="Back">
                            {icon("arrow-left")}
                        </A>
                    })}
                    <div>
                        <h1 class="page__title">{title}</h1>
                        {subtitle.map(|s| view! { <p class="page__subtitle">{s}</p> })}
                    </div>
                </div>
                <div class="page__header-right">
                    {actions.map(|a| a.run())}
                </div>
            </div>
            <div class="page__content">
                {children()}
            </div>
        </div>
    }
}
