use contracts::dashboards::summary::dto::{DashboardData, StatCard};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::dashboards::home::api;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_KIND_DASHBOARD};
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

/// Record counts of the store, one card per entity
#[component]
pub fn DashboardHome() -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();

    let data: RwSignal<Option<DashboardData>> = RwSignal::new(None);
    let loading = RwSignal::new(false);

    let load_data = move || {
        loading.set(true);
        let client = session.client();
        spawn_local(async move {
            let result = api::fetch_summary(&client).await;
            loading.set(false);
            match result {
                Ok(summary) => data.set(Some(summary)),
                Err(e) => {
                    log::error!("dashboard summary failed: {e}");
                    errors.report(e);
                }
            }
        });
    };
    load_data();

    let greeting = session
        .user()
        .map(|u| format!("Welcome back, {}", u.display_name()));

    view! {
        <PageFrame
            page_id="dashboard--home"
            kind=PAGE_KIND_DASHBOARD
            title="Dashboard"
            subtitle=greeting.unwrap_or_else(|| "Store overview".to_string())
            actions=move || view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            }
        >
            {move || match data.get() {
                None if loading.get() => view! { <Spinner /> }.into_any(),
                // Zeros until the first answer, so the layout does not jump
                summary => view! {
                    <div class="stat-grid">
                        {summary
                            .unwrap_or_default()
                            .cards()
                            .into_iter()
                            .map(|card| view! { <StatCardView card=card /> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </PageFrame>
    }
}

#[component]
fn StatCardView(card: StatCard) -> impl IntoView {
    view! {
        <A href=card.link attr:class="stat-card">
            <span class="stat-card__icon">{icon(card.icon)}</span>
            <span class="stat-card__value">{card.value}</span>
            <span class="stat-card__label">{card.label}</span>
        </A>
    }
}
