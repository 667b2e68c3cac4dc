use contracts::domain::common::format_amount;
use contracts::domain::inventory::aggregate::{InventoryBill, PageParams};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::page::InventoryContext;
use crate::domain::inventory::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::list_utils::NoRecords;
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

#[component]
pub fn RecentBills(ctx: InventoryContext) -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();

    let bills: RwSignal<Vec<InventoryBill>> = RwSignal::new(Vec::new());
    let page = RwSignal::new(1usize);
    let total_pages = RwSignal::new(1usize);
    let total_count = RwSignal::new(0usize);
    let loading = RwSignal::new(false);

    // Reloads on page change and after a bill was saved
    Effect::new(move |_| {
        ctx.bills_version.track();
        let params = PageParams {
            page: page.get(),
            limit: config().page_size,
        };
        loading.set(true);
        let client = session.client();
        spawn_local(async move {
            let result = api::fetch_bills(&client, params).await;
            loading.set(false);
            match result {
                Ok(response) => {
                    total_pages.set(response.total_pages.max(1));
                    total_count.set(response.total_bills);
                    bills.set(response.data);
                }
                Err(e) => errors.report(e),
            }
        });
    });

    view! {
        <section class="panel">
            <div class="panel__header">
                <h2 class="panel__title">"Recent bills"</h2>
            </div>
            {move || {
                if loading.get() && bills.with(Vec::is_empty) {
                    return view! { <Spinner /> }.into_any();
                }
                if bills.with(Vec::is_empty) {
                    return view! { <NoRecords message="No bills yet" /> }.into_any();
                }
                view! {
                    <ul class="bill-list">
                        <For
                            each=move || bills.get()
                            key=|b| b.id.clone()
                            children=move |bill: InventoryBill| {
                                let id = bill.id.clone();
                                let active = bill.id.clone();
                                view! {
                                    <li
                                        class="bill-list__item"
                                        class:bill-list__item--active=move || {
                                            ctx.selected_bill.with(|s| s.as_deref() == Some(active.as_str()))
                                        }
                                    >
                                        <div>
                                            <strong>{bill.bill_number.clone()}</strong>
                                            <div class="text-muted">
                                                {format!("{} · {} items", bill.date_only(), bill.items_count)}
                                            </div>
                                        </div>
                                        <span class="bill-list__amount">{format_amount(bill.total_amount)}</span>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| ctx.selected_bill.set(Some(id.clone()))
                                            attr:title="View bill"
                                        >
                                            {icon("eye")}
                                        </Button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                }
                .into_any()
            }}
            <PaginationControls
                current_page=page
                total_pages=total_pages
                total_count=total_count
                on_page_change=Callback::new(move |p: usize| page.set(p.clamp(1, total_pages.get_untracked())))
            />
        </section>
    }
}
