use contracts::domain::common::format_amount;
use contracts::domain::order::aggregate::{Order, OrderListParams};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::order::api;
use crate::routes::paths;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_state::create_server_list_state;
use crate::shared::list_utils::{highlight_matches, NoRecords, SearchInput};
use crate::shared::page_frame::{PageFrame, PAGE_KIND_LIST};
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

#[component]
pub fn OrdersListPage() -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let navigate = use_navigate();
    let state = create_server_list_state::<Order>();

    let load_data = move || {
        let params = state.with_untracked(|s| OrderListParams::new(s.page, s.page_size));
        state.update(|s| s.loading = true);
        let client = session.client();
        spawn_local(async move {
            match api::fetch_orders(&client, params).await {
                Ok(response) => state.update(|s| {
                    s.set_page_data(response.orders, response.pagination.into())
                }),
                Err(e) => {
                    state.update(|s| {
                        s.loading = false;
                        s.error = Some(e.to_string());
                    });
                    errors.report(e);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let on_page_change = Callback::new(move |page: usize| {
        let mut changed = false;
        state.update(|s| changed = s.go_to(page));
        if changed {
            load_data();
        }
    });

    let filter = Signal::derive(move || state.with(|s| s.query.filter().to_string()));

    view! {
        <PageFrame
            page_id="order--list"
            kind=PAGE_KIND_LIST
            title="Orders"
            subtitle="The search box filters the orders of the current page"
            actions=move || view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=Signal::derive(move || state.with(|s| s.loading))
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            }
        >
            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <div class="filter-panel">
                <SearchInput
                    value=filter
                    on_change=Callback::new(move |v: String| state.update(|s| s.set_filter(v)))
                    placeholder="Search by order number, customer or status..."
                />
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.view.page))
                    total_pages=Signal::derive(move || state.with(|s| s.view.total_pages))
                    total_count=Signal::derive(move || state.with(|s| s.view.total_count))
                    on_page_change=on_page_change
                />
            </div>

            {move || {
                if state.with(|s| s.loading && !s.is_loaded) {
                    return view! { <Spinner /> }.into_any();
                }
                if state.with(|s| s.view.is_empty()) {
                    return view! { <NoRecords /> }.into_any();
                }
                let navigate = navigate.clone();
                view! {
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Order"</TableHeaderCell>
                                    <TableHeaderCell>"Customer"</TableHeaderCell>
                                    <TableHeaderCell>"Items"</TableHeaderCell>
                                    <TableHeaderCell>"Total"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell>"Placed"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || state.with(|s| s.view.items.clone())
                                    key=|o| (o.id.clone(), o.order_status)
                                    children=move |order: Order| {
                                        let number = order.order_id.clone();
                                        let customer = order.customer_id.full_name();
                                        let email = order.customer_id.email.clone();
                                        let detail_path = paths::order_detail(&order.id);
                                        let count = order.item_count();
                                        let amount = format_amount(order.total_amount);
                                        let badge = order.order_status.badge_class();
                                        let status = order.order_status.display_name();
                                        let placed = order.created_at.as_deref().map(format_datetime).unwrap_or_default();
                                        let navigate = navigate.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {move || highlight_matches(&number, &filter.get())}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <div>{move || highlight_matches(&customer, &filter.get())}</div>
                                                        <div class="text-muted">{move || highlight_matches(&email, &filter.get())}</div>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{count}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{amount}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <span class=badge>{status}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {placed}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| navigate(&detail_path, Default::default())
                                                        attr:title="View"
                                                    >
                                                        {icon("eye")}
                                                    </Button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </div>
                }
                .into_any()
            }}
        </PageFrame>
    }
}
