use contracts::domain::inventory::aggregate::{InventoryItem, PageParams};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::inventory::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_state::create_server_list_state;
use crate::shared::list_utils::{highlight_matches, NoRecords, SearchInput};
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

/// Current stock, paged on the server
#[component]
pub fn StockList() -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let state = create_server_list_state::<InventoryItem>();

    let load_data = move || {
        let params = state.with_untracked(|s| PageParams {
            page: s.page,
            limit: s.page_size,
        });
        state.update(|s| s.loading = true);
        let client = session.client();
        spawn_local(async move {
            match api::fetch_inventory(&client, params).await {
                Ok(response) => {
                    let server = response.server_page();
                    state.update(|s| s.set_page_data(response.data, server));
                }
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
        <section class="panel">
            <div class="panel__header">
                <h2 class="panel__title">"Stock"</h2>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| load_data()
                    disabled=Signal::derive(move || state.with(|s| s.loading))
                    attr:title="Refresh"
                >
                    {icon("refresh")}
                </Button>
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=filter
                    on_change=Callback::new(move |v: String| state.update(|s| s.set_filter(v)))
                    placeholder="Search by product, code or status..."
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
                view! {
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>""</TableHeaderCell>
                                    <TableHeaderCell>"Product"</TableHeaderCell>
                                    <TableHeaderCell>"Code"</TableHeaderCell>
                                    <TableHeaderCell>"Stock"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell>"Added"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || state.with(|s| s.view.items.clone())
                                    key=|i| (i.id.clone(), i.product_stock)
                                    children=move |item: InventoryItem| {
                                        let name = item.product_name.clone();
                                        let code = item.product_code.clone();
                                        let thumb = item.product_url.clone();
                                        let alt = item.product_name.clone();
                                        let qty = format!("{} {}", item.product_stock, item.dimension_name);
                                        let badge = item.stock_badge_class();
                                        let status = item.stock_status.clone();
                                        let added = item.created_at.as_deref().map(format_date).unwrap_or_default();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <img class="table-thumb" src=thumb alt=alt />
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {move || highlight_matches(&name, &filter.get())}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {move || highlight_matches(&code, &filter.get())}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {qty}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <span class=badge>{status}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {added}
                                                    </TableCellLayout>
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
        </section>
    }
}
