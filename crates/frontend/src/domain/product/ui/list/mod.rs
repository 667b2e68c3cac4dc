use contracts::domain::common::format_amount;
use contracts::domain::product::aggregate::{Product, SELECTED_PRODUCT_KEY};
use contracts::system::auth::Capability;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::product::api;
use crate::routes::paths;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_state::create_list_state;
use crate::shared::list_utils::{highlight_matches, NoRecords, SearchInput};
use crate::shared::page_frame::{PageFrame, PAGE_KIND_LIST};
use crate::shared::selection_store::SelectionStore;
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

pub const SELECTED_PRODUCT: SelectionStore<Product> = SelectionStore::new(SELECTED_PRODUCT_KEY);

fn badge_class(badge: &str) -> &'static str {
    match badge {
        "New" => "badge badge--new",
        "Sale" => "badge badge--sale",
        _ => "badge badge--featured",
    }
}

#[component]
pub fn ProductsListPage() -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let navigate = use_navigate();
    let state = create_list_state::<Product>();

    let load_data = move || {
        state.update(|s| s.loading = true);
        let client = session.client();
        spawn_local(async move {
            match api::fetch_products(&client).await {
                Ok(products) => state.update(|s| s.set_items(products)),
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

    let can_add = Signal::derive(move || session.can(Capability::AddRecords));
    let can_update = Signal::derive(move || session.can(Capability::UpdateRecords));
    let filter = Signal::derive(move || state.with(|s| s.query.filter().to_string()));

    let go_add = {
        let navigate = navigate.clone();
        move |_| navigate(paths::PRODUCT_ADD, Default::default())
    };

    view! {
        <PageFrame
            page_id="product--list"
            kind=PAGE_KIND_LIST
            title="Products"
            actions=move || view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=go_add.clone()
                    disabled=Signal::derive(move || !can_add.get())
                >
                    {icon("plus")}
                    " Add product"
                </Button>
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
                    placeholder="Search by name, brand, category or manufacturer..."
                />
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.view.page))
                    total_pages=Signal::derive(move || state.with(|s| s.view.total_pages))
                    total_count=Signal::derive(move || state.with(|s| s.view.total_count))
                    on_page_change=Callback::new(move |p| state.update(|s| s.set_page(p)))
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
                                    <TableHeaderCell>""</TableHeaderCell>
                                    <TableHeaderCell>"Product"</TableHeaderCell>
                                    <TableHeaderCell>"Brand"</TableHeaderCell>
                                    <TableHeaderCell>"Category"</TableHeaderCell>
                                    <TableHeaderCell>"Price"</TableHeaderCell>
                                    <TableHeaderCell>"Discount"</TableHeaderCell>
                                    <TableHeaderCell>"Final"</TableHeaderCell>
                                    <TableHeaderCell>"Created"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || state.with(|s| s.view.items.clone())
                                    key=|p| p.id.clone()
                                    children=move |product: Product| {
                                        let name = product.product_name.clone();
                                        let brand = product.product_brand.clone();
                                        let category = format!(
                                            "{} / {}",
                                            product.product_category, product.product_sub_category
                                        );
                                        let badges = product.badges();
                                        let edit_path = paths::product_edit(&product.id);
                                        let thumb = product.avatar.clone();
                                        let alt = product.product_name.clone();
                                        let price = format_amount(product.product_price);
                                        let discount = format!("{}%", product.discount_percentage);
                                        let final_price = format_amount(product.final_price);
                                        let added = product.created_at.as_deref().map(format_date).unwrap_or_default();
                                        let for_edit = product.clone();
                                        let navigate = navigate.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <img class="table-thumb" src=thumb alt=alt />
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {move || highlight_matches(&name, &filter.get())}
                                                        {badges
                                                            .into_iter()
                                                            .map(|b| view! { <span class=badge_class(b)>{b}</span> })
                                                            .collect_view()}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {move || highlight_matches(&brand, &filter.get())}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {move || highlight_matches(&category, &filter.get())}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{price}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{discount}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{final_price}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {added}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        disabled=Signal::derive(move || !can_update.get())
                                                        on_click=move |_| {
                                                            SELECTED_PRODUCT.select(&for_edit);
                                                            navigate(&edit_path, Default::default());
                                                        }
                                                        attr:title="Edit"
                                                    >
                                                        {icon("edit")}
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_classes() {
        assert_eq!(badge_class("New"), "badge badge--new");
        assert_eq!(badge_class("Sale"), "badge badge--sale");
        assert_eq!(badge_class("Featured"), "badge badge--featured");
    }
}
