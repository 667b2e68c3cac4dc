use contracts::domain::brand::aggregate::{Brand, SELECTED_BRAND_KEY};
use contracts::system::auth::Capability;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::brand::api;
use crate::routes::paths;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_state::create_list_state;
use crate::shared::list_utils::{highlight_matches, NoRecords, SearchInput};
use crate::shared::page_frame::{PageFrame, PAGE_KIND_LIST};
use crate::shared::selection_store::SelectionStore;
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

pub const SELECTED_BRAND: SelectionStore<Brand> = SelectionStore::new(SELECTED_BRAND_KEY);

#[component]
pub fn BrandsListPage() -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let navigate = use_navigate();
    let state = create_list_state::<Brand>();

    let load_data = move || {
        state.update(|s| s.loading = true);
        let client = session.client();
        spawn_local(async move {
            match api::fetch_brands(&client).await {
                Ok(brands) => state.update(|s| s.set_items(brands)),
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
        move |_| navigate(paths::BRAND_ADD, Default::default())
    };

    view! {
        <PageFrame
            page_id="brand--list"
            kind=PAGE_KIND_LIST
            title="Brands"
            actions=move || view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=go_add.clone()
                    disabled=Signal::derive(move || !can_add.get())
                >
                    {icon("plus")}
                    " Add brand"
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
                    placeholder="Search brands..."
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
                                    <TableHeaderCell>"Logo"</TableHeaderCell>
                                    <TableHeaderCell>"Brand"</TableHeaderCell>
                                    <TableHeaderCell>"Products"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || state.with(|s| s.view.items.clone())
                                    key=|b| b.brand_id.clone()
                                    children=move |brand: Brand| {
                                        let name = brand.brand_name.clone();
                                        let thumb = brand.brand_logo.clone();
                                        let alt = brand.brand_name.clone();
                                        let products = brand.total_products;
                                        let for_edit = brand.clone();
                                        let navigate = navigate.clone();
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
                                                    <TableCellLayout>{products}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        disabled=Signal::derive(move || !can_update.get())
                                                        on_click=move |_| {
                                                            SELECTED_BRAND.select(&for_edit);
                                                            navigate(paths::BRAND_EDIT, Default::default());
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
