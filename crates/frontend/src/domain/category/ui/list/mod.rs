use contracts::domain::category::aggregate::{Category, SELECTED_CATEGORY_KEY};
use contracts::system::auth::Capability;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::category::api;
use crate::routes::paths;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_state::create_list_state;
use crate::shared::list_utils::{highlight_matches, NoRecords, SearchInput};
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_KIND_LIST};
use crate::shared::selection_store::SelectionStore;
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

pub const SELECTED_CATEGORY: SelectionStore<Category> = SelectionStore::new(SELECTED_CATEGORY_KEY);

#[component]
pub fn CategoriesListPage() -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let notifications = use_notifications();
    let navigate = use_navigate();
    let state = create_list_state::<Category>();

    let pending_delete: RwSignal<Option<Category>> = RwSignal::new(None);
    let confirm_open = RwSignal::new(false);

    let load_data = move || {
        state.update(|s| s.loading = true);
        let client = session.client();
        spawn_local(async move {
            match api::fetch_categories(&client).await {
                Ok(categories) => state.update(|s| s.set_items(categories)),
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

    let delete_selected = move |_| {
        let Some(category) = pending_delete.get_untracked() else {
            return;
        };
        let client = session.client();
        spawn_local(async move {
            match api::delete_category(&client, &category.category_id).await {
                Ok(_) => {
                    notifications.success("Category deleted", category.category_name);
                    load_data();
                }
                Err(e) => errors.report(e),
            }
        });
    };

    let can_add = Signal::derive(move || session.can(Capability::AddRecords));
    let can_update = Signal::derive(move || session.can(Capability::UpdateRecords));
    let can_delete = Signal::derive(move || session.can(Capability::DeleteRecords));
    let filter = Signal::derive(move || state.with(|s| s.query.filter().to_string()));

    let go_add = {
        let navigate = navigate.clone();
        move |_| navigate(paths::CATEGORY_ADD, Default::default())
    };

    view! {
        <PageFrame
            page_id="category--list"
            kind=PAGE_KIND_LIST
            title="Categories"
            actions=move || view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=go_add.clone()
                    disabled=Signal::derive(move || !can_add.get())
                >
                    {icon("plus")}
                    " Add category"
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
                    placeholder="Search categories..."
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
                                    <TableHeaderCell>"Category"</TableHeaderCell>
                                    <TableHeaderCell>"Subcategories"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || state.with(|s| s.view.items.clone())
                                    key=|c| c.category_id.clone()
                                    children=move |category: Category| {
                                        let name = category.category_name.clone();
                                        let thumb = category.category_logo.clone();
                                        let alt = category.category_name.clone();
                                        let subcategories = category.total_subcategories;
                                        let for_edit = category.clone();
                                        let for_delete = category.clone();
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
                                                    <TableCellLayout>{subcategories}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        disabled=Signal::derive(move || !can_update.get())
                                                        on_click=move |_| {
                                                            SELECTED_CATEGORY.select(&for_edit);
                                                            navigate(paths::CATEGORY_EDIT, Default::default());
                                                        }
                                                        attr:title="Edit"
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        disabled=Signal::derive(move || !can_delete.get())
                                                        on_click=move |_| {
                                                            pending_delete.set(Some(for_delete.clone()));
                                                            confirm_open.set(true);
                                                        }
                                                        attr:title="Delete"
                                                    >
                                                        {icon("trash")}
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

            <ConfirmDialog
                open=confirm_open
                title="Delete category"
                message=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|c| format!("Delete {} and its subcategories? This cannot be undone.", c.category_name))
                        .unwrap_or_default()
                })
                on_confirm=Callback::new(delete_selected)
            />
        </PageFrame>
    }
}
