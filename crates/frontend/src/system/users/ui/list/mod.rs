use contracts::system::auth::Capability;
use contracts::system::users::{User, SELECTED_USER_KEY};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::routes::paths;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_state::create_list_state;
use crate::shared::list_utils::{highlight_matches, NoRecords, SearchInput};
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_KIND_LIST};
use crate::shared::selection_store::SelectionStore;
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;
use crate::system::users::api;

pub const SELECTED_USER: SelectionStore<User> = SelectionStore::new(SELECTED_USER_KEY);

#[component]
pub fn UsersListPage() -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let notifications = use_notifications();
    let navigate = use_navigate();
    let state = create_list_state::<User>();

    let pending_delete: RwSignal<Option<User>> = RwSignal::new(None);
    let confirm_open = RwSignal::new(false);

    let load_data = move || {
        state.update(|s| s.loading = true);
        let client = session.client();
        spawn_local(async move {
            match api::fetch_users(&client).await {
                Ok(users) => state.update(|s| s.set_items(users)),
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
        let Some(user) = pending_delete.get_untracked() else {
            return;
        };
        let client = session.client();
        spawn_local(async move {
            match api::delete_user(&client, &user.id).await {
                Ok(_) => {
                    notifications.success("User deleted", user.full_name());
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
        move |_| navigate(paths::USER_ADD, Default::default())
    };

    view! {
        <PageFrame
            page_id="user--list"
            kind=PAGE_KIND_LIST
            title="Users"
            subtitle="Administrators of the store"
            actions=move || view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=go_add.clone()
                    disabled=Signal::derive(move || !can_add.get())
                >
                    {icon("plus")}
                    " Add user"
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
                    placeholder="Search by name, email or role..."
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
                                    <TableHeaderCell>"Name"</TableHeaderCell>
                                    <TableHeaderCell>"Email"</TableHeaderCell>
                                    <TableHeaderCell>"Phone"</TableHeaderCell>
                                    <TableHeaderCell>"Role"</TableHeaderCell>
                                    <TableHeaderCell>"Created"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || state.with(|s| s.view.items.clone())
                                    key=|u| u.id.clone()
                                    children=move |user: User| {
                                        let name = user.full_name();
                                        let email = user.email.clone();
                                        let phone = user.phone_number.clone().unwrap_or_else(|| "-".into());
                                        let role_class = format!("badge badge--{}", user.role.code());
                                        let role = user.role.display_name();
                                        let created = user.created_at.as_deref().map(format_date).unwrap_or_default();
                                        let for_edit = user.clone();
                                        let for_delete = user.clone();
                                        let navigate = navigate.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {move || highlight_matches(&name, &filter.get())}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {move || highlight_matches(&email, &filter.get())}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {phone}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class=role_class>
                                                            {role}
                                                        </span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {created}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        disabled=Signal::derive(move || !can_update.get())
                                                        on_click=move |_| {
                                                            SELECTED_USER.select(&for_edit);
                                                            navigate(paths::USER_EDIT, Default::default());
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
                title="Delete user"
                message=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|u| format!("Delete {}? This cannot be undone.", u.full_name()))
                        .unwrap_or_default()
                })
                on_confirm=Callback::new(delete_selected)
            />
        </PageFrame>
    }
}
