use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use super::view_model::CategoryDetailsViewModel;
use crate::routes::paths;
use crate::shared::components::file_input::ImageInput;
use crate::shared::components::form_field::TextField;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_KIND_FORM};
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

#[component]
pub fn CategoryAddPage() -> impl IntoView {
    let vm = CategoryDetailsViewModel::new();
    view! {
        <PageFrame page_id="category--add" kind=PAGE_KIND_FORM title="Add category" back=paths::CATEGORIES>
            <CategoryFormBody vm=vm />
        </PageFrame>
    }
}

#[component]
pub fn CategoryEditPage() -> impl IntoView {
    let vm = CategoryDetailsViewModel::new();
    let found = vm.load_selected().is_some();
    view! {
        <PageFrame page_id="category--edit" kind=PAGE_KIND_FORM title="Edit category" back=paths::CATEGORIES>
            {if found {
                view! { <CategoryFormBody vm=vm /> }.into_any()
            } else {
                view! {
                    <MessageBar intent=MessageBarIntent::Warning>
                        <MessageBarBody>"No category selected. Pick one from the category list."</MessageBarBody>
                    </MessageBar>
                }.into_any()
            }}
        </PageFrame>
    }
}

#[component]
fn CategoryFormBody(vm: CategoryDetailsViewModel) -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let current_logo = vm
        .editing
        .with_untracked(|c| c.as_ref().map(|c| c.category_logo.clone()));

    let on_saved = {
        let navigate = navigate.clone();
        Callback::new(move |_| {
            let title = if vm.is_edit_mode() { "Category updated" } else { "Category created" };
            notifications.success(title, vm.form.with_untracked(|f| f.category_name.clone()));
            navigate(paths::CATEGORIES, Default::default());
        })
    };

    view! {
        <div class="details-form">
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <TextField
                label="Category name"
                required=true
                placeholder="e.g. Footwear"
                value=Signal::derive(move || vm.form.with(|f| f.category_name.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.category_name = v))
            />
            <ImageInput
                label="Category logo"
                file=vm.logo
                current_url=current_logo
                required=!vm.is_edit_mode()
            />

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| navigate(paths::CATEGORIES, Default::default())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.saving.get())
                    on_click=move |_| vm.save_command(session, errors, on_saved)
                >
                    {icon("check")}
                    {move || if vm.saving.get() { " Saving..." } else { " Save" }}
                </Button>
            </div>
        </div>
    }
}
