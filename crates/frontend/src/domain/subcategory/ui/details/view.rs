use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use super::view_model::SubCategoryDetailsViewModel;
use crate::routes::paths;
use crate::shared::components::file_input::ImageInput;
use crate::shared::components::form_field::{SelectField, TextField};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_KIND_FORM};
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

#[component]
pub fn SubCategoryAddPage() -> impl IntoView {
    let vm = SubCategoryDetailsViewModel::new();
    vm.load_categories(use_session(), use_api_errors());
    view! {
        <PageFrame page_id="subcategory--add" kind=PAGE_KIND_FORM title="Add subcategory" back=paths::SUBCATEGORIES>
            <SubCategoryFormBody vm=vm />
        </PageFrame>
    }
}

#[component]
pub fn SubCategoryEditPage() -> impl IntoView {
    let vm = SubCategoryDetailsViewModel::new();
    let found = vm.load_selected().is_some();
    view! {
        <PageFrame page_id="subcategory--edit" kind=PAGE_KIND_FORM title="Edit subcategory" back=paths::SUBCATEGORIES>
            {if found {
                view! { <SubCategoryFormBody vm=vm /> }.into_any()
            } else {
                view! {
                    <MessageBar intent=MessageBarIntent::Warning>
                        <MessageBarBody>"No subcategory selected. Pick one from the subcategory list."</MessageBarBody>
                    </MessageBar>
                }.into_any()
            }}
        </PageFrame>
    }
}

#[component]
fn SubCategoryFormBody(vm: SubCategoryDetailsViewModel) -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let is_edit = vm.is_edit_mode();
    let current_logo = vm
        .editing
        .with_untracked(|s| s.as_ref().map(|s| s.sub_category_logo.clone()));
    let parent_name = vm
        .editing
        .with_untracked(|s| s.as_ref().map(|s| s.category_name.clone()))
        .unwrap_or_default();

    let on_saved = {
        let navigate = navigate.clone();
        Callback::new(move |_| {
            let title = if vm.is_edit_mode() { "Subcategory updated" } else { "Subcategory created" };
            notifications.success(title, vm.form.with_untracked(|f| f.sub_category_name.clone()));
            navigate(paths::SUBCATEGORIES, Default::default());
        })
    };

    view! {
        <div class="details-form">
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <TextField
                label="Subcategory name"
                required=true
                placeholder="e.g. Running shoes"
                value=Signal::derive(move || vm.form.with(|f| f.sub_category_name.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.sub_category_name = v))
            />
            // The parent cannot be changed after creation
            {if is_edit {
                view! {
                    <TextField
                        label="Parent category"
                        value=Signal::derive(move || parent_name.clone())
                        on_input=Callback::new(|_: String| {})
                        disabled=Signal::derive(|| true)
                    />
                }.into_any()
            } else {
                view! {
                    <SelectField
                        label="Parent category"
                        required=true
                        placeholder="Select a category"
                        value=Signal::derive(move || vm.form.with(|f| f.category_id.clone()))
                        on_change=Callback::new(move |v| vm.form.update(|f| f.category_id = v))
                        options=vm.category_options
                    />
                }.into_any()
            }}
            <ImageInput
                label="Subcategory logo"
                file=vm.logo
                current_url=current_logo
                required=!is_edit
            />

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| navigate(paths::SUBCATEGORIES, Default::default())
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
