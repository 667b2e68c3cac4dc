use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use super::view_model::UserDetailsViewModel;
use crate::routes::paths;
use crate::shared::components::form_field::{SelectField, TextField};
use crate::shared::components::password_strength::PasswordStrengthMeter;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_KIND_FORM};
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

#[component]
pub fn UserAddPage() -> impl IntoView {
    let vm = UserDetailsViewModel::new();
    view! {
        <PageFrame page_id="user--add" kind=PAGE_KIND_FORM title="Add user" back=paths::USERS>
            <UserFormBody vm=vm />
        </PageFrame>
    }
}

#[component]
pub fn UserEditPage() -> impl IntoView {
    let vm = UserDetailsViewModel::new();
    let found = vm.load_selected().is_some();
    view! {
        <PageFrame page_id="user--edit" kind=PAGE_KIND_FORM title="Edit user" back=paths::USERS>
            {if found {
                view! { <UserFormBody vm=vm /> }.into_any()
            } else {
                view! {
                    <MessageBar intent=MessageBarIntent::Warning>
                        <MessageBarBody>"No user selected. Pick one from the users list."</MessageBarBody>
                    </MessageBar>
                }.into_any()
            }}
        </PageFrame>
    }
}

#[component]
fn UserFormBody(vm: UserDetailsViewModel) -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let role_options = Signal::derive(move || {
        UserDetailsViewModel::role_options(&session.permissions())
    });
    let password = Signal::derive(move || vm.form.with(|f| f.password.clone()));

    let on_saved = {
        let navigate = navigate.clone();
        Callback::new(move |_| {
            let title = if vm.is_edit_mode() { "User updated" } else { "User created" };
            notifications.success(title, vm.form.with_untracked(|f| f.email.clone()));
            navigate(paths::USERS, Default::default());
        })
    };

    view! {
        <div class="details-form">
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__row">
                <TextField
                    label="First name"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.first_name.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.first_name = v))
                />
                <TextField
                    label="Last name"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.last_name.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.last_name = v))
                />
            </div>
            <TextField
                label="Email"
                input_type="email"
                required=true
                placeholder="name@example.com"
                value=Signal::derive(move || vm.form.with(|f| f.email.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.email = v))
            />
            <TextField
                label="Phone number"
                value=Signal::derive(move || vm.form.with(|f| f.phone_number.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.phone_number = v))
            />
            <TextField
                label=if vm.is_edit_mode() { "New password (leave blank to keep)" } else { "Password" }
                input_type="password"
                required=!vm.is_edit_mode()
                value=password
                on_input=Callback::new(move |v| vm.form.update(|f| f.password = v))
            />
            <PasswordStrengthMeter password=password />
            <SelectField
                label="Role"
                required=true
                placeholder="Select role"
                options=role_options
                value=Signal::derive(move || vm.form.with(|f| f.role.code().to_string()))
                on_change=Callback::new(move |v: String| vm.set_role(&v))
            />
            <Show when=move || role_options.with(Vec::is_empty)>
                <p class="form__hint">"Your account cannot assign admin roles."</p>
            </Show>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| navigate(paths::USERS, Default::default())
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
