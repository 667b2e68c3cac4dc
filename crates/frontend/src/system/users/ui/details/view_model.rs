use contracts::enums::UserRole;
use contracts::system::auth::Permission;
use contracts::system::users::{allowed_roles, User, UserForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::list::SELECTED_USER;
use crate::system::auth::context::Session;
use crate::system::auth::policy::ApiErrors;
use crate::system::users::api;

/// ViewModel for the user add/edit form
#[derive(Clone, Copy)]
pub struct UserDetailsViewModel {
    pub form: RwSignal<UserForm>,
    /// `_id` of the user being edited; `None` on the add page
    pub editing_id: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl UserDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(UserForm::new_admin()),
            editing_id: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.with(Option::is_some)
    }

    /// Prefill from the row picked on the list page. Returns the user, if any.
    pub fn load_selected(&self) -> Option<User> {
        let user = SELECTED_USER.selected()?;
        self.form.set(UserForm::from_user(&user));
        self.editing_id.set(Some(user.id.clone()));
        Some(user)
    }

    /// `(code, label)` pairs of the roles this account may assign
    pub fn role_options(permission: &Permission) -> Vec<(String, String)> {
        allowed_roles(permission)
            .into_iter()
            .map(|r| (r.code().to_string(), r.display_name().to_string()))
            .collect()
    }

    pub fn set_role(&self, code: &str) {
        if let Some(role) = UserRole::from_code(code) {
            self.form.update(|f| f.role = role);
        }
    }

    pub fn save_command(&self, session: Session, errors: ApiErrors, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        let permission = session.permissions();
        let editing = self.editing_id.get_untracked();

        let checked = match &editing {
            Some(_) => current.validate_update(&permission),
            None => current.validate_new(&permission),
        };
        if let Err(e) = checked {
            self.error.set(Some(e.to_string()));
            return;
        }

        self.error.set(None);
        self.saving.set(true);
        let saving = self.saving;
        let client = session.client();
        spawn_local(async move {
            let result = match editing {
                Some(id) => api::update_user(&client, &id, &current).await,
                None => api::create_user(&client, &current).await,
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    SELECTED_USER.clear();
                    on_saved.run(());
                }
                Err(e) => errors.report(e),
            }
        });
    }
}

impl Default for UserDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
