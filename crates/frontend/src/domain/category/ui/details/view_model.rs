use contracts::domain::category::aggregate::{Category, CategoryForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::list::SELECTED_CATEGORY;
use crate::domain::category::api;
use crate::shared::components::file_input::FileSlot;
use crate::system::auth::context::Session;
use crate::system::auth::policy::ApiErrors;

#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryForm>,
    pub logo: FileSlot,
    pub editing: RwSignal<Option<Category>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CategoryDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CategoryForm::default()),
            logo: RwSignal::new_local(None),
            editing: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.with(Option::is_some)
    }

    pub fn load_selected(&self) -> Option<Category> {
        let category = SELECTED_CATEGORY.selected()?;
        self.form.set(CategoryForm::from_category(&category));
        self.editing.set(Some(category.clone()));
        Some(category)
    }

    pub fn save_command(&self, session: Session, errors: ApiErrors, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        let logo = self.logo.get_untracked();
        let editing = self.editing.get_untracked();

        if let Err(e) = current.validate(logo.is_some(), editing.is_none()) {
            self.error.set(Some(e.to_string()));
            return;
        }

        self.error.set(None);
        self.saving.set(true);
        let saving = self.saving;
        let client = session.client();
        spawn_local(async move {
            let result = match (editing, logo) {
                (Some(category), logo) => {
                    api::update_category(&client, &category.category_id, &current, logo).await
                }
                (None, Some(logo)) => api::create_category(&client, &current, logo).await,
                (None, None) => {
                    saving.set(false);
                    return;
                }
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    SELECTED_CATEGORY.clear();
                    on_saved.run(());
                }
                Err(e) => errors.report(e),
            }
        });
    }
}

impl Default for CategoryDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
