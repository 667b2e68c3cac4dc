use contracts::domain::subcategory::aggregate::{SubCategory, SubCategoryForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::list::SELECTED_SUBCATEGORY;
use crate::domain::category::api as category_api;
use crate::domain::subcategory::api;
use crate::shared::components::file_input::FileSlot;
use crate::system::auth::context::Session;
use crate::system::auth::policy::ApiErrors;

#[derive(Clone, Copy)]
pub struct SubCategoryDetailsViewModel {
    pub form: RwSignal<SubCategoryForm>,
    pub logo: FileSlot,
    pub editing: RwSignal<Option<SubCategory>>,
    /// `(category_id, category_name)` pairs for the parent picker
    pub category_options: RwSignal<Vec<(String, String)>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl SubCategoryDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(SubCategoryForm::default()),
            logo: RwSignal::new_local(None),
            editing: RwSignal::new(None),
            category_options: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.with(Option::is_some)
    }

    pub fn load_selected(&self) -> Option<SubCategory> {
        let sub = SELECTED_SUBCATEGORY.selected()?;
        self.form.set(SubCategoryForm::from_subcategory(&sub));
        self.editing.set(Some(sub.clone()));
        Some(sub)
    }

    pub fn load_categories(&self, session: Session, errors: ApiErrors) {
        let options = self.category_options;
        let client = session.client();
        spawn_local(async move {
            match category_api::fetch_categories(&client).await {
                Ok(categories) => options.set(
                    categories
                        .into_iter()
                        .map(|c| (c.category_id, c.category_name))
                        .collect(),
                ),
                Err(e) => errors.report(e),
            }
        });
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
                (Some(sub), logo) => {
                    api::update_subcategory(&client, &sub.sub_category_id, &current, logo).await
                }
                (None, Some(logo)) => api::create_subcategory(&client, &current, logo).await,
                (None, None) => {
                    saving.set(false);
                    return;
                }
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    SELECTED_SUBCATEGORY.clear();
                    on_saved.run(());
                }
                Err(e) => errors.report(e),
            }
        });
    }
}

impl Default for SubCategoryDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
