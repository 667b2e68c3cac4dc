use contracts::domain::brand::aggregate::{Brand, BrandForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::list::SELECTED_BRAND;
use crate::domain::brand::api;
use crate::shared::components::file_input::FileSlot;
use crate::system::auth::context::Session;
use crate::system::auth::policy::ApiErrors;

#[derive(Clone, Copy)]
pub struct BrandDetailsViewModel {
    pub form: RwSignal<BrandForm>,
    pub logo: FileSlot,
    /// Row being edited; `None` on the add page
    pub editing: RwSignal<Option<Brand>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl BrandDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(BrandForm::default()),
            logo: RwSignal::new_local(None),
            editing: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.with(Option::is_some)
    }

    pub fn load_selected(&self) -> Option<Brand> {
        let brand = SELECTED_BRAND.selected()?;
        self.form.set(BrandForm::from_brand(&brand));
        self.editing.set(Some(brand.clone()));
        Some(brand)
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
                (Some(brand), logo) => api::update_brand(&client, &brand.brand_id, &current, logo).await,
                (None, Some(logo)) => api::create_brand(&client, &current, logo).await,
                (None, None) => {
                    saving.set(false);
                    return;
                }
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    SELECTED_BRAND.clear();
                    on_saved.run(());
                }
                Err(e) => errors.report(e),
            }
        });
    }
}

impl Default for BrandDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
