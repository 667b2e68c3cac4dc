use contracts::domain::category::aggregate::Category;
use contracts::domain::product::aggregate::{Dimension, Product, ProductForm};
use contracts::domain::subcategory::aggregate::SubCategory;
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::list::SELECTED_PRODUCT;
use crate::domain::brand::api as brand_api;
use crate::domain::category::api as category_api;
use crate::domain::product::api;
use crate::domain::subcategory::api as subcategory_api;
use crate::shared::components::file_input::{FileListSlot, FileSlot};
use crate::system::auth::context::Session;
use crate::system::auth::policy::ApiErrors;

/// Subcategories whose parent is `category_id`. Subcategories only carry
/// the parent's name, so the id is resolved through `categories`.
pub fn subcategory_options(
    categories: &[Category],
    subcategories: &[SubCategory],
    category_id: &str,
) -> Vec<(String, String)> {
    let Some(parent) = categories.iter().find(|c| c.category_id == category_id) else {
        return Vec::new();
    };
    subcategories
        .iter()
        .filter(|s| s.category_name == parent.category_name)
        .map(|s| (s.sub_category_id.clone(), s.sub_category_name.clone()))
        .collect()
}

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub avatar: FileSlot,
    pub covers: FileListSlot,
    pub editing: RwSignal<Option<Product>>,
    pub tag_input: RwSignal<String>,
    pub brand_options: RwSignal<Vec<(String, String)>>,
    pub categories: RwSignal<Vec<Category>>,
    pub subcategories: RwSignal<Vec<SubCategory>>,
    pub dimensions: RwSignal<Vec<Dimension>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductForm::default()),
            avatar: RwSignal::new_local(None),
            covers: RwSignal::new_local(Vec::new()),
            editing: RwSignal::new(None),
            tag_input: RwSignal::new(String::new()),
            brand_options: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
            subcategories: RwSignal::new(Vec::new()),
            dimensions: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.with(Option::is_some)
    }

    fn edit(&self, product: Product) {
        self.form.set(ProductForm::from_product(&product));
        self.editing.set(Some(product));
    }

    /// Prefer the row picked in the list; after a reload with another id in
    /// the URL, look the product up in the full list instead.
    pub fn load_for_edit(&self, product_id: String, session: Session, errors: ApiErrors) {
        if let Some(product) = SELECTED_PRODUCT.selected().filter(|p| p.id == product_id) {
            self.edit(product);
            return;
        }

        let vm = *self;
        vm.loading.set(true);
        let client = session.client();
        spawn_local(async move {
            let result = api::fetch_products(&client).await;
            vm.loading.set(false);
            match result {
                Ok(products) => match products.into_iter().find(|p| p.id == product_id) {
                    Some(product) => vm.edit(product),
                    None => vm.error.set(Some(ApiError::Missing("Product not found".into()).to_string())),
                },
                Err(e) => errors.report(e),
            }
        });
    }

    /// Brands, categories, subcategories and units for the add form
    pub fn load_lookups(&self, session: Session, errors: ApiErrors) {
        let client = session.client();

        let brands = self.brand_options;
        let c = client.clone();
        spawn_local(async move {
            match brand_api::fetch_brands(&c).await {
                Ok(list) => brands.set(list.into_iter().map(|b| (b.brand_id, b.brand_name)).collect()),
                Err(e) => errors.report(e),
            }
        });

        let categories = self.categories;
        let c = client.clone();
        spawn_local(async move {
            match category_api::fetch_categories(&c).await {
                Ok(list) => categories.set(list),
                Err(e) => errors.report(e),
            }
        });

        let subcategories = self.subcategories;
        let c = client.clone();
        spawn_local(async move {
            match subcategory_api::fetch_subcategories(&c).await {
                Ok(list) => subcategories.set(list),
                Err(e) => errors.report(e),
            }
        });

        let dimensions = self.dimensions;
        spawn_local(async move {
            match api::fetch_dimensions(&client).await {
                Ok(list) => dimensions.set(list),
                Err(e) => errors.report(e),
            }
        });
    }

    pub fn set_category(&self, category_id: String) {
        self.form.update(|f| {
            if f.category_id != category_id {
                f.sub_category_id.clear();
            }
            f.category_id = category_id;
        });
    }

    pub fn set_dimension(&self, dimension_id: String) {
        let name = self.dimensions.with_untracked(|list| {
            list.iter()
                .find(|d| d.id == dimension_id)
                .map(|d| d.dimension_name.clone())
                .unwrap_or_default()
        });
        self.form.update(|f| {
            f.dimension_id = dimension_id;
            f.dimension_name = name;
        });
    }

    pub fn add_tag(&self) {
        let tag = self.tag_input.get_untracked();
        let mut added = false;
        self.form.update(|f| added = f.add_tag(&tag));
        if added {
            self.tag_input.set(String::new());
        }
    }

    pub fn save_command(&self, session: Session, errors: ApiErrors, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        let avatar = self.avatar.get_untracked();
        let covers = self.covers.get_untracked();
        let editing = self.editing.get_untracked();

        if let Err(e) = current.validate(avatar.is_some(), editing.is_none()) {
            self.error.set(Some(e.to_string()));
            return;
        }

        self.error.set(None);
        self.saving.set(true);
        let saving = self.saving;
        let client = session.client();
        spawn_local(async move {
            let result = match (editing, avatar) {
                (Some(product), avatar) => {
                    api::update_product(&client, &product.id, &current, avatar, covers).await
                }
                (None, Some(avatar)) => api::create_product(&client, &current, avatar, covers).await,
                (None, None) => {
                    saving.set(false);
                    return;
                }
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    SELECTED_PRODUCT.clear();
                    on_saved.run(());
                }
                Err(e) => errors.report(e),
            }
        });
    }
}

impl Default for ProductDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str) -> Category {
        Category {
            category_id: id.into(),
            category_name: name.into(),
            category_logo: String::new(),
            total_subcategories: 0,
        }
    }

    fn sub(id: &str, name: &str, parent: &str) -> SubCategory {
        SubCategory {
            sub_category_id: id.into(),
            sub_category_name: name.into(),
            sub_category_logo: String::new(),
            category_name: parent.into(),
            products: 0,
        }
    }

    #[test]
    fn test_subcategories_follow_parent() {
        let categories = vec![category("c1", "Lighting"), category("c2", "Furniture")];
        let subs = vec![
            sub("s1", "Desk lamps", "Lighting"),
            sub("s2", "Sofas", "Furniture"),
            sub("s3", "Ceiling lights", "Lighting"),
        ];
        assert_eq!(
            subcategory_options(&categories, &subs, "c1"),
            vec![
                ("s1".to_string(), "Desk lamps".to_string()),
                ("s3".to_string(), "Ceiling lights".to_string()),
            ]
        );
        assert!(subcategory_options(&categories, &subs, "").is_empty());
        assert!(subcategory_options(&categories, &subs, "c9").is_empty());
    }
}
