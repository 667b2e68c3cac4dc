use serde::{Deserialize, Serialize};

use crate::shared::list_view::Searchable;
use crate::shared::validation::{require, ValidationError};

pub const SELECTED_CATEGORY_KEY: &str = "category-storage";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: String,
    pub category_name: String,
    #[serde(default)]
    pub category_logo: String,
    #[serde(default)]
    pub total_subcategories: u32,
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<String> {
        vec![self.category_name.clone()]
    }
}

/// The API spells the collection `catgoryProducts`
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "catgoryProducts", alias = "categoryProducts", default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub category_name: String,
}

impl CategoryForm {
    pub fn from_category(category: &Category) -> Self {
        Self {
            category_name: category.category_name.clone(),
        }
    }

    pub fn validate(&self, has_logo: bool, is_new: bool) -> Result<(), ValidationError> {
        require("Category name", &self.category_name)?;
        if is_new && !has_logo {
            return Err(ValidationError::Required("Category logo"));
        }
        Ok(())
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![("category_name", self.category_name.trim().to_string())]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryIdQuery<'a> {
    pub category_id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_misspelled_collection() {
        let raw = r#"{"success":true,"message":"ok","catgoryProducts":[
            {"category_id":"c1","category_name":"Lighting","category_logo":"x","total_subcategories":3}
        ]}"#;
        let list: CategoryListResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(list.categories.len(), 1);
        assert!(list.categories[0].matches_filter("light"));
    }

    #[test]
    fn test_delete_query() {
        let q = CategoryIdQuery { category_id: "c1" };
        assert_eq!(serde_qs::to_string(&q).unwrap(), "category_id=c1");
    }
}
