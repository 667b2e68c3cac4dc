use serde::{Deserialize, Serialize};

use crate::shared::list_view::Searchable;
use crate::shared::validation::{require, ValidationError};

pub const SELECTED_SUBCATEGORY_KEY: &str = "subcategory-storage";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    pub sub_category_id: String,
    pub sub_category_name: String,
    #[serde(default)]
    pub sub_category_logo: String,
    /// Name of the parent category
    #[serde(default)]
    pub category_name: String,
    /// Number of products filed under it
    #[serde(default)]
    pub products: u32,
}

impl Searchable for SubCategory {
    fn search_fields(&self) -> Vec<String> {
        vec![self.sub_category_name.clone(), self.category_name.clone()]
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubCategoryListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Vec<SubCategory>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubCategoryForm {
    pub sub_category_name: String,
    /// Parent category, required on create only
    pub category_id: String,
}

impl SubCategoryForm {
    pub fn from_subcategory(sub: &SubCategory) -> Self {
        Self {
            sub_category_name: sub.sub_category_name.clone(),
            category_id: String::new(),
        }
    }

    pub fn validate(&self, has_logo: bool, is_new: bool) -> Result<(), ValidationError> {
        require("Subcategory name", &self.sub_category_name)?;
        if is_new {
            require("Parent category", &self.category_id)?;
            if !has_logo {
                return Err(ValidationError::Required("Subcategory logo"));
            }
        }
        Ok(())
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![("sub_category_name", self.sub_category_name.trim().to_string())]
    }
}

/// Create takes the parent category as `?C_ID=`
#[derive(Debug, Clone, Serialize)]
pub struct CreateSubCategoryQuery<'a> {
    #[serde(rename = "C_ID")]
    pub category_id: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubCategoryIdQuery<'a> {
    pub subcategory_id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(name: &str, parent: &str) -> SubCategory {
        SubCategory {
            sub_category_id: name.to_lowercase(),
            sub_category_name: name.into(),
            sub_category_logo: String::new(),
            category_name: parent.into(),
            products: 0,
        }
    }

    #[test]
    fn test_filter_matches_parent_name() {
        assert!(sub("Desk Lamps", "Lighting").matches_filter("light"));
        assert!(!sub("Sofas", "Furniture").matches_filter("light"));
    }

    #[test]
    fn test_create_requires_parent() {
        let mut form = SubCategoryForm {
            sub_category_name: "Lamps".into(),
            category_id: String::new(),
        };
        assert_eq!(
            form.validate(true, true),
            Err(ValidationError::Required("Parent category"))
        );
        assert!(form.validate(false, false).is_ok());
        form.category_id = "c1".into();
        assert!(form.validate(true, true).is_ok());
    }

    #[test]
    fn test_create_query() {
        let q = CreateSubCategoryQuery { category_id: "c9" };
        assert_eq!(serde_qs::to_string(&q).unwrap(), "C_ID=c9");
    }
}
