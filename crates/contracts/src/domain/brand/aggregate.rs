use serde::{Deserialize, Serialize};

use crate::shared::list_view::Searchable;
use crate::shared::validation::{require, ValidationError};

/// localStorage key of the brand picked for editing
pub const SELECTED_BRAND_KEY: &str = "brand-storage";

/// Row of the brand list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub brand_id: String,
    pub brand_name: String,
    #[serde(default)]
    pub brand_logo: String,
    #[serde(default)]
    pub total_products: u32,
}

impl Searchable for Brand {
    fn search_fields(&self) -> Vec<String> {
        vec![self.brand_name.clone()]
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrandListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Vec<Brand>,
}

/// Multipart fields of create/update. The logo file travels separately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandForm {
    pub brand_name: String,
}

impl BrandForm {
    pub fn from_brand(brand: &Brand) -> Self {
        Self {
            brand_name: brand.brand_name.clone(),
        }
    }

    /// A logo is mandatory when creating, optional when updating
    pub fn validate(&self, has_logo: bool, is_new: bool) -> Result<(), ValidationError> {
        require("Brand name", &self.brand_name)?;
        if is_new && !has_logo {
            return Err(ValidationError::Required("Brand logo"));
        }
        Ok(())
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![("brand_name", self.brand_name.trim().to_string())]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BrandIdQuery<'a> {
    pub brand_id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::ListQuery;

    #[test]
    fn test_parse_and_filter() {
        let raw = r#"{"success":true,"message":"ok","data":[
            {"brand_id":"b1","brand_name":"Acme","brand_logo":"https://cdn/acme.png","total_products":4},
            {"brand_id":"b2","brand_name":"Globex","brand_logo":"","total_products":0}
        ]}"#;
        let list: BrandListResponse = serde_json::from_str(raw).unwrap();
        let mut query = ListQuery::default();
        query.set_filter("GLO");
        let page = query.apply(&list.data);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].brand_id, "b2");
    }

    #[test]
    fn test_form_rules() {
        let form = BrandForm {
            brand_name: "Acme".into(),
        };
        assert!(form.validate(true, true).is_ok());
        assert!(form.validate(false, false).is_ok());
        assert_eq!(
            form.validate(false, true),
            Err(ValidationError::Required("Brand logo"))
        );
        assert_eq!(
            BrandForm::default().validate(true, true),
            Err(ValidationError::Required("Brand name"))
        );
    }
}
