use serde::{Deserialize, Serialize};

use crate::domain::common::{deserialize_amount, deserialize_flag, flag_value, format_amount};
use crate::shared::list_view::Searchable;
use crate::shared::validation::{parse_percentage, parse_positive, require, ValidationError};

pub const SELECTED_PRODUCT_KEY: &str = "product-storage";

// ============================================================================
// Wire model
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverImage {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductTag {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub tag_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    #[serde(default)]
    pub product_description: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub product_price: f64,
    /// Spelled this way by the API
    #[serde(
        rename = "discount_precentage",
        alias = "discount_percentage",
        default,
        deserialize_with = "deserialize_amount"
    )]
    pub discount_percentage: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub final_price: f64,
    #[serde(default)]
    pub product_brand: String,
    #[serde(default)]
    pub product_category: String,
    #[serde(default)]
    pub product_sub_category: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub cover_images: Vec<CoverImage>,
    #[serde(default)]
    pub dimensions: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub sales: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub featured: bool,
    #[serde(rename = "isNew", default, deserialize_with = "deserialize_flag")]
    pub is_new: bool,
    #[serde(default)]
    pub tags: Vec<ProductTag>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl Product {
    /// Badges shown next to the name in the list
    pub fn badges(&self) -> Vec<&'static str> {
        let mut badges = Vec::new();
        if self.is_new {
            badges.push("New");
        }
        if self.sales {
            badges.push("Sale");
        }
        if self.featured {
            badges.push("Featured");
        }
        badges
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.product_name.clone(),
            self.product_brand.clone(),
            self.product_category.clone(),
            self.manufacturer.clone(),
        ]
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub product: Option<Product>,
}

/// Unit of measure ("metric") a product is sold in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    #[serde(rename = "_id")]
    pub id: String,
    pub dimension_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DimensionListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub metrics: Vec<Dimension>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddDimensionRequest {
    pub dimension_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddDimensionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "Dimension")]
    pub dimension: Option<Dimension>,
}

// ============================================================================
// Form
// ============================================================================

/// Text state of the product form. Files are attached separately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub discount: String,
    pub manufacturer: String,
    pub brand_id: String,
    pub category_id: String,
    pub sub_category_id: String,
    pub dimension_id: String,
    /// Dimension name sent in the `dimensions` field
    pub dimension_name: String,
    pub tags: Vec<String>,
    pub is_new: bool,
    pub sales: bool,
    pub featured: bool,
}

/// Query parameters of the create call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateProductQuery {
    pub brand_id: String,
    pub category_id: String,
    pub sub_category_id: String,
    pub dimension_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductIdQuery<'a> {
    pub product_id: &'a str,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.product_name.clone(),
            description: product.product_description.clone(),
            price: format_amount(product.product_price),
            discount: format_amount(product.discount_percentage),
            manufacturer: product.manufacturer.clone(),
            dimension_name: product.dimensions.clone(),
            tags: product.tags.iter().map(|t| t.tag_name.clone()).collect(),
            is_new: product.is_new,
            sales: product.sales,
            featured: product.featured,
            ..Self::default()
        }
    }

    /// Add a tag unless blank or already present (case-insensitive)
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Price after discount, for the live preview. `None` while the inputs
    /// do not parse.
    pub fn final_price(&self) -> Option<f64> {
        let price = self.price.trim().parse::<f64>().ok()?;
        let discount = parse_percentage("Discount", &self.discount).ok()?;
        Some(price - price * discount / 100.0)
    }

    pub fn validate(&self, has_avatar: bool, is_new: bool) -> Result<(), ValidationError> {
        require("Product name", &self.name)?;
        parse_positive("Price", &self.price)?;
        parse_percentage("Discount", &self.discount)?;
        if is_new {
            require("Brand", &self.brand_id)?;
            require("Category", &self.category_id)?;
            require("Subcategory", &self.sub_category_id)?;
            require("Unit", &self.dimension_id)?;
            if !has_avatar {
                return Err(ValidationError::Required("Product avatar"));
            }
        }
        Ok(())
    }

    pub fn create_query(&self) -> CreateProductQuery {
        CreateProductQuery {
            brand_id: self.brand_id.clone(),
            category_id: self.category_id.clone(),
            sub_category_id: self.sub_category_id.clone(),
            dimension_id: self.dimension_id.clone(),
        }
    }

    /// Text parts of the multipart body, tags repeated once per value
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let discount = parse_percentage("Discount", &self.discount).unwrap_or(0.0);
        let mut fields = vec![
            ("product_name", self.name.trim().to_string()),
            ("product_description", self.description.clone()),
            ("product_price", self.price.trim().to_string()),
            ("discount_percentage", discount.to_string()),
            ("dimensions", self.dimension_name.clone()),
            ("sales", flag_value(self.sales).to_string()),
            ("featured", flag_value(self.featured).to_string()),
            ("manufacturer", self.manufacturer.trim().to_string()),
            ("isNew", flag_value(self.is_new).to_string()),
        ];
        fields.extend(self.tags.iter().map(|t| ("tags", t.clone())));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT_JSON: &str = r#"{
        "_id": "p1",
        "product_name": "Desk Lamp",
        "product_description": "<p>Warm light</p>",
        "product_price": 1200,
        "discount_precentage": "10",
        "final_price": 1080,
        "product_brand": "Acme",
        "product_category": "Lighting",
        "product_sub_category": "Lamps",
        "avatar": "https://cdn/p1.png",
        "cover_images": [{"url": "https://cdn/p1-a.png", "_id": "i1"}],
        "dimensions": "piece",
        "manufacturer": "Acme Works",
        "sales": "1",
        "featured": false,
        "isNew": "true",
        "tags": [{"tag_name": "desk", "_id": "t1"}]
    }"#;

    #[test]
    fn test_parse_mixed_flags() {
        let p: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        assert!(p.sales);
        assert!(!p.featured);
        assert!(p.is_new);
        assert_eq!(p.discount_percentage, 10.0);
        assert_eq!(p.badges(), vec!["New", "Sale"]);
        assert!(p.matches_filter("acme works"));
    }

    #[test]
    fn test_edit_form_prefill() {
        let p: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        let form = ProductForm::from_product(&p);
        assert_eq!(form.price, "1200.00");
        assert_eq!(form.tags, vec!["desk"]);
        assert_eq!(form.final_price(), Some(1080.0));
        assert!(form.validate(false, false).is_ok());
    }

    #[test]
    fn test_new_product_rules() {
        let mut form = ProductForm {
            name: "Chair".into(),
            price: "0".into(),
            ..ProductForm::default()
        };
        assert!(form.validate(true, true).is_err());
        form.price = "49.5".into();
        form.discount = "150".into();
        assert!(form.validate(true, true).is_err());
        form.discount = "5".into();
        assert_eq!(
            form.validate(true, true),
            Err(ValidationError::Required("Brand"))
        );
        form.brand_id = "b".into();
        form.category_id = "c".into();
        form.sub_category_id = "s".into();
        form.dimension_id = "d".into();
        assert_eq!(
            form.validate(false, true),
            Err(ValidationError::Required("Product avatar"))
        );
        assert!(form.validate(true, true).is_ok());
    }

    #[test]
    fn test_tags_and_fields() {
        let mut form = ProductForm {
            name: "Chair".into(),
            price: "10".into(),
            featured: true,
            ..ProductForm::default()
        };
        assert!(form.add_tag("oak"));
        assert!(!form.add_tag("OAK"));
        assert!(!form.add_tag("  "));
        assert!(form.add_tag("office"));
        form.remove_tag("oak");

        let fields = form.fields();
        assert!(fields.contains(&("featured", "1".to_string())));
        assert!(fields.contains(&("discount_percentage", "0".to_string())));
        let tags: Vec<_> = fields.iter().filter(|(k, _)| *k == "tags").collect();
        assert_eq!(tags, vec![&("tags", "office".to_string())]);
    }

    #[test]
    fn test_create_query_string() {
        let form = ProductForm {
            brand_id: "b1".into(),
            category_id: "c1".into(),
            sub_category_id: "s1".into(),
            dimension_id: "d1".into(),
            ..ProductForm::default()
        };
        assert_eq!(
            serde_qs::to_string(&form.create_query()).unwrap(),
            "brand_id=b1&category_id=c1&sub_category_id=s1&dimension_id=d1"
        );
    }
}
