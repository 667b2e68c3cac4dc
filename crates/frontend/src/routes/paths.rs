//! URL paths of the dashboard views.

pub const HOME: &str = "/dashboard";

pub const USERS: &str = "/dashboard/users";
pub const USER_ADD: &str = "/dashboard/users/add";
pub const USER_EDIT: &str = "/dashboard/users/edit";

pub const PRODUCTS: &str = "/dashboard/products";
pub const PRODUCT_ADD: &str = "/dashboard/products/add";

pub const CATEGORIES: &str = "/dashboard/categories";
pub const CATEGORY_ADD: &str = "/dashboard/categories/add";
pub const CATEGORY_EDIT: &str = "/dashboard/categories/edit";

pub const SUBCATEGORIES: &str = "/dashboard/subcategories";
pub const SUBCATEGORY_ADD: &str = "/dashboard/subcategories/add";
pub const SUBCATEGORY_EDIT: &str = "/dashboard/subcategories/edit";

pub const BRANDS: &str = "/dashboard/brand";
pub const BRAND_ADD: &str = "/dashboard/brand/add";
pub const BRAND_EDIT: &str = "/dashboard/brand/edit";

pub const ORDERS: &str = "/dashboard/orders";
pub const INVENTORY: &str = "/dashboard/inventory";
pub const PROMOTIONS: &str = "/dashboard/promotions";

pub fn product_edit(id: &str) -> String {
    format!("/dashboard/products/edit/{}", urlencoding::encode(id))
}

pub fn order_detail(id: &str) -> String {
    format!("{ORDERS}/{}", urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::gate::is_protected;

    #[test]
    fn test_views_are_protected() {
        for path in [HOME, USERS, BRAND_EDIT, INVENTORY, PROMOTIONS] {
            assert!(is_protected(path), "{path}");
        }
        assert!(is_protected(&order_detail("665f")));
    }

    #[test]
    fn test_ids_are_encoded() {
        assert_eq!(product_edit("a b"), "/dashboard/products/edit/a%20b");
    }
}
