use serde::{Deserialize, Serialize};

/// Record counts shown on the dashboard home
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardData {
    pub total_orders: u64,
    pub total_products: u64,
    pub total_brands: u64,
    pub total_categories: u64,
    pub total_sub_categories: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: DashboardData,
}

/// One stat card: label, value and the list it links to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: u64,
    pub icon: &'static str,
    pub link: &'static str,
}

impl DashboardData {
    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                label: "Total Orders",
                value: self.total_orders,
                icon: "shopping-cart",
                link: "/dashboard/orders",
            },
            StatCard {
                label: "Products",
                value: self.total_products,
                icon: "package",
                link: "/dashboard/products",
            },
            StatCard {
                label: "Brands",
                value: self.total_brands,
                icon: "tag",
                link: "/dashboard/brand",
            },
            StatCard {
                label: "Categories",
                value: self.total_categories,
                icon: "folder",
                link: "/dashboard/categories",
            },
            StatCard {
                label: "Subcategories",
                value: self.total_sub_categories,
                icon: "layers",
                link: "/dashboard/subcategories",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary() {
        let raw = r#"{"success":true,"message":"ok","data":{
            "totalOrders":12,"totalProducts":40,"totalBrands":5,"totalCategories":7,"totalSubCategories":19
        }}"#;
        let response: DashboardResponse = serde_json::from_str(raw).unwrap();
        let cards = response.data.cards();
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].value, 12);
        assert_eq!(cards[4].value, 19);
    }

    #[test]
    fn test_missing_counts_are_zero() {
        let response: DashboardResponse =
            serde_json::from_str(r#"{"success":true,"data":{"totalOrders":3}}"#).unwrap();
        assert_eq!(response.data.total_brands, 0);
    }
}
