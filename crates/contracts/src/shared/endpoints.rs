//! Paths of the admin API, relative to the configured base URL.

pub mod auth {
    pub const LOGIN: &str = "/api/v1/admin/login";
    pub const LOGOUT: &str = "/api/v1/admin/logout";
    pub const REFRESH_TOKEN: &str = "/api/v1/admin/refresh";
    pub const ME: &str = "/api/v1/admin/me";
}

pub mod brand {
    pub const CREATE: &str = "/api/v1/admin/add-brand";
    pub const LIST: &str = "/api/v1/admin/brands/products";
    pub const UPDATE: &str = "/api/v1/admin/update-brand";
}

pub mod category {
    pub const CREATE: &str = "/api/v1/admin/add-category";
    pub const LIST: &str = "/api/v1/admin/categories/sub-categories";
    pub const UPDATE: &str = "/api/v1/admin/update-category";
    pub const DELETE: &str = "/api/v1/admin/category";
}

pub mod subcategory {
    pub const CREATE: &str = "/api/v1/admin/add-subcategory";
    pub const LIST: &str = "/api/v1/admin/sub-categories/products";
    pub const UPDATE: &str = "/api/v1/admin/update-subcategory";
}

pub mod user {
    pub const CREATE: &str = "/api/v1/admin/user";
    pub const LIST: &str = "/api/v1/admin/users";
    pub const UPDATE: &str = "/api/v1/admin/update-user";
    /// Followed by `/{user_id}`
    pub const DELETE: &str = "/api/v1/admin/user";
}

pub mod product {
    pub const CREATE: &str = "/api/v1/admin/add-product";
    pub const LIST: &str = "/api/v1/admin/products";
    pub const UPDATE: &str = "/api/v1/admin/update-product";
}

pub mod metrics {
    pub const ADD: &str = "/api/v1/admin/add-metrics";
    pub const LIST: &str = "/api/v1/admin/metrics";
}

pub mod inventory {
    pub const LIST: &str = "/api/v1/admin/inventory";
    pub const ADD_BILL: &str = "/api/v1/admin/add-inventory-bill";
    pub const BILL_LIST: &str = "/api/v1/admin/inventory-bills";
    pub const BILL_BY_ID: &str = "/api/v1/admin/inventory-bill-by-id";
}

pub mod supplier {
    pub const CREATE: &str = "/api/v1/admin/add-supplier";
    pub const LIST: &str = "/api/v1/admin/suppliers";
}

pub mod order {
    pub const LIST: &str = "/api/v1/admin/orders";
    pub const CONFIRM_ORDER: &str = "/api/v1/admin/confirm-order";
}

pub mod dashboard {
    pub const DATA: &str = "/api/v1/admin/dashboard/data";
}

pub mod carousel {
    pub const CREATE: &str = "/api/v1/admin/add-carousel";
    pub const LIST: &str = "/api/v1/admin/carousel";
    pub const UPDATE: &str = "/api/v1/admin/update-carousel";
    pub const DELETE: &str = "/api/v1/admin/carousel";
}

pub mod banner {
    pub const CREATE: &str = "/api/v1/admin/add-banner";
    pub const LIST: &str = "/api/v1/admin/banner";
    pub const DELETE: &str = "/api/v1/admin/banner";
}

pub mod countdown {
    pub const CREATE: &str = "/api/v1/admin/add-countdown";
    pub const LIST: &str = "/api/v1/admin/countdown";
}
