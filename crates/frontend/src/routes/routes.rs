use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::DashboardHome;
use crate::domain::brand::ui::details::{BrandAddPage, BrandEditPage};
use crate::domain::brand::ui::list::BrandsListPage;
use crate::domain::category::ui::details::{CategoryAddPage, CategoryEditPage};
use crate::domain::category::ui::list::CategoriesListPage;
use crate::domain::inventory::ui::InventoryPage;
use crate::domain::order::ui::details::OrderDetailsPage;
use crate::domain::order::ui::list::OrdersListPage;
use crate::domain::product::ui::details::{ProductAddPage, ProductEditPage};
use crate::domain::product::ui::list::ProductsListPage;
use crate::domain::promotion::ui::PromotionsPage;
use crate::domain::subcategory::ui::details::{SubCategoryAddPage, SubCategoryEditPage};
use crate::domain::subcategory::ui::list::SubCategoriesListPage;
use crate::layout::DashboardLayout;
use crate::system::auth::policy::AuthPolicy;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::users::ui::details::{UserAddPage, UserEditPage};
use crate::system::users::ui::list::UsersListPage;

/// Route table. Paths mirror `routes::paths`; everything under
/// `/dashboard` is rendered inside the gated [`DashboardLayout`].
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            // Needs the router for navigation, so it lives inside it
            <AuthPolicy />
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("/dashboard") view=DashboardLayout>
                    <Route path=path!("") view=DashboardHome />

                    <Route path=path!("users") view=UsersListPage />
                    <Route path=path!("users/add") view=UserAddPage />
                    <Route path=path!("users/edit") view=UserEditPage />

                    <Route path=path!("products") view=ProductsListPage />
                    <Route path=path!("products/add") view=ProductAddPage />
                    <Route path=path!("products/edit/:id") view=ProductEditPage />

                    <Route path=path!("categories") view=CategoriesListPage />
                    <Route path=path!("categories/add") view=CategoryAddPage />
                    <Route path=path!("categories/edit") view=CategoryEditPage />

                    <Route path=path!("subcategories") view=SubCategoriesListPage />
                    <Route path=path!("subcategories/add") view=SubCategoryAddPage />
                    <Route path=path!("subcategories/edit") view=SubCategoryEditPage />

                    <Route path=path!("brand") view=BrandsListPage />
                    <Route path=path!("brand/add") view=BrandAddPage />
                    <Route path=path!("brand/edit") view=BrandEditPage />

                    <Route path=path!("orders") view=OrdersListPage />
                    <Route path=path!("orders/:id") view=OrderDetailsPage />

                    <Route path=path!("inventory") view=InventoryPage />
                    <Route path=path!("promotions") view=PromotionsPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
