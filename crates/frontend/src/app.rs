use leptos::prelude::*;
use thaw::ConfigProvider;

use crate::routes::routes::AppRoutes;
use crate::shared::notifications::{NotificationService, Toaster};
use crate::system::auth::context::Session;
use crate::system::auth::policy::ApiErrors;

#[component]
pub fn App() -> impl IntoView {
    // Session comes back from localStorage before the first route renders
    provide_context(Session::restore());
    provide_context(NotificationService::new());
    provide_context(ApiErrors::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
            <Toaster />
        </ConfigProvider>
    }
}
