//! The one place that decides what a failed API call does to the app.
//!
//! Pages hand every `ApiError` to [`ApiErrors::report`]. [`AuthPolicy`],
//! mounted once inside the router, drains the queue: it ends the session on
//! `Unauthenticated` and turns everything else into a toast.

use contracts::shared::api_error::{dispositions, ApiError, ErrorDisposition};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use super::context::use_session;
use crate::shared::notifications::use_notifications;

#[derive(Clone, Copy)]
pub struct ApiErrors {
    pending: RwSignal<Vec<ApiError>>,
}

impl ApiErrors {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(Vec::new()),
        }
    }

    pub fn report(&self, error: ApiError) {
        self.pending.update(|queue| queue.push(error));
    }
}

impl Default for ApiErrors {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_api_errors() -> ApiErrors {
    use_context::<ApiErrors>().expect("ApiErrors not provided in context")
}

#[component]
pub fn AuthPolicy() -> impl IntoView {
    let errors = use_api_errors();
    let session = use_session();
    let notifications = use_notifications();
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move |_| {
        let batch = errors.pending.get();
        if batch.is_empty() {
            return;
        }
        errors.pending.set(Vec::new());

        for disposition in dispositions(&batch) {
            match disposition {
                ErrorDisposition::EndSession => {
                    log::warn!("401 from API, ending session");
                    let from = format!(
                        "{}{}",
                        location.pathname.get_untracked(),
                        location.search.get_untracked()
                    );
                    let target = session.expire(&from);
                    navigate(&target, Default::default());
                    notifications.error(ApiError::Unauthenticated.to_string());
                }
                ErrorDisposition::Notify(app_error) => {
                    log::error!(
                        "api error: {} (status {:?}, code {:?})",
                        app_error.message,
                        app_error.status,
                        app_error.code
                    );
                    notifications.error(app_error.message);
                }
            }
        }
    });
}
