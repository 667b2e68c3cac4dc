use contracts::domain::order::aggregate::Order;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::order::api;
use crate::shared::notifications::NotificationService;
use crate::system::auth::context::Session;
use crate::system::auth::policy::ApiErrors;

#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub id: StoredValue<String>,
    pub order: RwSignal<Option<Order>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Target picked in the status selector
    pub target: RwSignal<Option<OrderStatus>>,
    pub updating: RwSignal<bool>,
}

impl OrderDetailsViewModel {
    pub fn new(id: String) -> Self {
        Self {
            id: StoredValue::new(id),
            order: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            target: RwSignal::new(None),
            updating: RwSignal::new(false),
        }
    }

    pub fn load(&self, session: Session, errors: ApiErrors) {
        let vm = *self;
        let id = vm.id.get_value();
        vm.loading.set(true);
        let client = session.client();
        spawn_local(async move {
            let result = api::fetch_order(&client, &id).await;
            match result {
                Ok(order) => {
                    vm.error.set(None);
                    vm.order.set(Some(order));
                }
                Err(e) => {
                    vm.error.set(Some(e.to_string()));
                    errors.report(e);
                }
            }
            vm.target.set(None);
            vm.loading.set(false);
        });
    }

    /// Send the picked transition. The displayed order only changes through
    /// the re-fetch after the server accepted it.
    pub fn apply_status_command(
        &self,
        session: Session,
        errors: ApiErrors,
        notifications: NotificationService,
    ) {
        let Some(order) = self.order.get_untracked() else {
            return;
        };
        let Some(target) = self.target.get_untracked() else {
            return;
        };
        let update = match order.propose_transition(target) {
            Ok(update) => update,
            Err(e) => {
                notifications.error(e.to_string());
                self.target.set(None);
                return;
            }
        };

        let vm = *self;
        vm.updating.set(true);
        let client = session.client();
        spawn_local(async move {
            let result = api::update_status(&client, &update).await;
            vm.updating.set(false);
            match result {
                Ok(_) => {
                    log::info!(
                        "order {} moved {} -> {}",
                        update.order_id(),
                        update.from(),
                        update.to()
                    );
                    notifications.success(
                        "Status updated",
                        format!("Order is now {}", update.to().display_name()),
                    );
                    vm.load(session, errors);
                }
                Err(e) => {
                    vm.target.set(None);
                    errors.report(e);
                }
            }
        });
    }
}
