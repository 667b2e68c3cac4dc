use contracts::enums::OrderStatus;
use leptos::prelude::*;
use thaw::*;

use super::view_model::OrderDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

/// Current status plus the moves allowed from it
#[component]
pub fn StatusCard(vm: OrderDetailsViewModel) -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let notifications = use_notifications();

    let status = Memo::new(move |_| vm.order.with(|o| o.as_ref().map(|o| o.order_status)));
    let targets = Memo::new(move |_| {
        status
            .get()
            .map(|s| s.allowed_targets().to_vec())
            .unwrap_or_default()
    });

    view! {
        <Card attr:class="order-card">
            <h3 class="order-card__title">"Status"</h3>
            {move || status.get().map(|s| view! {
                <span class=s.badge_class()>{s.display_name()}</span>
            })}
            {move || {
                if targets.with(Vec::is_empty) {
                    return view! {
                        <p class="order-card__note">
                            {icon("check")}
                            " This order is in a final state. No further changes are possible."
                        </p>
                    }
                    .into_any();
                }
                view! {
                    <div class="status-picker">
                        <select
                            class="form__select"
                            on:change=move |ev| vm.target.set(OrderStatus::from_code(&event_target_value(&ev)))
                        >
                            <option value="" selected=move || vm.target.get().is_none()>"Move to..."</option>
                            {targets
                                .get()
                                .into_iter()
                                .map(|t| view! {
                                    <option value=t.code() selected=move || vm.target.get() == Some(t)>
                                        {t.display_name()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || vm.target.get().is_none() || vm.updating.get())
                            on_click=move |_| vm.apply_status_command(session, errors, notifications)
                        >
                            {move || if vm.updating.get() { "Updating..." } else { "Update status" }}
                        </Button>
                    </div>
                }
                .into_any()
            }}
        </Card>
    }
}
