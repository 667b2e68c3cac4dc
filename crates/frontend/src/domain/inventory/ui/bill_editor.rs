use chrono::Utc;
use contracts::domain::common::format_amount;
use contracts::domain::inventory::aggregate::{BillRow, InventoryItem};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;

use super::page::InventoryContext;
use crate::domain::inventory::api;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

/// Purchase bill being assembled; nothing is sent until "Save bill"
#[component]
pub fn BillEditor(ctx: InventoryContext) -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let notifications = use_notifications();

    let items: RwSignal<Vec<InventoryItem>> = RwSignal::new(Vec::new());
    let saving = RwSignal::new(false);
    let draft = ctx.draft;

    {
        let client = session.client();
        spawn_local(async move {
            match api::fetch_inventory_options(&client).await {
                Ok(list) => items.set(list),
                Err(e) => errors.report(e),
            }
        });
    }

    let save = move |_| {
        let request = match draft.with_untracked(|d| d.to_request(Utc::now())) {
            Ok(request) => request,
            Err(e) => {
                notifications.error(e.to_string());
                return;
            }
        };
        saving.set(true);
        let client = session.client();
        spawn_local(async move {
            let result = api::add_bill(&client, &request).await;
            saving.set(false);
            match result {
                Ok(response) => {
                    let message = match response.bill_number {
                        Some(number) => format!("Bill {number} created"),
                        None => "Bill created".to_string(),
                    };
                    notifications.success("Bill saved", message);
                    draft.update(|d| d.clear());
                    ctx.bills_version.update(|v| *v += 1);
                }
                Err(e) => errors.report(e),
            }
        });
    };

    let grand_total = Signal::derive(move || format_amount(draft.with(|d| d.grand_total())));
    let can_submit = Signal::derive(move || draft.with(|d| d.can_submit()));

    view! {
        <section class="panel">
            <div class="panel__header">
                <h2 class="panel__title">"New purchase bill"</h2>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| { draft.update(|d| { d.add_row(); }); }>
                    {icon("plus")}
                    " Add item"
                </Button>
            </div>

            <Show
                when=move || !draft.with(|d| d.is_empty())
                fallback=|| view! { <p class="text-muted">"No items yet. Use \"Add item\" to start a bill."</p> }
            >
                <div class="bill-rows">
                    <div class="bill-row bill-row--header">
                        <span>"Product"</span>
                        <span>"Unit"</span>
                        <span>"Supplier"</span>
                        <span>"Qty"</span>
                        <span>"Price"</span>
                        <span>"Total"</span>
                        <span></span>
                    </div>
                    <For
                        each=move || draft.with(|d| d.rows().iter().map(|r| r.id).collect::<Vec<_>>())
                        key=|id| *id
                        children=move |id: Uuid| view! { <BillRowEditor ctx=ctx id=id items=items /> }
                    />
                </div>
            </Show>

            <div class="bill-summary">
                <span class="bill-summary__label">"Grand total"</span>
                <span class="bill-summary__amount">{grand_total}</span>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !can_submit.get() || saving.get())
                    on_click=save
                >
                    {icon("check")}
                    {move || if saving.get() { " Saving..." } else { " Save bill" }}
                </Button>
            </div>
        </section>
    }
}

#[component]
fn BillRowEditor(
    ctx: InventoryContext,
    id: Uuid,
    items: RwSignal<Vec<InventoryItem>>,
) -> impl IntoView {
    let draft = ctx.draft;
    let read = move |f: fn(&BillRow) -> String| -> String {
        draft.with(|d| d.rows().iter().find(|r| r.id == id).map(f).unwrap_or_default())
    };
    let initial_qty = read(|r| r.quantity.to_string());
    let initial_price = read(|r| if r.price > 0.0 { r.price.to_string() } else { String::new() });

    let on_product = move |ev: leptos::ev::Event| {
        let product_id = event_target_value(&ev);
        let unit = items.with_untracked(|list| {
            list.iter()
                .find(|i| i.id == product_id)
                .map(|i| i.dimension_name.clone())
                .unwrap_or_default()
        });
        draft.update(|d| {
            d.update_row(id, |r| {
                r.product_id = product_id;
                r.unit_id = unit;
            })
        });
    };

    view! {
        <div class="bill-row" class:bill-row--incomplete=move || {
            !draft.with(|d| d.rows().iter().find(|r| r.id == id).is_some_and(BillRow::is_complete))
        }>
            <select class="form__select" on:change=on_product>
                <option value="" selected=move || read(|r| r.product_id.clone()).is_empty()>"Select product"</option>
                {move || items
                    .get()
                    .into_iter()
                    .map(|item| {
                        let value = item.id.clone();
                        let check = item.id.clone();
                        view! {
                            <option value=value selected=move || read(|r| r.product_id.clone()) == check>
                                {format!("{} ({})", item.product_name, item.product_code)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <span class="bill-row__unit">
                {move || {
                    let unit = read(|r| r.unit_id.clone());
                    if unit.is_empty() { "-".to_string() } else { unit }
                }}
            </span>
            <select
                class="form__select"
                on:change=move |ev| {
                    let supplier_id = event_target_value(&ev);
                    draft.update(|d| d.update_row(id, |r| r.supplier_id = supplier_id));
                }
            >
                <option value="" selected=move || read(|r| r.supplier_id.clone()).is_empty()>"Select supplier"</option>
                {move || ctx
                    .suppliers
                    .get()
                    .into_iter()
                    .map(|s| {
                        let check = s.id.clone();
                        view! {
                            <option value=s.id.clone() selected=move || read(|r| r.supplier_id.clone()) == check>
                                {s.name.clone()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <input
                class="form__input"
                type="number"
                min="1"
                value=initial_qty
                on:input=move |ev| {
                    let qty = event_target_value(&ev).trim().parse::<u32>().unwrap_or(0);
                    draft.update(|d| d.update_row(id, |r| r.quantity = qty));
                }
            />
            <input
                class="form__input"
                type="number"
                min="0"
                step="0.01"
                placeholder="0.00"
                value=initial_price
                on:input=move |ev| {
                    let price = event_target_value(&ev).trim().parse::<f64>().unwrap_or(0.0);
                    draft.update(|d| d.update_row(id, |r| r.price = price));
                }
            />
            <span class="bill-row__total">
                {move || draft.with(|d| {
                    d.rows().iter().find(|r| r.id == id).map(|r| format_amount(r.total())).unwrap_or_default()
                })}
            </span>
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| draft.update(|d| d.remove_row(id))
                attr:title="Remove"
            >
                {icon("trash")}
            </Button>
        </div>
    }
}
