use contracts::domain::common::format_amount;
use contracts::domain::order::aggregate::Order;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::*;

use super::status_card::StatusCard;
use super::view_model::OrderDetailsViewModel;
use crate::routes::paths;
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::{PageFrame, PAGE_KIND_DETAIL};
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

#[component]
pub fn OrderDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id")).unwrap_or_default();
    let vm = OrderDetailsViewModel::new(id);
    vm.load(use_session(), use_api_errors());

    let title = Signal::derive(move || {
        vm.order
            .with(|o| o.as_ref().map(|o| format!("Order {}", o.order_id)))
            .unwrap_or_else(|| "Order".to_string())
    });

    let has_order = Memo::new(move |_| vm.order.with(Option::is_some));

    view! {
        <PageFrame page_id="order--detail" kind=PAGE_KIND_DETAIL title="Order details" back=paths::ORDERS>
            {move || {
                if !has_order.get() {
                    if vm.loading.get() {
                        return view! { <Spinner /> }.into_any();
                    }
                    let message = vm.error.get().unwrap_or_else(|| "Order not found".to_string());
                    return view! {
                        <MessageBar intent=MessageBarIntent::Warning>
                            <MessageBarBody>{message}</MessageBarBody>
                        </MessageBar>
                    }
                    .into_any();
                }
                view! {
                    <h2 class="order-heading">{title}</h2>
                    <div class="order-grid">
                        <div class="order-grid__main">
                            <OrderItems vm=vm />
                        </div>
                        <div class="order-grid__side">
                            <StatusCard vm=vm />
                            <CustomerCard vm=vm />
                        </div>
                    </div>
                }
                .into_any()
            }}
        </PageFrame>
    }
}

fn with_order<R: Default>(vm: OrderDetailsViewModel, f: impl FnOnce(&Order) -> R) -> R {
    vm.order.with(|o| o.as_ref().map(f)).unwrap_or_default()
}

#[component]
fn OrderItems(vm: OrderDetailsViewModel) -> impl IntoView {
    let items = move || with_order(vm, |o| o.order_items.clone());
    let total = move || with_order(vm, |o| format_amount(o.total_amount));
    let placed = move || with_order(vm, |o| o.created_at.as_deref().map(format_datetime).unwrap_or_default());
    let updated = move || with_order(vm, |o| o.updated_at.as_deref().map(format_datetime).unwrap_or_default());

    view! {
        <Card attr:class="order-card">
            <h3 class="order-card__title">"Items"</h3>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>""</TableHeaderCell>
                        <TableHeaderCell>"Product"</TableHeaderCell>
                        <TableHeaderCell>"Price"</TableHeaderCell>
                        <TableHeaderCell>"Qty"</TableHeaderCell>
                        <TableHeaderCell>"Total"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || items()
                        .into_iter()
                        .map(|item| {
                            let logo = item.product_logo;
                            let alt = item.product_name.clone();
                            let name = item.product_name;
                            let details = [item.product_brand.as_str(), item.product_dimension.as_str()]
                                .iter()
                                .filter(|s| !s.is_empty())
                                .copied()
                                .collect::<Vec<_>>()
                                .join(" · ");
                            let price = format_amount(item.product_price);
                            let qty = item.no_of_products;
                            let line_total = format_amount(item.total_price);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <img class="table-thumb" src=logo alt=alt />
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <div>{name}</div>
                                            <div class="text-muted">{details}</div>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>{price}</TableCell>
                                    <TableCell>{qty}</TableCell>
                                    <TableCell>{line_total}</TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
            <div class="order-totals">
                <div><span class="text-muted">"Placed: "</span>{placed}</div>
                <div><span class="text-muted">"Updated: "</span>{updated}</div>
                <div class="order-totals__amount">"Total: " {total}</div>
            </div>
        </Card>
    }
}

#[component]
fn CustomerCard(vm: OrderDetailsViewModel) -> impl IntoView {
    let customer = move || with_order(vm, |o| o.customer_id.clone());
    let shipping = move || with_order(vm, |o| o.shipping_address.clone());

    view! {
        <Card attr:class="order-card">
            <h3 class="order-card__title">"Customer"</h3>
            {move || {
                let c = customer();
                view! {
                    <p>{c.full_name()}</p>
                    <p class="text-muted">{c.email}</p>
                }
            }}
            <h3 class="order-card__title">"Shipping address"</h3>
            {move || {
                let s = shipping();
                let recipient = format!("{} {}", s.first_name, s.last_name).trim().to_string();
                view! {
                    <p>{recipient}</p>
                    {s.lines().into_iter().map(|l| view! { <p>{l}</p> }).collect_view()}
                    <p class="text-muted">{s.phone_number.clone()}</p>
                    <p class="text-muted">{s.email.clone()}</p>
                }
            }}
        </Card>
    }
}
