use contracts::domain::common::format_amount;
use contracts::domain::inventory::aggregate::BillDetail;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::page::InventoryContext;
use crate::domain::inventory::api;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

#[component]
pub fn BillDetailPanel(ctx: InventoryContext, bill_id: String) -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let bill: RwSignal<Option<BillDetail>> = RwSignal::new(None);
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    {
        let client = session.client();
        spawn_local(async move {
            match api::fetch_bill(&client, &bill_id).await {
                Ok(detail) => bill.set(Some(detail)),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    errors.report(e);
                }
            }
        });
    }

    view! {
        <section class="panel">
            <div class="panel__header">
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| ctx.selected_bill.set(None)>
                    {icon("arrow-left")}
                    " Back to new bill"
                </Button>
            </div>
            {move || match (bill.get(), error.get()) {
                (Some(detail), _) => {
                    let title = format!("Bill {}", detail.bill_number);
                    let date = detail.bill_date;
                    let grand_total = format_amount(detail.grand_total);
                    let rows = detail
                        .items
                        .into_iter()
                        .map(|item| {
                            let product = item.product;
                            let supplier = item.supplier;
                            let unit = item.unit;
                            let price = format_amount(item.price);
                            let qty = item.qty;
                            let total = format_amount(item.total);
                            view! {
                                <TableRow>
                                    <TableCell>{product}</TableCell>
                                    <TableCell>{supplier}</TableCell>
                                    <TableCell>{unit}</TableCell>
                                    <TableCell>{price}</TableCell>
                                    <TableCell>{qty}</TableCell>
                                    <TableCell>{total}</TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view();
                    view! {
                        <h2 class="panel__title">{title}</h2>
                        <p class="text-muted">{date}</p>
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Product"</TableHeaderCell>
                                    <TableHeaderCell>"Supplier"</TableHeaderCell>
                                    <TableHeaderCell>"Unit"</TableHeaderCell>
                                    <TableHeaderCell>"Price"</TableHeaderCell>
                                    <TableHeaderCell>"Qty"</TableHeaderCell>
                                    <TableHeaderCell>"Total"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>{rows}</TableBody>
                        </Table>
                        <div class="bill-summary">
                            <span class="bill-summary__label">"Grand total"</span>
                            <span class="bill-summary__amount">{grand_total}</span>
                        </div>
                    }
                    .into_any()
                }
                (None, Some(message)) => view! { <div class="alert alert--error">{message}</div> }.into_any(),
                (None, None) => view! { <Spinner /> }.into_any(),
            }}
        </section>
    }
}
