use contracts::domain::inventory::aggregate::{BillDraft, Supplier};
use contracts::domain::product::aggregate::Dimension;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::bill_detail::BillDetailPanel;
use super::bill_editor::BillEditor;
use super::recent_bills::RecentBills;
use super::stock_list::StockList;
use super::suppliers_dialog::SuppliersDialog;
use super::units_dialog::UnitsDialog;
use crate::domain::inventory::api;
use crate::domain::product::api as product_api;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_KIND_LIST};
use crate::system::auth::context::{use_session, Session};
use crate::system::auth::policy::{use_api_errors, ApiErrors};

/// State shared by the panels of the inventory page
#[derive(Clone, Copy)]
pub struct InventoryContext {
    pub suppliers: RwSignal<Vec<Supplier>>,
    pub dimensions: RwSignal<Vec<Dimension>>,
    /// Kept here so it survives switching to a bill and back
    pub draft: RwSignal<BillDraft>,
    /// Bumped after a bill is saved so the bill list reloads
    pub bills_version: RwSignal<u32>,
    /// Bill shown instead of the editor
    pub selected_bill: RwSignal<Option<String>>,
}

impl InventoryContext {
    fn new() -> Self {
        Self {
            suppliers: RwSignal::new(Vec::new()),
            dimensions: RwSignal::new(Vec::new()),
            draft: RwSignal::new(BillDraft::new()),
            bills_version: RwSignal::new(0),
            selected_bill: RwSignal::new(None),
        }
    }

    pub fn load_suppliers(&self, session: Session, errors: ApiErrors) {
        let suppliers = self.suppliers;
        let client = session.client();
        spawn_local(async move {
            match api::fetch_suppliers(&client).await {
                Ok(list) => suppliers.set(list),
                Err(e) => errors.report(e),
            }
        });
    }

    pub fn load_dimensions(&self, session: Session, errors: ApiErrors) {
        let dimensions = self.dimensions;
        let client = session.client();
        spawn_local(async move {
            match product_api::fetch_dimensions(&client).await {
                Ok(list) => dimensions.set(list),
                Err(e) => errors.report(e),
            }
        });
    }
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let ctx = InventoryContext::new();
    ctx.load_suppliers(session, errors);
    ctx.load_dimensions(session, errors);

    let suppliers_open = RwSignal::new(false);
    let units_open = RwSignal::new(false);

    view! {
        <PageFrame
            page_id="inventory--list"
            kind=PAGE_KIND_LIST
            title="Inventory"
            subtitle="Stock levels and purchase bills"
            actions=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| suppliers_open.set(true)>
                    {icon("users")}
                    " Suppliers"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| units_open.set(true)>
                    {icon("layers")}
                    " Units"
                </Button>
            }
        >
            <StockList />

            <div class="inventory-grid">
                <div class="inventory-grid__main">
                    {move || match ctx.selected_bill.get() {
                        Some(id) => view! { <BillDetailPanel ctx=ctx bill_id=id /> }.into_any(),
                        None => view! { <BillEditor ctx=ctx /> }.into_any(),
                    }}
                </div>
                <div class="inventory-grid__side">
                    <RecentBills ctx=ctx />
                </div>
            </div>

            <SuppliersDialog open=suppliers_open ctx=ctx />
            <UnitsDialog open=units_open ctx=ctx />
        </PageFrame>
    }
}
