use contracts::domain::inventory::aggregate::{AddSupplierRequest, Supplier};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::page::InventoryContext;
use crate::domain::inventory::api;
use crate::shared::components::form_field::TextField;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

/// List of suppliers plus a small form to add one
#[component]
pub fn SuppliersDialog(open: RwSignal<bool>, ctx: InventoryContext) -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let notifications = use_notifications();

    let form = RwSignal::new(AddSupplierRequest::default());
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let saving = RwSignal::new(false);

    let add = move |_| {
        let request = form.get_untracked();
        if let Err(e) = request.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        saving.set(true);
        let client = session.client();
        spawn_local(async move {
            let result = api::add_supplier(&client, &request).await;
            saving.set(false);
            match result {
                Ok(response) => {
                    notifications.success("Supplier added", request.name.clone());
                    form.set(AddSupplierRequest::default());
                    match response.supplier {
                        Some(supplier) => ctx.suppliers.update(|s| s.push(supplier)),
                        None => ctx.load_suppliers(session, errors),
                    }
                }
                Err(e) => errors.report(e),
            }
        });
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Suppliers"</DialogTitle>
                    <DialogContent>
                        {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                        <div class="form__row">
                            <TextField
                                label="Name"
                                required=true
                                value=Signal::derive(move || form.with(|f| f.name.clone()))
                                on_input=Callback::new(move |v| form.update(|f| f.name = v))
                            />
                            <TextField
                                label="Email"
                                input_type="email"
                                value=Signal::derive(move || form.with(|f| f.email.clone()))
                                on_input=Callback::new(move |v| form.update(|f| f.email = v))
                            />
                            <TextField
                                label="Phone"
                                value=Signal::derive(move || form.with(|f| f.phone.clone()))
                                on_input=Callback::new(move |v| form.update(|f| f.phone = v))
                            />
                        </div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || saving.get())
                            on_click=add
                        >
                            {icon("plus")}
                            " Add supplier"
                        </Button>

                        <ul class="dialog-list">
                            <For
                                each=move || ctx.suppliers.get()
                                key=|s| s.id.clone()
                                children=|supplier: Supplier| view! {
                                    <li class="dialog-list__item">
                                        <strong>{supplier.name}</strong>
                                        <span class="text-muted">
                                            {[supplier.email, supplier.phone]
                                                .into_iter()
                                                .flatten()
                                                .filter(|s| !s.is_empty())
                                                .collect::<Vec<_>>()
                                                .join(" · ")}
                                        </span>
                                    </li>
                                }
                            />
                        </ul>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Close"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
