use contracts::domain::product::aggregate::Dimension;
use contracts::shared::validation::require;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::page::InventoryContext;
use crate::domain::product::api as product_api;
use crate::shared::components::form_field::TextField;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

/// True when `name` is already a unit, ignoring case
fn is_duplicate(existing: &[String], name: &str) -> bool {
    let name = name.trim();
    existing.iter().any(|u| u.eq_ignore_ascii_case(name))
}

/// Units of measure ("metrics") products are sold in
#[component]
pub fn UnitsDialog(open: RwSignal<bool>, ctx: InventoryContext) -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let notifications = use_notifications();

    let name = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let saving = RwSignal::new(false);

    let add = move |_| {
        let value = name.get_untracked();
        if let Err(e) = require("Unit name", &value) {
            error.set(Some(e.to_string()));
            return;
        }
        let existing: Vec<String> = ctx
            .dimensions
            .with_untracked(|d| d.iter().map(|u| u.dimension_name.clone()).collect());
        if is_duplicate(&existing, &value) {
            error.set(Some(format!("Unit \"{}\" already exists", value.trim())));
            return;
        }
        error.set(None);
        saving.set(true);
        let client = session.client();
        spawn_local(async move {
            let result = product_api::add_dimension(&client, &value).await;
            saving.set(false);
            match result {
                Ok(response) => {
                    notifications.success("Unit added", value.trim().to_string());
                    name.set(String::new());
                    match response.dimension {
                        Some(dimension) => ctx.dimensions.update(|d| d.push(dimension)),
                        None => ctx.load_dimensions(session, errors),
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
                    <DialogTitle>"Units"</DialogTitle>
                    <DialogContent>
                        {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                        <TextField
                            label="New unit"
                            placeholder="e.g. kg"
                            value=name
                            on_input=Callback::new(move |v| name.set(v))
                        />
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || saving.get())
                            on_click=add
                        >
                            {icon("plus")}
                            " Add unit"
                        </Button>

                        <Show
                            when=move || !ctx.dimensions.with(Vec::is_empty)
                            fallback=|| view! { <p class="text-muted">"No units added yet."</p> }
                        >
                            <ul class="dialog-list">
                                <For
                                    each=move || ctx.dimensions.get()
                                    key=|d| d.id.clone()
                                    children=|d: Dimension| view! {
                                        <li class="dialog-list__item">{d.dimension_name}</li>
                                    }
                                />
                            </ul>
                        </Show>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_units_ignore_case() {
        let units = vec!["kg".to_string(), "Piece".to_string()];
        assert!(is_duplicate(&units, " KG "));
        assert!(is_duplicate(&units, "piece"));
        assert!(!is_duplicate(&units, "litre"));
    }
}
