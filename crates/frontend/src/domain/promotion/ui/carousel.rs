use contracts::domain::promotion::aggregate::{Association, CarouselForm, CarouselItem};
use contracts::system::auth::Capability;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::association_picker::{target_name, AssociationPicker};
use super::page::PromotionsContext;
use crate::domain::promotion::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::file_input::{FileSlot, ImageInput};
use crate::shared::components::form_field::{TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::shared::list_utils::NoRecords;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

#[component]
pub fn CarouselSection(ctx: PromotionsContext) -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let notifications = use_notifications();

    let items: RwSignal<Vec<CarouselItem>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(false);

    let editor_open = RwSignal::new(false);
    let editing: RwSignal<Option<CarouselItem>> = RwSignal::new(None);
    let pending_delete: RwSignal<Option<CarouselItem>> = RwSignal::new(None);
    let confirm_open = RwSignal::new(false);

    let load_data = move || {
        loading.set(true);
        let client = session.client();
        spawn_local(async move {
            let result = api::fetch_carousel(&client).await;
            loading.set(false);
            match result {
                Ok(list) => items.set(list),
                Err(e) => errors.report(e),
            }
        });
    };
    load_data();

    let delete_selected = move |_| {
        let Some(item) = pending_delete.get_untracked() else {
            return;
        };
        let client = session.client();
        spawn_local(async move {
            match api::delete_carousel(&client, &item.id).await {
                Ok(_) => {
                    notifications.success("Carousel item deleted", item.carousel_title);
                    load_data();
                }
                Err(e) => errors.report(e),
            }
        });
    };

    let can_add = Signal::derive(move || session.can(Capability::AddRecords));
    let can_update = Signal::derive(move || session.can(Capability::UpdateRecords));
    let can_delete = Signal::derive(move || session.can(Capability::DeleteRecords));

    view! {
        <Card attr:class="promo-section">
            <div class="promo-section__header">
                <h2 class="promo-section__title">"Carousel"</h2>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !can_add.get())
                    on_click=move |_| {
                        editing.set(None);
                        editor_open.set(true);
                    }
                >
                    {icon("plus")}
                    " Add slide"
                </Button>
            </div>

            {move || {
                if loading.get() && items.with(Vec::is_empty) {
                    return view! { <Spinner /> }.into_any();
                }
                if items.with(Vec::is_empty) {
                    return view! { <NoRecords message="No carousel slides yet" /> }.into_any();
                }
                view! {
                    <div class="promo-grid">
                        <For
                            each=move || items.get()
                            key=|item| (item.id.clone(), item.carousel_url.clone(), item.carousel_title.clone())
                            children=move |item: CarouselItem| {
                                let association = item.association();
                                let for_edit = item.clone();
                                let for_delete = item.clone();
                                view! {
                                    <div class="promo-card">
                                        <img class="promo-card__image" src=item.carousel_url.clone() alt=item.carousel_title.clone() />
                                        <div class="promo-card__body">
                                            <strong>{item.carousel_title.clone()}</strong>
                                            <p class="text-muted">{item.carousel_description.clone()}</p>
                                            <span class="badge">
                                                {move || ctx.brands.with(|b| ctx.categories.with(|c| target_name(&association, b, c)))}
                                            </span>
                                        </div>
                                        <div class="promo-card__actions">
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                disabled=Signal::derive(move || !can_update.get())
                                                on_click=move |_| {
                                                    editing.set(Some(for_edit.clone()));
                                                    editor_open.set(true);
                                                }
                                                attr:title="Edit"
                                            >
                                                {icon("edit")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                disabled=Signal::derive(move || !can_delete.get())
                                                on_click=move |_| {
                                                    pending_delete.set(Some(for_delete.clone()));
                                                    confirm_open.set(true);
                                                }
                                                attr:title="Delete"
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                }
                .into_any()
            }}
        </Card>

        <Dialog open=editor_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || if editing.with(Option::is_some) { "Edit slide" } else { "Add slide" }}
                    </DialogTitle>
                    // Re-created on every open so the form starts from the picked item
                    <Show when=move || editor_open.get()>
                        <CarouselEditor
                            item=editing.get_untracked()
                            ctx=ctx
                            open=editor_open
                            on_saved=Callback::new(move |_| load_data())
                        />
                    </Show>
                </DialogBody>
            </DialogSurface>
        </Dialog>

        <ConfirmDialog
            open=confirm_open
            title="Delete slide"
            message=Signal::derive(move || {
                pending_delete
                    .get()
                    .map(|k| format!("Delete \"{}\" from the carousel?", k.carousel_title))
                    .unwrap_or_default()
            })
            on_confirm=Callback::new(delete_selected)
        />
    }
}

#[component]
fn CarouselEditor(
    item: Option<CarouselItem>,
    ctx: PromotionsContext,
    open: RwSignal<bool>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let notifications = use_notifications();

    let initial = item.as_ref().map(CarouselForm::from_item).unwrap_or_default();
    let title = RwSignal::new(initial.title);
    let description = RwSignal::new(initial.description);
    let association: RwSignal<Association> = RwSignal::new(initial.association);
    let image: FileSlot = RwSignal::new_local(None);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let saving = RwSignal::new(false);

    let editing_id = item.as_ref().map(|k| k.id.clone());
    let current_url = item.as_ref().map(|k| k.carousel_url.clone());
    let is_new = editing_id.is_none();

    let save = move |_| {
        let form = CarouselForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            association: association.get_untracked(),
        };
        let file = image.get_untracked();
        if let Err(e) = form.validate(file.is_some(), is_new) {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        saving.set(true);
        let client = session.client();
        let editing_id = editing_id.clone();
        spawn_local(async move {
            let result = match (editing_id, file) {
                (Some(id), file) => api::update_carousel(&client, &id, &form, file).await,
                (None, Some(file)) => api::create_carousel(&client, &form, file).await,
                (None, None) => {
                    saving.set(false);
                    return;
                }
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    let msg = if is_new { "Slide added" } else { "Slide updated" };
                    notifications.success(msg, form.title);
                    open.set(false);
                    on_saved.run(());
                }
                Err(e) => errors.report(e),
            }
        });
    };

    view! {
        <DialogContent>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <TextField
                label="Title"
                required=true
                value=title
                on_input=Callback::new(move |v| title.set(v))
            />
            <TextAreaField
                label="Description"
                value=description
                on_input=Callback::new(move |v| description.set(v))
                rows=3
            />
            <AssociationPicker value=association ctx=ctx />
            <ImageInput label="Slide image" file=image current_url=current_url required=is_new />
        </DialogContent>
        <DialogActions>
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                "Cancel"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || saving.get())
                on_click=save
            >
                {icon("check")}
                {move || if saving.get() { " Saving..." } else { " Save" }}
            </Button>
        </DialogActions>
    }
}
