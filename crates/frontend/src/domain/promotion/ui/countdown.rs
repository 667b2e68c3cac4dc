use chrono::{DateTime, Utc};
use contracts::domain::promotion::aggregate::{
    countdown_remaining, Association, CountdownForm, CountdownItem,
};
use contracts::system::auth::Capability;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::association_picker::{target_name, AssociationPicker};
use super::page::PromotionsContext;
use crate::domain::promotion::api;
use crate::shared::components::file_input::{FileSlot, ImageInput};
use crate::shared::components::form_field::{TextAreaField, TextField};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::NoRecords;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

const TICK_MS: u32 = 1_000;
const UNITS: [&str; 4] = ["days", "hours", "min", "sec"];

/// Days, hours, minutes and seconds left; display only
#[component]
fn CountdownTimer(end: Option<DateTime<Utc>>, now: RwSignal<DateTime<Utc>>) -> impl IntoView {
    let Some(end) = end else {
        return view! { <span class="text-muted">"No end time"</span> }.into_any();
    };

    view! {
        {move || {
            let left = countdown_remaining(end, now.get());
            if left.is_expired() {
                return view! { <span class="badge badge--error">"Expired"</span> }.into_any();
            }
            view! {
                <div class="countdown">
                    {left
                        .padded()
                        .into_iter()
                        .zip(UNITS)
                        .map(|(value, unit)| view! {
                            <div class="countdown__cell">
                                <span class="countdown__value">{value}</span>
                                <span class="countdown__unit">{unit}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }}
    }
    .into_any()
}

#[component]
pub fn CountdownSection(ctx: PromotionsContext) -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();

    let items: RwSignal<Vec<CountdownItem>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(false);
    let form_open = RwSignal::new(false);

    let now = RwSignal::new(Utc::now());
    let ticker = StoredValue::new_local(Some(Interval::new(TICK_MS, move || now.set(Utc::now()))));
    on_cleanup(move || {
        // Dropping the interval cancels it
        ticker.update_value(|t| {
            t.take();
        });
    });

    let load_data = move || {
        loading.set(true);
        let client = session.client();
        spawn_local(async move {
            let result = api::fetch_countdowns(&client).await;
            loading.set(false);
            match result {
                Ok(list) => items.set(list),
                Err(e) => errors.report(e),
            }
        });
    };
    load_data();

    let can_add = Signal::derive(move || session.can(Capability::AddRecords));

    view! {
        <Card attr:class="promo-section">
            <div class="promo-section__header">
                <h2 class="promo-section__title">"Countdown offers"</h2>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !can_add.get())
                    on_click=move |_| form_open.set(true)
                >
                    {icon("clock")}
                    " Add offer"
                </Button>
            </div>

            {move || {
                if loading.get() && items.with(Vec::is_empty) {
                    return view! { <Spinner /> }.into_any();
                }
                if items.with(Vec::is_empty) {
                    return view! { <NoRecords message="No countdown offers yet" /> }.into_any();
                }
                view! {
                    <div class="promo-grid">
                        <For
                            each=move || items.get()
                            key=|item| item.id.clone()
                            children=move |item: CountdownItem| {
                                let association = item.association();
                                let end = item.end_time();
                                view! {
                                    <div class="promo-card">
                                        <img class="promo-card__image" src=item.countdown_url.clone() alt=item.countdown_title.clone() />
                                        <div class="promo-card__body">
                                            <strong>{item.countdown_title.clone()}</strong>
                                            {(!item.countdown_discount.is_empty()).then(|| view! {
                                                <span class="badge badge--success">{item.countdown_discount.clone()}</span>
                                            })}
                                            <p class="text-muted">{item.countdown_description.clone()}</p>
                                            <p class="text-muted">
                                                "Ends " {format_datetime(&item.countdown_end_time)}
                                            </p>
                                            <CountdownTimer end=end now=now />
                                            <span class="badge">
                                                {move || ctx.brands.with(|b| ctx.categories.with(|c| target_name(&association, b, c)))}
                                            </span>
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

        <Dialog open=form_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Add countdown offer"</DialogTitle>
                    <Show when=move || form_open.get()>
                        <CountdownEditor ctx=ctx open=form_open on_saved=Callback::new(move |_| load_data()) />
                    </Show>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[component]
fn CountdownEditor(ctx: PromotionsContext, open: RwSignal<bool>, on_saved: Callback<()>) -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let notifications = use_notifications();

    let form = RwSignal::new(CountdownForm::default());
    let association: RwSignal<Association> = RwSignal::new(Association::default());
    let image: FileSlot = RwSignal::new_local(None);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let saving = RwSignal::new(false);

    let save = move |_| {
        let mut current = form.get_untracked();
        current.association = association.get_untracked();
        let file = image.get_untracked();
        if let Err(e) = current.validate(file.is_some(), Utc::now()) {
            error.set(Some(e.to_string()));
            return;
        }
        let Some(file) = file else {
            return;
        };
        error.set(None);
        saving.set(true);
        let client = session.client();
        spawn_local(async move {
            let result = api::create_countdown(&client, &current, file).await;
            saving.set(false);
            match result {
                Ok(_) => {
                    notifications.success("Countdown offer added", current.title);
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
                value=Signal::derive(move || form.with(|f| f.title.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.title = v))
            />
            <TextAreaField
                label="Description"
                value=Signal::derive(move || form.with(|f| f.description.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.description = v))
                rows=3
            />
            <div class="form__row">
                <TextField
                    label="Discount"
                    placeholder="e.g. 20% OFF"
                    value=Signal::derive(move || form.with(|f| f.discount.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.discount = v))
                />
                <TextField
                    label="Ends at"
                    required=true
                    input_type="datetime-local"
                    value=Signal::derive(move || form.with(|f| f.end_time.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.end_time = v))
                />
            </div>
            <AssociationPicker value=association ctx=ctx />
            <ImageInput label="Offer image" file=image required=true />
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
