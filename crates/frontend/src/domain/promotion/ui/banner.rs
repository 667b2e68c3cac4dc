use contracts::domain::promotion::aggregate::{Association, BannerItem};
use contracts::shared::validation::ValidationError;
use contracts::system::auth::Capability;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::association_picker::{target_name, AssociationPicker};
use super::page::PromotionsContext;
use crate::domain::promotion::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::file_input::{FileSlot, ImageInput};
use crate::shared::icons::icon;
use crate::shared::list_utils::NoRecords;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

/// Banners have no text of their own, only the picture and its link
fn validate_banner(association: &Association, has_image: bool) -> Result<(), ValidationError> {
    association.validate()?;
    if !has_image {
        return Err(ValidationError::Required("Banner image"));
    }
    Ok(())
}

#[component]
pub fn BannerSection(ctx: PromotionsContext) -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let notifications = use_notifications();

    let items: RwSignal<Vec<BannerItem>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(false);

    let form_open = RwSignal::new(false);
    let association: RwSignal<Association> = RwSignal::new(Association::default());
    let image: FileSlot = RwSignal::new_local(None);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let saving = RwSignal::new(false);

    let pending_delete: RwSignal<Option<BannerItem>> = RwSignal::new(None);
    let confirm_open = RwSignal::new(false);

    let load_data = move || {
        loading.set(true);
        let client = session.client();
        spawn_local(async move {
            let result = api::fetch_banners(&client).await;
            loading.set(false);
            match result {
                Ok(list) => items.set(list),
                Err(e) => errors.report(e),
            }
        });
    };
    load_data();

    let add = move |_| {
        let target = association.get_untracked();
        let file = image.get_untracked();
        if let Err(e) = validate_banner(&target, file.is_some()) {
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
            let result = api::create_banner(&client, &target, file).await;
            saving.set(false);
            match result {
                Ok(_) => {
                    let label = ctx
                        .brands
                        .with_untracked(|b| ctx.categories.with_untracked(|c| target_name(&target, b, c)));
                    notifications.success("Banner added", label);
                    form_open.set(false);
                    load_data();
                }
                Err(e) => errors.report(e),
            }
        });
    };

    let delete_selected = move |_| {
        let Some(item) = pending_delete.get_untracked() else {
            return;
        };
        let client = session.client();
        spawn_local(async move {
            match api::delete_banner(&client, &item.id).await {
                Ok(_) => {
                    notifications.success("Banner deleted", "");
                    load_data();
                }
                Err(e) => errors.report(e),
            }
        });
    };

    let can_add = Signal::derive(move || session.can(Capability::AddRecords));
    let can_delete = Signal::derive(move || session.can(Capability::DeleteRecords));

    let open_form = move |_| {
        association.set(Association::default());
        image.set(None);
        error.set(None);
        form_open.set(true);
    };

    view! {
        <Card attr:class="promo-section">
            <div class="promo-section__header">
                <h2 class="promo-section__title">"Banners"</h2>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !can_add.get())
                    on_click=open_form
                >
                    {icon("plus")}
                    " Add banner"
                </Button>
            </div>

            {move || {
                if loading.get() && items.with(Vec::is_empty) {
                    return view! { <Spinner /> }.into_any();
                }
                if items.with(Vec::is_empty) {
                    return view! { <NoRecords message="No banners yet" /> }.into_any();
                }
                view! {
                    <div class="promo-grid promo-grid--wide">
                        <For
                            each=move || items.get()
                            key=|item| item.id.clone()
                            children=move |item: BannerItem| {
                                let association = item.association();
                                let for_delete = item.clone();
                                view! {
                                    <div class="promo-card">
                                        <img class="promo-card__image" src=item.banner_url.clone() alt="banner" />
                                        <div class="promo-card__body">
                                            <span class="badge">
                                                {move || ctx.brands.with(|b| ctx.categories.with(|c| target_name(&association, b, c)))}
                                            </span>
                                        </div>
                                        <div class="promo-card__actions">
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

        <Dialog open=form_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Add banner"</DialogTitle>
                    <DialogContent>
                        {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                        <AssociationPicker value=association ctx=ctx />
                        // Remounted per open so the preview does not outlive the picked file
                        <Show when=move || form_open.get()>
                            <ImageInput label="Banner image" file=image required=true />
                        </Show>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| form_open.set(false)>
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || saving.get())
                            on_click=add
                        >
                            {icon("check")}
                            {move || if saving.get() { " Saving..." } else { " Save" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>

        <ConfirmDialog
            open=confirm_open
            title="Delete banner"
            message="Delete this banner from the storefront?".to_string()
            on_confirm=Callback::new(delete_selected)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::promotion::aggregate::AssociationKind;

    #[test]
    fn test_banner_needs_target_and_image() {
        let mut association = Association::default();
        assert!(validate_banner(&association, true).is_err());

        association.kind = AssociationKind::Category;
        association.target_id = "c1".into();
        assert_eq!(
            validate_banner(&association, false),
            Err(ValidationError::Required("Banner image"))
        );
        assert!(validate_banner(&association, true).is_ok());
    }
}
