use contracts::domain::common::format_amount;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use super::view_model::{subcategory_options, ProductDetailsViewModel};
use crate::routes::paths;
use crate::shared::components::file_input::{ImageInput, ImageListInput};
use crate::shared::components::form_field::{CheckboxField, SelectField, TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_KIND_FORM};
use crate::system::auth::context::use_session;
use crate::system::auth::policy::use_api_errors;

#[component]
pub fn ProductAddPage() -> impl IntoView {
    let vm = ProductDetailsViewModel::new();
    vm.load_lookups(use_session(), use_api_errors());
    view! {
        <PageFrame page_id="product--add" kind=PAGE_KIND_FORM title="Add product" back=paths::PRODUCTS>
            <ProductFormBody vm=vm />
        </PageFrame>
    }
}

#[component]
pub fn ProductEditPage() -> impl IntoView {
    let vm = ProductDetailsViewModel::new();
    let params = use_params_map();
    let product_id = params.with_untracked(|p| p.get("id")).unwrap_or_default();
    vm.load_for_edit(product_id, use_session(), use_api_errors());

    // 0 loading, 1 form, 2 nothing to edit
    let phase = Memo::new(move |_| {
        if vm.loading.get() {
            0
        } else if vm.is_edit_mode() {
            1
        } else {
            2
        }
    });

    view! {
        <PageFrame page_id="product--edit" kind=PAGE_KIND_FORM title="Edit product" back=paths::PRODUCTS>
            {move || match phase.get() {
                0 => view! { <Spinner /> }.into_any(),
                1 => view! { <ProductFormBody vm=vm /> }.into_any(),
                _ => view! {
                    <MessageBar intent=MessageBarIntent::Warning>
                        <MessageBarBody>
                            {move || vm.error.get().unwrap_or_else(|| {
                                "No product selected. Pick one from the product list.".to_string()
                            })}
                        </MessageBarBody>
                    </MessageBar>
                }.into_any(),
            }}
        </PageFrame>
    }
}

/// Brand, category, subcategory and unit are fixed once the product exists
#[component]
fn CatalogPlacement(vm: ProductDetailsViewModel) -> impl IntoView {
    let brand_options = vm.brand_options;
    let category_options = Signal::derive(move || {
        vm.categories.with(|list| {
            list.iter()
                .map(|c| (c.category_id.clone(), c.category_name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let sub_options = Signal::derive(move || {
        let category_id = vm.form.with(|f| f.category_id.clone());
        vm.categories.with(|cats| {
            vm.subcategories
                .with(|subs| subcategory_options(cats, subs, &category_id))
        })
    });
    let dimension_options = Signal::derive(move || {
        vm.dimensions.with(|list| {
            list.iter()
                .map(|d| (d.id.clone(), d.dimension_name.clone()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="form__row">
            <SelectField
                label="Brand"
                required=true
                placeholder="Select a brand"
                value=Signal::derive(move || vm.form.with(|f| f.brand_id.clone()))
                on_change=Callback::new(move |v| vm.form.update(|f| f.brand_id = v))
                options=brand_options
            />
            <SelectField
                label="Unit"
                required=true
                placeholder="Select a unit"
                value=Signal::derive(move || vm.form.with(|f| f.dimension_id.clone()))
                on_change=Callback::new(move |v| vm.set_dimension(v))
                options=dimension_options
            />
        </div>
        <div class="form__row">
            <SelectField
                label="Category"
                required=true
                placeholder="Select a category"
                value=Signal::derive(move || vm.form.with(|f| f.category_id.clone()))
                on_change=Callback::new(move |v| vm.set_category(v))
                options=category_options
            />
            <SelectField
                label="Subcategory"
                required=true
                placeholder="Select a subcategory"
                value=Signal::derive(move || vm.form.with(|f| f.sub_category_id.clone()))
                on_change=Callback::new(move |v| vm.form.update(|f| f.sub_category_id = v))
                options=sub_options
                disabled=Signal::derive(move || vm.form.with(|f| f.category_id.is_empty()))
            />
        </div>
    }
}

#[component]
fn TagEditor(vm: ProductDetailsViewModel) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">"Tags"</label>
            <div class="tag-editor">
                <input
                    class="form__input"
                    type="text"
                    placeholder="Type a tag and press Enter"
                    prop:value=move || vm.tag_input.get()
                    on:input=move |ev| vm.tag_input.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            vm.add_tag();
                        }
                    }
                />
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.add_tag()>
                    {icon("plus")}
                </Button>
            </div>
            <div class="tag-list">
                <For
                    each=move || vm.form.with(|f| f.tags.clone())
                    key=|t| t.clone()
                    children=move |tag: String| {
                        let to_remove = tag.clone();
                        view! {
                            <span class="tag">
                                {tag}
                                <button
                                    class="tag__remove"
                                    title="Remove"
                                    on:click=move |_| vm.form.update(|f| f.remove_tag(&to_remove))
                                >
                                    {icon("x")}
                                </button>
                            </span>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn ProductFormBody(vm: ProductDetailsViewModel) -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let is_edit = vm.is_edit_mode();
    let current_avatar = vm
        .editing
        .with_untracked(|p| p.as_ref().map(|p| p.avatar.clone()));
    let stored_covers = vm
        .editing
        .with_untracked(|p| p.as_ref().map(|p| p.cover_images.clone()))
        .unwrap_or_default();

    let final_price = Signal::derive(move || {
        vm.form
            .with(|f| f.final_price())
            .map(format_amount)
            .unwrap_or_else(|| "-".to_string())
    });

    let on_saved = {
        let navigate = navigate.clone();
        Callback::new(move |_| {
            let title = if vm.is_edit_mode() { "Product updated" } else { "Product created" };
            notifications.success(title, vm.form.with_untracked(|f| f.name.clone()));
            navigate(paths::PRODUCTS, Default::default());
        })
    };

    view! {
        <div class="details-form details-form--wide">
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <TextField
                label="Product name"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.name = v))
            />
            <TextAreaField
                label="Description"
                rows=6
                value=Signal::derive(move || vm.form.with(|f| f.description.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.description = v))
            />
            <TextField
                label="Manufacturer"
                value=Signal::derive(move || vm.form.with(|f| f.manufacturer.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.manufacturer = v))
            />

            {(!is_edit).then(|| view! { <CatalogPlacement vm=vm /> })}

            <div class="form__row">
                <TextField
                    label="Price"
                    required=true
                    input_type="number"
                    value=Signal::derive(move || vm.form.with(|f| f.price.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.price = v))
                />
                <TextField
                    label="Discount, %"
                    input_type="number"
                    placeholder="0"
                    value=Signal::derive(move || vm.form.with(|f| f.discount.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.discount = v))
                />
                <div class="form__group">
                    <label class="form__label">"Final price"</label>
                    <div class="form__readonly">{final_price}</div>
                </div>
            </div>

            <TagEditor vm=vm />

            <div class="form__row form__row--flags">
                <CheckboxField
                    label="New"
                    checked=Signal::derive(move || vm.form.with(|f| f.is_new))
                    on_change=Callback::new(move |v| vm.form.update(|f| f.is_new = v))
                />
                <CheckboxField
                    label="On sale"
                    checked=Signal::derive(move || vm.form.with(|f| f.sales))
                    on_change=Callback::new(move |v| vm.form.update(|f| f.sales = v))
                />
                <CheckboxField
                    label="Featured"
                    checked=Signal::derive(move || vm.form.with(|f| f.featured))
                    on_change=Callback::new(move |v| vm.form.update(|f| f.featured = v))
                />
            </div>

            <ImageInput
                label="Product avatar"
                file=vm.avatar
                current_url=current_avatar
                required=!is_edit
            />
            {(!stored_covers.is_empty()).then(|| view! {
                <div class="form__group">
                    <label class="form__label">"Current cover images"</label>
                    <div class="image-list">
                        {stored_covers
                            .into_iter()
                            .map(|c| view! { <div class="image-list__item"><img src=c.url alt="cover" /></div> })
                            .collect_view()}
                    </div>
                </div>
            })}
            <ImageListInput label="Cover images" files=vm.covers />

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| navigate(paths::PRODUCTS, Default::default())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.saving.get())
                    on_click=move |_| vm.save_command(session, errors, on_saved)
                >
                    {icon("check")}
                    {move || if vm.saving.get() { " Saving..." } else { " Save" }}
                </Button>
            </div>
        </div>
    }
}
