//! Image pickers for multipart forms.
//!
//! Files are not `Send`, so they live in local-storage signals
//! (`RwSignal::new_local`).

use leptos::prelude::*;
use web_sys::{File, HtmlInputElement, Url};

use crate::shared::icons::icon;

pub type FileSlot = RwSignal<Option<File>, LocalStorage>;
pub type FileListSlot = RwSignal<Vec<File>, LocalStorage>;

fn picked_files(input: &HtmlInputElement) -> Vec<File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

fn object_url(file: &File) -> Option<String> {
    Url::create_object_url_with_blob(file).ok()
}

/// Single image with preview. `current_url` is the image already stored
/// on the server, shown until a new file is picked.
#[component]
pub fn ImageInput(
    #[prop(into)] label: String,
    file: FileSlot,
    #[prop(optional_no_strip)] current_url: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let preview: RwSignal<Option<String>> = RwSignal::new(current_url);

    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let picked = picked_files(&input).into_iter().next();
        if let Some(old) = preview.get_untracked() {
            if old.starts_with("blob:") {
                let _ = Url::revoke_object_url(&old);
            }
        }
        preview.set(picked.as_ref().and_then(object_url));
        file.set(picked);
    };

    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <label class="image-input">
                <input type="file" accept="image/*" class="image-input__native" on:change=on_change />
                {move || match preview.get() {
                    Some(src) => view! { <img class="image-input__preview" src=src alt="preview" /> }.into_any(),
                    None => view! {
                        <span class="image-input__placeholder">
                            {icon("upload")}
                            " Choose image"
                        </span>
                    }.into_any(),
                }}
            </label>
        </div>
    }
}

/// Several images; each pick is appended, thumbnails can be removed
#[component]
pub fn ImageListInput(#[prop(into)] label: String, files: FileListSlot) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let picked = picked_files(&input);
        files.update(|f| f.extend(picked));
        input.set_value("");
    };

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <div class="image-list">
                {move || {
                    files
                        .get()
                        .iter()
                        .enumerate()
                        .map(|(idx, f)| {
                            let src = object_url(f).unwrap_or_default();
                            view! {
                                <div class="image-list__item">
                                    <img src=src alt=f.name() />
                                    <button
                                        class="image-list__remove"
                                        title="Remove"
                                        on:click=move |_| files.update(|f| {
                                            if idx < f.len() {
                                                f.remove(idx);
                                            }
                                        })
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <label class="image-input image-input--small">
                    <input type="file" accept="image/*" multiple class="image-input__native" on:change=on_change />
                    <span class="image-input__placeholder">{icon("plus")}</span>
                </label>
            </div>
        </div>
    }
}
