//! Image Picker
//!
//! File input with a local preview. Selecting a file only stages it and
//! renders a data-URL preview; nothing is uploaded until the owning form is
//! submitted.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

#[component]
pub fn ImagePicker(
    /// Staged file, uploaded by the parent form on save.
    selected: RwSignal<Option<web_sys::File>>,
    /// Data URL of the staged file, or the current remote URL.
    preview: RwSignal<Option<String>>,
    #[prop(into, default = "Image".to_string())] label: String,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };
        let file = match input.files().and_then(|files| files.get(0)) {
            Some(file) => file,
            None => return,
        };

        if let Ok(reader) = web_sys::FileReader::new() {
            let reader_ref = reader.clone();
            let onloadend = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_| {
                if let Some(data_url) = reader_ref.result().ok().and_then(|r| r.as_string()) {
                    preview.try_set(Some(data_url));
                }
            });
            reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
            onloadend.forget();
            let _ = reader.read_as_data_url(&file);
        }
        selected.try_set(Some(file));
    };

    view! {
        <div class="image-picker">
            <label>{label}</label>
            <Show when=move || preview.get().is_some()>
                <img class="image-preview" src=move || preview.get().unwrap_or_default()/>
            </Show>
            <input type="file" accept="image/*" on:change=on_change/>
        </div>
    }
}
