//! Delete Confirmation Modal
//!
//! Generic two-step delete overlay. The caller owns the open flag, the busy
//! flag and the error text; on a failed delete it keeps the modal open and
//! fills in the error so the operator can retry or back out.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmModal(
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h3>{title}</h3>
                <p>{message}</p>
                <Show when=move || error.get().is_some()>
                    <p class="modal-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="modal-actions">
                    <button
                        class="btn-secondary"
                        disabled=move || busy.get()
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="btn-danger"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {move || if busy.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
