//! Delete Quotation Button
//!
//! Two-step delete for a saved quotation: the first click asks, naming the
//! quotation, the second removes it from the store.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Confirmation prompt shown before a quotation is deleted
pub fn delete_prompt(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        "Delete this quotation?".to_string()
    } else {
        format!("Delete \"{}\"?", name)
    }
}

#[component]
pub fn DeleteQuotationButton(
    #[prop(into)] quotation_id: String,
    #[prop(into)] quotation_name: String,
) -> impl IntoView {
    let ctx = use_app_context();
    let confirming = RwSignal::new(false);
    let quotation_id = StoredValue::new(quotation_id);
    let prompt = delete_prompt(&quotation_name);

    let on_yes = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        confirming.set(false);
        quotation_id.with_value(|id| ctx.delete(id));
    };

    let ask = move || {
        view! {
            <button
                class="delete-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    confirming.set(true);
                }
            >
                "Delete"
            </button>
        }
    };

    view! {
        <Show when=move || confirming.get() fallback=ask>
            <span class="delete-confirm" role="alertdialog">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button class="confirm-btn" on:click=on_yes>"Yes, delete"</button>
                <button class="cancel-btn" on:click=move |_| confirming.set(false)>"Keep"</button>
            </span>
        </Show>
    }
}
