//! Terms Form Component
//!
//! Free-form terms text; blank lines separate paragraphs.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::form::FormStateStoreFields;
use crate::terms::join_paragraphs;

#[component]
pub fn TermsForm() -> impl IntoView {
    let form = use_app_context().form;

    let text = move || form.terms().with(|terms| join_paragraphs(terms));

    // Committed on change (blur) so blank lines survive while typing
    let on_change = move |ev: web_sys::Event| {
        let Some(textarea) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok()) else {
            return;
        };
        form.write().set_terms_from_text(&textarea.value());
    };

    view! {
        <section class="form-section terms">
            <h2>"Terms & Conditions"</h2>
            <textarea
                rows="8"
                placeholder="Leave empty to use the default terms. Separate paragraphs with a blank line."
                prop:value=text
                on:change=on_change
            />
        </section>
    }
}
