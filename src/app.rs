//! Quotation Maker App
//!
//! Main application component: saved-quotation sidebar, editing forms and live preview.

use leptos::prelude::*;

use crate::components::{ClientInfoForm, FreeItemsForm, LineItemsForm, QuotePreview, SavedQuotations, TermsForm};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    let ctx = AppContext::new(AppConfig::default());
    provide_context(ctx);

    let saved_count = move || ctx.quotations.with(|store| store.items().len());
    let heading = move || {
        ctx.quotations.with(|store| match store.selected() {
            Some(q) => format!("Editing: {}", q.name),
            None => "Create New Quotation".to_string(),
        })
    };

    view! {
        <div class="app-layout">
            // Left: saved quotations
            <aside class="sidebar">
                <div class="sidebar-header">
                    <h1>"Quotation Maker"</h1>
                    <p>"Create professional quotes"</p>
                </div>
                <button class="new-quote-btn" on:click=move |_| ctx.new_quotation()>"New Quotation"</button>
                <p class="saved-count">{move || format!("{} available", saved_count())}</p>
                <SavedQuotations />
            </aside>

            // Center: forms, Right: preview
            <main class="main-content">
                <header class="main-header">
                    <h2>{heading}</h2>
                </header>
                <div class="editor-grid">
                    <div class="form-column">
                        <ClientInfoForm />
                        <LineItemsForm />
                        <FreeItemsForm />
                        <TermsForm />
                    </div>
                    <div class="preview-column">
                        <QuotePreview />
                    </div>
                </div>
            </main>
        </div>
    }
}
