//! Saved Quotations Component
//!
//! Sidebar list of persisted quotations with edit/delete actions.

use leptos::prelude::*;

use crate::components::DeleteQuotationButton;
use crate::context::use_app_context;
use crate::format::{format_currency, format_saved_date};
use crate::models::Quotation;

#[component]
pub fn SavedQuotations() -> impl IntoView {
    let ctx = use_app_context();

    let items = move || ctx.quotations.with(|store| store.items().to_vec());
    let is_empty = move || ctx.quotations.with(|store| store.items().is_empty());
    let selected_id = move || ctx.quotations.with(|store| store.selected().map(|q| q.id.clone()));

    view! {
        <div class="saved-quotations">
            <h2>"Saved Quotations"</h2>
            <Show when=is_empty>
                <p class="empty-hint">"No saved quotations yet."</p>
            </Show>
            <For
                each=items
                key=|q: &Quotation| (q.id.clone(), q.date.clone())
                children=move |q: Quotation| {
                    let id = q.id.clone();
                    let is_selected = {
                        let id = id.clone();
                        move || selected_id().as_deref() == Some(id.as_str())
                    };
                    let name = q.name.clone();
                    let delete_name = q.name.clone();
                    let client = q.client_info.name.clone();
                    let total = format_currency(&ctx.currency(), q.total);
                    let saved_at = format_saved_date(&q.date);

                    view! {
                        <div class=move || if is_selected() { "saved-quote selected" } else { "saved-quote" }>
                            <div class="saved-quote-info">
                                <h3>{name}</h3>
                                <p class="saved-quote-client">{client}</p>
                                <p class="saved-quote-date">"Saved: " {saved_at}</p>
                                <p class="saved-quote-total">"Total: " {total}</p>
                            </div>
                            <div class="saved-quote-actions">
                                <button
                                    class="edit-btn"
                                    on:click=move |_| ctx.select_for_edit(q.clone())
                                >
                                    "Edit"
                                </button>
                                <DeleteQuotationButton quotation_id=id.clone() quotation_name=delete_name.clone() />
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
