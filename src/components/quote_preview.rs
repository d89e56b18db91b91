//! Quote Preview Component
//!
//! Renders a read-only snapshot of the form as the printable quotation,
//! with save, update and export actions.

use leptos::prelude::*;

use crate::components::SaveDialog;
use crate::context::{alert, use_app_context};
use crate::format::format_currency;
use crate::models::QuoteSnapshot;
use crate::terms::effective_terms;

#[component]
pub fn QuotePreview() -> impl IntoView {
    let ctx = use_app_context();
    let form = ctx.form;
    let (show_save, set_show_save) = signal(false);

    let snapshot = Memo::new(move |_| form.with(|f| f.snapshot()));
    let money = move |amount: f64| format_currency(&ctx.currency(), amount);
    let is_editing = move || ctx.quotations.with(|store| store.selected().is_some());

    let on_update = move |_: web_sys::MouseEvent| match ctx.update_selected() {
        Ok(()) => log::info!("Quotation updated from form"),
        Err(e) => {
            log::error!("Error updating quotation: {}", e);
            alert(&e.to_string());
        }
    };

    let project_name = move || {
        let name = snapshot.with(|s| s.client_info.name.trim().to_string());
        if name.is_empty() { "N/A".to_string() } else { name }
    };

    let page_rows = move || {
        snapshot.with(|s| {
            s.pages
                .iter()
                .enumerate()
                .map(|(index, page)| {
                    let name = if page.name.trim().is_empty() { "Unnamed Page".to_string() } else { page.name.clone() };
                    let charge = money(page.charge.amount());
                    let row_class = if index % 2 == 0 { "row-even" } else { "row-odd" };
                    view! {
                        <tr class=row_class>
                            <td>{name}</td>
                            <td class="amount">{charge}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    let free_items = move || {
        let descriptions: Vec<String> =
            snapshot.with(|s| s.visible_free_items().map(|i| i.description.clone()).collect());
        (!descriptions.is_empty()).then(move || {
            view! {
                <div class="preview-free-items">
                    <h3>"Free Items Included"</h3>
                    <ul>
                        {descriptions.into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
                    </ul>
                </div>
            }
        })
    };

    let terms = move || {
        snapshot
            .with(|s: &QuoteSnapshot| effective_terms(&s.terms))
            .into_iter()
            .map(|t| view! { <li>{t}</li> })
            .collect_view()
    };

    view! {
        <div class="quote-preview">
            <div class="preview-toolbar">
                <h2>"Quote Preview"</h2>
                <div class="preview-actions">
                    <button class="save-btn" on:click=move |_| set_show_save.set(true)>"Save Quote"</button>
                    <Show when=is_editing>
                        <button class="update-btn" on:click=on_update>"Update Quote"</button>
                    </Show>
                    <button class="export-btn" on:click=move |_| ctx.export_pdf()>"Export as PDF"</button>
                </div>
            </div>

            <SaveDialog show=show_save set_show=set_show_save />

            <div id="quote-pdf-content" class="preview-document">
                <div class="preview-header">
                    <h2>"QUOTATION"</h2>
                    <div class="preview-date">"Date: " {move || snapshot.with(|s| s.client_info.date.clone())}</div>
                </div>

                <div class="preview-project">
                    "Project Name: " <strong>{project_name}</strong>
                </div>

                <h3>"Page Details"</h3>
                <table class="preview-table">
                    <thead>
                        <tr>
                            <th>"Page"</th>
                            <th class="amount">"Charge"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {page_rows}
                        <tr class="total-row">
                            <td>"Total"</td>
                            <td class="amount">{move || money(snapshot.with(|s| s.total))}</td>
                        </tr>
                    </tbody>
                </table>

                {free_items}

                <div class="preview-terms">
                    <h4>"Terms & Conditions:"</h4>
                    <ul>{terms}</ul>
                </div>

                <div class="preview-footer">
                    <p>"Thank you for the opportunity to work together!"</p>
                    <p class="preview-footer-sub">"Looking forward to creating something amazing with you."</p>
                </div>
            </div>
        </div>
    }
}
