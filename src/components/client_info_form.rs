//! Client Info Form Component
//!
//! Project name and quotation date.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::form::{ClientField, FormStateStoreFields};

#[component]
pub fn ClientInfoForm() -> impl IntoView {
    let form = use_app_context().form;

    let name = move || form.client_info().with(|c| c.name.clone());
    let date = move || form.client_info().with(|c| c.date.clone());

    view! {
        <section class="form-section client-info">
            <h2>"Project Information"</h2>
            <div class="field-grid">
                <label>
                    "Project Name:"
                    <input
                        type="text"
                        placeholder="Enter project name"
                        prop:value=name
                        on:input=move |ev| form.write().set_client_field(ClientField::Name, &event_target_value(&ev))
                    />
                    <span class="field-hint">"This name will appear on your quotation"</span>
                </label>
                <label>
                    "Date:"
                    <input
                        type="date"
                        prop:value=date
                        on:input=move |ev| form.write().set_client_field(ClientField::Date, &event_target_value(&ev))
                    />
                </label>
            </div>
        </section>
    }
}
