//! Save Dialog Component
//!
//! Prompts for a quotation name and saves the current form.

use leptos::prelude::*;

use crate::context::{alert, use_app_context};
use crate::error::QuoteError;

#[component]
pub fn SaveDialog(show: ReadSignal<bool>, set_show: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let (name, set_name) = signal(String::new());

    let on_save = move |_: web_sys::MouseEvent| match ctx.save_current(&name.get_untracked()) {
        Ok(_) => {
            set_name.set(String::new());
            set_show.set(false);
        }
        Err(QuoteError::InvalidInput(msg)) => alert(&msg),
        Err(e) => {
            log::error!("Error saving quotation: {}", e);
            alert(&e.to_string());
        }
    };

    view! {
        <Show when=move || show.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <h3>"Save Quotation"</h3>
                    <input
                        type="text"
                        placeholder="Enter quotation name"
                        autofocus=true
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| set_show.set(false)>
                            "Cancel"
                        </button>
                        <button type="button" class="primary-btn" on:click=on_save>
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
