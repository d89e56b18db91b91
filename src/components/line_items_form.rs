//! Line Items Form Component
//!
//! Priced page rows with drag-to-reorder.
//! Uses leptos-dragdrop; only the handle starts a drag.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::form::{FormStateStoreFields, LineItemField};
use crate::models::LineItem;

use leptos_dragdrop::*;

#[component]
pub fn LineItemsForm() -> impl IntoView {
    let ctx = use_app_context();
    let form = ctx.form;

    let dnd = create_reorder_signals();
    bind_global_listeners(dnd, move |mv: Move| {
        form.write().reorder_line_items(mv.from, mv.to);
    });

    // Index is part of the row key so handlers are rebuilt after a move
    let rows = move || form.pages().get().into_iter().enumerate().collect::<Vec<(usize, LineItem)>>();
    let can_remove = move || form.pages().with(|pages| pages.len() > 1);

    let set_field = move |index: usize, field: LineItemField, value: String| {
        if let Err(e) = form.write().set_line_item(index, field, &value) {
            log::warn!("Line item edit ignored: {}", e);
        }
    };

    view! {
        <section class="form-section page-charges">
            <h2>"Page Charges"</h2>

            <div class="sortable-list">
                <For
                    each=rows
                    key=|(index, page)| (*index, page.id.clone())
                    children=move |(index, _page)| {
                        let on_mousedown = make_on_mousedown(dnd, index);
                        let on_mouseenter = make_on_mouseenter(dnd, index);
                        let on_mouseleave = make_on_mouseleave(dnd);

                        let name = move || form.pages().with(|p| p.get(index).map(|p| p.name.clone()).unwrap_or_default());
                        let charge = move || form.pages().with(|p| p.get(index).map(|p| p.charge.as_input()).unwrap_or_default());

                        let row_class = move || {
                            let mut c = String::from("sortable-item page-item");
                            if dnd.is_source(index) { c.push_str(" dragging"); }
                            if dnd.is_hint(index) { c.push_str(" drop-target"); }
                            c
                        };

                        view! {
                            <div
                                class=row_class
                                on:mousedown=on_mousedown
                                on:mouseenter=on_mouseenter
                                on:mouseleave=on_mouseleave
                            >
                                <div class=HANDLE_CLASS title="Drag to reorder">"☰"</div>
                                <input
                                    type="text"
                                    class="item-name"
                                    placeholder="Page name or description"
                                    prop:value=name
                                    on:input=move |ev| set_field(index, LineItemField::Name, event_target_value(&ev))
                                />
                                <span class="currency">{ctx.currency()}</span>
                                <input
                                    type="number"
                                    class="item-charge"
                                    placeholder="Charge"
                                    prop:value=charge
                                    on:input=move |ev| set_field(index, LineItemField::Charge, event_target_value(&ev))
                                />
                                <Show when=can_remove>
                                    <button
                                        type="button"
                                        class="remove-btn"
                                        on:click=move |_| {
                                            if let Err(e) = form.write().remove_line_item(index) {
                                                log::warn!("Line item not removed: {}", e);
                                            }
                                        }
                                    >
                                        "×"
                                    </button>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>

            <button
                type="button"
                class="add-btn"
                on:click=move |_| {
                    form.write().add_line_item();
                }
            >
                "Add Page"
            </button>
        </section>
    }
}
