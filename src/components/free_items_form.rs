//! Free Items Form Component
//!
//! Unpriced add-ons with drag-to-reorder. The list may be emptied.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::form::FormStateStoreFields;
use crate::models::FreeItem;

use leptos_dragdrop::*;

#[component]
pub fn FreeItemsForm() -> impl IntoView {
    let form = use_app_context().form;

    let dnd = create_reorder_signals();
    bind_global_listeners(dnd, move |mv: Move| {
        form.write().reorder_free_items(mv.from, mv.to);
    });

    let rows = move || form.free_items().get().into_iter().enumerate().collect::<Vec<(usize, FreeItem)>>();

    view! {
        <section class="form-section free-items">
            <h2>"Free Items"</h2>

            <div class="sortable-list">
                <For
                    each=rows
                    key=|(index, item)| (*index, item.id.clone())
                    children=move |(index, _item)| {
                        let on_mousedown = make_on_mousedown(dnd, index);
                        let on_mouseenter = make_on_mouseenter(dnd, index);
                        let on_mouseleave = make_on_mouseleave(dnd);

                        let description = move || {
                            form.free_items().with(|items| items.get(index).map(|i| i.description.clone()).unwrap_or_default())
                        };

                        let row_class = move || {
                            let mut c = String::from("sortable-item free-item");
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
                                    placeholder="Description of free item"
                                    prop:value=description
                                    on:input=move |ev| {
                                        if let Err(e) = form.write().set_free_item_description(index, &event_target_value(&ev)) {
                                            log::warn!("Free item edit ignored: {}", e);
                                        }
                                    }
                                />
                                <button
                                    type="button"
                                    class="remove-btn"
                                    on:click=move |_| {
                                        if let Err(e) = form.write().remove_free_item(index) {
                                            log::warn!("Free item not removed: {}", e);
                                        }
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>

            <button
                type="button"
                class="add-btn"
                on:click=move |_| {
                    form.write().add_free_item();
                }
            >
                "Add Free Item"
            </button>
        </section>
    }
}
