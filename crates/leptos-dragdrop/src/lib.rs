//! Leptos DragDrop Utilities
//!
//! Drag-to-reorder for flat Leptos lists using mouse events.
//! Uses movement threshold to distinguish click from drag.

mod reorder;

pub use reorder::{move_entry, Move, PressOrigin, ReorderState, DRAG_THRESHOLD_PX};

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// CSS class marking the element an entry may be dragged by
pub const HANDLE_CLASS: &str = "drag-handle";

/// Reorder state signals for one list
#[derive(Clone, Copy)]
pub struct ReorderSignals {
    /// Drag state machine
    pub state: RwSignal<ReorderState>,
    /// Entry currently under the pointer (visual hint only)
    pub hover: RwSignal<Option<usize>>,
}

pub fn create_reorder_signals() -> ReorderSignals {
    ReorderSignals {
        state: RwSignal::new(ReorderState::Idle),
        hover: RwSignal::new(None),
    }
}

impl ReorderSignals {
    pub fn is_source(&self, index: usize) -> bool {
        self.state.get().source() == Some(index)
    }

    pub fn is_hint(&self, index: usize) -> bool {
        self.state.get().is_dragging() && self.hover.get() == Some(index)
    }

    /// Abandon any drag in progress
    pub fn cancel(&self) {
        if self.state.get_untracked() != ReorderState::Idle {
            self.state.set(ReorderState::Idle);
        }
        self.hover.set(None);
    }
}

/// Classify where a mousedown landed
fn press_origin(ev: &web_sys::MouseEvent) -> PressOrigin {
    let Some(element) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return PressOrigin::Body;
    };
    if element.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || element.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
        || element.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
        || element.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
    {
        return PressOrigin::Control;
    }
    match element.closest(&format!(".{}", HANDLE_CLASS)) {
        Ok(Some(_)) => PressOrigin::Handle,
        _ => PressOrigin::Body,
    }
}

/// Create mousedown handler for list entries
/// Arms a pending drag only when pressed on the handle
pub fn make_on_mousedown(dnd: ReorderSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        let mut state = dnd.state.get_untracked();
        let stale = state != ReorderState::Idle;
        let armed = state.press(index, press_origin(&ev), ev.client_x(), ev.client_y());
        if armed {
            // Keep the browser from starting a text selection
            ev.prevent_default();
        }
        if stale {
            log::debug!("[DND] Dropping stale drag state on mousedown");
            dnd.hover.set(None);
        }
        if armed || stale {
            dnd.state.set(state);
        }
    }
}

/// Create mouseenter handler for list entries (tracks drop target)
pub fn make_on_mouseenter(dnd: ReorderSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        let mut state = dnd.state.get_untracked();
        if state.is_dragging() {
            state.enter(index);
            dnd.state.set(state);
            dnd.hover.set(Some(index));
        }
    }
}

/// Create mouseleave handler
/// Clears the visual hint only; the tracked target survives until the next enter
pub fn make_on_mouseleave(dnd: ReorderSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.hover.get_untracked().is_some() {
            dnd.hover.set(None);
        }
    }
}

/// Bind document-level listeners that drive a list's drag lifecycle
///
/// `on_move` is called once per completed drag whose target differs from its source.
pub fn bind_global_listeners<F>(dnd: ReorderSignals, on_move: F)
where
    F: Fn(Move) + Clone + 'static,
{
    let Some(win) = web_sys::window() else { return };
    let Some(doc) = win.document() else { return };

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let mut state = dnd.state.get_untracked();
        if state.pointer_moved(ev.client_x(), ev.client_y()) {
            log::debug!("[DND] drag started from {:?}", state.source());
            dnd.state.set(state);
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let mut state = dnd.state.get_untracked();
        if state == ReorderState::Idle {
            return;
        }
        let finished = state.release();
        dnd.state.set(state);
        dnd.hover.set(None);
        if let Some(mv) = finished {
            log::debug!("[DND] drop: from={} to={}", mv.from, mv.to);
            on_move(mv);
        }
    });

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            dnd.cancel();
        }
    });

    let on_blur = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        dnd.cancel();
    });

    let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    let _ = win.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref());

    on_mousemove.forget();
    on_mouseup.forget();
    on_keydown.forget();
    on_blur.forget();
}
