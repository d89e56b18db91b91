//! Application Context
//!
//! Shared state provided via Leptos Context API: the saved-quotation store,
//! the form being edited and the app configuration.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::error::{QuoteError, QuoteResult};
use crate::export;
use crate::form::FormState;
use crate::models::{now_timestamp, today, Quotation, QuoteSnapshot};
use crate::storage::BrowserStorage;
use crate::store::QuotationStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Saved quotations and the current selection
    pub quotations: RwSignal<QuotationStore<BrowserStorage>>,
    /// In-progress quotation
    pub form: Store<FormState>,
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let quotations = QuotationStore::load(BrowserStorage, config.storage_key.clone());
        Self {
            quotations: RwSignal::new(quotations),
            form: Store::new(FormState::new()),
            config: StoredValue::new(config),
        }
    }

    /// Frozen copy of the form, taken without subscribing
    pub fn snapshot(&self) -> QuoteSnapshot {
        self.form.with_untracked(|form| form.snapshot())
    }

    pub fn currency(&self) -> String {
        self.config.with_value(|c| c.currency_symbol.clone())
    }

    /// Seed the form from a saved quotation and remember it as being edited
    pub fn select_for_edit(&self, quotation: Quotation) {
        log::info!("Editing quotation {} ({})", quotation.name, quotation.id);
        self.form.update(|form| form.load_from_quotation(&quotation));
        self.quotations.update(|store| store.select(quotation));
    }

    /// Save the form as a new quotation under `name`
    pub fn save_current(&self, name: &str) -> QuoteResult<Quotation> {
        let draft = self.form.with_untracked(|form| form.draft(name));
        let mut result = Err(QuoteError::Storage("quotation store unavailable".to_string()));
        self.quotations.update(|store| result = store.save(draft));
        result
    }

    /// Write the form back over the quotation currently being edited
    pub fn update_selected(&self) -> QuoteResult<()> {
        let selected = self
            .quotations
            .with_untracked(|store| store.selected().cloned())
            .ok_or_else(|| QuoteError::NotFound("no quotation selected".to_string()))?;

        let snapshot = self.snapshot();
        let fields = Quotation {
            id: selected.id.clone(),
            name: selected.name.clone(),
            client_info: snapshot.client_info,
            pages: snapshot.pages,
            free_items: snapshot.free_items,
            terms: snapshot.terms,
            total: snapshot.total,
            date: now_timestamp(),
        };

        let mut updated = false;
        self.quotations.update(|store| updated = store.update(&selected.id, fields));
        if updated {
            Ok(())
        } else {
            Err(QuoteError::NotFound(format!("quotation {}", selected.id)))
        }
    }

    pub fn delete(&self, id: &str) {
        self.quotations.update(|store| {
            store.delete(id);
        });
    }

    /// Start over with a blank form and no selection
    pub fn new_quotation(&self) {
        self.form.update(|form| form.reset());
        self.quotations.update(|store| store.clear_selection());
    }

    /// Export a snapshot taken now; later edits do not affect it
    pub fn export_pdf(&self) {
        let snapshot = self.snapshot();
        if let Err(e) = export::export_pdf(&snapshot, &today()) {
            log::error!("Error generating PDF: {}", e);
            alert("Failed to generate PDF. Please try again.");
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Blocking browser alert
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
