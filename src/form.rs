//! Quotation Form State
//!
//! The single in-progress quotation being composed or edited.
//! Pure state with no storage access; saving goes through the quotation
//! store with a `snapshot()` of this state.

use leptos_dragdrop::move_entry;
use reactive_stores::Store;

use crate::error::{QuoteError, QuoteResult};
use crate::models::{Charge, ClientInfo, FreeItem, LineItem, Quotation, QuotationDraft, QuoteSnapshot};
use crate::terms::split_paragraphs;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientField {
    Name,
    Date,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineItemField {
    Name,
    Charge,
}

/// Sum of page charges, each coerced to a number
pub fn compute_total(pages: &[LineItem]) -> f64 {
    pages.iter().map(|page| page.charge.amount()).sum()
}

/// Editable quotation with field-level reactivity
#[derive(Clone, Debug, PartialEq, Store)]
pub struct FormState {
    pub client_info: ClientInfo,
    /// Never empty
    pub pages: Vec<LineItem>,
    pub free_items: Vec<FreeItem>,
    /// Empty means "use the default terms"
    pub terms: Vec<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            client_info: ClientInfo::default(),
            pages: vec![LineItem::default()],
            free_items: vec![FreeItem::default()],
            terms: Vec::new(),
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Client Info
    // ========================

    pub fn set_client_field(&mut self, field: ClientField, value: &str) {
        match field {
            ClientField::Name => self.client_info.name = value.to_string(),
            ClientField::Date => self.client_info.date = value.to_string(),
        }
    }

    // ========================
    // Line Items
    // ========================

    pub fn set_line_item(&mut self, index: usize, field: LineItemField, value: &str) -> QuoteResult<()> {
        let page = self
            .pages
            .get_mut(index)
            .ok_or_else(|| QuoteError::NotFound(format!("line item #{}", index)))?;
        match field {
            LineItemField::Name => page.name = value.to_string(),
            LineItemField::Charge => page.charge = Charge::Text(value.to_string()),
        }
        Ok(())
    }

    /// Append an empty line item and return its id
    pub fn add_line_item(&mut self) -> String {
        let page = LineItem::default();
        let id = page.id.clone();
        self.pages.push(page);
        id
    }

    pub fn can_remove_line_item(&self) -> bool {
        self.pages.len() > 1
    }

    /// Remove by position. The last remaining line item cannot be removed.
    pub fn remove_line_item(&mut self, index: usize) -> QuoteResult<LineItem> {
        if index >= self.pages.len() {
            return Err(QuoteError::NotFound(format!("line item #{}", index)));
        }
        if !self.can_remove_line_item() {
            return Err(QuoteError::InvalidInput("at least one line item is required".to_string()));
        }
        Ok(self.pages.remove(index))
    }

    pub fn reorder_line_items(&mut self, from: usize, to: usize) -> bool {
        move_entry(&mut self.pages, from, to)
    }

    // ========================
    // Free Items
    // ========================

    pub fn set_free_item_description(&mut self, index: usize, value: &str) -> QuoteResult<()> {
        let item = self
            .free_items
            .get_mut(index)
            .ok_or_else(|| QuoteError::NotFound(format!("free item #{}", index)))?;
        item.description = value.to_string();
        Ok(())
    }

    pub fn add_free_item(&mut self) -> String {
        let item = FreeItem::default();
        let id = item.id.clone();
        self.free_items.push(item);
        id
    }

    /// Remove by position; the list may become empty
    pub fn remove_free_item(&mut self, index: usize) -> QuoteResult<FreeItem> {
        if index >= self.free_items.len() {
            return Err(QuoteError::NotFound(format!("free item #{}", index)));
        }
        Ok(self.free_items.remove(index))
    }

    pub fn reorder_free_items(&mut self, from: usize, to: usize) -> bool {
        move_entry(&mut self.free_items, from, to)
    }

    // ========================
    // Terms
    // ========================

    pub fn set_terms_from_text(&mut self, raw: &str) {
        self.terms = split_paragraphs(raw);
    }

    // ========================
    // Whole-form operations
    // ========================

    pub fn compute_total(&self) -> f64 {
        compute_total(&self.pages)
    }

    /// Replace everything from a saved quotation.
    /// Empty page or free-item lists come back as a single blank entry.
    pub fn load_from_quotation(&mut self, quotation: &Quotation) {
        self.client_info = quotation.client_info.clone();
        self.pages = if quotation.pages.is_empty() {
            vec![LineItem::default()]
        } else {
            quotation.pages.clone()
        };
        self.free_items = if quotation.free_items.is_empty() {
            vec![FreeItem::default()]
        } else {
            quotation.free_items.clone()
        };
        self.terms = quotation.terms.clone();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Detached copy for preview, export and saving
    pub fn snapshot(&self) -> QuoteSnapshot {
        QuoteSnapshot {
            client_info: self.client_info.clone(),
            pages: self.pages.clone(),
            free_items: self.free_items.clone(),
            terms: self.terms.clone(),
            total: self.compute_total(),
        }
    }

    pub fn draft(&self, name: &str) -> QuotationDraft {
        QuotationDraft { name: name.to_string(), snapshot: self.snapshot() }
    }
}
