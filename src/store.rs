//! Quotation Store
//!
//! Saved quotations plus the session-only "being edited" selection.
//! Every mutation rewrites the whole collection to storage; storage failures
//! are logged and never roll back the in-memory state.

use std::collections::HashSet;

use crate::error::{QuoteError, QuoteResult};
use crate::models::{new_id, now_timestamp, Quotation, QuotationDraft};
use crate::storage::KeyValueStorage;

/// Read the persisted collection. Missing, unreadable or corrupt data yields an empty list.
pub fn read_collection<S: KeyValueStorage>(storage: &S, key: &str) -> Vec<Quotation> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::error!("Error loading quotations: {}", e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Quotation>>(&raw) {
        Ok(mut items) => {
            items.iter_mut().for_each(Quotation::fill_missing_ids);
            dedupe_ids(&mut items);
            items
        }
        Err(e) => {
            log::error!("Error loading quotations: {}", QuoteError::from(e));
            Vec::new()
        }
    }
}

/// Older records may carry `1` and `"1"`, which load as the same id.
/// Later duplicates get a fresh id so every record stays addressable.
fn dedupe_ids(items: &mut [Quotation]) {
    let mut seen = HashSet::new();
    for quotation in items.iter_mut() {
        if !seen.insert(quotation.id.clone()) {
            let fresh = new_id();
            log::warn!("Duplicate quotation id {} reassigned to {}", quotation.id, fresh);
            quotation.id = fresh;
            seen.insert(quotation.id.clone());
        }
    }
}

#[derive(Debug)]
pub struct QuotationStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    /// Insertion order
    items: Vec<Quotation>,
    selected: Option<Quotation>,
}

impl<S: KeyValueStorage> QuotationStore<S> {
    /// Open the store, reading whatever is persisted under `key`
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = read_collection(&storage, &key);
        log::info!("Loaded {} saved quotations", items.len());
        Self { storage, key, items, selected: None }
    }

    pub fn items(&self) -> &[Quotation] {
        &self.items
    }

    pub fn selected(&self) -> Option<&Quotation> {
        self.selected.as_ref()
    }

    /// Append a new quotation with a fresh id and timestamp.
    ///
    /// Rejects drafts without a name; nothing is stored in that case.
    pub fn save(&mut self, draft: QuotationDraft) -> QuoteResult<Quotation> {
        if draft.name.trim().is_empty() {
            return Err(QuoteError::InvalidInput("Please enter a name for the quotation".to_string()));
        }
        let quotation = Quotation::from_draft(draft, new_id(), now_timestamp());
        self.items.push(quotation.clone());
        self.persist();
        log::info!("Saved quotation {} ({})", quotation.name, quotation.id);
        Ok(quotation)
    }

    /// Replace every field of the record `id` except the id itself.
    ///
    /// Any id carried by `fields` is ignored. Returns false if no record matches.
    pub fn update(&mut self, id: &str, fields: Quotation) -> bool {
        let Some(slot) = self.items.iter_mut().find(|q| q.id == id) else {
            log::warn!("Update ignored, no quotation {}", id);
            return false;
        };
        *slot = Quotation { id: slot.id.clone(), ..fields };
        let updated = slot.clone();

        if self.selected.as_ref().is_some_and(|s| s.id == updated.id) {
            self.selected = Some(updated);
        }
        self.persist();
        log::info!("Updated quotation {}", id);
        true
    }

    /// Remove the record `id`, clearing the selection if it pointed at it.
    /// Returns false (and writes nothing) when no record matches.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|q| q.id != id);
        if self.items.len() == before {
            return false;
        }

        if self.selected.as_ref().is_some_and(|s| s.id == id) {
            self.selected = None;
        }
        self.persist();
        log::info!("Deleted quotation {}", id);
        true
    }

    /// Mark a quotation as being edited. Session-only, not persisted.
    pub fn select(&mut self, quotation: Quotation) {
        self.selected = Some(quotation);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.items)
            .map_err(QuoteError::from)
            .and_then(|json| self.storage.set_item(&self.key, &json));
        if let Err(e) = result {
            log::error!("Error saving quotations: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Charge, ClientInfo, FreeItem, LineItem, QuoteSnapshot};
    use crate::storage::MemoryStorage;

    const KEY: &str = "savedQuotations";

    fn draft(name: &str) -> QuotationDraft {
        QuotationDraft {
            name: name.to_string(),
            snapshot: QuoteSnapshot {
                client_info: ClientInfo { name: "Acme".to_string(), date: "2024-03-01".to_string() },
                pages: vec![LineItem::new("Homepage", 5000.0), LineItem::new("About", "2000")],
                free_items: vec![FreeItem::new("Domain setup")],
                terms: vec!["Net 30".to_string()],
                total: 7000.0,
            },
        }
    }

    fn setup() -> (MemoryStorage, QuotationStore<MemoryStorage>) {
        let storage = MemoryStorage::new();
        let store = QuotationStore::load(storage.clone(), KEY);
        (storage, store)
    }

    #[test]
    fn test_load_empty() {
        let (_, store) = setup();
        assert!(store.items().is_empty());
        assert!(store.selected().is_none());
    }

    #[test]
    fn test_load_corrupt_json() {
        let storage = MemoryStorage::new();
        storage.set_item(KEY, "{not json").unwrap();
        let store = QuotationStore::load(storage, KEY);
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_load_read_failure() {
        let storage = MemoryStorage::new();
        storage.set_item(KEY, r#"[{"id":"q1","name":"Kept on disk"}]"#).unwrap();
        storage.set_fail_reads(true);

        let store = QuotationStore::load(storage, KEY);
        assert!(store.items().is_empty());
        assert!(store.selected().is_none());
    }

    #[test]
    fn test_load_makes_ids_unique() {
        let storage = MemoryStorage::new();
        storage
            .set_item(KEY, r#"[{"id":1,"name":"Numeric"},{"id":"1","name":"Text"},{"id":"2","name":"Other"}]"#)
            .unwrap();
        let mut store = QuotationStore::load(storage, KEY);

        let ids: Vec<String> = store.items().iter().map(|q| q.id.clone()).collect();
        assert_eq!(ids[0], "1");
        assert_ne!(ids[1], "1");
        assert_ne!(ids[1], "2");
        assert_eq!(ids[2], "2");

        assert!(store.delete("1"));
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.items()[0].name, "Text");
    }

    #[test]
    fn test_save_then_load() {
        let (storage, mut store) = setup();
        let saved = store.save(draft("Acme Site")).unwrap();
        assert!(!saved.id.is_empty());
        assert!(!saved.date.is_empty());

        let reloaded = QuotationStore::load(storage, KEY);
        assert_eq!(reloaded.items().len(), 1);

        let q = &reloaded.items()[0];
        let expected = draft("Acme Site");
        assert_eq!(q.id, saved.id);
        assert_eq!(q.name, expected.name);
        assert_eq!(q.client_info, expected.snapshot.client_info);
        assert_eq!(q.pages.len(), 2);
        assert_eq!(q.pages[0].name, "Homepage");
        assert_eq!(q.pages[1].charge, Charge::Text("2000".to_string()));
        assert_eq!(q.free_items[0].description, "Domain setup");
        assert_eq!(q.terms, expected.snapshot.terms);
        assert_eq!(q.total, 7000.0);
    }

    #[test]
    fn test_save_keeps_insertion_order_and_unique_ids() {
        let (_, mut store) = setup();
        let a = store.save(draft("A")).unwrap();
        let b = store.save(draft("B")).unwrap();
        let names: Vec<_> = store.items().iter().map(|q| q.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_save_requires_name() {
        let (storage, mut store) = setup();
        let result = store.save(draft("   "));
        assert!(matches!(result, Err(QuoteError::InvalidInput(_))));
        assert!(store.items().is_empty());
        assert_eq!(storage.get_item(KEY).unwrap(), None);
    }

    #[test]
    fn test_update_preserves_id() {
        let (storage, mut store) = setup();
        let saved = store.save(draft("Original")).unwrap();

        let fields = Quotation { id: "stale-id".to_string(), name: "Renamed".to_string(), total: 1.0, ..saved.clone() };
        assert!(store.update(&saved.id, fields));

        assert_eq!(store.items()[0].id, saved.id);
        assert_eq!(store.items()[0].name, "Renamed");
        assert!(store.items().iter().all(|q| q.id != "stale-id"));

        let reloaded = QuotationStore::load(storage, KEY);
        assert_eq!(reloaded.items()[0].id, saved.id);
        assert_eq!(reloaded.items()[0].total, 1.0);
    }

    #[test]
    fn test_update_missing_is_noop() {
        let (_, mut store) = setup();
        store.save(draft("Only")).unwrap();
        let before = store.items().to_vec();

        assert!(!store.update("nope", Quotation::default()));
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn test_update_refreshes_selection() {
        let (_, mut store) = setup();
        let saved = store.save(draft("Selected")).unwrap();
        store.select(saved.clone());

        store.update(&saved.id, Quotation { name: "Edited".to_string(), ..saved.clone() });
        assert_eq!(store.selected().map(|q| q.name.as_str()), Some("Edited"));
    }

    #[test]
    fn test_update_moves_saved_date() {
        let (storage, mut store) = setup();
        let saved = store.save(draft("Dated")).unwrap();

        let stamp = "2031-07-09T08:15:00.000Z".to_string();
        assert!(store.update(&saved.id, Quotation { date: stamp.clone(), ..saved.clone() }));

        let reloaded = QuotationStore::load(storage, KEY);
        assert_eq!(reloaded.items()[0].date, stamp);
        assert_eq!(crate::format::format_saved_date(&reloaded.items()[0].date), "09 Jul 2031");
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (storage, mut store) = setup();
        let a = store.save(draft("A")).unwrap();
        store.save(draft("B")).unwrap();

        assert!(store.delete(&a.id));
        let after_first = store.items().to_vec();
        let persisted = storage.get_item(KEY).unwrap();

        assert!(!store.delete(&a.id));
        assert_eq!(store.items(), after_first.as_slice());
        assert_eq!(storage.get_item(KEY).unwrap(), persisted);
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_delete_clears_matching_selection() {
        let (_, mut store) = setup();
        let a = store.save(draft("A")).unwrap();
        let b = store.save(draft("B")).unwrap();

        store.select(b.clone());
        store.delete(&a.id);
        assert_eq!(store.selected().map(|q| q.id.as_str()), Some(b.id.as_str()));

        store.delete(&b.id);
        assert!(store.selected().is_none());
    }

    #[test]
    fn test_selection_not_persisted() {
        let (storage, mut store) = setup();
        let a = store.save(draft("A")).unwrap();
        store.select(a);

        let reloaded = QuotationStore::load(storage, KEY);
        assert!(reloaded.selected().is_none());

        store.clear_selection();
        assert!(store.selected().is_none());
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let (storage, mut store) = setup();
        store.save(draft("Persisted")).unwrap();
        storage.set_fail_writes(true);

        let lost = store.save(draft("Unpersisted")).unwrap();
        assert_eq!(store.items().len(), 2);
        assert!(store.items().iter().any(|q| q.id == lost.id));

        storage.set_fail_writes(false);
        let reloaded = QuotationStore::load(storage, KEY);
        assert_eq!(reloaded.items().len(), 1);
    }
}
