//! Quotation Flow Tests
//!
//! End-to-end flows across form state, reordering and the quotation store,
//! backed by in-memory storage.

#[cfg(test)]
mod tests {
    use crate::form::{ClientField, FormState, LineItemField};
    use crate::models::Quotation;
    use crate::storage::{KeyValueStorage, MemoryStorage};
    use crate::store::QuotationStore;
    use leptos_dragdrop::{PressOrigin, ReorderState};

    const KEY: &str = "savedQuotations";

    fn setup() -> (MemoryStorage, QuotationStore<MemoryStorage>) {
        let storage = MemoryStorage::new();
        let store = QuotationStore::load(storage.clone(), KEY);
        (storage, store)
    }

    /// Fresh form with "Homepage" 5000 and "About" 2000
    fn two_page_form() -> FormState {
        let mut form = FormState::new();
        form.set_line_item(0, LineItemField::Name, "Homepage").unwrap();
        form.set_line_item(0, LineItemField::Charge, "5000").unwrap();
        form.add_line_item();
        form.set_line_item(1, LineItemField::Name, "About").unwrap();
        form.set_line_item(1, LineItemField::Charge, "2000").unwrap();
        form
    }

    #[test]
    fn test_compose_and_save() {
        let (storage, mut store) = setup();
        let form = two_page_form();
        assert_eq!(form.compute_total(), 7000.0);

        let saved = store.save(form.draft("Acme Site")).unwrap();
        assert_eq!(saved.total, 7000.0);

        let reloaded = QuotationStore::load(storage, KEY);
        let q = &reloaded.items()[0];
        assert_eq!(q.name, "Acme Site");
        assert_eq!(q.total, 7000.0);
        let names: Vec<_> = q.pages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Homepage", "About"]);
    }

    #[test]
    fn test_persisted_json_layout() {
        let (storage, mut store) = setup();
        store.save(two_page_form().draft("Acme Site")).unwrap();

        let raw = storage.get_item(KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let record = &value.as_array().unwrap()[0];
        assert_eq!(record["name"], "Acme Site");
        assert_eq!(record["total"], 7000.0);
        assert_eq!(record["pages"][1]["charge"], "2000");
        assert!(record["clientInfo"]["date"].is_string());
        assert!(record["freeItems"].is_array());
        assert!(record["terms"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_edit_saved_quotation() {
        let (storage, mut store) = setup();
        let saved = store.save(two_page_form().draft("Acme Site")).unwrap();

        // Select for edit seeds the form
        let mut form = FormState::new();
        store.select(saved.clone());
        form.load_from_quotation(store.selected().unwrap());
        assert_eq!(form.pages, saved.pages);

        form.set_client_field(ClientField::Name, "Acme Corp");
        form.set_line_item(1, LineItemField::Charge, "2500").unwrap();
        form.set_terms_from_text("50% upfront\n\nBalance on delivery");

        let snapshot = form.snapshot();
        let fields = Quotation {
            id: String::new(),
            name: saved.name.clone(),
            client_info: snapshot.client_info,
            pages: snapshot.pages,
            free_items: snapshot.free_items,
            terms: snapshot.terms,
            total: snapshot.total,
            date: saved.date.clone(),
        };
        assert!(store.update(&saved.id, fields));

        let reloaded = QuotationStore::load(storage, KEY);
        let q = &reloaded.items()[0];
        assert_eq!(q.id, saved.id);
        assert_eq!(q.client_info.name, "Acme Corp");
        assert_eq!(q.total, 7500.0);
        assert_eq!(q.terms, vec!["50% upfront", "Balance on delivery"]);
    }

    #[test]
    fn test_reorder_then_save() {
        let (_, mut store) = setup();
        let mut form = two_page_form();
        form.add_line_item();
        form.set_line_item(2, LineItemField::Name, "Contact").unwrap();
        let ids_before: Vec<_> = form.pages.iter().map(|p| p.id.clone()).collect();

        // Drag "Homepage" onto "Contact"
        let mut drag = ReorderState::default();
        drag.press(0, PressOrigin::Handle, 0, 0);
        drag.pointer_moved(0, 40);
        drag.enter(1);
        drag.enter(2);
        let mv = drag.release().unwrap();
        assert!(form.reorder_line_items(mv.from, mv.to));

        let saved = store.save(form.draft("Reordered")).unwrap();
        let names: Vec<_> = saved.pages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["About", "Contact", "Homepage"]);
        assert_eq!(saved.pages[2].id, ids_before[0]);
        assert_eq!(saved.total, 7000.0);
    }

    #[test]
    fn test_delete_selected_then_new() {
        let (_, mut store) = setup();
        let saved = store.save(two_page_form().draft("Temp")).unwrap();
        store.select(saved.clone());

        store.delete(&saved.id);
        assert!(store.selected().is_none());
        assert!(store.items().is_empty());

        let mut form = two_page_form();
        form.reset();
        assert_eq!(form.pages.len(), 1);
        assert_eq!(form.compute_total(), 0.0);
    }

    #[test]
    fn test_unsaved_form_not_persisted() {
        let (storage, _store) = setup();
        let mut form = two_page_form();
        form.add_free_item();
        assert_eq!(storage.get_item(KEY).unwrap(), None);
    }
}
