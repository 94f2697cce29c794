//! UI state for the contact list: live filter plus selection.
//!
//! Selection is held as a `ContactId`, so edits or deletes elsewhere in the
//! list never retarget it at a different contact.

use crate::domain::{Contact, ContactError, ContactId};
use crate::services::contact_store::ContactStore;
use crate::services::editor::DialogOutcome;

#[derive(Debug, Clone, Default)]
pub struct Session {
    filter: String,
    selection: Option<ContactId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: ContactId,
    pub label: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn selection(&self) -> Option<ContactId> {
        self.selection
    }

    /// Replaces the filter and drops the selection if it is no longer shown.
    pub fn set_filter(&mut self, store: &ContactStore, term: impl Into<String>) {
        self.filter = term.into();
        if let Some(id) = self.selection {
            if !store.search(&self.filter).any(|c| c.id == id) {
                self.selection = None;
            }
        }
    }

    pub fn visible_rows(&self, store: &ContactStore) -> Vec<Row> {
        store
            .search(&self.filter)
            .map(|c| Row {
                id: c.id,
                label: c.record.label(),
            })
            .collect()
    }

    pub fn select_row(&mut self, store: &ContactStore, row: usize) -> Result<ContactId, ContactError> {
        let visible = store.search(&self.filter).count();
        let contact = store
            .search(&self.filter)
            .nth(row)
            .ok_or(ContactError::NoSuchRow { row, visible })?;
        self.selection = Some(contact.id);
        Ok(contact.id)
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selected<'a>(&self, store: &'a ContactStore) -> Option<&'a Contact> {
        self.selection.and_then(|id| store.get(id))
    }

    pub fn add(
        &mut self,
        store: &mut ContactStore,
        outcome: DialogOutcome,
    ) -> Result<Option<ContactId>, ContactError> {
        match outcome.into_record() {
            Some(record) => store.add(record).map(Some),
            None => Ok(None),
        }
    }

    /// Returns `Ok(false)` when the editor was cancelled.
    pub fn update_selected(
        &mut self,
        store: &mut ContactStore,
        outcome: DialogOutcome,
    ) -> Result<bool, ContactError> {
        let id = self.require_selection(store)?;
        let Some(record) = outcome.into_record() else {
            return Ok(false);
        };
        store.update(id, record)?;
        // The edit may have moved the contact out of the current filter.
        self.set_filter(store, self.filter.clone());
        Ok(true)
    }

    /// Returns `Ok(None)` when the user declined the confirmation.
    pub fn delete_selected(
        &mut self,
        store: &mut ContactStore,
        confirmed: bool,
    ) -> Result<Option<Contact>, ContactError> {
        let id = self.require_selection(store)?;
        if !confirmed {
            return Ok(None);
        }
        let removed = store.delete(id)?;
        self.selection = None;
        Ok(Some(removed))
    }

    fn require_selection(&mut self, store: &ContactStore) -> Result<ContactId, ContactError> {
        match self.selection {
            Some(id) if store.get(id).is_some() => Ok(id),
            _ => {
                self.selection = None;
                Err(ContactError::NoSelection)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::domain::{ContactError, ContactField, ContactRecord};
    use crate::services::contact_store::ContactStore;
    use crate::services::editor::{ContactEditor, DialogOutcome};
    use tempfile::TempDir;

    fn seeded() -> (TempDir, ContactStore) {
        let dir = TempDir::new().unwrap();
        let mut store = ContactStore::load(dir.path().join("contacts.json")).unwrap();
        for (n, p) in [("Ann", "111"), ("Bob", "222"), ("Anders", "333")] {
            store.add(ContactRecord::new(n, p, "", "")).unwrap();
        }
        (dir, store)
    }

    #[test]
    fn rows_use_name_dash_phone_labels_in_filter_order() {
        let (_dir, store) = seeded();
        let mut session = Session::new();
        session.set_filter(&store, "AN");
        let labels: Vec<_> = session
            .visible_rows(&store)
            .into_iter()
            .map(|r| r.label)
            .collect();
        assert_eq!(labels, ["Ann - 111", "Anders - 333"]);
    }

    #[test]
    fn selection_follows_the_filtered_view() {
        let (_dir, store) = seeded();
        let mut session = Session::new();
        session.set_filter(&store, "an");
        let id = session.select_row(&store, 1).unwrap();
        assert_eq!(session.selected(&store).unwrap().record.name, "Anders");
        assert_eq!(session.selection(), Some(id));
        assert!(matches!(
            session.select_row(&store, 2),
            Err(ContactError::NoSuchRow { row: 2, visible: 2 })
        ));

        session.set_filter(&store, "bob");
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn update_and_delete_without_selection_are_rejected() {
        let (_dir, mut store) = seeded();
        let mut session = Session::new();
        let outcome = DialogOutcome::Accepted(ContactRecord::new("X", "1", "", ""));
        assert!(matches!(
            session.update_selected(&mut store, outcome),
            Err(ContactError::NoSelection)
        ));
        assert!(matches!(
            session.delete_selected(&mut store, true),
            Err(ContactError::NoSelection)
        ));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn delete_clears_selection_and_later_rows_shift_up() {
        let (_dir, mut store) = seeded();
        let mut session = Session::new();
        session.select_row(&store, 0).unwrap();

        assert_eq!(session.delete_selected(&mut store, false).unwrap(), None);
        assert_eq!(store.len(), 3);

        let removed = session.delete_selected(&mut store, true).unwrap().unwrap();
        assert_eq!(removed.record.name, "Ann");
        assert_eq!(session.selection(), None);
        assert_eq!(session.visible_rows(&store)[0].label, "Bob - 222");
        assert!(matches!(
            session.delete_selected(&mut store, true),
            Err(ContactError::NoSelection)
        ));
    }

    #[test]
    fn edit_through_dialog_keeps_position() {
        let (_dir, mut store) = seeded();
        let mut session = Session::new();
        session.select_row(&store, 1).unwrap();
        let mut editor = ContactEditor::edit(session.selected(&store).unwrap());
        editor.set(ContactField::Email, "bob@example.com");
        assert!(session.update_selected(&mut store, editor.confirm()).unwrap());
        assert_eq!(store.records()[1].email, "bob@example.com");

        let cancelled = ContactEditor::edit(session.selected(&store).unwrap()).cancel();
        assert!(!session.update_selected(&mut store, cancelled).unwrap());
    }

    #[test]
    fn cancelled_add_is_a_no_op_and_invalid_add_is_rejected() {
        let (_dir, mut store) = seeded();
        let mut session = Session::new();
        assert_eq!(session.add(&mut store, DialogOutcome::Cancelled).unwrap(), None);
        let blank = ContactEditor::new().confirm();
        assert!(matches!(
            session.add(&mut store, blank),
            Err(ContactError::Validation)
        ));
        assert_eq!(store.len(), 3);
    }
}
