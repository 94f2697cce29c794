//! Ordered contact collection mirrored to a JSON file.
//!
//! Every successful mutation rewrites the whole file before returning. If the
//! write fails the in-memory change is undone, so memory and disk agree after
//! every call whatever its result.

use crate::domain::{Contact, ContactError, ContactId, ContactRecord};
use crate::services::storage::{load_records, save_records};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ContactStore {
    path: PathBuf,
    contacts: Vec<Contact>,
    next_id: u64,
}

impl ContactStore {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ContactError> {
        let path = path.into();
        let records = load_records(&path)?;
        let mut store = Self {
            path,
            contacts: Vec::with_capacity(records.len()),
            next_id: 1,
        };
        for record in records {
            let id = store.allocate_id();
            store.contacts.push(Contact { id, record });
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<(), ContactError> {
        let records: Vec<ContactRecord> =
            self.contacts.iter().map(|c| c.record.clone()).collect();
        save_records(&self.path, &records)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.contacts.iter()
    }

    pub fn records(&self) -> Vec<ContactRecord> {
        self.contacts.iter().map(|c| c.record.clone()).collect()
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn position(&self, id: ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| c.id == id)
    }

    /// Contacts whose name or phone contains `term`, ignoring case, in
    /// collection order. An empty term yields everything.
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a Contact> + 'a {
        let needle = term.to_lowercase();
        self.contacts
            .iter()
            .filter(move |c| c.record.matches_lowercase(&needle))
    }

    pub fn add(&mut self, record: ContactRecord) -> Result<ContactId, ContactError> {
        let record = validated(record)?;
        let id = ContactId(self.next_id);
        self.contacts.push(Contact { id, record });
        if let Err(e) = self.save() {
            self.contacts.pop();
            tracing::warn!(error = %e, "add rolled back");
            return Err(e);
        }
        self.next_id += 1;
        tracing::info!(%id, "contact added");
        Ok(id)
    }

    pub fn update(&mut self, id: ContactId, record: ContactRecord) -> Result<(), ContactError> {
        let index = self.position(id).ok_or(ContactError::NotFound(id))?;
        self.replace_at(index, record)
    }

    pub fn update_at(&mut self, index: usize, record: ContactRecord) -> Result<(), ContactError> {
        self.check_index(index)?;
        self.replace_at(index, record)
    }

    pub fn delete(&mut self, id: ContactId) -> Result<Contact, ContactError> {
        let index = self.position(id).ok_or(ContactError::NotFound(id))?;
        self.remove_at(index)
    }

    pub fn delete_at(&mut self, index: usize) -> Result<Contact, ContactError> {
        self.check_index(index)?;
        self.remove_at(index)
    }

    fn replace_at(&mut self, index: usize, record: ContactRecord) -> Result<(), ContactError> {
        let record = validated(record)?;
        let previous = std::mem::replace(&mut self.contacts[index].record, record);
        if let Err(e) = self.save() {
            self.contacts[index].record = previous;
            tracing::warn!(error = %e, "update rolled back");
            return Err(e);
        }
        tracing::info!(id = %self.contacts[index].id, "contact updated");
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<Contact, ContactError> {
        let removed = self.contacts.remove(index);
        if let Err(e) = self.save() {
            self.contacts.insert(index, removed);
            tracing::warn!(error = %e, "delete rolled back");
            return Err(e);
        }
        tracing::info!(id = %removed.id, "contact deleted");
        Ok(removed)
    }

    fn check_index(&self, index: usize) -> Result<(), ContactError> {
        if index < self.contacts.len() {
            Ok(())
        } else {
            Err(ContactError::IndexOutOfRange {
                index,
                len: self.contacts.len(),
            })
        }
    }

    fn allocate_id(&mut self) -> ContactId {
        let id = ContactId(self.next_id);
        self.next_id += 1;
        id
    }
}

fn validated(record: ContactRecord) -> Result<ContactRecord, ContactError> {
    let record = record.trimmed();
    if !record.has_required_fields() {
        return Err(ContactError::Validation);
    }
    Ok(record)
}
