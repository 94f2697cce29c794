use crate::domain::{Contact, ContactField, ContactRecord};

/// Result of an editor interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Accepted(ContactRecord),
    Cancelled,
}

impl DialogOutcome {
    pub fn into_record(self) -> Option<ContactRecord> {
        match self {
            DialogOutcome::Accepted(record) => Some(record),
            DialogOutcome::Cancelled => None,
        }
    }
}

/// Collects the four fields of one contact.
///
/// Does not validate: required-field checks belong to the store.
#[derive(Debug, Clone, Default)]
pub struct ContactEditor {
    draft: ContactRecord,
    editing: bool,
}

impl ContactEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(contact: &Contact) -> Self {
        Self {
            draft: contact.record.clone(),
            editing: true,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn field(&self, field: ContactField) -> &str {
        self.draft.get(field)
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) -> &mut Self {
        self.draft.set(field, value);
        self
    }

    pub fn confirm(self) -> DialogOutcome {
        DialogOutcome::Accepted(self.draft.trimmed())
    }

    pub fn cancel(self) -> DialogOutcome {
        DialogOutcome::Cancelled
    }
}
