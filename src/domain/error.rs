use crate::domain::models::ContactId;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ContactError {
    #[error("Name and Phone are required.")]
    Validation,
    #[error("No contact selected.")]
    NoSelection,
    #[error("contact not found: {0}")]
    NotFound(ContactId),
    #[error("index {index} out of range ({len} contacts)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no row {row} in the visible list ({visible} shown)")]
    NoSuchRow { row: usize, visible: usize },
    #[error("malformed contacts file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContactError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("unknown choice: {0} (expected rock, paper or scissors)")]
    UnknownChoice(String),
}
