//! Shared data model layer (structs/enums only).
//!
//! ## Files
//! - `models.rs` — contact records, ids, game choices/rounds, JSON envelope.
//! - `error.rs` — typed errors surfaced by the services.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! `ContactRecord` is the on-disk shape of one contact. Adding a field to it
//! changes the file layout, so keep it at the four string fields.

pub mod error;
pub mod models;

pub use error::{ContactError, GameError};
pub use models::{
    Choice, Contact, ContactField, ContactId, ContactRecord, JsonOut, Outcome, PlayReport, Round,
    Scoreboard,
};
