//! Service layer: the contact store, its editor and session state, the game,
//! and side-effect helpers.
//!
//! ## Service map
//! - `contact_store.rs` — ordered contacts, search, add/update/delete.
//! - `storage.rs` — JSON file load/save for the store.
//! - `editor.rs` — four-field editor returning `DialogOutcome`.
//! - `session.rs` — filter + selection state and the list-view handlers.
//! - `game.rs` — rock-paper-scissors rounds and scores.
//! - `config.rs` — `~/.config/rolodex/config.toml` settings.
//! - `logging.rs` — tracing subscriber setup.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Side effects should be explicit and localized (only `storage.rs` touches
//!   the contacts file).
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod contact_store;
pub mod editor;
pub mod game;
pub mod logging;
pub mod output;
pub mod session;
pub mod storage;
