//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `contacts.rs` — list/search/show/add/update/delete for `rolodex`.
//! - `session.rs` — interactive loop for `rolodex session`, plus `Console`.
//! - `game.rs` — `rps play` and `rps session`.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod contacts;
pub mod game;
pub mod session;

pub use contacts::handle_contact_commands;
pub use game::handle_game_commands;
