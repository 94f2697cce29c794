//! Contact manager and rock-paper-scissors game.
//!
//! Two binaries share this library but no state: `rolodex` manages contacts
//! persisted to a JSON file, `rps` plays rounds against a random opponent.

pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;
