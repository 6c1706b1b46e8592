//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Where the
//! actions go afterwards is up to the caller.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
