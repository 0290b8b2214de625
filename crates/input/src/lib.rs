//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::SnakeAction`]. Only the
//! mapping lives here; direction validation belongs to the game core.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
