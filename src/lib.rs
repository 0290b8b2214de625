//! TUI Snake (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_snake::{core, engine, input, term, types}`
//! and hosts the process-level pieces shared by the binary: logging setup.

pub mod logging;

pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
