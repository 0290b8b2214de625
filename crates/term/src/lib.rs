//! Terminal rendering for the snake game.
//!
//! Rendering is split in two: [`GameView`] turns a snapshot into a
//! [`FrameBuffer`] without any I/O, and [`TerminalRenderer`] owns the real
//! terminal and flushes framebuffers to it with crossterm.
//!
//! Board cells are drawn two columns wide so the 30x30 board looks square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
