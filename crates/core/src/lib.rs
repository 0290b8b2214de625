//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management.
//! It has **no dependencies** on UI, timing, or I/O, making it:
//!
//! - **Deterministic**: the only randomness is the injected [`FoodRng`]
//! - **Testable**: every transition can be driven by hand
//!
//! # Module Structure
//!
//! - [`game_state`]: snake, directions, food, and the steer/tick transitions
//! - [`game`]: controller owning a state and its food RNG
//! - [`rng`]: food placement and the injectable RNG sources
//! - [`snapshot`]: read-only copy of the state for renderers
//!
//! # Game Rules
//!
//! - The snake moves one cell per tick in its pending direction
//! - A direction request opposite to the current direction is ignored
//! - Leaving the 30x30 board, or moving onto the body (excluding the head),
//!   ends the game
//! - Eating food grows the snake by one cell and places new food anywhere
//!   on the board, possibly on the snake itself
//! - Game over is terminal; restarting means building a new game
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{Game, SequenceRng, TickOutcome};
//! use tui_snake_types::{Cell, Direction};
//!
//! let mut game = Game::new(SequenceRng::from_cells(&[Cell::new(3, 4)]));
//!
//! game.set_direction(Direction::Up);
//! assert_eq!(game.tick(), TickOutcome::Moved);
//! assert_eq!(game.state().head(), Cell::new(15, 14));
//!
//! // Reversal onto the body is ignored.
//! assert!(!game.set_direction(Direction::Down));
//! ```

pub mod game;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use game::Game;
pub use game_state::{GameState, TickOutcome};
pub use rng::{random_food, FoodRng, SequenceRng, SimpleRng};
pub use snapshot::GameSnapshot;
