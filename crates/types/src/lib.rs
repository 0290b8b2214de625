//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, so they
//! can be shared by the game core, the session driver and the terminal view.
//!
//! # Board
//!
//! The playfield is a square grid of [`BOARD_SIZE`] x [`BOARD_SIZE`] cells,
//! indexed from the top-left corner. `x` grows to the right and `y` grows
//! downwards, so moving [`Direction::Up`] decrements `y`.
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 300 | Fixed interval between two snake moves |
//!
//! # Initial Layout
//!
//! - **Snake**: a single cell at the board center, (15, 15)
//! - **Direction**: [`Direction::Right`]
//! - **Food**: the fixed off-center cell (20, 15)
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, BOARD_SIZE};
//!
//! let head = Cell::new(15, 15);
//! assert_eq!(head.step(Direction::Up), Cell::new(15, 14));
//! assert!(Direction::Left.is_opposite(Direction::Right));
//!
//! assert_eq!(BOARD_SIZE, 30);
//! assert!(!Cell::new(BOARD_SIZE, 0).in_bounds());
//! ```

/// Board width and height in cells (30x30)
pub const BOARD_SIZE: i32 = 30;

/// Fixed interval between snake moves in milliseconds
pub const TICK_MS: u32 = 300;

/// Head position of a freshly started snake (board center)
pub const INITIAL_HEAD: Cell = Cell::new(15, 15);

/// Food position of a freshly started game
pub const INITIAL_FOOD: Cell = Cell::new(20, 15);

/// Movement direction of a freshly started snake
pub const INITIAL_DIRECTION: Direction = Direction::Right;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_layout_defaults() {
        assert_eq!(BOARD_SIZE, 30);
        assert_eq!(TICK_MS, 300);
        assert_eq!(INITIAL_HEAD, Cell::new(15, 15));
        assert_eq!(INITIAL_FOOD, Cell::new(20, 15));
        assert_eq!(INITIAL_DIRECTION, Direction::Right);
        assert!(INITIAL_HEAD.in_bounds());
        assert!(INITIAL_FOOD.in_bounds());
    }

    #[test]
    fn step_moves_one_cell_along_axis() {
        let c = Cell::new(5, 5);
        assert_eq!(c.step(Direction::Up), Cell::new(5, 4));
        assert_eq!(c.step(Direction::Down), Cell::new(5, 6));
        assert_eq!(c.step(Direction::Left), Cell::new(4, 5));
        assert_eq!(c.step(Direction::Right), Cell::new(6, 5));
    }

    #[test]
    fn bounds_are_half_open() {
        assert!(Cell::new(0, 0).in_bounds());
        assert!(Cell::new(BOARD_SIZE - 1, BOARD_SIZE - 1).in_bounds());
        assert!(!Cell::new(-1, 0).in_bounds());
        assert!(!Cell::new(0, -1).in_bounds());
        assert!(!Cell::new(BOARD_SIZE, 0).in_bounds());
        assert!(!Cell::new(0, BOARD_SIZE).in_bounds());
    }

    #[test]
    fn opposite_pairs() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert!(dir.is_opposite(dir.opposite()));
            assert!(!dir.is_opposite(dir));
        }
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Down));
    }
}

/// A cell on the board
///
/// Coordinates are signed so that a computed next head can sit one step
/// outside the board; [`Cell::in_bounds`] tells whether it is on-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether both coordinates lie in `[0, BOARD_SIZE)`
    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }
}

/// Snake movement direction
///
/// Opposite pairs are `Up`/`Down` and `Left`/`Right`; a snake may never turn
/// straight back onto itself in a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from `self` to `other` would be a 180° turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Coordinate delta `(dx, dy)` of one step
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Actions a player can issue to a running session
///
/// Steering goes to the game itself; restart is handled by the session,
/// which throws the current game away and builds a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeAction {
    /// Request a new movement direction
    Steer(Direction),
    /// Discard the current game and start over
    Restart,
}

impl From<Direction> for SnakeAction {
    fn from(direction: Direction) -> Self {
        SnakeAction::Steer(direction)
    }
}

/// Lifecycle of a single game instance
///
/// `Running -> GameOver` fires once; `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Running,
    GameOver,
}

/// What ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    /// The next head left the board
    Wall,
    /// The next head landed on the snake's own body
    SelfBite,
}
