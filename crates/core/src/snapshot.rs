use crate::types::{Cell, Direction, Status, INITIAL_DIRECTION, INITIAL_FOOD};

/// Read-only view of a game, as consumed by renderers.
///
/// `snake` is ordered head first. Refresh it with
/// [`GameState::snapshot_into`](crate::GameState::snapshot_into) to keep the
/// allocation across frames.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub direction: Direction,
    pub status: Status,
    pub score: u32,
    pub ticks: u32,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            snake: Vec::new(),
            food: INITIAL_FOOD,
            direction: INITIAL_DIRECTION,
            status: Status::Running,
            score: 0,
            ticks: 0,
        }
    }
}
