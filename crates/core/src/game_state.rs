//! Game state module - manages the complete game state
//!
//! This module holds the snake, its directions, the food and the game-over
//! flag, and implements the two transitions of the game: steering and the
//! fixed-period tick.

use std::collections::VecDeque;

use crate::rng::{random_food, FoodRng};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake moved one cell without growing
    Moved,
    /// The snake ate and grew; `food` is the newly placed food cell
    Ate { food: Cell },
    /// The next head collided; the game is now over
    Collided(Collision),
    /// The game was already over; nothing changed
    Halted,
}

impl TickOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TickOutcome::Collided(_) | TickOutcome::Halted)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Body cells, head at the front
    snake: VecDeque<Cell>,
    /// Direction used by the last committed move
    direction: Direction,
    /// Direction the next tick will move in
    pending: Direction,
    food: Cell,
    game_over: bool,
    /// Food eaten so far
    score: u32,
    /// Committed moves so far, wrapping on overflow
    ticks: u32,
}

impl GameState {
    /// Create a fresh game: one-cell snake at the center heading right
    pub fn new() -> Self {
        let mut snake = VecDeque::with_capacity((BOARD_SIZE * BOARD_SIZE) as usize);
        snake.push_back(INITIAL_HEAD);
        Self {
            snake,
            direction: INITIAL_DIRECTION,
            pending: INITIAL_DIRECTION,
            food: INITIAL_FOOD,
            game_over: false,
            score: 0,
            ticks: 0,
        }
    }

    /// Build a running state from explicit parts (head first).
    ///
    /// Returns `None` for an empty snake.
    pub fn from_parts(
        snake: impl IntoIterator<Item = Cell>,
        direction: Direction,
        food: Cell,
    ) -> Option<Self> {
        let snake: VecDeque<Cell> = snake.into_iter().collect();
        if snake.is_empty() {
            return None;
        }
        Some(Self {
            snake,
            direction,
            pending: direction,
            food,
            game_over: false,
            score: 0,
            ticks: 0,
        })
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        // The snake is never empty: constructors reject it and ticks only
        // pop after pushing a new head.
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn status(&self) -> Status {
        if self.game_over {
            Status::GameOver
        } else {
            Status::Running
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Request a new direction for the next tick.
    ///
    /// Rejected when `requested` is the opposite of the current direction
    /// (the one the last move used), or when the game is over. Returns
    /// whether the pending direction was updated.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.game_over || self.direction.is_opposite(requested) {
            return false;
        }
        self.pending = requested;
        true
    }

    /// Cell the head would move to on the next tick
    pub fn next_head(&self) -> Cell {
        self.head().step(self.pending)
    }

    /// Collision check for a prospective head against the current body.
    ///
    /// The current head is excluded: it moves away on the same tick.
    pub fn collision_at(&self, head: Cell) -> Option<Collision> {
        if !head.in_bounds() {
            return Some(Collision::Wall);
        }
        if self.snake.iter().skip(1).any(|&c| c == head) {
            return Some(Collision::SelfBite);
        }
        None
    }

    /// Advance the game by one tick.
    ///
    /// On collision only the game-over flag changes. On eating, the snake
    /// grows and food is redrawn from `rng` anywhere on the board.
    pub fn tick<R: FoodRng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Halted;
        }

        let head = self.next_head();
        if let Some(collision) = self.collision_at(head) {
            self.game_over = true;
            return TickOutcome::Collided(collision);
        }

        let ate = head == self.food;
        self.snake.push_front(head);
        let outcome = if ate {
            self.food = random_food(rng);
            self.score = self.score.saturating_add(1);
            TickOutcome::Ate { food: self.food }
        } else {
            self.snake.pop_back();
            TickOutcome::Moved
        };

        self.direction = self.pending;
        self.ticks = self.ticks.wrapping_add(1);
        outcome
    }

    /// Pure form of [`GameState::set_direction`].
    pub fn steered(&self, requested: Direction) -> Self {
        let mut next = self.clone();
        next.set_direction(requested);
        next
    }

    /// Pure form of [`GameState::tick`].
    pub fn stepped<R: FoodRng + ?Sized>(&self, rng: &mut R) -> (Self, TickOutcome) {
        let mut next = self.clone();
        let outcome = next.tick(rng);
        (next, outcome)
    }

    /// Copy the renderable parts of the state into `snap`, reusing its buffers.
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.snake.clear();
        snap.snake.extend(self.snake.iter().copied());
        snap.food = self.food;
        snap.direction = self.pending;
        snap.status = self.status();
        snap.score = self.score;
        snap.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    #[cfg(test)]
    pub(crate) fn force_game_over(&mut self) {
        self.game_over = true;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
