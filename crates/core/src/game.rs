//! Game controller - owns one game and its food RNG.
//!
//! The controller has no notion of time: callers invoke [`Game::tick`] once
//! per period (a real timer in the binary, direct calls in tests) and
//! forward steering input through [`Game::set_direction`].

use crate::game_state::{GameState, TickOutcome};
use crate::rng::FoodRng;
use crate::snapshot::GameSnapshot;
use crate::types::Direction;

#[derive(Debug, Clone)]
pub struct Game<R: FoodRng> {
    state: GameState,
    rng: R,
}

impl<R: FoodRng> Game<R> {
    /// Start a fresh game with the initial layout.
    pub fn new(rng: R) -> Self {
        Self::from_state(GameState::new(), rng)
    }

    pub fn from_state(state: GameState, rng: R) -> Self {
        Self { state, rng }
    }

    /// Throw the current state away and start over from the initial layout.
    ///
    /// The RNG carries on from where it was.
    pub fn restart(&mut self) {
        self.state = GameState::new();
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.state.tick(&mut self.rng)
    }

    pub fn set_direction(&mut self, direction: Direction) -> bool {
        self.state.set_direction(direction)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        self.state.snapshot_into(snap);
    }

    /// Tear the game down, keeping the RNG for the next one.
    pub fn into_rng(self) -> R {
        self.rng
    }
}
