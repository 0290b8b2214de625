//! Session: one game driven by one tick timer.
//!
//! The session owns the timer for as long as its game is running. The timer
//! is cancelled on the tick that ends the game and is dropped together with
//! the session; a restart replaces both the game state and the timer.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::clock::TickTimer;
use crate::core::{FoodRng, Game, GameSnapshot, TickOutcome};
use crate::types::SnakeAction;

pub struct Session<R: FoodRng> {
    game: Game<R>,
    timer: TickTimer,
    /// Number of games played in this session, including the current one.
    round: u32,
}

impl<R: FoodRng> Session<R> {
    /// Start a fresh game; the first tick is due one `period` after `now`.
    pub fn start(rng: R, period: Duration, now: Instant) -> Self {
        info!(period_ms = period.as_millis() as u64, "session started");
        Self {
            game: Game::new(rng),
            timer: TickTimer::start(period, now),
            round: 1,
        }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn game_over(&self) -> bool {
        self.game.game_over()
    }

    /// Apply a player action. Returns true if anything visible changed.
    pub fn handle(&mut self, action: SnakeAction, now: Instant) -> bool {
        match action {
            SnakeAction::Steer(direction) => {
                let accepted = self.game.set_direction(direction);
                debug!(direction = direction.as_str(), accepted, "steer");
                accepted
            }
            SnakeAction::Restart => {
                self.restart(now);
                true
            }
        }
    }

    /// Discard the current game and start a new one with a fresh timer.
    pub fn restart(&mut self, now: Instant) {
        let period = self.timer.period();
        self.timer.cancel();
        self.game.restart();
        self.timer = TickTimer::start(period, now);
        self.round += 1;
        info!(round = self.round, "game restarted");
    }

    /// Run the tick that is due at `now`, if any.
    ///
    /// At most one tick runs per call, however long the caller stalled, so
    /// every move gets a chance to be drawn and steered.
    pub fn update(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.timer.due(now) {
            return None;
        }

        let outcome = self.game.tick();
        match outcome {
            TickOutcome::Moved => {
                let head = self.game.state().head();
                debug!(head_x = head.x, head_y = head.y, "moved");
            }
            TickOutcome::Ate { food } => {
                let state = self.game.state();
                debug!(
                    score = state.score(),
                    length = state.len(),
                    food_x = food.x,
                    food_y = food.y,
                    "food eaten"
                );
            }
            TickOutcome::Collided(collision) => {
                self.timer.cancel();
                let state = self.game.state();
                info!(
                    round = self.round,
                    reason = ?collision,
                    score = state.score(),
                    length = state.len(),
                    ticks = state.ticks(),
                    "game over"
                );
            }
            TickOutcome::Halted => {
                self.timer.cancel();
            }
        }
        Some(outcome)
    }

    /// How long the caller may wait for input before the next tick.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.timer.timeout(now)
    }

    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        self.game.snapshot_into(snap);
    }
}
