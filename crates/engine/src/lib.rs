//! Session engine: drives a [`Game`](crate::core::Game) from a fixed-period
//! timer and routes player actions to it.
//!
//! Nothing here touches the terminal. The binary feeds real `Instant`s and
//! key actions in; tests feed synthetic ones.

pub mod clock;
pub mod config;
pub mod session;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use clock::TickTimer;
pub use config::SnakeConfig;
pub use session::Session;

use crate::core::{FoodRng, SimpleRng};

/// Pick the food RNG for a configuration: seeded LCG when a seed is set,
/// the thread RNG otherwise.
pub fn food_rng(config: &SnakeConfig) -> Box<dyn FoodRng> {
    match config.seed {
        Some(seed) => Box::new(SimpleRng::new(seed)),
        None => Box::new(rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random_food;

    #[test]
    fn seeded_config_gives_reproducible_food() {
        let cfg = SnakeConfig {
            seed: Some(1234),
            ..SnakeConfig::default()
        };
        let mut a = food_rng(&cfg);
        let mut b = food_rng(&cfg);
        for _ in 0..20 {
            assert_eq!(random_food(&mut a), random_food(&mut b));
        }
    }

    #[test]
    fn unseeded_config_still_places_food_on_board() {
        let mut rng = food_rng(&SnakeConfig::default());
        for _ in 0..100 {
            assert!(random_food(&mut rng).in_bounds());
        }
    }
}
