//! RNG module - food placement
//!
//! Food is placed uniformly at random over the whole board, with no check
//! against the snake body or the previous food cell. The randomness source is
//! injectable through [`FoodRng`] so that games can be replayed from a seed
//! and tests can assert exact food positions.
//!
//! Also provides a simple LCG for deterministic play.

use rand::Rng;

use crate::types::{Cell, BOARD_SIZE};

/// Source of board coordinates for food placement.
pub trait FoodRng {
    /// Return a value in `[0, bound)`. `bound` is always non-zero.
    fn next_coord(&mut self, bound: u32) -> u32;
}

/// Draw a food cell with both coordinates independent and uniform over the board.
///
/// The result may coincide with the snake or with the previous food.
pub fn random_food<R: FoodRng + ?Sized>(rng: &mut R) -> Cell {
    let bound = BOARD_SIZE as u32;
    let x = rng.next_coord(bound) as i32;
    let y = rng.next_coord(bound) as i32;
    Cell::new(x, y)
}

impl FoodRng for rand::rngs::ThreadRng {
    fn next_coord(&mut self, bound: u32) -> u32 {
        self.random_range(0..bound)
    }
}

impl<R: FoodRng + ?Sized> FoodRng for &mut R {
    fn next_coord(&mut self, bound: u32) -> u32 {
        (**self).next_coord(bound)
    }
}

impl<R: FoodRng + ?Sized> FoodRng for Box<R> {
    fn next_coord(&mut self, bound: u32) -> u32 {
        (**self).next_coord(bound)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seed 0 is remapped so that `seed()` never reports 0.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }

    /// Current internal state, usable as a seed to resume the sequence
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl FoodRng for SimpleRng {
    fn next_coord(&mut self, bound: u32) -> u32 {
        self.next_range(bound)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Values are reduced modulo the requested bound. Intended for tests that
/// need to know exactly where food will appear.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    pos: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }

    /// A sequence that yields food at the given cells, in order.
    pub fn from_cells(cells: &[Cell]) -> Self {
        let values: Vec<u32> = cells
            .iter()
            .flat_map(|c| [c.x as u32, c.y as u32])
            .collect();
        Self::new(values)
    }

    /// Number of values drawn so far
    pub fn drawn(&self) -> usize {
        self.pos
    }
}

impl FoodRng for SequenceRng {
    fn next_coord(&mut self, bound: u32) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % bound
    }
}
