//! Randomized ring rotation for the rotating audio modes.
//!
//! Each ring turns one position every few frames, at a rate of its own, and
//! now and then reverses. One random roll per frame decides the reversals:
//! each ring owns a different slot of the roll's range, so the rings flip
//! independently of one another.

use crate::geometry::RingGeometry;
use crate::types::{Direction, Ring};
use oorandom::Rand32;

/// Per-ring rotation state driven once per frame.
#[derive(Debug, Clone)]
pub struct RotationScheduler {
    directions: [Direction; 3],
    periods: [u32; 3],
    toggle_odds: u32,
    frame: u32,
    rng: Rand32,
}

impl RotationScheduler {
    /// Creates a scheduler.
    ///
    /// # Arguments
    /// * `periods` - Frames between single-step rotations, outer ring first
    /// * `toggle_odds` - Each ring reverses with probability `1 / toggle_odds` per frame
    /// * `seed` - Seed for the reversal rolls
    pub fn new(periods: [u32; 3], toggle_odds: u32, seed: u64) -> Self {
        Self {
            directions: [
                Direction::Clockwise,
                Direction::CounterClockwise,
                Direction::Clockwise,
            ],
            periods: periods.map(|period| period.max(1)),
            toggle_odds: toggle_odds.max(Ring::ALL.len() as u32),
            frame: 0,
            rng: Rand32::new(seed),
        }
    }

    /// Current direction of `ring`.
    pub fn direction(&self, ring: Ring) -> Direction {
        self.directions[ring.index()]
    }

    /// Frames processed so far.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Processes one frame: maybe reverses rings, then rotates the rings
    /// whose period has come up.
    pub fn step(&mut self, geometry: &mut RingGeometry) {
        let roll = self.rng.rand_range(0..self.toggle_odds);
        self.step_with_roll(geometry, roll);
    }

    /// Processes one frame with a given roll in `0..toggle_odds`.
    ///
    /// Roll `i` reverses ring `i`; any other value reverses nothing.
    pub fn step_with_roll(&mut self, geometry: &mut RingGeometry, roll: u32) {
        if let Some(direction) = self.directions.get_mut(roll as usize) {
            *direction = direction.reversed();
        }

        self.frame = self.frame.wrapping_add(1);
        for ring in Ring::ALL {
            if self.frame % self.periods[ring.index()] == 0 {
                geometry.rotate(ring, self.directions[ring.index()]);
            }
        }
    }
}

impl Default for RotationScheduler {
    fn default() -> Self {
        Self::new([5, 10, 15], 500, 0x5EED)
    }
}
