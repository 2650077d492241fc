//! Pac-Man chase animation on the outer ring.

use crate::colors;
use crate::render::{Canvas, PixelBuffer};
use crate::types::Ring;

/// Outer-ring distance between pellets.
pub const PELLET_SPACING: usize = 5;

/// Number of pellets on a full lap.
pub const PELLET_COUNT: usize = 12;

/// How far the ghost trails behind.
pub const GHOST_GAP: usize = 8;

const ALL_PELLETS: u16 = (1 << PELLET_COUNT) - 1;

/// Pac-Man running clockwise and eating pellets, chased by a ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacMan {
    position: usize,
    frame: u32,
    step_frames: u32,
    pellets: u16,
}

impl PacMan {
    /// Creates the animation. Pac-Man moves one pixel every `step_frames`.
    pub fn new(step_frames: u32) -> Self {
        Self {
            position: 0,
            frame: 0,
            step_frames: step_frames.max(1),
            pellets: ALL_PELLETS & !1,
        }
    }

    /// Pac-Man's position on the outer ring.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The ghost's position on the outer ring.
    pub fn ghost_position(&self) -> usize {
        (self.position + Ring::Outer.len() - GHOST_GAP) % Ring::Outer.len()
    }

    /// Pellets not yet eaten on this lap.
    pub fn pellets_left(&self) -> u32 {
        self.pellets.count_ones()
    }

    /// True if the pellet at pellet slot `slot` is still there.
    pub fn has_pellet(&self, slot: usize) -> bool {
        self.pellets & (1 << slot) != 0
    }

    /// Mouth alternates every step.
    pub fn mouth_open(&self) -> bool {
        (self.frame / self.step_frames) % 2 == 0
    }

    /// Counts one frame, moving Pac-Man when due.
    pub fn advance(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        if self.frame % self.step_frames != 0 {
            return;
        }

        self.position = (self.position + 1) % Ring::Outer.len();
        if self.position == 0 {
            self.pellets = ALL_PELLETS;
        }
        if self.position % PELLET_SPACING == 0 {
            self.pellets &= !(1 << (self.position / PELLET_SPACING));
        }
    }

    /// Draws the current frame, then advances.
    pub fn draw<P: PixelBuffer>(&mut self, canvas: &mut Canvas<'_, P>) {
        canvas.fill(Ring::Outer, colors::OFF);
        for slot in (0..PELLET_COUNT).filter(|&slot| self.has_pellet(slot)) {
            canvas.set(Ring::Outer, slot * PELLET_SPACING, colors::PELLET);
        }
        canvas.set(Ring::Outer, self.ghost_position(), colors::GHOST);

        let pacman = if self.mouth_open() {
            colors::PACMAN
        } else {
            colors::scale(colors::PACMAN, 90)
        };
        canvas.set(Ring::Outer, self.position, pacman);

        canvas.fill(Ring::Middle, colors::MAZE);
        canvas.fill(Ring::Inner, colors::MAZE);
        if (self.frame / 10) % 2 == 0 {
            canvas.set(Ring::Inner, 0, colors::WHITE);
        }

        self.advance();
    }
}

impl Default for PacMan {
    fn default() -> Self {
        Self::new(4)
    }
}
