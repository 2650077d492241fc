//! Logical-to-physical pixel mapping for the three rings.
//!
//! The rings are chained on one data line: outer (60 pixels) first, then
//! middle (24) and inner (12). Each ring keeps its own index table so it can
//! be rotated without touching the others.

use crate::types::{Direction, Ring};
use heapless::Vec;

/// Total number of pixels on the chain.
pub const PIXEL_COUNT: usize = 96;

/// Maximum ring length, sizing the index tables.
const MAX_RING_LEN: usize = 60;

/// Physical pixel index for every logical position of one ring.
///
/// Always a permutation of the ring's contiguous physical range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingIndexTable {
    ring: Ring,
    slots: Vec<u8, MAX_RING_LEN>,
}

impl RingIndexTable {
    /// Creates the identity mapping for `ring`.
    pub fn identity(ring: Ring) -> Self {
        let start = ring.offset();
        let slots = (start..start + ring.len()).map(|i| i as u8).collect();
        Self { ring, slots }
    }

    /// The ring this table maps.
    #[inline]
    pub fn ring(&self) -> Ring {
        self.ring
    }

    /// Number of positions on the ring.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Physical index for `position`, wrapping past the end of the ring.
    #[inline]
    pub fn physical(&self, position: usize) -> usize {
        usize::from(self.slots[position % self.slots.len()])
    }

    /// Shifts the mapping one position.
    ///
    /// After a clockwise rotation, whatever is drawn at a logical position
    /// lights the next pixel clockwise.
    pub fn rotate(&mut self, direction: Direction) {
        match direction {
            Direction::Clockwise => self.slots.rotate_left(1),
            Direction::CounterClockwise => self.slots.rotate_right(1),
        }
    }

    /// Restores the identity mapping.
    pub fn reset(&mut self) {
        *self = Self::identity(self.ring);
    }

    /// True if every logical position maps to its own physical slot.
    pub fn is_identity(&self) -> bool {
        let start = self.ring.offset();
        self.slots
            .iter()
            .enumerate()
            .all(|(i, &slot)| usize::from(slot) == start + i)
    }

    /// The raw mapping, logical position first.
    pub fn as_slice(&self) -> &[u8] {
        &self.slots
    }
}

/// Index tables for all three rings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingGeometry {
    tables: [RingIndexTable; 3],
}

impl RingGeometry {
    /// Creates identity mappings for every ring.
    pub fn new() -> Self {
        Self {
            tables: Ring::ALL.map(RingIndexTable::identity),
        }
    }

    /// Physical pixel index of `position` on `ring`.
    #[inline]
    pub fn physical_index(&self, ring: Ring, position: usize) -> usize {
        self.tables[ring.index()].physical(position)
    }

    /// Rotates one ring by a single position.
    pub fn rotate(&mut self, ring: Ring, direction: Direction) {
        self.tables[ring.index()].rotate(direction);
    }

    /// Restores the identity mapping on all rings.
    pub fn reset(&mut self) {
        for table in &mut self.tables {
            table.reset();
        }
    }

    /// The index table of one ring.
    pub fn table(&self, ring: Ring) -> &RingIndexTable {
        &self.tables[ring.index()]
    }

    /// True if no ring is rotated.
    pub fn is_identity(&self) -> bool {
        self.tables.iter().all(RingIndexTable::is_identity)
    }
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self::new()
    }
}
