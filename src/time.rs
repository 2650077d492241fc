//! Time-keeping abstractions: the real-time clock and the one-second tick.

use crate::calendar::DateTime;
use crate::types::ClockError;
use portable_atomic::{AtomicBool, Ordering};

/// Trait for abstracting the battery-backed real-time clock.
///
/// Implement this for your RTC driver. The register protocol is entirely
/// the implementation's business; readings are expected in binary, with
/// a two-digit year.
pub trait TimeKeeper {
    /// Reads the current date and time.
    fn read_date_time(&mut self) -> Result<DateTime, ClockError>;

    /// Sets the RTC to the given date and time.
    fn write_date_time(&mut self, date_time: DateTime) -> Result<(), ClockError>;
}

/// One-second flag raised by a timer interrupt.
///
/// The interrupt handler only calls [`SecondTick::signal`]. The main loop
/// drains the flag with [`SecondTick::take`] at its poll points. Place it in
/// a `static` so both contexts can reach it.
///
/// On targets without native compare-and-swap, enable the `critical-section`
/// feature of `portable-atomic`.
pub struct SecondTick {
    pending: AtomicBool,
}

impl SecondTick {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Marks that a second has elapsed. Safe to call from an interrupt.
    #[inline]
    pub fn signal(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Consumes the flag, returning whether a second had elapsed.
    #[inline]
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    /// Returns whether a second has elapsed without consuming the flag.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

impl Default for SecondTick {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads the RTC and falls back to the last valid reading.
///
/// Failed or out-of-range readings never reach the renderer, since their
/// fields would index past the end of a ring. A day past the end of its
/// month (29 February in year 0, say) only has the day pulled down; the
/// rest of the reading is kept.
#[derive(Debug, Clone, Copy)]
pub struct TimeCache {
    last_good: DateTime,
}

impl TimeCache {
    /// Creates a cache seeded with `initial`, used until the first valid read.
    pub fn new(initial: DateTime) -> Self {
        Self { last_good: initial }
    }

    /// Returns a fresh reading, or the last valid one if the read fails.
    pub fn sample<K: TimeKeeper>(&mut self, keeper: &mut K) -> DateTime {
        match keeper.read_date_time().and_then(|reading| {
            reading.validate()?;
            Ok(reading.clamp_day())
        }) {
            Ok(reading) => {
                self.last_good = reading;
                reading
            }
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("RTC read rejected ({}), keeping last good reading", _err);
                self.last_good
            }
        }
    }

    /// The most recent valid reading.
    pub fn last_good(&self) -> DateTime {
        self.last_good
    }

    /// Records a value known to be valid, e.g. one just written to the RTC.
    pub fn update(&mut self, date_time: DateTime) {
        if date_time.validate().is_ok() {
            self.last_good = date_time.clamp_day();
        }
    }
}

impl Default for TimeCache {
    fn default() -> Self {
        Self::new(DateTime::new(0, 1, 1, 0, 0, 0))
    }
}
