//! Shared test infrastructure for ring-clock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin};
use heapless::{Deque, Vec};
use ring_clock::colors::{self, Rgb};
use ring_clock::{
    BAND_COUNT, ClockError, DateTime, DisplayConfig, InputEdge, InputSource, ModeController,
    PIXEL_COUNT, Peripheral, PixelBuffer, Ring, SecondTick, SpectrumAnalyzer, TimeKeeper,
};

// ============================================================================
// Mock Pixel Buffer
// ============================================================================

/// Pixel buffer that keeps the pending frame and the last flushed frame
pub struct MockPixels {
    pending: [Rgb; PIXEL_COUNT],
    shown: [Rgb; PIXEL_COUNT],
    flush_count: u32,
}

impl MockPixels {
    pub fn new() -> Self {
        Self {
            pending: [colors::OFF; PIXEL_COUNT],
            shown: [colors::OFF; PIXEL_COUNT],
            flush_count: 0,
        }
    }

    /// Color of a physical pixel in the last flushed frame
    pub fn shown(&self, index: usize) -> Rgb {
        self.shown[index]
    }

    /// Color at a ring position in the last flushed frame, assuming an
    /// unrotated geometry
    pub fn shown_at(&self, ring: Ring, position: usize) -> Rgb {
        self.shown[ring.offset() + position]
    }

    /// Color of a physical pixel in the frame being drawn
    pub fn pending(&self, index: usize) -> Rgb {
        self.pending[index]
    }

    pub fn flush_count(&self) -> u32 {
        self.flush_count
    }
}

impl PixelBuffer for MockPixels {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        self.pending[index] = color;
    }

    fn flush(&mut self) {
        self.shown = self.pending;
        self.flush_count += 1;
    }
}

// ============================================================================
// Mock Time Keeper
// ============================================================================

/// RTC with a settable time, optional queued readings and a write log
pub struct MockTimeKeeper {
    now: DateTime,
    queued: Deque<Result<DateTime, ClockError>, 16>,
    written: Vec<DateTime, 8>,
    fail_writes: bool,
}

impl MockTimeKeeper {
    pub fn new(now: DateTime) -> Self {
        Self {
            now,
            queued: Deque::new(),
            written: Vec::new(),
            fail_writes: false,
        }
    }

    /// Queues a reading returned before falling back to `now`
    pub fn queue(&mut self, reading: Result<DateTime, ClockError>) {
        let _ = self.queued.push_back(reading);
    }

    pub fn set_now(&mut self, now: DateTime) {
        self.now = now;
    }

    pub fn fail_writes(&mut self) {
        self.fail_writes = true;
    }

    pub fn written(&self) -> &[DateTime] {
        &self.written
    }
}

impl TimeKeeper for MockTimeKeeper {
    fn read_date_time(&mut self) -> Result<DateTime, ClockError> {
        self.queued.pop_front().unwrap_or(Ok(self.now))
    }

    fn write_date_time(&mut self, date_time: DateTime) -> Result<(), ClockError> {
        if self.fail_writes {
            return Err(ClockError::PeripheralUnavailable(Peripheral::TimeKeeper));
        }
        self.now = date_time;
        let _ = self.written.push(date_time);
        Ok(())
    }
}

// ============================================================================
// Mock Spectrum Analyzer
// ============================================================================

/// Analyzer returning a fixed reading
pub struct FixedAnalyzer {
    bands: Option<[u16; BAND_COUNT]>,
}

impl FixedAnalyzer {
    pub fn new(bands: [u16; BAND_COUNT]) -> Self {
        Self { bands: Some(bands) }
    }

    pub fn failing() -> Self {
        Self { bands: None }
    }
}

impl SpectrumAnalyzer for FixedAnalyzer {
    fn sample_bands(&mut self) -> Result<[u16; BAND_COUNT], ClockError> {
        self.bands
            .ok_or(ClockError::PeripheralUnavailable(Peripheral::SpectrumAnalyzer))
    }
}

// ============================================================================
// Scripted Input
// ============================================================================

/// Input replaying a fixed list of edges, then reporting nothing
pub struct ScriptedInput {
    edges: Deque<InputEdge, 64>,
}

impl ScriptedInput {
    pub fn new(edges: &[InputEdge]) -> Self {
        let mut queue = Deque::new();
        for &edge in edges {
            queue.push_back(edge).unwrap();
        }
        Self { edges: queue }
    }

    pub fn idle() -> Self {
        Self::new(&[])
    }

    pub fn remaining(&self) -> usize {
        self.edges.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_edge(&mut self) -> Result<InputEdge, ClockError> {
        Ok(self.edges.pop_front().unwrap_or(InputEdge::None))
    }
}

// ============================================================================
// Delay and Pins
// ============================================================================

/// Delay that returns immediately and totals the requested time
#[derive(Default)]
pub struct NoDelay {
    total_ns: u64,
}

impl NoDelay {
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

/// Input pin replaying a list of levels, holding the last one
pub struct MockPin {
    levels: Deque<bool, 32>,
    last: bool,
}

impl MockPin {
    /// `levels` are electrical levels, `true` meaning high
    pub fn new(levels: &[bool], idle: bool) -> Self {
        let mut queue = Deque::new();
        for &level in levels {
            queue.push_back(level).unwrap();
        }
        Self {
            levels: queue,
            last: idle,
        }
    }

    fn next_level(&mut self) -> bool {
        if let Some(level) = self.levels.pop_front() {
            self.last = level;
        }
        self.last
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.next_level())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.next_level())
    }
}

// ============================================================================
// Controller Helpers
// ============================================================================

pub type TestController<'t> =
    ModeController<'t, MockTimeKeeper, FixedAnalyzer, MockPixels, ScriptedInput, NoDelay>;

/// Sunday 28 Feb 2016, 23:59:59
pub fn leap_eve() -> DateTime {
    DateTime::new(16, 2, 28, 23, 59, 59)
}

pub fn controller<'t>(
    tick: &'t SecondTick,
    now: DateTime,
    edges: &[InputEdge],
) -> TestController<'t> {
    ModeController::new(
        MockTimeKeeper::new(now),
        FixedAnalyzer::new([10, 300, 50, 0, 255, 1, 128]),
        MockPixels::new(),
        ScriptedInput::new(edges),
        NoDelay::default(),
        tick,
        DisplayConfig::default(),
    )
}
