//! Audio-reactive visualizations driven by a 7-band spectrum analyzer.
//!
//! Two mappings are provided:
//! - **Pulse**: fixed arcs whose brightness follows one band each, written
//!   straight into one or two color channels.
//! - **Equalizer**: bars whose length follows each band, colored from a
//!   slowly drifting color wheel.
//!
//! Both read a [`BandSample`] that has already been through
//! [`filter_noise`].

use crate::colors::{self, Rgb};
use crate::render::{Canvas, PixelBuffer};
use crate::types::{ClockError, Ring};
use palette::Srgb;

/// Number of analyzer bands.
pub const BAND_COUNT: usize = 7;

/// One filtered intensity per band, lowest frequency first.
pub type BandSample = [u8; BAND_COUNT];

/// Trait for abstracting the spectrum analyzer chip.
///
/// Implement this for your analyzer driver. Raw readings may exceed 255
/// (e.g. a 10-bit ADC); [`filter_noise`] saturates them.
pub trait SpectrumAnalyzer {
    /// Samples all bands once, lowest frequency first.
    fn sample_bands(&mut self) -> Result<[u16; BAND_COUNT], ClockError>;
}

/// Applies the noise floor to a raw sample.
///
/// Readings at or below `floor` become `minimal` rather than zero, so a quiet
/// room still shows a faint display. Readings above it saturate at 255.
pub fn filter_noise(raw: &[u16; BAND_COUNT], floor: u16, minimal: u8) -> BandSample {
    raw.map(|value| {
        if value <= floor {
            minimal
        } else {
            value.min(255) as u8
        }
    })
}

/// Rescales a filtered intensity to a bar of at most `max_height` pixels.
///
/// Rounds up, so any non-zero intensity lights at least one pixel.
#[inline]
pub fn bar_height(intensity: u8, max_height: u8) -> u8 {
    ((u16::from(intensity) * u16::from(max_height)).div_ceil(255)) as u8
}

/// Color channels an arc writes its band intensity into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    Red,
    Green,
    Blue,
    RedGreen,
    GreenBlue,
    RedBlue,
}

impl Channels {
    /// Color with `level` in the selected channels and zero elsewhere.
    pub fn color(self, level: u8) -> Rgb {
        match self {
            Channels::Red => Srgb::new(level, 0, 0),
            Channels::Green => Srgb::new(0, level, 0),
            Channels::Blue => Srgb::new(0, 0, level),
            Channels::RedGreen => Srgb::new(level, level, 0),
            Channels::GreenBlue => Srgb::new(0, level, level),
            Channels::RedBlue => Srgb::new(level, 0, level),
        }
    }
}

/// A run of ring positions lit by one band in the pulse display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseArc {
    pub ring: Ring,
    pub start: u8,
    pub len: u8,
    pub band: u8,
    pub channels: Channels,
}

const fn arc(ring: Ring, start: u8, len: u8, band: u8, channels: Channels) -> PulseArc {
    PulseArc {
        ring,
        start,
        len,
        band,
        channels,
    }
}

/// Outer ring pulse arcs, one per band 0-5. Positions between arcs stay dark.
pub const OUTER_PULSE_ARCS: [PulseArc; 6] = [
    arc(Ring::Outer, 0, 7, 0, Channels::Red),
    arc(Ring::Outer, 10, 6, 1, Channels::RedGreen),
    arc(Ring::Outer, 20, 5, 2, Channels::Green),
    arc(Ring::Outer, 30, 6, 3, Channels::GreenBlue),
    arc(Ring::Outer, 40, 6, 4, Channels::Blue),
    arc(Ring::Outer, 50, 7, 5, Channels::RedBlue),
];

/// Middle ring pulse arcs, bands 0-5 with complementary channels.
pub const MIDDLE_PULSE_ARCS: [PulseArc; 6] = [
    arc(Ring::Middle, 0, 4, 0, Channels::GreenBlue),
    arc(Ring::Middle, 4, 4, 1, Channels::Blue),
    arc(Ring::Middle, 8, 4, 2, Channels::RedBlue),
    arc(Ring::Middle, 12, 4, 3, Channels::Red),
    arc(Ring::Middle, 16, 4, 4, Channels::RedGreen),
    arc(Ring::Middle, 20, 4, 5, Channels::Green),
];

/// Inner ring blend: the band feeding red, green and blue at each position.
pub const INNER_PULSE_BLEND: [[u8; 3]; 12] = [
    [0, 3, 6],
    [0, 4, 6],
    [1, 4, 6],
    [1, 5, 6],
    [2, 5, 6],
    [2, 0, 6],
    [3, 0, 6],
    [3, 1, 6],
    [4, 1, 6],
    [4, 2, 6],
    [5, 2, 6],
    [5, 3, 6],
];

/// Draws the pulse display for one sample.
pub fn draw_pulse<P: PixelBuffer>(canvas: &mut Canvas<'_, P>, sample: &BandSample) {
    canvas.fill(Ring::Outer, colors::OFF);
    for arc in OUTER_PULSE_ARCS.iter().chain(MIDDLE_PULSE_ARCS.iter()) {
        let color = arc.channels.color(sample[usize::from(arc.band)]);
        let start = usize::from(arc.start);
        canvas.fill_range(arc.ring, start..start + usize::from(arc.len), color);
    }

    for (position, [red, green, blue]) in INNER_PULSE_BLEND.iter().enumerate() {
        // Blue is halved: band 6 feeds every inner position.
        let color = Srgb::new(
            sample[usize::from(*red)],
            sample[usize::from(*green)],
            sample[usize::from(*blue)] / 2,
        );
        canvas.set(Ring::Inner, position, color);
    }
}

/// A bar of the equalizer display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EqualizerBar {
    pub ring: Ring,
    pub start: u8,
    pub len: u8,
    pub band: u8,
}

const fn bar(ring: Ring, start: u8, len: u8, band: u8) -> EqualizerBar {
    EqualizerBar {
        ring,
        start,
        len,
        band,
    }
}

/// Equalizer layout: bands 0-3 on the outer ring, 4-5 on the middle ring,
/// band 6 mirrored on both halves of the inner ring.
pub const EQUALIZER_BARS: [EqualizerBar; 8] = [
    bar(Ring::Outer, 0, 15, 0),
    bar(Ring::Outer, 15, 15, 1),
    bar(Ring::Outer, 30, 15, 2),
    bar(Ring::Outer, 45, 15, 3),
    bar(Ring::Middle, 0, 12, 4),
    bar(Ring::Middle, 12, 12, 5),
    bar(Ring::Inner, 0, 6, 6),
    bar(Ring::Inner, 6, 6, 6),
];

/// Frame counter and color-wheel phase shared by the audio displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioVisualizer {
    frame: u32,
    phase: u8,
    phase_divider: u32,
}

impl AudioVisualizer {
    /// Creates a visualizer whose color wheel steps once every
    /// `phase_divider` frames.
    pub fn new(phase_divider: u32) -> Self {
        Self {
            frame: 0,
            phase: 0,
            phase_divider: phase_divider.max(1),
        }
    }

    /// Current color-wheel phase.
    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// Frames drawn so far.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Counts one frame, stepping the color wheel when due.
    pub fn advance_frame(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        if self.frame % self.phase_divider == 0 {
            self.phase = self.phase.wrapping_add(1);
        }
    }

    /// Color of a lit equalizer pixel at `position` on its ring.
    pub fn wheel_color(&self, position: usize) -> Rgb {
        colors::wheel(self.phase.wrapping_add((position as u8).wrapping_mul(4)))
    }

    /// Draws the pulse display and counts the frame.
    pub fn draw_pulse<P: PixelBuffer>(&mut self, canvas: &mut Canvas<'_, P>, sample: &BandSample) {
        draw_pulse(canvas, sample);
        self.advance_frame();
    }

    /// Draws the equalizer display and counts the frame.
    pub fn draw_equalizer<P: PixelBuffer>(
        &mut self,
        canvas: &mut Canvas<'_, P>,
        sample: &BandSample,
    ) {
        for bar in EQUALIZER_BARS {
            let height = usize::from(bar_height(sample[usize::from(bar.band)], bar.len));
            let start = usize::from(bar.start);
            for offset in 0..usize::from(bar.len) {
                let position = start + offset;
                let color = if offset < height {
                    self.wheel_color(position)
                } else {
                    colors::EQUALIZER_FALLBACK
                };
                canvas.set(bar.ring, position, color);
            }
        }
        self.advance_frame();
    }
}

impl Default for AudioVisualizer {
    fn default() -> Self {
        Self::new(10)
    }
}
