//! Clock and calendar drawing.
//!
//! Provides the [`PixelBuffer`] trait the LED driver implements, the
//! [`Canvas`] that routes logical ring positions through the current
//! [`RingGeometry`], and the stateless face/marker routines used by the
//! clock, date and setter displays.

use crate::calendar::{CalendarReading, ClockReading};
use crate::colors::{self, Rgb};
use crate::geometry::{PIXEL_COUNT, RingGeometry};
use crate::types::{Ring, SetterFocus};
use core::ops::Range;

/// Trait for abstracting the addressable LED chain.
///
/// Implement this for your LED driver (WS2812 over SPI, PIO, RMT, ...).
/// `set_pixel` only updates a frame buffer; `flush` pushes the frame to
/// the hardware. Handle transmission errors internally, neither method
/// can fail.
pub trait PixelBuffer {
    /// Sets one pixel of the pending frame.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Transmits the pending frame.
    fn flush(&mut self);
}

/// Draws on ring positions, mapped through a ring geometry.
pub struct Canvas<'a, P: PixelBuffer> {
    pixels: &'a mut P,
    geometry: &'a RingGeometry,
}

impl<'a, P: PixelBuffer> Canvas<'a, P> {
    pub fn new(pixels: &'a mut P, geometry: &'a RingGeometry) -> Self {
        Self { pixels, geometry }
    }

    /// Sets the pixel at logical `position` of `ring`.
    #[inline]
    pub fn set(&mut self, ring: Ring, position: usize, color: Rgb) {
        let index = self.geometry.physical_index(ring, position);
        self.pixels.set_pixel(index, color);
    }

    /// Sets every position of `ring`.
    pub fn fill(&mut self, ring: Ring, color: Rgb) {
        self.fill_range(ring, 0..ring.len(), color);
    }

    /// Sets a contiguous run of positions on `ring`.
    pub fn fill_range(&mut self, ring: Ring, positions: Range<usize>, color: Rgb) {
        for position in positions {
            self.set(ring, position, color);
        }
    }

    /// Turns every pixel off. Bypasses the geometry.
    pub fn clear(&mut self) {
        for index in 0..PIXEL_COUNT {
            self.pixels.set_pixel(index, colors::OFF);
        }
    }

    /// Transmits the frame.
    pub fn flush(&mut self) {
        self.pixels.flush();
    }
}

/// 24-ring arcs lit on the date face: year units, then year decades.
pub const DATE_YEAR_ARCS: [Range<usize>; 2] = [1..11, 14..23];

/// 24-ring positions accented on the date face.
pub const DATE_ACCENTS: [usize; 4] = [1, 6, 18, 23];

/// Extra step of the 24-ring hour marker during the second half of the hour.
///
/// The boundary is exclusive: minute 30 still shows the current hour.
#[inline]
pub fn hour_offset(minute: u8) -> usize {
    usize::from(minute > 30)
}

/// Marker color given the field it belongs to and the setter focus.
///
/// Without a focus every marker is bright; with one, only the focused
/// field is.
#[inline]
fn marker(color: Rgb, field: SetterFocus, focus: Option<SetterFocus>) -> Rgb {
    match focus {
        Some(focused) if focused != field => colors::dim(color),
        _ => color,
    }
}

/// Paints the clock background on all three rings.
pub fn draw_clock_face<P: PixelBuffer>(canvas: &mut Canvas<'_, P>) {
    for position in 0..Ring::Outer.len() {
        let color = if position % 5 == 0 {
            colors::FACE_OUTER_TICK
        } else {
            colors::FACE_OUTER
        };
        canvas.set(Ring::Outer, position, color);
    }
    canvas.fill(Ring::Middle, colors::FACE_MIDDLE);
    canvas.fill(Ring::Inner, colors::FACE_INNER);
}

/// Paints the calendar background for the month of `date`.
///
/// The outer ring is lit only for the days of the month; the middle ring
/// only where the year digits can land.
pub fn draw_date_face<P: PixelBuffer>(canvas: &mut Canvas<'_, P>, date: &CalendarReading) {
    canvas.fill(Ring::Inner, colors::DATE_MONTH_FACE);

    canvas.fill(Ring::Middle, colors::OFF);
    for arc in DATE_YEAR_ARCS {
        canvas.fill_range(Ring::Middle, arc, colors::DATE_YEAR_FACE);
    }
    for position in DATE_ACCENTS {
        canvas.set(Ring::Middle, position, colors::DATE_ACCENT);
    }

    let days = usize::from(date.month_length());
    canvas.fill_range(Ring::Outer, 0..days, colors::DATE_DAY_FACE);
    canvas.fill_range(Ring::Outer, days..Ring::Outer.len(), colors::OFF);
}

/// Overlays second, minute and hour markers.
///
/// `focus` is the field being edited by the time setter (hour, minute,
/// second), or `None` for the normal display.
pub fn render_time<P: PixelBuffer>(
    canvas: &mut Canvas<'_, P>,
    reading: &ClockReading,
    focus: Option<SetterFocus>,
) {
    canvas.set(
        Ring::Outer,
        usize::from(reading.second),
        marker(colors::SECOND_MARKER, SetterFocus::Third, focus),
    );
    canvas.set(
        Ring::Outer,
        usize::from(reading.minute),
        marker(colors::MINUTE_MARKER, SetterFocus::Second, focus),
    );

    let hour_inner = marker(colors::HOUR_MARKER_INNER, SetterFocus::First, focus);
    let hour_middle = marker(colors::HOUR_MARKER_MIDDLE, SetterFocus::First, focus);
    canvas.set(Ring::Inner, usize::from(reading.hour12), hour_inner);
    canvas.set(
        Ring::Middle,
        usize::from(reading.hour24) + hour_offset(reading.minute),
        hour_middle,
    );
}

/// Overlays year, month and day markers.
///
/// `focus` is the field being edited by the date setter (year, month,
/// day), or `None` for the normal display. Years are expected in 0-99;
/// larger values draw without panicking but put the decade marker off the
/// year arc.
pub fn render_date<P: PixelBuffer>(
    canvas: &mut Canvas<'_, P>,
    reading: &CalendarReading,
    focus: Option<SetterFocus>,
) {
    let year = usize::from(reading.year);
    canvas.set(
        Ring::Middle,
        1 + year % 10,
        marker(colors::YEAR_UNIT_MARKER, SetterFocus::First, focus),
    );
    canvas.set(
        Ring::Middle,
        23usize.saturating_sub(year / 10),
        marker(colors::YEAR_DECADE_MARKER, SetterFocus::First, focus),
    );
    canvas.set(
        Ring::Inner,
        usize::from(reading.month.saturating_sub(1)),
        marker(colors::MONTH_MARKER, SetterFocus::Second, focus),
    );
    canvas.set(
        Ring::Outer,
        usize::from(reading.day.saturating_sub(1)),
        marker(colors::DAY_MARKER, SetterFocus::Third, focus),
    );
}

/// Draws and transmits a complete clock frame.
pub fn show_time<P: PixelBuffer>(
    canvas: &mut Canvas<'_, P>,
    reading: &ClockReading,
    focus: Option<SetterFocus>,
) {
    draw_clock_face(canvas);
    render_time(canvas, reading, focus);
    canvas.flush();
}

/// Draws and transmits a complete calendar frame.
pub fn show_date<P: PixelBuffer>(
    canvas: &mut Canvas<'_, P>,
    reading: &CalendarReading,
    focus: Option<SetterFocus>,
) {
    draw_date_face(canvas, reading);
    render_date(canvas, reading, focus);
    canvas.flush();
}
