//! The fixed palette and color helpers.
//!
//! Pixels are 8-bit `Srgb<u8>`. Face colors are deliberately very dim so the
//! overlay markers stand out; the hour/minute/second markers use full
//! channels. HSV helpers go through `palette` and are used for the
//! equalizer color wheel.

use palette::{FromColor, Hsv, Srgb};

/// An 8-bit RGB pixel color.
pub type Rgb = Srgb<u8>;

pub const OFF: Rgb = Srgb::new(0, 0, 0);
pub const WHITE: Rgb = Srgb::new(255, 255, 255);
pub const RED: Rgb = Srgb::new(255, 0, 0);
pub const GREEN: Rgb = Srgb::new(0, 255, 0);
pub const BLUE: Rgb = Srgb::new(0, 0, 255);

// Clock face
pub const FACE_OUTER: Rgb = Srgb::new(2, 2, 6);
pub const FACE_OUTER_TICK: Rgb = Srgb::new(18, 18, 28);
pub const FACE_MIDDLE: Rgb = Srgb::new(4, 1, 5);
pub const FACE_INNER: Rgb = Srgb::new(1, 4, 5);

// Clock markers
pub const SECOND_MARKER: Rgb = Srgb::new(60, 255, 40);
pub const MINUTE_MARKER: Rgb = Srgb::new(255, 110, 0);
pub const HOUR_MARKER_INNER: Rgb = Srgb::new(0, 90, 255);
pub const HOUR_MARKER_MIDDLE: Rgb = Srgb::new(190, 0, 255);

// Date face
pub const DATE_DAY_FACE: Rgb = Srgb::new(5, 4, 0);
pub const DATE_YEAR_FACE: Rgb = Srgb::new(0, 3, 6);
pub const DATE_MONTH_FACE: Rgb = Srgb::new(5, 0, 3);
pub const DATE_ACCENT: Rgb = Srgb::new(30, 30, 30);

// Date markers
pub const DAY_MARKER: Rgb = Srgb::new(0, 255, 110);
pub const MONTH_MARKER: Rgb = Srgb::new(255, 200, 0);
pub const YEAR_UNIT_MARKER: Rgb = Srgb::new(0, 200, 255);
pub const YEAR_DECADE_MARKER: Rgb = Srgb::new(255, 0, 160);

// Audio
pub const EQUALIZER_FALLBACK: Rgb = Srgb::new(1, 1, 2);

// Pac-Man
pub const PACMAN: Rgb = Srgb::new(255, 180, 0);
pub const PELLET: Rgb = Srgb::new(40, 30, 20);
pub const GHOST: Rgb = Srgb::new(255, 0, 40);
pub const MAZE: Rgb = Srgb::new(0, 0, 8);

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Rgb {
    let hsv: Hsv = Hsv::new(hue, saturation, value);
    Srgb::<f32>::from_color(hsv).into_format()
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Rgb {
    hsv(hue, 1.0, 1.0)
}

/// Color wheel with 256 steps per revolution, starting at red.
#[inline]
pub fn wheel(position: u8) -> Rgb {
    hue(f32::from(position) * (360.0 / 256.0))
}

/// Scales every channel by `level / 255`.
#[inline]
pub fn scale(color: Rgb, level: u8) -> Rgb {
    let channel = |c: u8| ((u16::from(c) * u16::from(level)) / 255) as u8;
    Srgb::new(channel(color.red), channel(color.green), channel(color.blue))
}

/// Dims a marker to the level used for fields that are not being edited.
#[inline]
pub fn dim(color: Rgb) -> Rgb {
    scale(color, 40)
}
