#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ModeController`**: Owns the peripherals and runs the display state machine
//! - **`DisplayMode`**: Clock, date, four audio visualizations and Pac-Man, cycled with the buttons
//! - **`RingGeometry`**: Rotatable logical-to-physical index tables for the 60/24/12 pixel rings
//! - **`Canvas`**: Draws on ring positions through the current geometry
//! - **`TimeSetter`** / **`DateSetter`**: Field-by-field setting with wraparound and day clamping
//! - **`AudioVisualizer`**: Pulse and equalizer mappings of the 7 analyzer bands
//! - **`RotationScheduler`**: Independent, randomly reversing ring rotation
//! - **`TimeKeeper`**, **`SpectrumAnalyzer`**, **`PixelBuffer`**, **`InputSource`**: Traits to
//!   implement for your hardware
//! - **`SecondTick`**: One-second flag raised from a timer interrupt
//!
//! Pixels are `Srgb<u8>`. Physical pixel order is outer ring (0-59),
//! middle ring (60-83), inner ring (84-95).

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod audio;
pub mod calendar;
pub mod colors;
pub mod command;
pub mod config;
pub mod controller;
pub mod geometry;
pub mod input;
pub mod pacman;
pub mod render;
pub mod rotation;
pub mod setter;
pub mod time;
pub mod types;

pub use audio::{AudioVisualizer, BAND_COUNT, BandSample, SpectrumAnalyzer, filter_noise};
pub use calendar::{CalendarReading, ClockReading, DateTime, is_leap_year, month_length};
pub use colors::Rgb;
pub use command::ModeAction;
pub use config::DisplayConfig;
pub use controller::ModeController;
pub use geometry::{PIXEL_COUNT, RingGeometry, RingIndexTable};
pub use input::{ButtonInput, InputSource, combine_lines};
pub use pacman::PacMan;
pub use render::{Canvas, PixelBuffer};
pub use rotation::RotationScheduler;
pub use setter::{DateSetter, SetterStep, TimeSetter, run_date_setter, run_time_setter};
pub use time::{SecondTick, TimeCache, TimeKeeper};
pub use types::{
    ClockError, Direction, DisplayMode, Field, InputEdge, Peripheral, Ring, SetterFocus,
};
