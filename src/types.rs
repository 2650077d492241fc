//! Core types shared by the display engine.

/// One of the three concentric LED rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ring {
    /// Outer ring, 60 pixels. Seconds, minutes and days.
    Outer,

    /// Middle ring, 24 pixels. Hours (24h) and year digits.
    Middle,

    /// Inner ring, 12 pixels. Hours (12h) and months.
    Inner,
}

impl Ring {
    /// All rings, outermost first.
    pub const ALL: [Ring; 3] = [Ring::Outer, Ring::Middle, Ring::Inner];

    /// Number of pixels on this ring.
    #[inline]
    pub const fn len(self) -> usize {
        match self {
            Ring::Outer => 60,
            Ring::Middle => 24,
            Ring::Inner => 12,
        }
    }

    /// First physical pixel index belonging to this ring.
    #[inline]
    pub const fn offset(self) -> usize {
        match self {
            Ring::Outer => 0,
            Ring::Middle => 60,
            Ring::Inner => 84,
        }
    }

    /// Position of this ring in [`Ring::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Ring::Outer => 0,
            Ring::Middle => 1,
            Ring::Inner => 2,
        }
    }
}

/// Rotation direction of a ring's index table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// The opposite direction.
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Display modes, in the order the up/down buttons cycle through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Analog clock face.
    #[default]
    Clock,

    /// Calendar face.
    Date,

    /// Radial pulse bars driven by the spectrum analyzer.
    AudioPulse,

    /// Pulse bars on independently rotating rings.
    AudioPulseRotating,

    /// Graphic equalizer bars.
    AudioEqualizer,

    /// Equalizer bars on independently rotating rings.
    AudioEqualizerRotating,

    /// Pac-Man chase animation.
    PacMan,
}

impl DisplayMode {
    /// Number of modes.
    pub const COUNT: usize = 7;

    /// All modes in cycle order.
    pub const ALL: [DisplayMode; Self::COUNT] = [
        DisplayMode::Clock,
        DisplayMode::Date,
        DisplayMode::AudioPulse,
        DisplayMode::AudioPulseRotating,
        DisplayMode::AudioEqualizer,
        DisplayMode::AudioEqualizerRotating,
        DisplayMode::PacMan,
    ];

    /// Position of this mode in the cycle.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Mode at `index`, wrapping past the end.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Next mode, wrapping to [`DisplayMode::Clock`] after the last one.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Previous mode, wrapping to the last mode before [`DisplayMode::Clock`].
    pub fn previous(self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    /// True for modes that animate every frame instead of once per second.
    pub fn is_animated(self) -> bool {
        !matches!(self, DisplayMode::Clock | DisplayMode::Date)
    }

    /// True for the audio modes whose rings rotate.
    pub fn is_rotating(self) -> bool {
        matches!(
            self,
            DisplayMode::AudioPulseRotating | DisplayMode::AudioEqualizerRotating
        )
    }
}

/// A debounced input event from the buttons or the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEdge {
    /// Nothing pressed.
    #[default]
    None,
    Up,
    Down,
    /// Up and down pressed together.
    Both,
}

/// External collaborators that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Peripheral {
    /// Real-time clock.
    TimeKeeper,
    /// 7-band spectrum analyzer.
    SpectrumAnalyzer,
    /// Buttons and remote input lines.
    Input,
}

/// Fields of a date/time reading, used to report range violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// Errors reported by collaborators and reading validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// A peripheral did not respond or reported a failure.
    PeripheralUnavailable(Peripheral),

    /// A reading had a field outside its valid range.
    OutOfRange {
        /// The offending field.
        field: Field,
        /// The raw value that was read.
        value: u8,
    },
}

impl core::fmt::Display for ClockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ClockError::PeripheralUnavailable(peripheral) => {
                write!(f, "peripheral unavailable: {:?}", peripheral)
            }
            ClockError::OutOfRange { field, value } => {
                write!(f, "{:?} value {} out of range", field, value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClockError {}

/// Which of the three fields a setter is editing.
///
/// For the time setter the fields are hour, minute, second; for the date
/// setter year, month, day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetterFocus {
    #[default]
    First,
    Second,
    Third,
}

impl SetterFocus {
    /// The following field, or `None` after the last one.
    pub fn advance(self) -> Option<Self> {
        match self {
            SetterFocus::First => Some(SetterFocus::Second),
            SetterFocus::Second => Some(SetterFocus::Third),
            SetterFocus::Third => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_cycle_in_both_directions() {
        assert_eq!(DisplayMode::PacMan.next(), DisplayMode::Clock);
        assert_eq!(DisplayMode::Clock.previous(), DisplayMode::PacMan);
        for mode in DisplayMode::ALL {
            assert_eq!(mode.next().previous(), mode);
            assert_eq!(DisplayMode::from_index(mode.index()), mode);
        }
    }

    #[test]
    fn only_clock_and_date_wait_for_the_second() {
        let animated = DisplayMode::ALL.iter().filter(|m| m.is_animated()).count();
        assert_eq!(animated, 5);
        assert!(!DisplayMode::Date.is_animated());
        assert!(DisplayMode::AudioEqualizerRotating.is_rotating());
        assert!(!DisplayMode::AudioEqualizer.is_rotating());
    }

    #[test]
    fn setter_focus_ends_after_third_field() {
        assert_eq!(SetterFocus::First.advance(), Some(SetterFocus::Second));
        assert_eq!(SetterFocus::Third.advance(), None);
    }
}
