//! Date and time readings with calendar arithmetic.
//!
//! Years are two-digit (0-99, i.e. 2000-2099 on the RTC). The leap-year
//! rule keeps the century exception, so year 0 is not a leap year.

use crate::types::{ClockError, Field};

/// Month lengths for a non-leap year, January first.
const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if the two-digit `year` is a leap year.
#[inline]
pub fn is_leap_year(year: u8) -> bool {
    year % 4 == 0 && year % 100 != 0
}

/// Number of days in `month` (1-12).
///
/// Out-of-range months are clamped to the nearest valid month.
pub fn month_length(month: u8, leap: bool) -> u8 {
    let index = usize::from(month.clamp(1, 12) - 1);
    if index == 1 && leap {
        29
    } else {
        MONTH_LENGTHS[index]
    }
}

/// Time of day as shown on the clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockReading {
    pub hour24: u8,
    pub hour12: u8,
    pub minute: u8,
    pub second: u8,
}

impl ClockReading {
    /// Creates a reading, deriving the 12-hour value from `hour24`.
    pub fn new(hour24: u8, minute: u8, second: u8) -> Self {
        Self {
            hour24,
            hour12: hour24 % 12,
            minute,
            second,
        }
    }
}

/// Calendar date as shown on the date face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalendarReading {
    pub day: u8,
    pub month: u8,
    pub year: u8,
}

impl CalendarReading {
    pub fn new(day: u8, month: u8, year: u8) -> Self {
        Self { day, month, year }
    }

    /// Length of this reading's month, taking the year into account.
    pub fn month_length(&self) -> u8 {
        month_length(self.month, is_leap_year(self.year))
    }
}

impl Default for CalendarReading {
    fn default() -> Self {
        Self::new(1, 1, 0)
    }
}

/// Full date and time as exchanged with the RTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub year: u8,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTime {
    pub fn new(year: u8, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Combines a calendar date with a time of day.
    pub fn from_parts(date: CalendarReading, time: ClockReading) -> Self {
        Self::new(
            date.year,
            date.month,
            date.day,
            time.hour24,
            time.minute,
            time.second,
        )
    }

    /// Time-of-day part.
    pub fn clock(&self) -> ClockReading {
        ClockReading::new(self.hour, self.minute, self.second)
    }

    /// Date part.
    pub fn calendar(&self) -> CalendarReading {
        CalendarReading::new(self.day, self.month, self.year)
    }

    /// Checks every field against its register range.
    ///
    /// The day is only checked against 1-31. A reading such as 31 April
    /// passes; [`clamp_day`](Self::clamp_day) brings it within the month.
    ///
    /// # Errors
    /// `OutOfRange` naming the first field found outside its range.
    pub fn validate(&self) -> Result<(), ClockError> {
        let out_of_range = |field: Field, value: u8| -> Result<(), ClockError> {
            Err(ClockError::OutOfRange { field, value })
        };

        if self.year > 99 {
            return out_of_range(Field::Year, self.year);
        }
        if !(1..=12).contains(&self.month) {
            return out_of_range(Field::Month, self.month);
        }
        if !(1..=31).contains(&self.day) {
            return out_of_range(Field::Day, self.day);
        }
        if self.hour > 23 {
            return out_of_range(Field::Hour, self.hour);
        }
        if self.minute > 59 {
            return out_of_range(Field::Minute, self.minute);
        }
        if self.second > 59 {
            return out_of_range(Field::Second, self.second);
        }
        Ok(())
    }

    /// Pulls the day down to the last day of the month if it is past it.
    ///
    /// Other fields are kept as they are.
    pub fn clamp_day(self) -> Self {
        let last = month_length(self.month, is_leap_year(self.year));
        Self {
            day: self.day.min(last),
            ..self
        }
    }
}
