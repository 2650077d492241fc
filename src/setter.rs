//! Interactive time and date setting.
//!
//! Each setter walks through three fields. Up/down change the focused field
//! with wraparound; pressing both buttons moves to the next field, and after
//! the third field the setter is done. [`run_time_setter`] and
//! [`run_date_setter`] drive a setter from the input until it completes and
//! commit the result to the RTC.

use crate::calendar::{CalendarReading, ClockReading, DateTime, is_leap_year, month_length};
use crate::geometry::RingGeometry;
use crate::input::InputSource;
use crate::render::{self, Canvas, PixelBuffer};
use crate::time::{TimeCache, TimeKeeper};
use crate::types::{ClockError, InputEdge, SetterFocus};

/// Result of feeding one edge to a setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetterStep {
    /// Still editing.
    Continue,
    /// The last field was confirmed.
    Done,
}

/// Steps `value` by one within `min..=max`, wrapping at both ends.
fn wrap_step(value: u8, min: u8, max: u8, up: bool) -> u8 {
    match (up, value) {
        (true, v) if v >= max => min,
        (true, v) => v + 1,
        (false, v) if v <= min => max,
        (false, v) => v - 1,
    }
}

/// Time setter: hour (24h), then minute, then second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSetter {
    hour: u8,
    minute: u8,
    second: u8,
    focus: SetterFocus,
}

impl TimeSetter {
    /// Starts editing from `start`, focused on the hour.
    pub fn new(start: ClockReading) -> Self {
        Self {
            hour: start.hour24.min(23),
            minute: start.minute.min(59),
            second: start.second.min(59),
            focus: SetterFocus::First,
        }
    }

    pub fn focus(&self) -> SetterFocus {
        self.focus
    }

    /// The edited time. The 12-hour value is derived from the hour.
    pub fn reading(&self) -> ClockReading {
        ClockReading::new(self.hour, self.minute, self.second)
    }

    /// Applies one input edge.
    pub fn apply(&mut self, edge: InputEdge) -> SetterStep {
        match edge {
            InputEdge::None => {}
            InputEdge::Up => self.adjust(true),
            InputEdge::Down => self.adjust(false),
            InputEdge::Both => match self.focus.advance() {
                Some(focus) => self.focus = focus,
                None => return SetterStep::Done,
            },
        }
        SetterStep::Continue
    }

    fn adjust(&mut self, up: bool) {
        match self.focus {
            SetterFocus::First => self.hour = wrap_step(self.hour, 0, 23, up),
            SetterFocus::Second => self.minute = wrap_step(self.minute, 0, 59, up),
            SetterFocus::Third => self.second = wrap_step(self.second, 0, 59, up),
        }
    }
}

/// Date setter: year, then month, then day.
///
/// The day is kept within the month: changing the month, or changing the
/// year while on February, pulls the day down to the last day of the month
/// when needed. The day is never raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSetter {
    date: CalendarReading,
    focus: SetterFocus,
}

impl DateSetter {
    /// Starts editing from `start`, focused on the year.
    pub fn new(start: CalendarReading) -> Self {
        let year = start.year.min(99);
        let month = start.month.clamp(1, 12);
        let day = start.day.clamp(1, month_length(month, is_leap_year(year)));
        Self {
            date: CalendarReading::new(day, month, year),
            focus: SetterFocus::First,
        }
    }

    pub fn focus(&self) -> SetterFocus {
        self.focus
    }

    /// The edited date.
    pub fn date(&self) -> CalendarReading {
        self.date
    }

    /// Applies one input edge.
    pub fn apply(&mut self, edge: InputEdge) -> SetterStep {
        match edge {
            InputEdge::None => {}
            InputEdge::Up => self.adjust(true),
            InputEdge::Down => self.adjust(false),
            InputEdge::Both => match self.focus.advance() {
                Some(focus) => self.focus = focus,
                None => return SetterStep::Done,
            },
        }
        SetterStep::Continue
    }

    fn adjust(&mut self, up: bool) {
        let date = &mut self.date;
        match self.focus {
            SetterFocus::First => {
                date.year = wrap_step(date.year, 0, 99, up);
                if date.month == 2 {
                    date.day = date.day.min(month_length(2, is_leap_year(date.year)));
                }
            }
            SetterFocus::Second => {
                date.month = wrap_step(date.month, 1, 12, up);
                date.day = date.day.min(date.month_length());
            }
            SetterFocus::Third => {
                date.day = wrap_step(date.day, 1, date.month_length(), up);
            }
        }
    }
}

/// Polls the input, treating a failed read as no input.
pub(crate) fn poll_or_none<I: InputSource>(input: &mut I) -> InputEdge {
    input.poll_edge().unwrap_or_else(|_err| {
        #[cfg(feature = "defmt")]
        defmt::warn!("input read failed: {}", _err);
        InputEdge::None
    })
}

/// Runs the time setter until the seconds are confirmed.
///
/// Blocks on `input` throughout. On completion the edited time is combined
/// with the date read from the RTC at that moment, written back, and
/// returned.
///
/// # Errors
/// Propagates a failed RTC write.
pub fn run_time_setter<K, P, I>(
    keeper: &mut K,
    cache: &mut TimeCache,
    pixels: &mut P,
    geometry: &RingGeometry,
    input: &mut I,
) -> Result<DateTime, ClockError>
where
    K: TimeKeeper,
    P: PixelBuffer,
    I: InputSource,
{
    let mut setter = TimeSetter::new(cache.sample(keeper).clock());
    let mut canvas = Canvas::new(pixels, geometry);

    #[cfg(feature = "defmt")]
    defmt::info!("time setter started");

    render::show_time(&mut canvas, &setter.reading(), Some(setter.focus()));
    loop {
        let edge = poll_or_none(input);
        if edge == InputEdge::None {
            continue;
        }
        if setter.apply(edge) == SetterStep::Done {
            break;
        }
        render::show_time(&mut canvas, &setter.reading(), Some(setter.focus()));
    }

    let now = cache.sample(keeper);
    let committed = DateTime::from_parts(now.calendar(), setter.reading());
    keeper.write_date_time(committed)?;
    cache.update(committed);

    #[cfg(feature = "defmt")]
    defmt::info!("time set to {}", committed);

    Ok(committed)
}

/// Runs the date setter until the day is confirmed.
///
/// Blocks on `input` throughout. On completion the edited date is combined
/// with the time read from the RTC at that moment, written back, and
/// returned.
///
/// # Errors
/// Propagates a failed RTC write.
pub fn run_date_setter<K, P, I>(
    keeper: &mut K,
    cache: &mut TimeCache,
    pixels: &mut P,
    geometry: &RingGeometry,
    input: &mut I,
) -> Result<DateTime, ClockError>
where
    K: TimeKeeper,
    P: PixelBuffer,
    I: InputSource,
{
    let mut setter = DateSetter::new(cache.sample(keeper).calendar());
    let mut canvas = Canvas::new(pixels, geometry);

    #[cfg(feature = "defmt")]
    defmt::info!("date setter started");

    render::show_date(&mut canvas, &setter.date(), Some(setter.focus()));
    loop {
        let edge = poll_or_none(input);
        if edge == InputEdge::None {
            continue;
        }
        if setter.apply(edge) == SetterStep::Done {
            break;
        }
        render::show_date(&mut canvas, &setter.date(), Some(setter.focus()));
    }

    let now = cache.sample(keeper);
    let committed = DateTime::from_parts(setter.date(), now.clock());
    keeper.write_date_time(committed)?;
    cache.update(committed);

    #[cfg(feature = "defmt")]
    defmt::info!("date set to {}", committed);

    Ok(committed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_step_wraps_at_both_bounds() {
        assert_eq!(wrap_step(99, 0, 99, true), 0);
        assert_eq!(wrap_step(0, 0, 99, false), 99);
        assert_eq!(wrap_step(12, 1, 12, true), 1);
        assert_eq!(wrap_step(1, 1, 12, false), 12);
        assert_eq!(wrap_step(5, 1, 12, true), 6);
    }

    #[test]
    fn year_edit_in_february_pulls_day_down() {
        let mut setter = DateSetter::new(CalendarReading::new(29, 2, 16));
        setter.apply(InputEdge::Up);
        assert_eq!(setter.date(), CalendarReading::new(28, 2, 17));

        // Going back to a leap year does not restore the 29th.
        setter.apply(InputEdge::Down);
        assert_eq!(setter.date(), CalendarReading::new(28, 2, 16));
    }

    #[test]
    fn month_edit_clamps_day_to_new_month() {
        let mut setter = DateSetter::new(CalendarReading::new(31, 1, 23));
        setter.apply(InputEdge::Both);
        setter.apply(InputEdge::Up);
        assert_eq!(setter.date(), CalendarReading::new(28, 2, 23));
        setter.apply(InputEdge::Up);
        assert_eq!(setter.date(), CalendarReading::new(28, 3, 23));
    }

    #[test]
    fn day_wraps_within_month_length() {
        let mut setter = DateSetter::new(CalendarReading::new(30, 4, 24));
        setter.apply(InputEdge::Both);
        setter.apply(InputEdge::Both);
        assert_eq!(setter.focus(), SetterFocus::Third);
        setter.apply(InputEdge::Up);
        assert_eq!(setter.date().day, 1);
        setter.apply(InputEdge::Down);
        assert_eq!(setter.date().day, 30);
    }

    #[test]
    fn third_confirmation_completes() {
        let mut setter = TimeSetter::new(ClockReading::new(23, 59, 59));
        assert_eq!(setter.apply(InputEdge::Both), SetterStep::Continue);
        assert_eq!(setter.apply(InputEdge::Both), SetterStep::Continue);
        assert_eq!(setter.apply(InputEdge::Both), SetterStep::Done);
    }

    #[test]
    fn hour_edit_wraps_and_derives_twelve_hour() {
        let mut setter = TimeSetter::new(ClockReading::new(23, 0, 0));
        setter.apply(InputEdge::Up);
        assert_eq!(setter.reading(), ClockReading::new(0, 0, 0));
        setter.apply(InputEdge::Down);
        setter.apply(InputEdge::Down);
        assert_eq!(setter.reading().hour24, 22);
        assert_eq!(setter.reading().hour12, 10);
    }
}
