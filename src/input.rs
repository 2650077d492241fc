//! Button and remote-control input.
//!
//! The controller only sees [`InputEdge`]s through the [`InputSource`]
//! trait. [`ButtonInput`] is the stock implementation over four GPIO lines:
//! two push buttons and the two outputs of a wireless receiver that mirrors
//! them.

use crate::types::{ClockError, InputEdge, Peripheral};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

/// Trait for abstracting the user input.
pub trait InputSource {
    /// Returns the next debounced edge, or [`InputEdge::None`] if nothing
    /// is pressed.
    ///
    /// May block until a pressed combination is released.
    fn poll_edge(&mut self) -> Result<InputEdge, ClockError>;
}

/// Combines the line states into one edge.
///
/// Each direction is asserted if either its button or its remote line is;
/// both directions together make [`InputEdge::Both`].
pub fn combine_lines(
    button_up: bool,
    button_down: bool,
    remote_up: bool,
    remote_down: bool,
) -> InputEdge {
    match (button_up || remote_up, button_down || remote_down) {
        (true, true) => InputEdge::Both,
        (true, false) => InputEdge::Up,
        (false, true) => InputEdge::Down,
        (false, false) => InputEdge::None,
    }
}

fn unavailable<E>(_: E) -> ClockError {
    ClockError::PeripheralUnavailable(Peripheral::Input)
}

/// Merges two edges seen during one press.
fn merge(seen: InputEdge, now: InputEdge) -> InputEdge {
    match (seen, now) {
        (InputEdge::None, edge) | (edge, InputEdge::None) => edge,
        (a, b) if a == b => a,
        _ => InputEdge::Both,
    }
}

/// Polls two buttons and two remote lines, waiting for release.
///
/// Buttons are active low (pulled up, shorted to ground when pressed).
/// Remote receiver outputs are active high.
///
/// A press is reported once everything is released, as the union of every
/// line seen during the press. Pressing up and then adding down before
/// letting go therefore reports [`InputEdge::Both`]. Nothing else runs
/// while a press is held.
pub struct ButtonInput<BU, BD, RU, RD, D> {
    button_up: BU,
    button_down: BD,
    remote_up: RU,
    remote_down: RD,
    delay: D,
    poll_interval_ms: u32,
}

impl<BU, BD, RU, RD, D> ButtonInput<BU, BD, RU, RD, D>
where
    BU: InputPin,
    BD: InputPin,
    RU: InputPin,
    RD: InputPin,
    D: DelayNs,
{
    /// Creates the input, polling every 10 ms while a press is held.
    pub fn new(button_up: BU, button_down: BD, remote_up: RU, remote_down: RD, delay: D) -> Self {
        Self {
            button_up,
            button_down,
            remote_up,
            remote_down,
            delay,
            poll_interval_ms: 10,
        }
    }

    /// Sets the poll interval used while waiting for release.
    pub fn with_poll_interval(mut self, poll_interval_ms: u32) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Reads all four lines once.
    fn read(&mut self) -> Result<InputEdge, ClockError> {
        let button_up = self.button_up.is_low().map_err(unavailable)?;
        let button_down = self.button_down.is_low().map_err(unavailable)?;
        let remote_up = self.remote_up.is_high().map_err(unavailable)?;
        let remote_down = self.remote_down.is_high().map_err(unavailable)?;

        Ok(combine_lines(button_up, button_down, remote_up, remote_down))
    }
}

impl<BU, BD, RU, RD, D> InputSource for ButtonInput<BU, BD, RU, RD, D>
where
    BU: InputPin,
    BD: InputPin,
    RU: InputPin,
    RD: InputPin,
    D: DelayNs,
{
    fn poll_edge(&mut self) -> Result<InputEdge, ClockError> {
        let mut seen = self.read()?;
        if seen == InputEdge::None {
            return Ok(InputEdge::None);
        }

        loop {
            self.delay.delay_ms(self.poll_interval_ms);
            match self.read()? {
                InputEdge::None => return Ok(seen),
                now => seen = merge(seen, now),
            }
        }
    }
}
