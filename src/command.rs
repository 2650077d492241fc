//! Command-based control for the mode controller.

use crate::types::{DisplayMode, InputEdge};

/// Actions for controlling the display.
///
/// Button edges map onto these through [`ModeAction::from_edge`]; a remote
/// control surface can also send them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeAction {
    /// Switch to the next mode.
    Next,
    /// Switch to the previous mode.
    Previous,
    /// Switch to a given mode.
    Select(DisplayMode),
    /// Mode-specific action: set time, set date or run the self-test.
    Enter,
}

impl ModeAction {
    /// The action a button edge triggers, if any.
    pub fn from_edge(edge: InputEdge) -> Option<Self> {
        match edge {
            InputEdge::None => None,
            InputEdge::Up => Some(ModeAction::Next),
            InputEdge::Down => Some(ModeAction::Previous),
            InputEdge::Both => Some(ModeAction::Enter),
        }
    }
}
