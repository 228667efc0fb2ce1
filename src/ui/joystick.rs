//! Directional decoding of the two-axis analog joystick.
//!
//! Two independent 12-bit channels (0..=4095, center ≈2048). A dead-zone
//! band between the low and high thresholds yields no direction; values
//! beyond a threshold are an axis extreme.
//!
//! Tie-break: the vertical axis is checked before the horizontal axis,
//! so a simultaneous dual-extreme reading always resolves to Up or Down.
//! This order is observable behavior - keep it.

use crate::config::{AXIS_HIGH_THRESHOLD, AXIS_LOW_THRESHOLD};

/// One discrete joystick direction per poll cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    None,
    Up,
    Down,
    Left,
    Right,
}

/// Decode one pair of raw axis readings into a direction.
///
/// Axis mapping matches the appliance wiring: low Y is stick-up, low X
/// is stick-right.
pub fn decode(x: u16, y: u16) -> Direction {
    // Vertical first (documented tie-break).
    if y < AXIS_LOW_THRESHOLD {
        Direction::Up
    } else if y > AXIS_HIGH_THRESHOLD {
        Direction::Down
    } else if x < AXIS_LOW_THRESHOLD {
        Direction::Right
    } else if x > AXIS_HIGH_THRESHOLD {
        Direction::Left
    } else {
        Direction::None
    }
}
