//! GPIO button input with debouncing.
//!
//! Two physical buttons (active-low with internal pull-up):
//!   - CONFIRM   - start / select / commit / dismiss an alert
//!   - SECONDARY - list reminders / snooze an alert
//!
//! Buttons are level-sampled once per poll cycle rather than edge-waited:
//! the menu task and the alert task both poll them on their own cadence,
//! and the shared [`Debouncer`] guarantees at most one accepted press per
//! input per debounce window across the two consumers.

use crate::config::BUTTON_DEBOUNCE_MS;
use crate::ui::debounce::Debouncer;
use defmt::debug;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::Instant;

const CONFIRM_ID: usize = 0;
const SECONDARY_ID: usize = 1;

/// The appliance's two buttons plus their shared debounce state.
pub struct Buttons<'d> {
    confirm: Input<'d>,
    secondary: Input<'d>,
    debounce: Debouncer<2>,
}

impl<'d> Buttons<'d> {
    pub fn new(confirm_pin: AnyPin, secondary_pin: AnyPin) -> Self {
        Self {
            confirm: Input::new(confirm_pin, Pull::Up),
            secondary: Input::new(secondary_pin, Pull::Up),
            debounce: Debouncer::new(BUTTON_DEBOUNCE_MS),
        }
    }

    /// Sample the confirm button; `true` once per accepted press.
    pub fn confirm_pressed(&mut self) -> bool {
        let active = self.confirm.is_low();
        self.sample(CONFIRM_ID, active, "confirm")
    }

    /// Sample the secondary (list / snooze) button.
    pub fn secondary_pressed(&mut self) -> bool {
        let active = self.secondary.is_low();
        self.sample(SECONDARY_ID, active, "secondary")
    }

    fn sample(&mut self, id: usize, active: bool, label: &str) -> bool {
        let pressed = self
            .debounce
            .press(id, active, Instant::now().as_millis());
        if pressed {
            debug!("button: {=str}", label);
        }
        pressed
    }
}
