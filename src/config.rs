//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and capacity
//! constants live here so they can be tuned in one place.

// Reminders

/// Maximum number of stored reminders.
pub const MAX_REMINDERS: usize = 5;

/// Maximum medication-name length (characters).
pub const MAX_NAME_LEN: usize = 15;

/// Name given to reminders committed from the AddReminder screen.
/// The screen edits the time only; naming is a future UI extension.
pub const DEFAULT_MED_NAME: &str = "MEDICINE";

/// Minutes a snoozed reminder is deferred by.
pub const SNOOZE_MINUTES: u8 = 5;

// Alert queue

/// Depth of the bounded reminder-delivery queue.
pub const ALERT_QUEUE_DEPTH: usize = 5;

// Timing

/// Trigger tick period (seconds) - every stored reminder is redelivered
/// once per period.
pub const TRIGGER_PERIOD_SECS: u64 = 60;

/// UI poll cycle period (ms): one joystick read plus up to two button
/// samples per cycle, then one render.
pub const UI_POLL_MS: u64 = 100;

/// Decision poll period (ms) while an alert waits for confirm/snooze.
pub const ALERT_POLL_MS: u64 = 100;

/// Number of buzzer pulses in the escalation pattern.
pub const ESCALATION_PULSES: u8 = 5;

/// Duration of one buzzer pulse (ms).
pub const PULSE_MS: u64 = 100;

/// Pause between buzzer pulses (ms).
pub const PULSE_GAP_MS: u64 = 200;

/// Button debounce window (ms). A press re-sampled inside the window
/// does not register again, even if the button is still held.
pub const BUTTON_DEBOUNCE_MS: u64 = 200;

// Joystick

/// Full-scale raw ADC reading (12-bit).
pub const ADC_MAX: u16 = 4095;

/// Readings below this count as the low extreme of an axis.
pub const AXIS_LOW_THRESHOLD: u16 = 1000;

/// Readings above this count as the high extreme of an axis.
pub const AXIS_HIGH_THRESHOLD: u16 = 4000;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs` via type aliases.  Adjust for your custom PCB.
//
//   Button CONFIRM   → P0.11
//   Button SECONDARY → P0.12
//   Buzzer           → P0.06
//   Joystick X       → AIN0 (P0.02)
//   Joystick Y       → AIN1 (P0.03)
//   I²C SDA          → P0.26
//   I²C SCL          → P0.27
