//! The `Reminder` value type and snooze arithmetic.

use crate::config::{MAX_NAME_LEN, SNOOZE_MINUTES};
use heapless::String;

/// A scheduled medication reminder.
///
/// Identity is positional within the store; a copy travelling through the
/// alert queue is independent of the stored entry, so snoozing a delivery
/// never touches the original.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reminder {
    /// Hour of day, 0..=23.
    pub hour: u8,
    /// Minute of hour, 0..=59.
    pub minute: u8,
    /// Medication name (truncated to [`MAX_NAME_LEN`] chars).
    pub name: String<MAX_NAME_LEN>,
}

impl Reminder {
    /// Create a reminder, normalizing the time and truncating the name.
    pub fn new(hour: u8, minute: u8, name: &str) -> Self {
        let mut n: String<MAX_NAME_LEN> = String::new();
        for c in name.chars().take(MAX_NAME_LEN) {
            let _ = n.push(c);
        }
        Self {
            hour: hour % 24,
            minute: minute % 60,
            name: n,
        }
    }

    /// The same reminder deferred by the snooze interval, with the minute
    /// wrapped into 0..=59 and the hour carried mod 24.
    pub fn snoozed(&self) -> Self {
        let mut minute = self.minute + SNOOZE_MINUTES;
        let mut hour = self.hour;
        if minute >= 60 {
            minute -= 60;
            hour = (hour + 1) % 24;
        }
        Self {
            hour,
            minute,
            name: self.name.clone(),
        }
    }
}
