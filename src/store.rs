//! Fixed-capacity ordered collection of scheduled reminders.
//!
//! The store itself is plain data; at runtime it lives behind a blocking
//! mutex in `main.rs` so that the menu's commit, the UI's render and the
//! trigger's snapshot never interleave mid-mutation.

use crate::config::MAX_REMINDERS;
use crate::error::Error;
use crate::reminder::Reminder;
use heapless::Vec;

/// Ordered reminder collection, capacity [`MAX_REMINDERS`].
///
/// Reminders are append-only: there is no edit or remove operation.
#[derive(Debug, Default)]
pub struct ReminderStore {
    entries: Vec<Reminder, MAX_REMINDERS>,
}

impl ReminderStore {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a reminder.
    ///
    /// Fails with [`Error::CapacityExceeded`] when the store is full,
    /// leaving the store unchanged.
    pub fn add(&mut self, reminder: Reminder) -> Result<(), Error> {
        self.entries
            .push(reminder)
            .map_err(|_| Error::CapacityExceeded)
    }

    /// Read-only view of the stored reminders, in add order.
    pub fn list(&self) -> &[Reminder] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
