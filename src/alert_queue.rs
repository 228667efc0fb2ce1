//! Bounded FIFO queue carrying reminder copies from the trigger to the
//! alert-escalation consumer, and snooze re-submissions back into itself.
//!
//! Enqueue is best-effort: a full queue drops the entry and bumps a
//! counter instead of blocking or failing hard. Delivery order is strict
//! FIFO, so reminders enqueued in one trigger tick come out in store
//! order.
//!
//! At runtime the queue sits behind a blocking mutex with a wakeup
//! `Signal` (see `main.rs`); on the host, tests drive it directly.

use crate::config::ALERT_QUEUE_DEPTH;
use crate::error::Error;
use crate::reminder::Reminder;
use crate::store::ReminderStore;
use heapless::Deque;

/// Bounded reminder-delivery queue, capacity [`ALERT_QUEUE_DEPTH`].
#[derive(Debug, Default)]
pub struct AlertQueue {
    entries: Deque<Reminder, ALERT_QUEUE_DEPTH>,
    dropped: u32,
}

impl AlertQueue {
    pub const fn new() -> Self {
        Self {
            entries: Deque::new(),
            dropped: 0,
        }
    }

    /// Enqueue a reminder copy, dropping it if the queue is full.
    ///
    /// A drop is not an operational failure; the [`Error::QueueFull`]
    /// return and the [`dropped`](Self::dropped) counter exist so callers
    /// can log it and tests can observe it.
    pub fn try_push(&mut self, reminder: Reminder) -> Result<(), Error> {
        match self.entries.push_back(reminder) {
            Ok(()) => Ok(()),
            Err(_) => {
                self.dropped = self.dropped.saturating_add(1);
                Err(Error::QueueFull)
            }
        }
    }

    /// Dequeue the oldest reminder, if any.
    pub fn pop(&mut self) -> Option<Reminder> {
        self.entries.pop_front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of enqueues dropped because the queue was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

/// Enqueue a copy of every stored reminder, in store order.
///
/// This is the trigger tick: redelivery of the whole store once per
/// period. It is the original appliance's stand-in scheduling policy -
/// there is no due-time comparison.
pub fn enqueue_store(store: &ReminderStore, queue: &mut AlertQueue) {
    for reminder in store.list() {
        let _ = queue.try_push(reminder.clone());
    }
}
