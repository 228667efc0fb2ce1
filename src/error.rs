//! Unified error type for medminder.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! `defmt::Format` is feature-gated so the pure-logic library builds on
//! the host without defmt.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The reminder store is full; the add was rejected without mutation.
    CapacityExceeded,

    /// The alert queue is full; the enqueue was dropped (best-effort).
    /// Never fatal - observable through the queue's drop counter.
    QueueFull,
}
