//! Level-based press debouncing.
//!
//! Raw button state is sampled as a level (rest = inactive, pressed =
//! asserted). The debouncer turns that into single clean press events:
//! at most one accepted press per input per debounce window, extra
//! samples silently dropped. No event queue - a press that falls inside
//! the window is simply not an event.
//!
//! Per-input last-accepted timestamps are explicit owned state here, not
//! hidden statics, so the debouncer can be constructed fresh per test.

/// Debouncer over `N` independent inputs.
#[derive(Debug)]
pub struct Debouncer<const N: usize> {
    last_accepted: [Option<u64>; N],
    window_ms: u64,
}

impl<const N: usize> Debouncer<N> {
    pub const fn new(window_ms: u64) -> Self {
        Self {
            last_accepted: [None; N],
            window_ms,
        }
    }

    /// Feed one level sample for input `id` at time `now_ms`.
    ///
    /// Returns `true` when this sample registers as an accepted press:
    /// the level is asserted and at least the debounce window has passed
    /// since the last accepted press on the same input (a sample exactly
    /// one window later is accepted). A held button therefore registers
    /// again once per window, matching the appliance's repeat behavior.
    pub fn press(&mut self, id: usize, level_active: bool, now_ms: u64) -> bool {
        if !level_active {
            return false;
        }
        let accepted = match self.last_accepted[id] {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.window_ms,
        };
        if accepted {
            self.last_accepted[id] = Some(now_ms);
        }
        accepted
    }
}
