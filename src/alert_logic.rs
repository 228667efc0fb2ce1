//! Alert-escalation state machine.
//!
//! Pure decision logic for one reminder delivery; the embedded task in
//! `alert.rs` interprets it against the buzzer, display and queue. One
//! delivery walks `Idle → Escalating → AwaitingDecision → Idle`; the
//! only ways out of `AwaitingDecision` are a confirm or snooze press
//! (no timeout, no auto-dismiss) or the explicit [`cancel`] hook used by
//! test harnesses.
//!
//! [`cancel`]: Escalator::cancel

use crate::config::ESCALATION_PULSES;
use crate::reminder::Reminder;

/// Per-delivery escalation state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EscalationState {
    /// No active delivery; waiting on the queue.
    Idle,
    /// Running the buzzer pattern; `pulses_remaining` pulses left.
    Escalating { pulses_remaining: u8 },
    /// Pattern done; polling for a confirm/snooze decision.
    AwaitingDecision,
}

/// How a delivery ended.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Confirmed: the delivered copy is discarded.
    Dismissed,
    /// Snoozed: the adjusted copy should be re-enqueued.
    Snoozed(Reminder),
}

/// Drives one reminder delivery at a time.
#[derive(Debug, Default)]
pub struct Escalator {
    state: EscalationState,
    active: Option<Reminder>,
}

impl Default for EscalationState {
    fn default() -> Self {
        EscalationState::Idle
    }
}

impl Escalator {
    pub const fn new() -> Self {
        Self {
            state: EscalationState::Idle,
            active: None,
        }
    }

    pub fn state(&self) -> &EscalationState {
        &self.state
    }

    /// The reminder currently being delivered, if any.
    pub fn active(&self) -> Option<&Reminder> {
        self.active.as_ref()
    }

    /// Start a delivery. Only meaningful from `Idle`; an in-flight
    /// delivery is never replaced.
    pub fn begin(&mut self, reminder: Reminder) {
        if self.state == EscalationState::Idle {
            self.active = Some(reminder);
            self.state = EscalationState::Escalating {
                pulses_remaining: ESCALATION_PULSES,
            };
        }
    }

    /// Account for one step of the escalation pattern.
    ///
    /// Returns `true` while a pulse should fire this step; after the
    /// last pulse the machine moves to `AwaitingDecision` and this
    /// returns `false`.
    pub fn pulse(&mut self) -> bool {
        match self.state {
            EscalationState::Escalating { pulses_remaining } if pulses_remaining > 0 => {
                let left = pulses_remaining - 1;
                self.state = if left == 0 {
                    EscalationState::AwaitingDecision
                } else {
                    EscalationState::Escalating {
                        pulses_remaining: left,
                    }
                };
                true
            }
            _ => false,
        }
    }

    /// Apply one decision-poll sample.
    ///
    /// Confirm wins when both buttons register in the same cycle. Returns
    /// the delivery outcome once a decision fires, moving back to `Idle`;
    /// `None` while undecided or outside `AwaitingDecision`.
    pub fn decide(&mut self, confirm: bool, snooze: bool) -> Option<Outcome> {
        if self.state != EscalationState::AwaitingDecision {
            return None;
        }
        let outcome = if confirm {
            Outcome::Dismissed
        } else if snooze {
            let reminder = self.active.as_ref()?;
            Outcome::Snoozed(reminder.snoozed())
        } else {
            return None;
        };
        self.state = EscalationState::Idle;
        self.active = None;
        Some(outcome)
    }

    /// Abandon the current delivery without a decision.
    ///
    /// Test-harness hook only; the firmware never ends a delivery this
    /// way.
    pub fn cancel(&mut self) {
        self.state = EscalationState::Idle;
        self.active = None;
    }
}
