//! Test-only library interface for medminder.
//!
//! This module exposes the pure logic modules that can be tested on the
//! host (no embedded hardware required): reminder arithmetic, the
//! bounded store and alert queue, input debouncing, joystick decoding,
//! the menu state machine and the alert-escalation engine.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! behind the `embedded` feature. This lib.rs provides a separate entry
//! point for host-based testing.

#![cfg_attr(not(test), no_std)]

pub mod alert_logic;
pub mod alert_queue;
pub mod config;
pub mod error;
pub mod reminder;
pub mod store;

pub mod ui {
    pub mod debounce;
    pub mod joystick;
    pub mod menu;
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::alert_logic::{EscalationState, Escalator, Outcome};
    use super::alert_queue::{enqueue_store, AlertQueue};
    use super::config::{
        AXIS_HIGH_THRESHOLD, AXIS_LOW_THRESHOLD, BUTTON_DEBOUNCE_MS, DEFAULT_MED_NAME,
        ESCALATION_PULSES, MAX_REMINDERS,
    };
    use super::error::Error;
    use super::reminder::Reminder;
    use super::store::ReminderStore;
    use super::ui::debounce::Debouncer;
    use super::ui::joystick::{decode, Direction};
    use super::ui::menu::{MenuMachine, MenuMode, Screen};

    const CENTER: u16 = 2048;

    fn full_store() -> ReminderStore {
        let mut store = ReminderStore::new();
        for i in 0..MAX_REMINDERS {
            store
                .add(Reminder::new(i as u8, 0, "PILL"))
                .expect("store should accept up to capacity");
        }
        store
    }

    // ════════════════════════════════════════════════════════════════════════
    // Debounced Input Reader Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn debounce_first_press_accepted() {
        let mut deb: Debouncer<2> = Debouncer::new(BUTTON_DEBOUNCE_MS);
        assert!(deb.press(0, true, 0));
    }

    #[test]
    fn debounce_inactive_level_never_registers() {
        let mut deb: Debouncer<2> = Debouncer::new(BUTTON_DEBOUNCE_MS);
        assert!(!deb.press(0, false, 0));
        assert!(!deb.press(0, false, 10_000));
        // Releasing does not consume the window either.
        assert!(deb.press(0, true, 10_001));
    }

    #[test]
    fn debounce_second_press_inside_window_dropped() {
        let mut deb: Debouncer<2> = Debouncer::new(BUTTON_DEBOUNCE_MS);
        assert!(deb.press(0, true, 1000));
        // Anywhere inside the window: at most one accepted press.
        assert!(!deb.press(0, true, 1001));
        assert!(!deb.press(0, true, 1000 + BUTTON_DEBOUNCE_MS - 1));
    }

    #[test]
    fn debounce_window_boundary_is_accepted() {
        // W is the *minimum* interval at which two presses both register.
        let mut deb: Debouncer<2> = Debouncer::new(BUTTON_DEBOUNCE_MS);
        assert!(deb.press(0, true, 1000));
        assert!(deb.press(0, true, 1000 + BUTTON_DEBOUNCE_MS));
    }

    #[test]
    fn debounce_held_button_reregisters_once_per_window() {
        let mut deb: Debouncer<1> = Debouncer::new(100);
        let mut accepted = 0;
        // Held for 500 ms, sampled every 10 ms.
        for now in (0..500).step_by(10) {
            if deb.press(0, true, now) {
                accepted += 1;
            }
        }
        assert_eq!(accepted, 5);
    }

    #[test]
    fn debounce_inputs_are_independent() {
        let mut deb: Debouncer<2> = Debouncer::new(BUTTON_DEBOUNCE_MS);
        assert!(deb.press(0, true, 1000));
        // A press on input 1 right after is unaffected by input 0's window.
        assert!(deb.press(1, true, 1001));
        assert!(!deb.press(0, true, 1002));
        assert!(!deb.press(1, true, 1002));
    }

    // ════════════════════════════════════════════════════════════════════════
    // Directional Decoder Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn decode_center_is_none() {
        assert_eq!(decode(CENTER, CENTER), Direction::None);
    }

    #[test]
    fn decode_axis_extremes() {
        assert_eq!(decode(CENTER, 0), Direction::Up);
        assert_eq!(decode(CENTER, 4095), Direction::Down);
        assert_eq!(decode(0, CENTER), Direction::Right);
        assert_eq!(decode(4095, CENTER), Direction::Left);
    }

    #[test]
    fn decode_dead_zone_band() {
        // Thresholds themselves are inside the dead zone (strict comparisons).
        assert_eq!(decode(AXIS_LOW_THRESHOLD, AXIS_LOW_THRESHOLD), Direction::None);
        assert_eq!(
            decode(AXIS_HIGH_THRESHOLD, AXIS_HIGH_THRESHOLD),
            Direction::None
        );
        // One count past a threshold is an extreme.
        assert_eq!(decode(CENTER, AXIS_LOW_THRESHOLD - 1), Direction::Up);
        assert_eq!(decode(CENTER, AXIS_HIGH_THRESHOLD + 1), Direction::Down);
        assert_eq!(decode(AXIS_LOW_THRESHOLD - 1, CENTER), Direction::Right);
        assert_eq!(decode(AXIS_HIGH_THRESHOLD + 1, CENTER), Direction::Left);
    }

    #[test]
    fn decode_dual_extreme_resolves_to_vertical() {
        // Vertical axis is checked first; this tie-break is observable.
        assert_eq!(decode(0, 0), Direction::Up);
        assert_eq!(decode(4095, 0), Direction::Up);
        assert_eq!(decode(0, 4095), Direction::Down);
        assert_eq!(decode(4095, 4095), Direction::Down);
    }

    #[test]
    fn decode_is_total_over_sampled_grid() {
        for x in (0..=4095u16).step_by(64) {
            for y in (0..=4095u16).step_by(64) {
                let d = decode(x, y);
                // Exactly one of five values, and vertical extremes always win.
                if y < AXIS_LOW_THRESHOLD {
                    assert_eq!(d, Direction::Up);
                } else if y > AXIS_HIGH_THRESHOLD {
                    assert_eq!(d, Direction::Down);
                } else if x < AXIS_LOW_THRESHOLD {
                    assert_eq!(d, Direction::Right);
                } else if x > AXIS_HIGH_THRESHOLD {
                    assert_eq!(d, Direction::Left);
                } else {
                    assert_eq!(d, Direction::None);
                }
            }
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Reminder Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn reminder_new_normalizes_time() {
        let r = Reminder::new(25, 61, "ASPIRIN");
        assert_eq!(r.hour, 1);
        assert_eq!(r.minute, 1);
    }

    #[test]
    fn reminder_new_truncates_name() {
        let r = Reminder::new(8, 0, "ACETYLSALICYLIC ACID");
        assert_eq!(r.name.as_str(), "ACETYLSALICYLIC");
        assert_eq!(r.name.len(), 15);
    }

    #[test]
    fn snooze_defers_five_minutes() {
        let r = Reminder::new(8, 30, "ASPIRIN");
        let s = r.snoozed();
        assert_eq!((s.hour, s.minute), (8, 35));
        assert_eq!(s.name, r.name);
    }

    #[test]
    fn snooze_carries_hour_on_minute_wrap() {
        let s = Reminder::new(10, 57, "PILL").snoozed();
        assert_eq!((s.hour, s.minute), (11, 2));
    }

    #[test]
    fn snooze_wraps_midnight() {
        let s = Reminder::new(23, 58, "PILL").snoozed();
        assert_eq!((s.hour, s.minute), (0, 3));
    }

    #[test]
    fn snooze_does_not_mutate_original() {
        let r = Reminder::new(8, 30, "ASPIRIN");
        let _ = r.snoozed();
        assert_eq!((r.hour, r.minute), (8, 30));
    }

    // ════════════════════════════════════════════════════════════════════════
    // Reminder Store Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn store_preserves_add_order() {
        let mut store = ReminderStore::new();
        store.add(Reminder::new(8, 0, "A")).unwrap();
        store.add(Reminder::new(9, 0, "B")).unwrap();
        store.add(Reminder::new(7, 0, "C")).unwrap();

        let names: Vec<&str> = store.list().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn store_rejects_sixth_add_without_mutation() {
        let mut store = full_store();
        assert_eq!(store.len(), MAX_REMINDERS);

        let result = store.add(Reminder::new(23, 59, "OVERFLOW"));
        assert_eq!(result, Err(Error::CapacityExceeded));
        assert_eq!(store.len(), MAX_REMINDERS);
        assert!(store.list().iter().all(|r| r.name.as_str() != "OVERFLOW"));
    }

    #[test]
    fn store_starts_empty() {
        let store = ReminderStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.list().is_empty());
    }

    // ════════════════════════════════════════════════════════════════════════
    // Alert Queue Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn queue_is_strict_fifo() {
        let mut queue = AlertQueue::new();
        queue.try_push(Reminder::new(8, 0, "A")).unwrap();
        queue.try_push(Reminder::new(9, 0, "B")).unwrap();
        queue.try_push(Reminder::new(7, 0, "C")).unwrap();

        assert_eq!(queue.pop().unwrap().name.as_str(), "A");
        assert_eq!(queue.pop().unwrap().name.as_str(), "B");
        assert_eq!(queue.pop().unwrap().name.as_str(), "C");
        assert!(queue.pop().is_none());
    }

    #[test]
    fn queue_drops_on_full_and_counts() {
        let mut queue = AlertQueue::new();
        for i in 0..5 {
            queue.try_push(Reminder::new(i, 0, "PILL")).unwrap();
        }
        assert_eq!(queue.dropped(), 0);

        let result = queue.try_push(Reminder::new(23, 0, "DROPPED"));
        assert_eq!(result, Err(Error::QueueFull));
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.dropped(), 1);

        // The queued entries are untouched.
        assert_eq!(queue.pop().unwrap().hour, 0);
    }

    #[test]
    fn enqueue_store_copies_in_store_order() {
        let mut store = ReminderStore::new();
        store.add(Reminder::new(8, 0, "A")).unwrap();
        store.add(Reminder::new(9, 0, "B")).unwrap();
        store.add(Reminder::new(7, 0, "C")).unwrap();

        let mut queue = AlertQueue::new();
        enqueue_store(&store, &mut queue);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop().unwrap().name.as_str(), "A");
        assert_eq!(queue.pop().unwrap().name.as_str(), "B");
        assert_eq!(queue.pop().unwrap().name.as_str(), "C");
        // The store still owns its entries.
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn enqueue_store_is_best_effort_when_queue_nearly_full() {
        let store = full_store();

        let mut queue = AlertQueue::new();
        queue.try_push(Reminder::new(12, 0, "OLD")).unwrap();
        queue.try_push(Reminder::new(12, 1, "OLD")).unwrap();

        enqueue_store(&store, &mut queue);

        // Only three of five fit; two were dropped, nothing blocked.
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.dropped(), 2);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Menu State Machine Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn menu_starts_in_wait_start() {
        let machine = MenuMachine::new();
        assert_eq!(machine.screen(), Screen::WaitStart);
        assert_eq!(machine.pending().hour, 12);
        assert_eq!(machine.pending().minute, 0);
    }

    #[test]
    fn menu_wait_start_only_confirm_advances() {
        let mut store = ReminderStore::new();
        let mut machine = MenuMachine::new();

        machine.step(Direction::Up, false, true, &mut store);
        assert_eq!(machine.screen(), Screen::WaitStart);

        machine.step(Direction::None, true, false, &mut store);
        assert_eq!(machine.screen(), Screen::Home);
    }

    #[test]
    fn menu_home_routes_to_add_and_list() {
        let mut store = ReminderStore::new();
        let mut machine = MenuMachine::new();
        machine.step(Direction::None, true, false, &mut store); // → Home

        machine.step(Direction::None, false, true, &mut store);
        assert_eq!(machine.screen(), Screen::ListReminders);

        machine.step(Direction::None, true, false, &mut store); // back Home
        machine.step(Direction::None, true, false, &mut store);
        assert_eq!(machine.screen(), Screen::AddReminder);
    }

    #[test]
    fn menu_home_confirm_wins_over_secondary() {
        let mut store = ReminderStore::new();
        let mut machine = MenuMachine::new();
        machine.step(Direction::None, true, false, &mut store); // → Home

        machine.step(Direction::None, true, true, &mut store);
        assert_eq!(machine.screen(), Screen::AddReminder);
    }

    fn machine_on_add(store: &mut ReminderStore) -> MenuMachine {
        let mut machine = MenuMachine::new();
        machine.step(Direction::None, true, false, store); // → Home
        machine.step(Direction::None, true, false, store); // → AddReminder
        machine
    }

    #[test]
    fn menu_add_adjusts_hour_and_minute_with_wrap() {
        let mut store = ReminderStore::new();
        let mut machine = machine_on_add(&mut store);

        machine.step(Direction::Up, false, false, &mut store);
        assert_eq!(machine.pending().hour, 13);
        machine.step(Direction::Down, false, false, &mut store);
        machine.step(Direction::Down, false, false, &mut store);
        assert_eq!(machine.pending().hour, 11);

        machine.step(Direction::Left, false, false, &mut store);
        assert_eq!(machine.pending().minute, 59);
        machine.step(Direction::Right, false, false, &mut store);
        assert_eq!(machine.pending().minute, 0);

        // Hour wrap 23 → 0.
        for _ in 0..13 {
            machine.step(Direction::Up, false, false, &mut store);
        }
        assert_eq!(machine.pending().hour, 0);
    }

    #[test]
    fn menu_add_commit_appends_and_returns_home() {
        let mut store = ReminderStore::new();
        let mut machine = machine_on_add(&mut store);

        machine.step(Direction::Up, false, false, &mut store); // 13:00
        machine.step(Direction::None, true, false, &mut store); // commit

        assert_eq!(machine.screen(), Screen::Home);
        assert_eq!(store.len(), 1);
        let r = &store.list()[0];
        assert_eq!((r.hour, r.minute), (13, 0));
        assert_eq!(r.name.as_str(), DEFAULT_MED_NAME);

        // Pending resets for the next add.
        assert_eq!(machine.pending().hour, 12);
        assert_eq!(machine.pending().minute, 0);
    }

    #[test]
    fn menu_commit_when_full_stays_in_add() {
        let mut store = full_store();
        let mut machine = machine_on_add(&mut store);

        machine.step(Direction::Up, false, false, &mut store); // 13:00
        machine.step(Direction::None, true, false, &mut store); // commit fails

        assert_eq!(machine.screen(), Screen::AddReminder);
        assert_eq!(store.len(), MAX_REMINDERS);
        // Pending edit is retained.
        assert_eq!(machine.pending().hour, 13);
    }

    #[test]
    fn menu_list_confirm_returns_home() {
        let mut store = ReminderStore::new();
        let mut machine = MenuMachine::new();
        machine.step(Direction::None, true, false, &mut store); // → Home
        machine.step(Direction::None, false, true, &mut store); // → List

        machine.step(Direction::Down, false, false, &mut store);
        assert_eq!(machine.screen(), Screen::ListReminders);

        machine.step(Direction::None, true, false, &mut store);
        assert_eq!(machine.screen(), Screen::Home);
    }

    #[test]
    fn menu_mode_derivation() {
        assert_eq!(MenuMode::derive(Screen::WaitStart, false), MenuMode::WaitStart);
        assert_eq!(MenuMode::derive(Screen::Home, false), MenuMode::Home);
        assert_eq!(
            MenuMode::derive(Screen::AddReminder, false),
            MenuMode::AddReminder
        );
        assert_eq!(
            MenuMode::derive(Screen::ListReminders, false),
            MenuMode::ListReminders
        );
        // Alerting overrides whatever screen the menu holds.
        assert_eq!(MenuMode::derive(Screen::Home, true), MenuMode::Alerting);
        assert_eq!(
            MenuMode::derive(Screen::AddReminder, true),
            MenuMode::Alerting
        );
    }

    // ════════════════════════════════════════════════════════════════════════
    // Alert Escalation Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn escalator_starts_idle() {
        let esc = Escalator::new();
        assert_eq!(*esc.state(), EscalationState::Idle);
        assert!(esc.active().is_none());
    }

    #[test]
    fn escalator_runs_fixed_pulse_pattern() {
        let mut esc = Escalator::new();
        esc.begin(Reminder::new(8, 30, "ASPIRIN"));
        assert_eq!(
            *esc.state(),
            EscalationState::Escalating {
                pulses_remaining: ESCALATION_PULSES
            }
        );

        let mut pulses = 0;
        while esc.pulse() {
            pulses += 1;
        }
        assert_eq!(pulses, ESCALATION_PULSES);
        assert_eq!(*esc.state(), EscalationState::AwaitingDecision);
    }

    #[test]
    fn escalator_ignores_decisions_during_pattern() {
        let mut esc = Escalator::new();
        esc.begin(Reminder::new(8, 30, "ASPIRIN"));
        assert!(esc.decide(true, true).is_none());
        assert!(matches!(
            *esc.state(),
            EscalationState::Escalating { .. }
        ));
    }

    #[test]
    fn escalator_waits_indefinitely_without_decision() {
        let mut esc = Escalator::new();
        esc.begin(Reminder::new(8, 30, "ASPIRIN"));
        while esc.pulse() {}

        for _ in 0..1000 {
            assert!(esc.decide(false, false).is_none());
        }
        assert_eq!(*esc.state(), EscalationState::AwaitingDecision);
    }

    #[test]
    fn escalator_confirm_dismisses() {
        let mut esc = Escalator::new();
        esc.begin(Reminder::new(8, 30, "ASPIRIN"));
        while esc.pulse() {}

        assert_eq!(esc.decide(true, false), Some(Outcome::Dismissed));
        assert_eq!(*esc.state(), EscalationState::Idle);
        assert!(esc.active().is_none());
    }

    #[test]
    fn escalator_snooze_defers_the_copy() {
        let mut esc = Escalator::new();
        esc.begin(Reminder::new(8, 30, "ASPIRIN"));
        while esc.pulse() {}

        match esc.decide(false, true) {
            Some(Outcome::Snoozed(r)) => {
                assert_eq!((r.hour, r.minute), (8, 35));
                assert_eq!(r.name.as_str(), "ASPIRIN");
            }
            other => panic!("expected snooze outcome, got {:?}", other),
        }
        assert_eq!(*esc.state(), EscalationState::Idle);
    }

    #[test]
    fn escalator_confirm_wins_when_both_pressed() {
        let mut esc = Escalator::new();
        esc.begin(Reminder::new(8, 30, "ASPIRIN"));
        while esc.pulse() {}

        assert_eq!(esc.decide(true, true), Some(Outcome::Dismissed));
    }

    #[test]
    fn escalator_begin_does_not_replace_active_delivery() {
        let mut esc = Escalator::new();
        esc.begin(Reminder::new(8, 30, "FIRST"));
        esc.begin(Reminder::new(9, 0, "SECOND"));
        assert_eq!(esc.active().unwrap().name.as_str(), "FIRST");
    }

    #[test]
    fn escalator_cancel_hook_ends_delivery_without_outcome() {
        // Harness-only escape hatch; firmware never calls it.
        let mut esc = Escalator::new();
        esc.begin(Reminder::new(8, 30, "ASPIRIN"));
        while esc.pulse() {}

        esc.cancel();
        assert_eq!(*esc.state(), EscalationState::Idle);
        assert!(esc.decide(true, false).is_none());
    }
}
