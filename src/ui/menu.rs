//! Menu state machine.
//!
//! Pure per-poll-cycle logic: the embedded UI task feeds it one
//! direction and up to two button samples per 100 ms cycle and renders
//! whatever screen it lands on. The machine never enters or leaves the
//! alerting condition - that belongs to the alert-escalation task, which
//! simply suppresses the whole UI cycle while an alert is active.

use crate::config::DEFAULT_MED_NAME;
use crate::reminder::Reminder;
use crate::store::ReminderStore;
use crate::ui::joystick::Direction;

/// Screens the menu itself can be on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Splash / "press confirm to start".
    WaitStart,
    /// Top menu: add or list.
    Home,
    /// Time editor for a new reminder.
    AddReminder,
    /// First three stored reminders.
    ListReminders,
}

/// Process-wide mode: the menu screen, overridden by an active alert.
///
/// Exactly one mode is active at any instant. Only the alert-escalation
/// task sets or clears the alerting condition; everyone else derives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuMode {
    WaitStart,
    Home,
    AddReminder,
    ListReminders,
    Alerting,
}

impl MenuMode {
    pub fn derive(screen: Screen, alerting: bool) -> Self {
        if alerting {
            return MenuMode::Alerting;
        }
        match screen {
            Screen::WaitStart => MenuMode::WaitStart,
            Screen::Home => MenuMode::Home,
            Screen::AddReminder => MenuMode::AddReminder,
            Screen::ListReminders => MenuMode::ListReminders,
        }
    }
}

/// Transient time being edited on the AddReminder screen.
///
/// Discarded (reset to noon) on a successful commit; retained while the
/// screen stays up, including after a failed commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PendingSelection {
    pub hour: u8,
    pub minute: u8,
}

impl PendingSelection {
    pub const fn new() -> Self {
        Self {
            hour: 12,
            minute: 0,
        }
    }

    /// Apply one joystick event: Up/Down step the hour mod 24,
    /// Left/Right step the minute mod 60.
    fn adjust(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.hour = (self.hour + 1) % 24,
            Direction::Down => self.hour = (self.hour + 23) % 24,
            Direction::Right => self.minute = (self.minute + 1) % 60,
            Direction::Left => self.minute = (self.minute + 59) % 60,
            Direction::None => {}
        }
    }
}

impl Default for PendingSelection {
    fn default() -> Self {
        Self::new()
    }
}

/// The menu state machine, stepped once per UI poll cycle.
#[derive(Debug)]
pub struct MenuMachine {
    screen: Screen,
    pending: PendingSelection,
}

impl MenuMachine {
    pub const fn new() -> Self {
        Self {
            screen: Screen::WaitStart,
            pending: PendingSelection::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn pending(&self) -> PendingSelection {
        self.pending
    }

    /// Advance one poll cycle.
    ///
    /// `confirm` and `secondary` are this cycle's accepted (debounced)
    /// presses; `direction` is this cycle's joystick event. Store
    /// mutation happens only here, on an AddReminder commit.
    ///
    /// Commit-failure policy: when the store is full the machine stays
    /// on AddReminder with the pending time retained.
    pub fn step(
        &mut self,
        direction: Direction,
        confirm: bool,
        secondary: bool,
        store: &mut ReminderStore,
    ) {
        match self.screen {
            Screen::WaitStart => {
                if confirm {
                    self.screen = Screen::Home;
                }
            }
            Screen::Home => {
                if confirm {
                    self.screen = Screen::AddReminder;
                } else if secondary {
                    self.screen = Screen::ListReminders;
                }
            }
            Screen::AddReminder => {
                self.pending.adjust(direction);
                if confirm {
                    let reminder =
                        Reminder::new(self.pending.hour, self.pending.minute, DEFAULT_MED_NAME);
                    if store.add(reminder).is_ok() {
                        self.pending = PendingSelection::new();
                        self.screen = Screen::Home;
                    }
                }
            }
            Screen::ListReminders => {
                if confirm {
                    self.screen = Screen::Home;
                }
            }
        }
    }
}

impl Default for MenuMachine {
    fn default() -> Self {
        Self::new()
    }
}
