//! User interface subsystem - OLED display + buttons + joystick.
//!
//! The UI task steps the menu state machine once per poll cycle,
//! mutating the reminder store only through the machine's commit action,
//! and ends every cycle with exactly one render through the shared
//! display mutex.
//!
//! While the alert-escalation task holds the alerting condition the UI
//! cycle is suppressed entirely: no input handling, no rendering. The UI
//! never sets or clears that condition itself.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Buttons**: CONFIRM + SECONDARY tactile switches, level-sampled
//!   with debouncing
//! - **Joystick**: two-axis analog stick on the SAADC, decoded to one
//!   discrete direction per cycle

pub mod buttons;
pub mod debounce;
pub mod display;
pub mod joystick;
pub mod menu;

use crate::alert;
use crate::config::{ADC_MAX, UI_POLL_MS};
use crate::reminder::Reminder;
use crate::{SharedButtons, SharedDisplay, SharedStore};
use defmt::info;
use embassy_nrf::saadc::Saadc;
use embassy_time::{Duration, Ticker};
use self::joystick::Direction;
use self::menu::{MenuMachine, Screen};

/// Two-channel SAADC joystick reader (channel 0 = X, channel 1 = Y).
pub struct Joystick<'d> {
    adc: Saadc<'d, 2>,
}

impl<'d> Joystick<'d> {
    pub fn new(adc: Saadc<'d, 2>) -> Self {
        Self { adc }
    }

    /// Read both axes once and decode to a single direction.
    pub async fn direction(&mut self) -> Direction {
        let mut buf = [0i16; 2];
        self.adc.sample(&mut buf).await;
        joystick::decode(clamp_raw(buf[0]), clamp_raw(buf[1]))
    }
}

fn clamp_raw(raw: i16) -> u16 {
    raw.clamp(0, ADC_MAX as i16) as u16
}

/// Menu/UI task: fixed 100 ms poll cycle.
#[embassy_executor::task]
pub async fn ui_task(
    store: &'static SharedStore,
    buttons: &'static SharedButtons,
    display: &'static SharedDisplay,
    mut joystick: Joystick<'static>,
) -> ! {
    info!("ui: task started");

    let mut machine = MenuMachine::new();
    let mut ticker = Ticker::every(Duration::from_millis(UI_POLL_MS));

    loop {
        ticker.next().await;

        // Suspended while an alert owns the display and buttons.
        if alert::alert_active() {
            continue;
        }

        let direction = joystick.direction().await;
        let (confirm, secondary) = buttons.lock(|b| {
            let mut b = b.borrow_mut();
            (b.confirm_pressed(), b.secondary_pressed())
        });

        store.lock(|s| {
            machine.step(direction, confirm, secondary, &mut s.borrow_mut());
        });

        render(&machine, store, display).await;
    }
}

/// One render per cycle. Store data is copied out under its own lock
/// before the display mutex is taken, so neither lock is held across
/// the other's work.
async fn render(machine: &MenuMachine, store: &SharedStore, display: &SharedDisplay) {
    match machine.screen() {
        Screen::WaitStart => {
            let mut d = display.lock().await;
            display::draw_splash(&mut *d);
        }
        Screen::Home => {
            let mut d = display.lock().await;
            display::draw_home(&mut *d);
        }
        Screen::AddReminder => {
            let pending = machine.pending();
            let mut d = display.lock().await;
            display::draw_add(&mut *d, pending.hour, pending.minute);
        }
        Screen::ListReminders => {
            let mut visible: heapless::Vec<Reminder, 3> = heapless::Vec::new();
            store.lock(|s| {
                for reminder in s.borrow().list().iter().take(3) {
                    let _ = visible.push(reminder.clone());
                }
            });
            let mut d = display.lock().await;
            display::draw_list(&mut *d, &visible);
        }
    }
}
