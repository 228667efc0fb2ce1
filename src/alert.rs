//! Alert-escalation task: sole consumer of the alert queue, sole owner
//! of the alerting flag, and driver of the buzzer pattern.
//!
//! Runs on the interrupt executor so an arriving reminder preempts the
//! UI poll loop. Its only unbounded wait is the queue pop; once a
//! delivery starts, the only way out is a confirm or snooze press.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::alert_logic::{Escalator, Outcome};
use crate::config::{ALERT_POLL_MS, PULSE_GAP_MS, PULSE_MS};
use crate::reminder::Reminder;
use crate::ui::display;
use crate::{QueueSignal, SharedButtons, SharedDisplay, SharedQueue};
use defmt::{info, warn};
use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive};
use embassy_time::{Duration, Timer};

/// Alerting condition. Written only by [`alert_task`]; everyone else
/// reads through [`alert_active`].
static ALERTING: AtomicBool = AtomicBool::new(false);

/// Whether an alert delivery is currently in progress.
pub fn alert_active() -> bool {
    ALERTING.load(Ordering::Relaxed)
}

/// Piezo buzzer on a plain GPIO.
pub struct Buzzer<'d> {
    pin: Output<'d>,
}

impl<'d> Buzzer<'d> {
    pub fn new(pin: AnyPin) -> Self {
        Self {
            pin: Output::new(pin, Level::Low, OutputDrive::Standard),
        }
    }

    /// Drive the buzzer for `ms` milliseconds.
    pub async fn pulse(&mut self, ms: u64) {
        self.pin.set_high();
        Timer::after(Duration::from_millis(ms)).await;
        self.pin.set_low();
    }
}

/// One delivery at a time: pop, escalate, await decision, resolve.
#[embassy_executor::task]
pub async fn alert_task(
    queue: &'static SharedQueue,
    queue_ready: &'static QueueSignal,
    buttons: &'static SharedButtons,
    display: &'static SharedDisplay,
    mut buzzer: Buzzer<'static>,
) -> ! {
    info!("alert: task started");

    let mut escalator = Escalator::new();

    loop {
        let reminder = next_delivery(queue, queue_ready).await;
        info!(
            "alert: delivering {=str} at {=u8:02}:{=u8:02}",
            reminder.name.as_str(),
            reminder.hour,
            reminder.minute
        );

        ALERTING.store(true, Ordering::Relaxed);
        escalator.begin(reminder);

        // Escalation pattern: pulse, pause, render.
        while escalator.pulse() {
            buzzer.pulse(PULSE_MS).await;
            Timer::after(Duration::from_millis(PULSE_GAP_MS)).await;
            render_alert(&escalator, display).await;
        }

        // Decision loop: render + poll until confirm or snooze fires.
        loop {
            render_alert(&escalator, display).await;

            let (confirm, snooze) = buttons.lock(|b| {
                let mut b = b.borrow_mut();
                (b.confirm_pressed(), b.secondary_pressed())
            });

            match escalator.decide(confirm, snooze) {
                Some(Outcome::Dismissed) => {
                    info!("alert: confirmed");
                    break;
                }
                Some(Outcome::Snoozed(deferred)) => {
                    info!(
                        "alert: snoozed to {=u8:02}:{=u8:02}",
                        deferred.hour, deferred.minute
                    );
                    enqueue_snoozed(queue, queue_ready, deferred);
                    break;
                }
                None => Timer::after(Duration::from_millis(ALERT_POLL_MS)).await,
            }
        }

        ALERTING.store(false, Ordering::Relaxed);
    }
}

/// Block (on the wakeup signal) until a reminder can be popped.
async fn next_delivery(queue: &SharedQueue, queue_ready: &QueueSignal) -> Reminder {
    loop {
        if let Some(reminder) = queue.lock(|q| q.borrow_mut().pop()) {
            return reminder;
        }
        queue_ready.wait().await;
    }
}

/// Best-effort re-enqueue of a snoozed copy.
fn enqueue_snoozed(queue: &SharedQueue, queue_ready: &QueueSignal, reminder: Reminder) {
    let full = queue.lock(|q| {
        let mut q = q.borrow_mut();
        let res = q.try_push(reminder);
        (res.is_err(), q.dropped())
    });
    match full {
        (true, dropped) => warn!("alert: queue full, snooze dropped ({=u32} total)", dropped),
        (false, _) => queue_ready.signal(()),
    }
}

async fn render_alert(escalator: &Escalator, display: &SharedDisplay) {
    if let Some(reminder) = escalator.active() {
        let mut d = display.lock().await;
        display::draw_alert(&mut *d, reminder.name.as_str());
    }
}
