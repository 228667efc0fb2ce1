//! Periodic time-trigger task: the alert queue's producer.
//!
//! Once per period it snapshots the store and enqueues a copy of every
//! reminder, in store order. This redelivers everything unconditionally
//! each period - the appliance's stand-in scheduling policy, kept as-is
//! (no due-time comparison; see DESIGN.md).

use crate::alert_queue::enqueue_store;
use crate::config::TRIGGER_PERIOD_SECS;
use crate::{QueueSignal, SharedQueue, SharedStore};
use defmt::{debug, info, warn};
use embassy_time::{Duration, Ticker};

/// Lowest-priority producer: wakes once per minute.
#[embassy_executor::task]
pub async fn trigger_task(
    store: &'static SharedStore,
    queue: &'static SharedQueue,
    queue_ready: &'static QueueSignal,
) -> ! {
    info!("trigger: task started");

    let mut ticker = Ticker::every(Duration::from_secs(TRIGGER_PERIOD_SECS));

    loop {
        ticker.next().await;

        let (enqueued, dropped) = queue.lock(|q| {
            let mut q = q.borrow_mut();
            let drops_before = q.dropped();
            let count = store.lock(|s| {
                let s = s.borrow();
                enqueue_store(&s, &mut q);
                s.len()
            });
            (count, q.dropped() - drops_before)
        });

        if enqueued > 0 {
            queue_ready.signal(());
            debug!("trigger: enqueued {=usize} reminders", enqueued);
        }
        if dropped > 0 {
            warn!("trigger: queue full, dropped {=u32} deliveries", dropped);
        }
    }
}
