//! medminder - embedded entry point (nRF52840).
//!
//! Three tasks, priority-ordered:
//!   - **alert escalation** on an interrupt executor (preempts the
//!     thread-mode executor so an arriving reminder always beats the UI
//!     poll loop),
//!   - **menu/UI** and **time trigger** on the thread-mode executor
//!     (both purely periodic; the trigger wakes once a minute).
//!
//! Shared state lives in statics at the crate root, single-owner where
//! the design demands it:
//!   - reminder store: blocking mutex + RefCell (writer: menu commit;
//!     readers: render, trigger snapshot),
//!   - alert queue: blocking mutex + RefCell with a wakeup `Signal`,
//!   - alerting flag: atomic owned by the alert task (`alert.rs`),
//!   - display: async mutex, acquire-render-release only,
//!   - buttons: blocking mutex (menu and alert poll the same pair, never
//!     concurrently thanks to the alerting flag).

#![no_std]
#![no_main]

mod alert;
mod alert_logic;
mod alert_queue;
mod config;
mod error;
mod reminder;
mod store;
mod trigger;
mod ui;

use core::cell::RefCell;

use defmt::{info, unwrap};
use defmt_rtt as _;
use panic_probe as _;

use embassy_executor::{Executor, InterruptExecutor};
use embassy_nrf::gpio::Pin as _;
use embassy_nrf::interrupt;
use embassy_nrf::interrupt::{InterruptExt, Priority};
use embassy_nrf::{bind_interrupts, peripherals, saadc, twim};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex as BlockingMutex;
use embassy_sync::mutex::Mutex as AsyncMutex;
use embassy_sync::signal::Signal;
use static_cell::StaticCell;

use alert_queue::AlertQueue;
use store::ReminderStore;
use ui::buttons::Buttons;
use ui::display::Display;

pub type SharedStore = BlockingMutex<CriticalSectionRawMutex, RefCell<ReminderStore>>;
pub type SharedQueue = BlockingMutex<CriticalSectionRawMutex, RefCell<AlertQueue>>;
pub type QueueSignal = Signal<CriticalSectionRawMutex, ()>;
pub type SharedButtons = BlockingMutex<CriticalSectionRawMutex, RefCell<Buttons<'static>>>;
pub type DisplayI2c = twim::Twim<'static, peripherals::TWISPI0>;
pub type SharedDisplay = AsyncMutex<CriticalSectionRawMutex, Display<DisplayI2c>>;

static STORE: SharedStore = BlockingMutex::new(RefCell::new(ReminderStore::new()));
static QUEUE: SharedQueue = BlockingMutex::new(RefCell::new(AlertQueue::new()));
static QUEUE_READY: QueueSignal = Signal::new();
static BUTTONS: StaticCell<SharedButtons> = StaticCell::new();
static DISPLAY: StaticCell<SharedDisplay> = StaticCell::new();

static EXECUTOR_ALERT: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_MAIN: StaticCell<Executor> = StaticCell::new();

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[interrupt]
unsafe fn SWI1_EGU1() {
    EXECUTOR_ALERT.on_interrupt()
}

#[cortex_m_rt::entry]
fn main() -> ! {
    let p = embassy_nrf::init(Default::default());
    info!("medminder starting");

    // Display on TWISPI0 (SDA P0.26, SCL P0.27).
    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let display: &'static SharedDisplay = DISPLAY.init(AsyncMutex::new(ui::display::init(i2c)));

    // Joystick on SAADC channels AIN0 (X) / AIN1 (Y). Pins are moved in
    // so the reader is 'static for the task.
    let chan_x = saadc::ChannelConfig::single_ended(p.P0_02);
    let chan_y = saadc::ChannelConfig::single_ended(p.P0_03);
    let adc = saadc::Saadc::new(p.SAADC, Irqs, saadc::Config::default(), [chan_x, chan_y]);
    let joystick = ui::Joystick::new(adc);

    let buttons: &'static SharedButtons = BUTTONS.init(BlockingMutex::new(RefCell::new(
        Buttons::new(p.P0_11.degrade(), p.P0_12.degrade()),
    )));

    let buzzer = alert::Buzzer::new(p.P0_06.degrade());

    // Alert escalation preempts: interrupt executor on SWI1_EGU1.
    interrupt::SWI1_EGU1.set_priority(Priority::P6);
    let alert_spawner = EXECUTOR_ALERT.start(interrupt::SWI1_EGU1);
    unwrap!(alert_spawner.spawn(alert::alert_task(
        &QUEUE,
        &QUEUE_READY,
        buttons,
        display,
        buzzer
    )));

    // UI + trigger share the thread-mode executor.
    let executor = EXECUTOR_MAIN.init(Executor::new());
    executor.run(|spawner| {
        unwrap!(spawner.spawn(ui::ui_task(&STORE, buttons, display, joystick)));
        unwrap!(spawner.spawn(trigger::trigger_task(&STORE, &QUEUE, &QUEUE_READY)));
    })
}
