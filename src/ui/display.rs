//! SSD1306 OLED display wrapper.
//!
//! One draw function per screen. Callers hold the shared display mutex
//! for exactly one draw call - never across a sleep or wait.

use core::fmt::Write;

use crate::reminder::Reminder;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn text_style() -> embedded_graphics::mono_font::MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// Render the WaitStart splash.
pub fn draw_splash<I2C>(display: &mut Display<I2C>)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let _ = Text::new("MEDMINDER", Point::new(34, 20), text_style()).draw(display);
    let _ = Text::new("Press CONFIRM", Point::new(22, 40), text_style()).draw(display);
    let _ = Text::new("to start", Point::new(38, 52), text_style()).draw(display);

    let _ = display.flush();
}

/// Render the Home screen.
pub fn draw_home<I2C>(display: &mut Display<I2C>)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let _ = Text::new("REMINDERS", Point::new(5, 10), text_style()).draw(display);
    let _ = Text::new("CONFIRM: add", Point::new(5, 28), text_style()).draw(display);
    let _ = Text::new("SECOND:  list", Point::new(5, 40), text_style()).draw(display);

    let _ = display.flush();
}

/// Render the AddReminder time editor.
pub fn draw_add<I2C>(display: &mut Display<I2C>, hour: u8, minute: u8)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let mut time: heapless::String<8> = heapless::String::new();
    let _ = write!(time, "{:02}:{:02}", hour, minute);

    let _ = Text::new("NEW REMINDER", Point::new(5, 10), text_style()).draw(display);
    let _ = Text::new(time.as_str(), Point::new(48, 30), text_style()).draw(display);
    let _ = Text::new("CONFIRM: save", Point::new(5, 52), text_style()).draw(display);

    let _ = display.flush();
}

/// Render the reminder list (first three entries).
pub fn draw_list<I2C>(display: &mut Display<I2C>, reminders: &[Reminder])
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    if reminders.is_empty() {
        let _ = Text::new("NO REMINDERS", Point::new(28, 28), text_style()).draw(display);
    } else {
        for (row, reminder) in reminders.iter().take(3).enumerate() {
            let mut line: heapless::String<24> = heapless::String::new();
            let _ = write!(
                line,
                "{:02}:{:02} {}",
                reminder.hour,
                reminder.minute,
                reminder.name.as_str()
            );
            let y = 12 + (row as i32 * 14);
            let _ = Text::new(line.as_str(), Point::new(0, y), text_style()).draw(display);
        }
    }
    let _ = Text::new("CONFIRM: back", Point::new(5, 60), text_style()).draw(display);

    let _ = display.flush();
}

/// Render the active-alert screen.
pub fn draw_alert<I2C>(display: &mut Display<I2C>, name: &str)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let mut msg: heapless::String<24> = heapless::String::new();
    let _ = write!(msg, "TAKE: {}", name);

    let _ = Text::new("ALERT!", Point::new(10, 12), text_style()).draw(display);
    let _ = Text::new(msg.as_str(), Point::new(10, 32), text_style()).draw(display);
    let _ = Text::new("OK: confirm  SNOOZE: 2nd", Point::new(0, 52), text_style()).draw(display);

    let _ = display.flush();
}
