//! SSD1306 OLED display wrapper.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::menu::MenuModel;

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

fn draw_row<I2C>(display: &mut Display<I2C>, row: usize, selected: bool, label: &str)
where
    I2C: embedded_hal::i2c::I2c,
{
    let marker = if selected { ">" } else { " " };
    let mut line: heapless::String<20> = heapless::String::new();
    let _ = line.push_str(marker);
    let _ = line.push_str(" ");
    let _ = line.push_str(label);
    let y = 24 + (row as i32 * 10);
    let _ = Text::new(line.as_str(), Point::new(0, y), text_style()).draw(display);
}

/// Render the root list with the current highlight.
pub fn draw_root_list<I2C>(display: &mut Display<I2C>, model: &MenuModel, cursor: usize)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let _ = Text::new("Menu", Point::new(0, 10), text_style()).draw(display);

    // Four rows fit under the title; scroll so the cursor stays visible.
    let first = cursor.saturating_sub(3);
    for (row, index) in (first..model.root_count()).take(4).enumerate() {
        draw_row(display, row, index == cursor, model.root_label(index).as_str());
    }

    let _ = display.flush();
}

/// Render the child list opened from `root_index`.
pub fn draw_child_list<I2C>(
    display: &mut Display<I2C>,
    model: &MenuModel,
    root_index: usize,
    cursor: usize,
) where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let title = model.root_label(root_index);
    let _ = Text::new(title.as_str(), Point::new(0, 10), text_style()).draw(display);

    let first = cursor.saturating_sub(3);
    for (row, index) in (first..model.child_count()).take(4).enumerate() {
        draw_row(
            display,
            row,
            index == cursor,
            model.child_label(root_index, index).as_str(),
        );
    }

    let _ = display.flush();
}
