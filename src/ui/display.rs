//! SSD1306 OLED as a two-line menu display.
//!
//! Row layout (FONT_6X10, 21 characters per row):
//!   - title (line 0)
//!   - current item or value under edit (line 1)
//!   - two rows of help text, shown until the item changes

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use reflow_menu::config::TEXT_CAPACITY;
use reflow_menu::menu::{DisplayRequest, MenuDisplay};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Characters that fit one row of the 128 px panel.
const ROW_CHARS: usize = 21;

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

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

type Line = heapless::String<TEXT_CAPACITY>;

fn set_line(line: &mut Line, text: &str) {
    line.clear();
    for c in text.chars() {
        if line.push(c).is_err() {
            break;
        }
    }
}

/// Split `text` after `chars` characters.
fn split_row(text: &str, chars: usize) -> (&str, &str) {
    let cut = text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i);
    text.split_at(cut)
}

/// Menu display backed by the OLED frame buffer.
pub struct LineDisplay<I2C> {
    display: Display<I2C>,
    title: Line,
    body: Line,
    help: Line,
    /// Help was just shown; keep it across the redraw of line 1 that follows.
    help_pending: bool,
}

impl<I2C> LineDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(display: Display<I2C>) -> Self {
        Self {
            display,
            title: Line::new(),
            body: Line::new(),
            help: Line::new(),
            help_pending: false,
        }
    }

    fn redraw(&mut self) -> bool {
        self.display.clear_buffer();

        let style = text_style();
        let _ = Text::new(&self.title, Point::new(0, 10), style).draw(&mut self.display);
        let _ = Text::new(&self.body, Point::new(0, 26), style).draw(&mut self.display);

        let (first, rest) = split_row(&self.help, ROW_CHARS);
        let (second, _) = split_row(rest, ROW_CHARS);
        let _ = Text::new(first, Point::new(0, 44), style).draw(&mut self.display);
        let _ = Text::new(second, Point::new(0, 56), style).draw(&mut self.display);

        self.display.flush().is_ok()
    }
}

impl<I2C> MenuDisplay for LineDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn display(&mut self, request: DisplayRequest<'_>) -> bool {
        match request {
            DisplayRequest::Clear => {
                self.title.clear();
                self.body.clear();
                self.help.clear();
                self.help_pending = false;
            }
            DisplayRequest::Line0(text) => {
                set_line(&mut self.title, text);
                self.help.clear();
            }
            DisplayRequest::Line1(text) => {
                set_line(&mut self.body, text);
                if !self.help_pending {
                    self.help.clear();
                }
                self.help_pending = false;
            }
            DisplayRequest::Help(text) => {
                set_line(&mut self.help, text);
                self.help_pending = true;
            }
        }
        self.redraw()
    }
}
