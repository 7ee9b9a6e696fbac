//! SSD1327 OLED display driver
//!
//! Driver for the Waveshare 128x128 SSD1327 grayscale OLED via I2C.
//! Text is rendered into a 4-bit framebuffer through embedded-graphics
//! and pushed to the panel a row at a time. The 5x8 font gives a 16x16
//! character grid, centred horizontally on the panel.

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use calor_core::render::{FRAME_COLS, FRAME_ROWS};
use calor_core::traits::{DisplayDriver, DisplayError};

/// SSD1327 I2C address (Waveshare module wiring)
const SSD1327_ADDR: u8 = 0x3D;

/// Display dimensions
const WIDTH: usize = 128;
const HEIGHT: usize = 128;

/// Framebuffer size: 4 bits per pixel, two pixels per byte
const BUF_LEN: usize = WIDTH * HEIGHT / 2;

/// Character cell geometry for the 5x8 font
const CHAR_WIDTH: i32 = 5;
const CHAR_HEIGHT: i32 = 8;

/// Left margin centring the 80-pixel text area on the 128-pixel panel
const TEXT_X_OFFSET: i32 = (WIDTH as i32 - FRAME_COLS as i32 * CHAR_WIDTH) / 2;

/// SSD1327 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_COLUMN_ADDR: u8 = 0x15;
    pub const SET_ROW_ADDR: u8 = 0x75;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_SEG_REMAP: u8 = 0xA0;
    pub const SET_START_LINE: u8 = 0xA1;
    pub const SET_DISPLAY_OFFSET: u8 = 0xA2;
    pub const SET_NORMAL: u8 = 0xA4;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_FUNCTION_A: u8 = 0xAB;
    pub const SET_PHASE_LENGTH: u8 = 0xB1;
    pub const SET_CLOCK_DIV: u8 = 0xB3;
    pub const SET_SECOND_PRECHARGE: u8 = 0xB6;
    pub const SET_PRECHARGE_VOLTAGE: u8 = 0xBC;
    pub const SET_VCOMH: u8 = 0xBE;
    pub const SET_FUNCTION_B: u8 = 0xD5;
    pub const SET_COMMAND_LOCK: u8 = 0xFD;
}

/// SSD1327 OLED driver
pub struct Ssd1327<I2C> {
    i2c: I2C,
    /// Frame buffer, GS4 horizontal mapping (even pixel in the high nibble)
    buffer: [u8; BUF_LEN],
}

impl<I2C> Ssd1327<I2C>
where
    I2C: I2c,
{
    /// Create a new SSD1327 driver
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            buffer: [0; BUF_LEN],
        }
    }

    /// Initialize the display
    ///
    /// The panel needs roughly 100 ms after the charge pump is enabled
    /// before it can be switched on.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_COLUMN_ADDR,
            0x00,
            0x7F,
            cmd::SET_ROW_ADDR,
            0x00,
            0x7F,
            cmd::SET_CONTRAST,
            0x80,
            cmd::SET_SEG_REMAP,
            0x51, // Column remap, nibble remap, COM split odd/even
            cmd::SET_START_LINE,
            0x00,
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_NORMAL,
            cmd::SET_MUX_RATIO,
            0x7F, // 128 lines
            cmd::SET_PHASE_LENGTH,
            0xF1,
            cmd::SET_CLOCK_DIV,
            0x00,
            cmd::SET_FUNCTION_A,
            0x01, // Enable internal VDD regulator
            cmd::SET_SECOND_PRECHARGE,
            0x0F,
            cmd::SET_VCOMH,
            0x0F,
            cmd::SET_PRECHARGE_VOLTAGE,
            0x08,
            cmd::SET_FUNCTION_B,
            0x62,
            cmd::SET_COMMAND_LOCK,
            0x12,
        ];

        for &c in init_cmds {
            self.command(c)?;
        }

        delay.delay_ms(100);
        self.command(cmd::DISPLAY_ON)
    }

    /// Send a command byte to the display
    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(SSD1327_ADDR, &[0x00, cmd])
            .map_err(|_| DisplayError::Bus)
    }

    /// Point the address window at the full panel
    fn set_full_window(&mut self) -> Result<(), DisplayError> {
        // Column addresses count pixel pairs
        self.command(cmd::SET_COLUMN_ADDR)?;
        self.command(0x00)?;
        self.command((WIDTH / 2 - 1) as u8)?;
        self.command(cmd::SET_ROW_ADDR)?;
        self.command(0x00)?;
        self.command((HEIGHT - 1) as u8)
    }
}

impl<I2C> OriginDimensions for Ssd1327<I2C> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<I2C> DrawTarget for Ssd1327<I2C> {
    type Color = Gray4;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if (0..WIDTH as i32).contains(&point.x) && (0..HEIGHT as i32).contains(&point.y) {
                let x = point.x as usize;
                let y = point.y as usize;
                let idx = y * (WIDTH / 2) + x / 2;

                if x % 2 == 0 {
                    self.buffer[idx] = (self.buffer[idx] & 0x0F) | (color.luma() << 4);
                } else {
                    self.buffer[idx] = (self.buffer[idx] & 0xF0) | color.luma();
                }
            }
        }

        Ok(())
    }
}

impl<I2C> DisplayDriver for Ssd1327<I2C>
where
    I2C: I2c,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.buffer.fill(0);
        Ok(())
    }

    fn text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if row as usize >= FRAME_ROWS || col as usize >= FRAME_COLS {
            return Err(DisplayError::OutOfBounds);
        }

        let style = MonoTextStyle::new(&FONT_5X8, Gray4::WHITE);
        let origin = Point::new(
            TEXT_X_OFFSET + col as i32 * CHAR_WIDTH,
            row as i32 * CHAR_HEIGHT,
        );

        // Drawing into the framebuffer cannot fail
        let _ = Text::with_baseline(text, origin, style, Baseline::Top).draw(self);

        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.set_full_window()?;

        for row in 0..HEIGHT {
            let start = row * (WIDTH / 2);

            // Send one row of pixel pairs, prefixed with the data control byte
            let mut data = [0u8; WIDTH / 2 + 1];
            data[0] = 0x40;
            data[1..].copy_from_slice(&self.buffer[start..start + WIDTH / 2]);

            self.i2c
                .write(SSD1327_ADDR, &data)
                .map_err(|_| DisplayError::Bus)?;
        }

        Ok(())
    }
}
