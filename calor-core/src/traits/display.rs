//! Display driver trait
//!
//! The OLED is treated as a dumb character grid: the composer builds a
//! full frame of text rows and pushes it through this trait. Register
//! programming and the pixel transport are the driver's business.

/// Errors that can occur with display communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus write failed (I2C fault)
    Bus,
    /// Row or column outside the drawable area
    OutOfBounds,
}

/// Trait for the status display
///
/// Implementations buffer drawing operations and push the buffer to the
/// panel on `flush`. A frame is up to 16 rows of 16 monochrome text
/// glyphs.
pub trait DisplayDriver {
    /// Blank the drawing buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at a character position
    ///
    /// - `row`: row number (0-15)
    /// - `col`: column number (0-15)
    fn text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Push the buffer to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;
}
