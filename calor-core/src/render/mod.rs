//! Frame rendering
//!
//! Everything needed to turn the current readings into the fixed 16x16
//! character status frame.

pub mod bar;
pub mod digits;
pub mod font;
pub mod frame;

pub use bar::power_bar;
pub use digits::{setpoint_digits, setpoint_glyphs, FormatError};
pub use font::{digit_glyph, Glyph};
pub use frame::{compose, Frame, FRAME_COLS, FRAME_ROWS};
