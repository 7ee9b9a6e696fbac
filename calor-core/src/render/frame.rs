//! Screen composition
//!
//! Builds the complete 16x16 character status frame from the current
//! readings:
//!
//! ```text
//! +--------------+
//! |              |
//! | Temp: 20.0 C |
//! |              |
//! | .-. .-.  .-. |
//! | .'' |\|  |\| |
//! | `-- `-'. `-' |
//! |              |
//! |  ######      |
//! +--------------+
//! ```
//!
//! (Interior blank rows elided above; the real frame is 16 rows.)

use core::fmt::Write as _;

use heapless::String;

use super::bar::power_bar;
use super::digits::{setpoint_glyphs, FormatError};

/// Frame height in character rows
pub const FRAME_ROWS: usize = 16;
/// Frame width in characters, border included
pub const FRAME_COLS: usize = 16;

const BORDER_ROW: &str = "+--------------+";
const BLANK_ROW: &str = "|              |";

/// A complete display frame
///
/// Immutable once composed; every row is exactly [`FRAME_COLS`] bytes.
/// Rebuilt from scratch each tick, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    rows: [String<16>; FRAME_ROWS],
}

impl Frame {
    /// Get a row's text
    pub fn row(&self, index: usize) -> &str {
        self.rows.get(index).map(|r| r.as_str()).unwrap_or("")
    }

    /// Iterate over all rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.as_str())
    }
}

/// Copy a row literal into an owned row
fn literal(text: &str) -> String<16> {
    let mut row: String<16> = String::new();
    let _ = row.push_str(text);
    row
}

/// Wrap content in the side borders, padded/truncated to frame width
fn boxed(content: &str) -> String<16> {
    let mut row: String<16> = String::new();
    let _ = row.push('|');
    for ch in content.chars().take(FRAME_COLS - 2) {
        let _ = row.push(ch);
    }
    while row.len() < FRAME_COLS - 1 {
        let _ = row.push(' ');
    }
    let _ = row.push('|');
    row
}

/// Compose a frame from the current ambient and setpoint readings
///
/// Pure: identical inputs always yield byte-identical frames. Fails only
/// if the setpoint cannot be rendered as three digits.
pub fn compose(ambient_x10: i16, setpoint_x10: i16) -> Result<Frame, FormatError> {
    let [tens, units, tenths] = setpoint_glyphs(setpoint_x10)?;
    let bar = power_bar(setpoint_x10);

    // Ambient readout, one decimal place, sign-aware
    let mut readout: String<14> = String::new();
    let mag = (ambient_x10 as i32).abs();
    let sign = if ambient_x10 < 0 { "-" } else { "" };
    let _ = write!(readout, " Temp: {}{}.{} C", sign, mag / 10, mag % 10);

    // Big setpoint digits, decimal point between units and tenths on the
    // bottom glyph row
    let mut top: String<14> = String::new();
    let _ = write!(top, " {} {}  {} ", tens[0], units[0], tenths[0]);
    let mut mid: String<14> = String::new();
    let _ = write!(mid, " {} {}  {} ", tens[1], units[1], tenths[1]);
    let mut bottom: String<14> = String::new();
    let _ = write!(bottom, " {} {}. {} ", tens[2], units[2], tenths[2]);

    let mut bar_row: String<14> = String::new();
    let _ = write!(bar_row, "  {}  ", bar.as_str());

    let rows: [String<16>; FRAME_ROWS] = core::array::from_fn(|i| match i {
        0 | 15 => literal(BORDER_ROW),
        3 => boxed(readout.as_str()),
        7 => boxed(top.as_str()),
        8 => boxed(mid.as_str()),
        9 => boxed(bottom.as_str()),
        13 => boxed(bar_row.as_str()),
        _ => literal(BLANK_ROW),
    });

    Ok(Frame { rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_is_sixteen_wide() {
        let frame = compose(200, 200).unwrap();
        for row in frame.rows() {
            assert_eq!(row.len(), FRAME_COLS);
        }
    }

    #[test]
    fn readout_and_bar_rows() {
        let frame = compose(200, 200).unwrap();
        assert_eq!(frame.row(0), "+--------------+");
        assert_eq!(frame.row(3), "| Temp: 20.0 C |");
        assert_eq!(frame.row(13), "|  #####       |");
        assert_eq!(frame.row(15), "+--------------+");
        assert_eq!(frame.row(1), "|              |");
    }

    #[test]
    fn big_digits_for_twenty_point_zero() {
        // Digits 2, 0, 0 with the decimal point after the units glyph
        let frame = compose(200, 200).unwrap();
        assert_eq!(frame.row(7), "| .-. .-.  .-. |");
        assert_eq!(frame.row(8), "| .'' |\\|  |\\| |");
        assert_eq!(frame.row(9), "| `-- `-'. `-' |");
    }

    #[test]
    fn negative_ambient_keeps_width() {
        let frame = compose(-5, 200).unwrap();
        assert_eq!(frame.row(3), "| Temp: -0.5 C |");
        assert_eq!(frame.row(3).len(), FRAME_COLS);
    }

    #[test]
    fn hot_ambient_keeps_width() {
        // Three integer digits would overflow the layout; truncation wins
        let frame = compose(1234, 200).unwrap();
        assert_eq!(frame.row(3).len(), FRAME_COLS);
        assert!(frame.row(3).starts_with("| Temp: 123.4"));
    }

    #[test]
    fn unrepresentable_setpoint_is_rejected() {
        assert!(compose(200, -10).is_err());
        assert!(compose(200, 1000).is_err());
    }

    #[test]
    fn compose_is_idempotent() {
        let a = compose(215, 187).unwrap();
        let b = compose(215, 187).unwrap();
        assert_eq!(a, b);
    }
}
