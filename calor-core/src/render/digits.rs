//! Setpoint digit decomposition
//!
//! Splits a one-decimal temperature into the three digits the big
//! readout shows: tens, units, tenths.

use super::font::{digit_glyph, Glyph};

/// Formatting contract violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// Temperature not representable as three digits (outside 0.0..=99.9)
    OutOfRange,
}

/// Decompose a 0.1C-units temperature into [tens, units, tenths]
///
/// Rejects values outside 0..=999 so every digit stays in 0..=9. The
/// fixed-width layout has no room for a sign or a third integer digit.
pub fn setpoint_digits(temp_x10: i16) -> Result<[u8; 3], FormatError> {
    if !(0..=999).contains(&temp_x10) {
        return Err(FormatError::OutOfRange);
    }

    let mut v = temp_x10;
    let tenths = (v % 10) as u8;
    v /= 10;
    let units = (v % 10) as u8;
    v /= 10;
    let tens = v as u8;

    Ok([tens, units, tenths])
}

/// Decompose and map each digit through the font
pub fn setpoint_glyphs(temp_x10: i16) -> Result<[&'static Glyph; 3], FormatError> {
    let [tens, units, tenths] = setpoint_digits(temp_x10)?;
    Ok([
        digit_glyph(tens),
        digit_glyph(units),
        digit_glyph(tenths),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decomposes_examples() {
        assert_eq!(setpoint_digits(200).unwrap(), [2, 0, 0]);
        assert_eq!(setpoint_digits(99).unwrap(), [0, 9, 9]);
        assert_eq!(setpoint_digits(0).unwrap(), [0, 0, 0]);
        assert_eq!(setpoint_digits(999).unwrap(), [9, 9, 9]);
        assert_eq!(setpoint_digits(165).unwrap(), [1, 6, 5]);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(setpoint_digits(-1), Err(FormatError::OutOfRange));
        assert_eq!(setpoint_digits(1000), Err(FormatError::OutOfRange));
    }

    proptest! {
        #[test]
        fn digits_reassemble(temp_x10 in 0i16..=999) {
            let [tens, units, tenths] = setpoint_digits(temp_x10).unwrap();
            let reassembled = tens as i16 * 100 + units as i16 * 10 + tenths as i16;
            prop_assert_eq!(reassembled, temp_x10);
            prop_assert!(tens <= 9 && units <= 9 && tenths <= 9);
        }
    }
}
