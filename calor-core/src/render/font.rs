//! ASCII-art digit font
//!
//! Each decimal digit renders as three rows of three characters. The
//! artwork is authored data, not computed.

/// One digit: three rows of exactly three ASCII characters
pub type Glyph = [&'static str; 3];

/// Glyphs for digits 0-9, in order
pub const DIGIT_GLYPHS: [Glyph; 10] = [
    [".-.", "|\\|", "`-'"], // 0
    [" . ", "'| ", " ' "],  // 1
    [".-.", ".''", "`--"],  // 2
    ["-. ", "-| ", "-' "],  // 3
    [". .", "`-|", "  '"],  // 4
    [".-.", "``.", "--'"],  // 5
    [".-.", "|-.", "`-'"],  // 6
    [".-.", " .'", "'  "],  // 7
    [".-.", ")-(", "`-'"],  // 8
    [".-.", "`-|", "`-'"],  // 9
];

/// Look up the glyph for a digit
///
/// Total over 0..=9; the formatter rejects anything else before it gets
/// here. Out-of-range input trips a debug assertion; release builds fall
/// back to the zero glyph rather than panicking.
pub fn digit_glyph(digit: u8) -> &'static Glyph {
    debug_assert!(digit <= 9, "digit out of range: {}", digit);
    DIGIT_GLYPHS.get(digit as usize).unwrap_or(&DIGIT_GLYPHS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_glyphs_are_three_by_three() {
        for glyph in &DIGIT_GLYPHS {
            for row in glyph {
                assert_eq!(row.len(), 3);
            }
        }
    }

    #[test]
    fn lookup_is_total_over_digits() {
        for d in 0..=9u8 {
            assert_eq!(digit_glyph(d), &DIGIT_GLYPHS[d as usize]);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "digit out of range")]
    fn out_of_range_digit_is_flagged() {
        digit_glyph(10);
    }
}
