//! Power bar rendering
//!
//! A fixed-width run of `#` characters showing where the setpoint sits
//! in its range: more hashes, warmer setting.

use heapless::String;

/// Bar width in characters
pub const BAR_WIDTH: usize = 10;

/// Upper bound of the setpoint range in whole degrees
const SETPOINT_MAX_C: i16 = 25;

/// Render the setpoint as a `#`/space bar of exactly [`BAR_WIDTH`] bytes
///
/// The split is `fill = 10 - diff` with `diff = 25 - floor(setpoint)`,
/// both clamped to the bar width so out-of-range setpoints still give a
/// well-formed bar (all empty below 15C, all full above 25C).
pub fn power_bar(setpoint_x10: i16) -> String<10> {
    let floor_c = setpoint_x10.div_euclid(10);
    let diff = (SETPOINT_MAX_C - floor_c).clamp(0, BAR_WIDTH as i16);
    let fill = BAR_WIDTH as i16 - diff;

    let mut bar: String<10> = String::new();
    for _ in 0..fill {
        let _ = bar.push('#');
    }
    for _ in 0..diff {
        let _ = bar.push(' ');
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fill_tracks_setpoint() {
        assert_eq!(power_bar(250).as_str(), "##########");
        assert_eq!(power_bar(200).as_str(), "#####     ");
        assert_eq!(power_bar(160).as_str(), "#         ");
        assert_eq!(power_bar(165).as_str(), "#         "); // floor, not round
        assert_eq!(power_bar(150).as_str(), "          ");
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(power_bar(-100).as_str(), "          ");
        assert_eq!(power_bar(400).as_str(), "##########");
    }

    proptest! {
        #[test]
        fn width_is_always_ten(setpoint in -1000i16..1000) {
            let bar = power_bar(setpoint);
            prop_assert_eq!(bar.len(), BAR_WIDTH);
            // A run of hashes followed by a run of spaces, nothing else
            let hashes = bar.bytes().take_while(|&b| b == b'#').count();
            prop_assert!(bar.bytes().skip(hashes).all(|b| b == b' '));
        }
    }
}
