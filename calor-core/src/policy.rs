//! Indicator and relay policy
//!
//! Maps the continuous readings into the discrete outputs: an ambient
//! color band for the RGB element and a binary demand for the heating
//! relay.

/// Ambient temperature classification, coldest to hottest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorBand {
    /// At or below 21.0C
    Cold,
    /// Above 21.0C up to 23.0C
    Normal,
    /// Above 23.0C up to 23.5C
    Warm,
    /// Above 23.5C
    Hot,
}

impl IndicatorBand {
    /// Classify an ambient temperature (0.01C units)
    ///
    /// Bands on the full two-decimal reading, so a value just past a
    /// boundary (21.01C) classifies above it even though the one-decimal
    /// display rounds it back down. The bands are contiguous and
    /// exhaustive: every value maps to exactly one band.
    pub fn from_ambient_x100(ambient_x100: i32) -> Self {
        if ambient_x100 > 2350 {
            IndicatorBand::Hot
        } else if ambient_x100 > 2300 {
            IndicatorBand::Warm
        } else if ambient_x100 > 2100 {
            IndicatorBand::Normal
        } else {
            IndicatorBand::Cold
        }
    }

    /// Low-brightness RGB color for this band
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            IndicatorBand::Hot => (4, 0, 0),    // red
            IndicatorBand::Warm => (2, 2, 0),   // orange
            IndicatorBand::Normal => (0, 4, 0), // green
            IndicatorBand::Cold => (0, 0, 4),   // blue
        }
    }
}

/// Binary heating relay demand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RelayState {
    On,
    Off,
}

impl RelayState {
    /// Demand is On iff the setpoint is strictly above ambient
    ///
    /// Caller contract: while On the physical output must be toggled
    /// every tick (blink), while Off it must be held at the inactive
    /// level.
    pub fn demand(setpoint_x10: i16, ambient_x10: i16) -> Self {
        if setpoint_x10 > ambient_x10 {
            RelayState::On
        } else {
            RelayState::Off
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(IndicatorBand::from_ambient_x100(2100), IndicatorBand::Cold);
        assert_eq!(IndicatorBand::from_ambient_x100(2101), IndicatorBand::Normal);
        assert_eq!(IndicatorBand::from_ambient_x100(2300), IndicatorBand::Normal);
        assert_eq!(IndicatorBand::from_ambient_x100(2301), IndicatorBand::Warm);
        assert_eq!(IndicatorBand::from_ambient_x100(2350), IndicatorBand::Warm);
        assert_eq!(IndicatorBand::from_ambient_x100(2351), IndicatorBand::Hot);
    }

    #[test]
    fn banding_sees_the_second_decimal() {
        // 21.03C rounds to 21.0 on the display but is already past the
        // 21.0 boundary
        assert_eq!(IndicatorBand::from_ambient_x100(2103), IndicatorBand::Normal);
    }

    #[test]
    fn band_extremes() {
        assert_eq!(
            IndicatorBand::from_ambient_x100(i32::MIN),
            IndicatorBand::Cold
        );
        assert_eq!(IndicatorBand::from_ambient_x100(i32::MAX), IndicatorBand::Hot);
    }

    #[test]
    fn band_colors() {
        assert_eq!(IndicatorBand::Hot.rgb(), (4, 0, 0));
        assert_eq!(IndicatorBand::Warm.rgb(), (2, 2, 0));
        assert_eq!(IndicatorBand::Normal.rgb(), (0, 4, 0));
        assert_eq!(IndicatorBand::Cold.rgb(), (0, 0, 4));
    }

    #[test]
    fn demand_is_strict() {
        assert_eq!(RelayState::demand(205, 205), RelayState::Off);
        assert_eq!(RelayState::demand(206, 205), RelayState::On);
        assert_eq!(RelayState::demand(204, 205), RelayState::Off);
    }

    proptest! {
        #[test]
        fn bands_partition_the_line(ambient in -10_000i32..10_000) {
            // Each value lands in exactly the band its threshold ordering says
            let band = IndicatorBand::from_ambient_x100(ambient);
            let expected = if ambient > 2350 {
                IndicatorBand::Hot
            } else if ambient > 2300 {
                IndicatorBand::Warm
            } else if ambient > 2100 {
                IndicatorBand::Normal
            } else {
                IndicatorBand::Cold
            };
            prop_assert_eq!(band, expected);
        }

        #[test]
        fn demand_iff_setpoint_above_ambient(setpoint in -500i16..500, ambient in -500i16..500) {
            let on = RelayState::demand(setpoint, ambient) == RelayState::On;
            prop_assert_eq!(on, setpoint > ambient);
        }
    }
}
