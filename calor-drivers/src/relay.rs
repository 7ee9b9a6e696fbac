//! GPIO heating relay output
//!
//! The "relay" in this demo is an LED standing in for a heating system.
//! The Waveshare kit's LED module lights when the pin is driven low, so
//! the driver carries the polarity and the loop only ever talks in
//! logical heating levels.

use calor_core::traits::RelayOutput;

/// Trait for GPIO output pin abstraction
pub trait OutputPin {
    /// Drive the pin high
    fn set_high(&mut self);

    /// Drive the pin low
    fn set_low(&mut self);
}

/// GPIO relay output with optional polarity inversion
pub struct GpioRelay<P> {
    pin: P,
    /// If true, relay ON = pin LOW
    inverted: bool,
    /// Last logical level driven
    on: bool,
}

impl<P: OutputPin> GpioRelay<P> {
    /// Create a relay output; starts at the inactive level
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut relay = Self {
            pin,
            inverted,
            on: false,
        };
        relay.set_on(false);
        relay
    }

    /// Active-low wiring (the kit's LED module)
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> RelayOutput for GpioRelay<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;

        if on != self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }
    }

    #[test]
    fn active_low_idles_high() {
        let relay = GpioRelay::new_active_low(MockPin { high: false });
        assert!(!relay.is_on());
        assert!(relay.pin.high);
    }

    #[test]
    fn active_low_drives_low_when_on() {
        let mut relay = GpioRelay::new_active_low(MockPin { high: false });

        relay.set_on(true);
        assert!(relay.is_on());
        assert!(!relay.pin.high);

        relay.set_on(false);
        assert!(!relay.is_on());
        assert!(relay.pin.high);
    }

    #[test]
    fn non_inverted_follows_the_level() {
        let mut relay = GpioRelay::new(MockPin { high: true }, false);
        assert!(!relay.pin.high);

        relay.set_on(true);
        assert!(relay.pin.high);
    }
}
