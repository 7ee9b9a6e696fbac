//! Exit push button
//!
//! Wired active-low with the internal pull-up: the line reads low while
//! the button is held. Debouncing lives in the control loop, not here.

use calor_core::traits::ExitButton;

/// Trait for GPIO input pin abstraction
pub trait InputPin {
    /// Sample the line; true when pulled low
    fn is_low(&mut self) -> bool;
}

/// Active-low GPIO button
pub struct GpioButton<P> {
    pin: P,
}

impl<P: InputPin> GpioButton<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> ExitButton for GpioButton<P> {
    fn is_pressed(&mut self) -> bool {
        self.pin.is_low()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        low: bool,
    }

    impl InputPin for MockPin {
        fn is_low(&mut self) -> bool {
            self.low
        }
    }

    #[test]
    fn pressed_while_line_is_low() {
        let mut button = GpioButton::new(MockPin { low: true });
        assert!(button.is_pressed());

        let mut button = GpioButton::new(MockPin { low: false });
        assert!(!button.is_pressed());
    }
}
