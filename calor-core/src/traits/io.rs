//! Sensor, output and timing traits

/// Errors that can occur with analog sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// ADC conversion error
    ConversionError,
}

/// Round a 0.01C value to 0.1C units, half away from zero
pub fn celsius_x100_to_x10(x100: i32) -> i16 {
    let half = if x100 >= 0 { 5 } else { -5 };
    ((x100 + half) / 10) as i16
}

/// Trait for the ambient temperature source
///
/// Implementations handle the specific sensor (on-die sensor, thermistor,
/// etc.) and its calibration.
pub trait AmbientSensor {
    /// Read the ambient temperature in 0.01C units
    ///
    /// For example, 21.19C is returned as 2119. Takes `&mut self` because
    /// ADC reads typically require mutable access.
    fn read_celsius_x100(&mut self) -> Result<i32, SensorError>;

    /// Read the ambient temperature in 0.1C units, rounded
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError> {
        Ok(celsius_x100_to_x10(self.read_celsius_x100()?))
    }
}

/// Trait for the user setpoint source
///
/// Implementations normalize the dial's analog travel into the supported
/// setpoint range and round to one decimal place.
pub trait SetpointInput {
    /// Read the setpoint temperature in 0.1C units
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError>;
}

/// Trait for the heating relay output
///
/// `set_on` takes the logical heating level; electrical polarity (the
/// demo LED is wired active-low) is the implementation's business.
pub trait RelayOutput {
    /// Drive the relay output on or off
    fn set_on(&mut self, on: bool);

    /// Check the last driven level
    fn is_on(&self) -> bool;
}

/// Trait for the RGB indicator element
///
/// `set` latches a color, `commit` pushes it to the physical element.
/// The WS2812-class parts this targets have no error channel.
pub trait RgbOutput {
    /// Latch an RGB color (low-brightness values, typically 0-4)
    fn set(&mut self, r: u8, g: u8, b: u8);

    /// Push the latched color to the element
    fn commit(&mut self);

    /// Latch black and push it
    fn off(&mut self) {
        self.set(0, 0, 0);
        self.commit();
    }
}

/// Trait for the exit push button
pub trait ExitButton {
    /// Sample the button once; true while held down
    fn is_pressed(&mut self) -> bool;
}

/// Trait for bounded blocking waits
///
/// The loop only ever waits for fixed, short durations (the debounce
/// micro-delay and the inter-tick sleep).
pub trait Delay {
    fn delay_ms(&mut self, ms: u32);
}
