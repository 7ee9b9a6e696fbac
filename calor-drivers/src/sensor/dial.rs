//! Setpoint potentiometer
//!
//! The dial's voltage travel maps inversely onto the supported setpoint
//! range: minimum voltage is maximum temperature, matching the physical
//! wiring of the knob. A small dead-band at the bottom of the travel is
//! subtracted before normalizing.

use calor_core::traits::{SensorError, SetpointInput};

use super::{div_round, raw_to_uv, AdcReader, VREF_UV};

/// Setpoint range, 0.1C units
pub const SETPOINT_MIN_X10: i16 = 160;
pub const SETPOINT_MAX_X10: i16 = 250;

/// Dead-band at the bottom of the pot's travel, microvolts (20mV)
const DEADBAND_UV: i64 = 20_000;

/// Usable voltage span after the dead-band
const SPAN_UV: i64 = VREF_UV - DEADBAND_UV;

/// Potentiometer-backed setpoint input
pub struct SetpointDial<ADC> {
    adc: ADC,
}

impl<ADC> SetpointDial<ADC> {
    pub fn new(adc: ADC) -> Self {
        Self { adc }
    }

    /// Convert a raw code to a 0.1C setpoint in the supported range
    ///
    /// `t = (1 - (v - 0.02) / (3.3 - 0.02)) * (25 - 16) + 16`, rounded
    /// to one decimal and clamped. The dead-band can push the formula
    /// slightly past either end of the range; clamping keeps the result
    /// renderable.
    pub fn raw_to_celsius_x10(raw: u16) -> i16 {
        let uv = raw_to_uv(raw);
        let range_x10 = (SETPOINT_MAX_X10 - SETPOINT_MIN_X10) as i64;
        let inverted = VREF_UV - uv;
        let t_x10 = SETPOINT_MIN_X10 as i64 + div_round(inverted * range_x10, SPAN_UV);
        (t_x10 as i16).clamp(SETPOINT_MIN_X10, SETPOINT_MAX_X10)
    }
}

impl<ADC: AdcReader> SetpointInput for SetpointDial<ADC> {
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError> {
        let raw = self.adc.read().map_err(|_| SensorError::ConversionError)?;
        Ok(Self::raw_to_celsius_x10(raw))
    }
}
