//! RP2040 on-die temperature sensor
//!
//! The chip's internal sensor measures a diode voltage on ADC channel 4.
//! Calibration is the datasheet's linear pair: 0.706 V at 27C with a
//! -1.721 mV/C slope. Integer-only math in microvolt units.

use calor_core::traits::{AmbientSensor, SensorError};

use super::{div_round, raw_to_uv, AdcReader};

/// Diode voltage at 27C, microvolts
const V_AT_27C_UV: i64 = 706_000;

/// Slope magnitude, microvolts per degree
const UV_PER_DEGREE: i64 = 1721;

/// On-die ambient temperature sensor
pub struct OnDieSensor<ADC> {
    adc: ADC,
}

impl<ADC> OnDieSensor<ADC> {
    pub fn new(adc: ADC) -> Self {
        Self { adc }
    }

    /// Convert a raw code to 0.01C units
    ///
    /// `temp = 27 - (v - 0.706) / 0.001721`; no range clamp, values
    /// outside the nominal band simply extrapolate along the line.
    pub fn raw_to_celsius_x100(raw: u16) -> i32 {
        let uv = raw_to_uv(raw);
        let delta_x100 = (uv - V_AT_27C_UV) * 100;
        (2700 - div_round(delta_x100, UV_PER_DEGREE)) as i32
    }
}

impl<ADC: AdcReader> AmbientSensor for OnDieSensor<ADC> {
    fn read_celsius_x100(&mut self) -> Result<i32, SensorError> {
        let raw = self.adc.read().map_err(|_| SensorError::ConversionError)?;
        Ok(Self::raw_to_celsius_x100(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns a fixed raw code
    struct DummyAdc(u16);

    impl AdcReader for DummyAdc {
        fn read(&mut self) -> Result<u16, ()> {
            Ok(self.0)
        }
    }

    /// Raw code that lands closest to the given pin voltage
    fn raw_for_uv(uv: i64) -> u16 {
        use crate::sensor::{ADC_MAX, VREF_UV};
        ((uv * ADC_MAX + VREF_UV / 2) / VREF_UV) as u16
    }

    #[test]
    fn reference_point_reads_27c() {
        let raw = raw_for_uv(V_AT_27C_UV);
        let temp = OnDieSensor::<DummyAdc>::raw_to_celsius_x100(raw);
        // One LSB is ~50uV, about 0.03C here
        assert!((temp - 2700).abs() <= 5);
    }

    #[test]
    fn warmer_diode_voltage_reads_colder() {
        // +10mV over the reference is about -5.81C
        let raw = raw_for_uv(V_AT_27C_UV + 10_000);
        let temp = OnDieSensor::<DummyAdc>::raw_to_celsius_x100(raw);
        assert!((temp - 2119).abs() <= 5);
    }

    #[test]
    fn reads_through_the_trait() {
        let raw = raw_for_uv(V_AT_27C_UV);
        let mut sensor = OnDieSensor::new(DummyAdc(raw));
        let x100 = sensor.read_celsius_x100().unwrap();
        let x10 = sensor.read_celsius_x10().unwrap();
        assert!((x100 - 2700).abs() <= 5);
        assert_eq!(x10, ((x100 + 5) / 10) as i16);
    }

    #[test]
    fn failed_conversion_is_reported() {
        struct BrokenAdc;

        impl AdcReader for BrokenAdc {
            fn read(&mut self) -> Result<u16, ()> {
                Err(())
            }
        }

        let mut sensor = OnDieSensor::new(BrokenAdc);
        assert_eq!(
            sensor.read_celsius_x100(),
            Err(SensorError::ConversionError)
        );
    }
}
