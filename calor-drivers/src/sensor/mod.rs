//! Analog temperature sources

pub mod dial;
pub mod onboard;

pub use dial::SetpointDial;
pub use onboard::OnDieSensor;

/// ADC reading trait for platform abstraction
///
/// Raw codes are 16-bit full-scale (0..65535); platforms with narrower
/// converters stretch their samples before handing them over.
pub trait AdcReader {
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Full-scale reference voltage in microvolts
pub(crate) const VREF_UV: i64 = 3_300_000;

/// Maximum raw code
pub(crate) const ADC_MAX: i64 = 65_535;

/// Convert a raw code to microvolts at the pin
pub(crate) fn raw_to_uv(raw: u16) -> i64 {
    raw as i64 * VREF_UV / ADC_MAX
}

/// Divide with round-half-away-from-zero; `d` must be positive
pub(crate) fn div_round(n: i64, d: i64) -> i64 {
    if n >= 0 {
        (n + d / 2) / d
    } else {
        (n - d / 2) / d
    }
}
