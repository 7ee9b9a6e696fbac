//! Hardware drivers for the Calor thermostat demo
//!
//! Implementations of the `calor-core` capability traits over small
//! platform traits (`AdcReader`, `OutputPin`, `InputPin`), so every
//! driver tests on the host with mocks. The firmware crate provides the
//! RP2040 adapters.

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod relay;
pub mod sensor;

pub use button::{GpioButton, InputPin};
pub use relay::{GpioRelay, OutputPin};
pub use sensor::{AdcReader, OnDieSensor, SetpointDial};
