//! Capability traits
//!
//! These traits define the interface between the control loop and
//! hardware-specific implementations. The loop never touches a register
//! or a bus directly; it only talks to these.

pub mod display;
pub mod io;

pub use display::{DisplayDriver, DisplayError};
pub use io::{
    celsius_x100_to_x10, AmbientSensor, Delay, ExitButton, RelayOutput, RgbOutput, SensorError,
    SetpointInput,
};
