//! Board-agnostic core logic for the Calor thermostat demo
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits (display, sensors, relay, RGB, button)
//! - Indicator band and relay demand policy
//! - Glyph font, digit formatter and power bar rendering
//! - Screen composition (the fixed 16x16 status frame)
//! - The control loop state machine
//!
//! Temperatures are carried as fixed-point integers: `x10` values are
//! tenths of a degree Celsius (20.5C = 205), `x100` values hundredths.

#![no_std]
#![deny(unsafe_code)]

pub mod control;
pub mod policy;
pub mod render;
pub mod traits;
