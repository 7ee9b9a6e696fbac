//! Control loop
//!
//! One synchronous loop ties everything together: sample both analog
//! inputs, drive the relay and RGB indicator, check the exit button with
//! a debounce recheck, and push a freshly composed frame. Hardware
//! faults are fatal; the recovery model for this class of demo is
//! crash-and-restart.

use crate::policy::{IndicatorBand, RelayState};
use crate::render::frame::compose;
use crate::render::FormatError;
use crate::traits::{
    celsius_x100_to_x10, AmbientSensor, Delay, DisplayDriver, DisplayError, ExitButton,
    RelayOutput, RgbOutput, SensorError, SetpointInput,
};

/// Inter-tick sleep, milliseconds
pub const TICK_MS: u32 = 500;
/// Debounce recheck delay, milliseconds
pub const DEBOUNCE_MS: u32 = 5;

/// Loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopState {
    /// Normal operation, ticking
    Running,
    /// Teardown done; no further transitions
    Exiting,
}

/// Fatal loop faults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// Analog sampling failed
    Sensor(SensorError),
    /// Display bus fault
    Display(DisplayError),
    /// Setpoint outside the renderable digit range
    Format(FormatError),
}

impl From<SensorError> for Fault {
    fn from(e: SensorError) -> Self {
        Fault::Sensor(e)
    }
}

impl From<DisplayError> for Fault {
    fn from(e: DisplayError) -> Self {
        Fault::Display(e)
    }
}

impl From<FormatError> for Fault {
    fn from(e: FormatError) -> Self {
        Fault::Format(e)
    }
}

/// The thermostat control loop
///
/// Owns every capability for the duration of the program; constructed
/// once at startup and handed the peripherals explicitly (no globals).
pub struct Thermostat<A, S, R, L, B, D> {
    ambient: A,
    setpoint: S,
    relay: R,
    rgb: L,
    button: B,
    display: D,
    state: LoopState,
}

impl<A, S, R, L, B, D> Thermostat<A, S, R, L, B, D>
where
    A: AmbientSensor,
    S: SetpointInput,
    R: RelayOutput,
    L: RgbOutput,
    B: ExitButton,
    D: DisplayDriver,
{
    pub fn new(ambient: A, setpoint: S, relay: R, rgb: L, button: B, display: D) -> Self {
        Self {
            ambient,
            setpoint,
            relay,
            rgb,
            button,
            display,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Run one tick
    ///
    /// Returns the state after the tick; the caller sleeps [`TICK_MS`]
    /// between `Running` ticks. Once `Exiting` is returned the loop is
    /// torn down and must not be ticked again.
    pub fn tick(&mut self, delay: &mut impl Delay) -> Result<LoopState, Fault> {
        if self.state == LoopState::Exiting {
            return Ok(LoopState::Exiting);
        }

        let setpoint_x10 = self.setpoint.read_celsius_x10()?;
        let ambient_x100 = self.ambient.read_celsius_x100()?;
        // The one-decimal value feeds the relay comparison and the frame;
        // banding stays on the full two-decimal reading
        let ambient_x10 = celsius_x100_to_x10(ambient_x100);

        // Relay: toggle while heating (blink), hold inactive otherwise.
        // The blink phase carries over from the previous On period.
        match RelayState::demand(setpoint_x10, ambient_x10) {
            RelayState::On => {
                let level = self.relay.is_on();
                self.relay.set_on(!level);
            }
            RelayState::Off => self.relay.set_on(false),
        }

        let (r, g, b) = IndicatorBand::from_ambient_x100(ambient_x100).rgb();
        self.rgb.set(r, g, b);
        self.rgb.commit();

        // Exit check: one recheck after a short delay filters transients
        if self.button.is_pressed() {
            delay.delay_ms(DEBOUNCE_MS);
            if self.button.is_pressed() {
                self.shutdown()?;
                self.state = LoopState::Exiting;
                return Ok(LoopState::Exiting);
            }
        }

        let frame = compose(ambient_x10, setpoint_x10)?;
        self.display.clear()?;
        for (i, row) in frame.rows().enumerate() {
            self.display.text(i as u8, 0, row)?;
        }
        self.display.flush()?;

        Ok(LoopState::Running)
    }

    /// Run until the exit button is confirmed
    pub fn run(&mut self, delay: &mut impl Delay) -> Result<(), Fault> {
        loop {
            match self.tick(delay)? {
                LoopState::Exiting => return Ok(()),
                LoopState::Running => delay.delay_ms(TICK_MS),
            }
        }
    }

    /// Teardown: blank frame on the panel, indicator dark, relay inactive
    fn shutdown(&mut self) -> Result<(), Fault> {
        self.display.clear()?;
        self.display.flush()?;
        self.rgb.off();
        self.relay.set_on(false);
        Ok(())
    }
}
