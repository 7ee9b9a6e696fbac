//! Calor - Bang-Bang Thermostat Demo Firmware
//!
//! Main firmware binary for the Raspberry Pi Pico W mounted on the
//! Waveshare demo kit: on-die temperature sensor and setpoint pot on
//! the ADC, heating LED and exit button on GPIO, WS2812 indicator on
//! PIO, SSD1327 OLED on I2C.
//!
//! Named after the Latin "calor" - heat.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Blocking, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_time::{block_for, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use calor_core::control::Thermostat;
use calor_core::traits::Delay;
use calor_drivers::{AdcReader, GpioButton, GpioRelay, InputPin, OnDieSensor, OutputPin, SetpointDial};

mod rgb;
mod ssd1327;

use crate::rgb::Ws2812Rgb;
use crate::ssd1327::Ssd1327;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

/// Blocking ADC shared between the ambient sensor and the setpoint pot
///
/// The control loop is single-threaded and reads the channels one at a
/// time, so a RefCell is enough to hand the converter to both drivers.
struct AdcChannelReader<'a, 'd> {
    adc: &'a RefCell<Adc<'d, Blocking>>,
    channel: Channel<'d>,
}

impl AdcReader for AdcChannelReader<'_, '_> {
    fn read(&mut self) -> Result<u16, ()> {
        let raw = self
            .adc
            .borrow_mut()
            .blocking_read(&mut self.channel)
            .map_err(|_| ())?;

        // Stretch the 12-bit conversion to the 16-bit full-scale code
        // the drivers expect
        Ok((raw << 4) | (raw >> 8))
    }
}

struct RpOutputPin<'d>(Output<'d>);

impl OutputPin for RpOutputPin<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}

struct RpInputPin<'d>(Input<'d>);

impl InputPin for RpInputPin<'_> {
    fn is_low(&mut self) -> bool {
        self.0.is_low()
    }
}

/// Busy-wait delay for the synchronous control loop
struct BusyDelay;

impl Delay for BusyDelay {
    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Calor firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup ADC: on-die temperature sensor plus the setpoint pot on
    // GPIO27 (ADC1)
    let adc = RefCell::new(Adc::new_blocking(p.ADC, AdcConfig::default()));
    let ambient_channel = Channel::new_temp_sensor(p.ADC_TEMP_SENSOR);
    let dial_channel = Channel::new_pin(p.PIN_27, Pull::None);

    let ambient = OnDieSensor::new(AdcChannelReader {
        adc: &adc,
        channel: ambient_channel,
    });
    let setpoint = SetpointDial::new(AdcChannelReader {
        adc: &adc,
        channel: dial_channel,
    });

    info!("ADC initialized");

    // Heating LED on GPIO10. The kit's LED module is active-low, so the
    // pin idles high.
    let relay = GpioRelay::new_active_low(RpOutputPin(Output::new(p.PIN_10, Level::High)));

    // Exit button on GPIO3, pulled up, pressed = low
    let button = GpioButton::new(RpInputPin(Input::new(p.PIN_3, Pull::Up)));

    // WS2812 indicator on GPIO22 via PIO0 + DMA
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let ws2812 = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_22, &program);
    let rgb = Ws2812Rgb::new(ws2812);

    info!("RGB indicator initialized");

    // SSD1327 OLED on I2C1 (SDA=GPIO6, SCL=GPIO7) at 1 MHz
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = 1_000_000;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_7, p.PIN_6, i2c_config);

    let mut display = Ssd1327::new(i2c);
    if display.init(&mut embassy_time::Delay).is_err() {
        defmt::panic!("Display init failed");
    }

    info!("Display initialized");

    let mut thermostat = Thermostat::new(ambient, setpoint, relay, rgb, button, display);
    let mut delay = BusyDelay;

    info!("Entering control loop");

    match thermostat.run(&mut delay) {
        Ok(()) => info!("Exit requested, outputs parked"),
        Err(fault) => defmt::panic!("Control loop fault: {}", fault),
    }

    // Everything is shut down; nothing left to do
    loop {
        Timer::after_secs(60).await;
    }
}
