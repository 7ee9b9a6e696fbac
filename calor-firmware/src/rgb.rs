//! WS2812 RGB indicator
//!
//! One WS2812 element driven through PIO + DMA. The control loop runs
//! synchronously, so the (short) DMA transfer is waited out inline.

use embassy_futures::block_on;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use smart_leds::RGB8;

use calor_core::traits::RgbOutput;

/// Single-pixel WS2812 driver wrapper
pub struct Ws2812Rgb<'d> {
    driver: PioWs2812<'d, PIO0, 0, 1>,
    pixel: RGB8,
}

impl<'d> Ws2812Rgb<'d> {
    pub fn new(driver: PioWs2812<'d, PIO0, 0, 1>) -> Self {
        Self {
            driver,
            pixel: RGB8::default(),
        }
    }
}

impl RgbOutput for Ws2812Rgb<'_> {
    fn set(&mut self, r: u8, g: u8, b: u8) {
        self.pixel = RGB8::new(r, g, b);
    }

    fn commit(&mut self) {
        block_on(self.driver.write(&[self.pixel]));
    }
}
