//! Hardware driver implementations for the Tessera demo firmware
//!
//! Drivers are generic over bus/pin abstractions (`embedded-hal` for I2C,
//! the `tessera-core` capability traits for LEDs) so they can be exercised
//! on the host with mock hardware.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod leds;
pub mod ssd1306;

pub use leds::StatusLeds;
pub use ssd1306::Ssd1306;
