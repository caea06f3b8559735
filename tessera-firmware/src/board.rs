//! Board support for BitDogLab-style RP2040 boards
//!
//! Pin map:
//! - Green LED: GPIO11 (digital)
//! - Blue LED: GPIO12 (PWM slice 6, channel A)
//! - Red LED: GPIO13 (PWM slice 6, channel B)
//! - Joystick Y: GPIO26 (ADC0)
//! - Joystick X: GPIO27 (ADC1)
//! - Joystick button: GPIO22 (active-low, pull-up)
//! - Button A: GPIO5 (active-low, pull-up)
//! - OLED I2C1: SDA GPIO14, SCL GPIO15
//!
//! This module adapts the embassy peripherals to the `tessera-core`
//! capability traits so the drivers and core logic stay board-agnostic.

use embassy_rp::adc::{Adc, Blocking, Channel, Error as AdcError};
use embassy_rp::gpio::Output;
use embassy_rp::pwm::PwmOutput as HwPwmOutput;
use embedded_hal::pwm::SetDutyCycle;

use tessera_core::traits::{DigitalOutput, JoystickSource, PwmOutput};

/// I2C clock for the display link
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// PWM wrap value; an 8-bit duty maps straight onto the counter
pub const PWM_TOP: u16 = 255;

/// The green status LED
pub struct GreenLed {
    pin: Output<'static>,
}

impl GreenLed {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl DigitalOutput for GreenLed {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// One half of the red/blue PWM slice
pub struct LedChannel {
    channel: HwPwmOutput<'static>,
}

impl LedChannel {
    pub fn new(channel: HwPwmOutput<'static>) -> Self {
        Self { channel }
    }
}

impl PwmOutput for LedChannel {
    fn set_duty(&mut self, duty: u8) {
        // With top = 255 this is a 1:1 mapping
        let _ = self.channel.set_duty_cycle_fraction(duty as u16, PWM_TOP);
    }
}

/// The two joystick axes behind the on-chip ADC
pub struct BoardJoystick {
    adc: Adc<'static, Blocking>,
    x: Channel<'static>,
    y: Channel<'static>,
}

impl BoardJoystick {
    pub fn new(adc: Adc<'static, Blocking>, x: Channel<'static>, y: Channel<'static>) -> Self {
        Self { adc, x, y }
    }
}

impl JoystickSource for BoardJoystick {
    type Error = AdcError;

    fn sample(&mut self) -> Result<(u16, u16), AdcError> {
        let x = self.adc.blocking_read(&mut self.x)?;
        let y = self.adc.blocking_read(&mut self.y)?;
        Ok((x, y))
    }
}
