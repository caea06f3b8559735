//! Tessera - Joystick / OLED demo firmware
//!
//! Main firmware binary for BitDogLab-style RP2040 boards. A 2-axis analog
//! joystick moves an 8x8 square on a 128x64 SSD1306 OLED; the joystick
//! button cycles the screen border style and toggles the green LED, button
//! A switches the red/blue intensity LEDs on and off.
//!
//! Named after the Latin "tessera" - a small square mosaic tile.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel as AdcChannel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::{self, Pwm};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use tessera_core::Button;
use tessera_drivers::{Ssd1306, StatusLeds};

mod board;
mod channels;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tessera firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Display link: I2C1 at 400 kHz (SDA GPIO14, SCL GPIO15)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = board::I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);

    let mut display = Ssd1306::new(i2c);
    if let Err(e) = display.init() {
        // Without a display link there is nothing useful to run
        defmt::panic!("SSD1306 initialization failed: {:?}", e);
    }
    info!("Display initialized");

    // Joystick axes: ADC0 = Y (GPIO26), ADC1 = X (GPIO27)
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let y_channel = AdcChannel::new_pin(p.PIN_26, Pull::None);
    let x_channel = AdcChannel::new_pin(p.PIN_27, Pull::None);
    let joystick = board::BoardJoystick::new(adc, x_channel, y_channel);

    // LEDs: green digital on GPIO11, blue/red on PWM slice 6 (GPIO12/13)
    let green = board::GreenLed::new(Output::new(p.PIN_11, Level::Low));

    let mut pwm_config = pwm::Config::default();
    pwm_config.top = board::PWM_TOP;
    let led_pwm = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, pwm_config);
    let (blue, red) = led_pwm.split();
    let leds = StatusLeds::new(
        green,
        board::LedChannel::new(red.unwrap()),
        board::LedChannel::new(blue.unwrap()),
    );
    info!("ADC and LEDs initialized");

    // Buttons are active-low with pull-ups
    let joystick_button = Input::new(p.PIN_22, Pull::Up);
    let action_button = Input::new(p.PIN_5, Pull::Up);

    // Spawn tasks
    spawner
        .spawn(tasks::button_task(joystick_button, Button::Joystick))
        .unwrap();
    spawner
        .spawn(tasks::button_task(action_button, Button::Action))
        .unwrap();
    spawner
        .spawn(tasks::control_task(display, joystick, leds))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
