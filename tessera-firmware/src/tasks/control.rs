//! Foreground control loop
//!
//! The single render/update loop: apply queued button presses, sample the
//! joystick, drive the LEDs, compose a fresh frame, flush it to the OLED,
//! and sleep until the next tick. The display is best-effort - a failed
//! flush is logged and the next frame simply tries again.

use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::{Duration, Ticker};

use tessera_core::input::{LedLevels, SquarePosition};
use tessera_core::render::compose_frame;
use tessera_core::traits::JoystickSource;
use tessera_core::ControlState;
use tessera_drivers::{Ssd1306, StatusLeds};

use crate::board::{BoardJoystick, GreenLed, LedChannel};
use crate::channels::BUTTON_EVENTS;

/// Frame interval in milliseconds (~10 Hz refresh)
pub const FRAME_INTERVAL_MS: u64 = 100;

/// The OLED behind the board's blocking I2C1 bus
pub type Display = Ssd1306<I2c<'static, I2C1, Blocking>>;

/// Control loop task - input sampling, LED drive, and display refresh
#[embassy_executor::task]
pub async fn control_task(
    mut display: Display,
    mut joystick: BoardJoystick,
    mut leds: StatusLeds<GreenLed, LedChannel, LedChannel>,
) {
    info!("Control task started");

    let mut state = ControlState::new();
    let mut ticker = Ticker::every(Duration::from_millis(FRAME_INTERVAL_MS));

    loop {
        // Presses accumulated since the last frame
        while let Ok(button) = BUTTON_EVENTS.try_receive() {
            state.apply(button);
            debug!(
                "State: green={} pwm={} border={:?}",
                state.green_led_on, state.pwm_enabled, state.border
            );
        }

        match joystick.sample() {
            Ok((x_raw, y_raw)) => {
                leds.apply(&state, LedLevels::from_raw(x_raw, y_raw));

                let pos = SquarePosition::from_raw(x_raw, y_raw);
                compose_frame(display.framebuffer_mut(), state.border, pos.x, pos.y);
                if display.flush().is_err() {
                    warn!("Display flush failed, retrying next frame");
                }
            }
            Err(_) => {
                warn!("Joystick ADC read failed, skipping frame");
            }
        }

        ticker.next().await;
    }
}
