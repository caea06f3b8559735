//! Button edge tasks
//!
//! One task instance per push button. Each waits for falling edges (the
//! buttons are active-low with pull-ups), filters contact bounce with a
//! 200 ms window, and forwards accepted presses to the control loop.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use tessera_core::{Button, Debouncer};

use crate::channels::BUTTON_EVENTS;

/// Button edge task - debounces one button and forwards presses
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut pin: Input<'static>, button: Button) {
    info!("Button task started: {:?}", button);

    let mut debounce = Debouncer::new();

    loop {
        pin.wait_for_falling_edge().await;

        let now_ms = Instant::now().as_millis();
        if debounce.accept(now_ms) {
            debug!("Button pressed: {:?}", button);
            BUTTON_EVENTS.send(button).await;
        } else {
            trace!("Bounce ignored: {:?}", button);
        }
    }
}
