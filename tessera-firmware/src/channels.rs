//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use tessera_core::Button;

/// Channel capacity for debounced button presses
const BUTTON_CHANNEL_SIZE: usize = 4;

/// Debounced button presses from the button tasks to the control loop
///
/// This is the only shared mutable path in the firmware; the control loop
/// drains it at the top of each frame and applies the presses to its own
/// `ControlState`.
pub static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, Button, BUTTON_CHANNEL_SIZE> =
    Channel::new();
