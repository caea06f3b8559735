//! Board-agnostic core logic for the Tessera demo firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Bit-packed framebuffer with page-oriented layout
//! - Shape renderer (square + border styles)
//! - Joystick-to-screen and joystick-to-intensity mapping policy
//! - Shared control state and button debouncing
//! - Hardware abstraction traits (joystick, digital output, PWM output)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod framebuffer;
pub mod input;
pub mod render;
pub mod state;
pub mod traits;

pub use framebuffer::{Framebuffer, HEIGHT, PAGES, WIDTH};
pub use render::{BorderStyle, SQUARE_SIZE};
pub use state::{Button, ControlState, Debouncer};
