//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic and
//! hardware-specific implementations, so the core and the drivers can be
//! tested on the host with mock implementations.

pub mod analog;
pub mod led;

pub use analog::JoystickSource;
pub use led::{DigitalOutput, PwmOutput};
