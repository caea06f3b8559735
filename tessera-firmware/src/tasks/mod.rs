//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod buttons;
pub mod control;

pub use buttons::button_task;
pub use control::control_task;
