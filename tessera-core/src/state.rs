//! Shared control state and button debouncing
//!
//! Button edges arrive asynchronously (interrupt-style tasks) while the
//! foreground loop renders at a fixed cadence. Instead of the usual global
//! flags, everything lives in one [`ControlState`] owned by the loop; the
//! button tasks only forward debounced [`Button`] events, so every field
//! has exactly one writer.

use crate::render::BorderStyle;

/// Minimum interval between accepted edges from one button source
pub const DEBOUNCE_WINDOW_MS: u64 = 200;

/// The two push buttons, identified after debouncing
///
/// Both are active-low at the pin; by the time an event reaches this layer
/// it is simply "a press".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// The joystick's own push button
    Joystick,
    /// The standalone A button
    Action,
}

/// State mutated by button presses and read by the render loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlState {
    /// Green (digital) LED on/off
    pub green_led_on: bool,
    /// Whether the red/blue PWM LEDs follow the joystick
    pub pwm_enabled: bool,
    /// Current screen border style
    pub border: BorderStyle,
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlState {
    /// Power-on state: green LED off, PWM LEDs live, no border
    pub const fn new() -> Self {
        Self {
            green_led_on: false,
            pwm_enabled: true,
            border: BorderStyle::None,
        }
    }

    /// Apply one debounced button press
    ///
    /// The joystick button toggles the green LED and steps the border
    /// style; the A button enables/disables the PWM LEDs.
    pub fn apply(&mut self, button: Button) {
        match button {
            Button::Joystick => {
                self.green_led_on = !self.green_led_on;
                self.border = self.border.next();
            }
            Button::Action => {
                self.pwm_enabled = !self.pwm_enabled;
            }
        }
    }
}

/// Contact-bounce filter for one button source
///
/// Edges closer than [`DEBOUNCE_WINDOW_MS`] to the last accepted edge are
/// ignored input, not errors. Each button gets its own debouncer.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    last_accepted_ms: Option<u64>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debouncer {
    /// Create a debouncer that accepts the first edge it sees
    pub const fn new() -> Self {
        Self {
            last_accepted_ms: None,
        }
    }

    /// Report an edge at `now_ms`; returns whether to act on it
    pub fn accept(&mut self, now_ms: u64) -> bool {
        match self.last_accepted_ms {
            Some(last) if now_ms.wrapping_sub(last) < DEBOUNCE_WINDOW_MS => false,
            _ => {
                self.last_accepted_ms = Some(now_ms);
                true
            }
        }
    }
}
