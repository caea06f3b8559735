//! LED output abstractions
//!
//! Implementations should handle the actual hardware register manipulation
//! for the specific chip.

/// Digital on/off output pin
pub trait DigitalOutput {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// PWM output channel with an 8-bit duty range
pub trait PwmOutput {
    /// Set the duty level; 0 is off, 255 is fully on
    fn set_duty(&mut self, duty: u8);
}
