//! Analog input abstraction

/// Two-axis analog joystick
///
/// Implementations read the board ADC; samples are raw 12-bit counts in
/// `[0, 4095]` with 2048 at the stick's rest position.
pub trait JoystickSource {
    /// Error type for ADC conversions
    type Error;

    /// Read both axes, X first
    fn sample(&mut self) -> Result<(u16, u16), Self::Error>;
}
