//! Joystick mapping policy: raw ADC counts to screen position and LED duty
//!
//! Two deadzones apply around the stick's center, and they are intentionally
//! different sizes: the position mapping uses a wide 300-count band so the
//! square does not flicker around mid-screen at rest, while the LED
//! intensity mapping uses a tight 50-count band so the LEDs respond to small
//! deflections. The asymmetry is part of the contract, not an oversight.

use crate::framebuffer::{HEIGHT, WIDTH};
use crate::render::SQUARE_SIZE;

/// Full-scale 12-bit ADC reading
pub const ADC_MAX: i32 = 4095;

/// Raw reading for the stick at rest
pub const ADC_CENTER: i32 = 2048;

/// Deadzone half-width for the position mapping, in raw counts
pub const POSITION_DEADZONE: i32 = 300;

/// Deadzone half-width for the LED intensity mapping, in raw counts
pub const INTENSITY_DEADZONE: i32 = 50;

/// Map one axis to a screen coordinate along an `extent`-pixel axis
///
/// Inside the deadzone the axis holds its neutral mid-screen value (screen
/// center minus half the square size). Outside it, the raw deflection is
/// scaled across `extent - SQUARE_SIZE`; the result may be negative or past
/// the right/bottom edge, and the renderer clamps it.
pub fn axis_to_coord(raw: u16, extent: i32) -> i32 {
    let span = extent - SQUARE_SIZE;
    let delta = raw as i32 - ADC_CENTER;

    if delta.abs() <= POSITION_DEADZONE {
        span / 2
    } else {
        delta * span / (ADC_MAX - ADC_CENTER)
    }
}

/// Map one axis deflection to a PWM duty in [0, 255]
///
/// Deflections under [`INTENSITY_DEADZONE`] are forced to zero; everything
/// else scales linearly and saturates at 255.
pub fn axis_intensity(raw: u16) -> u8 {
    let delta = (raw as i32 - ADC_CENTER).abs();

    if delta < INTENSITY_DEADZONE {
        return 0;
    }

    (delta * 255 / (ADC_MAX - ADC_CENTER)).min(255) as u8
}

/// Requested top-left corner of the square, before clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SquarePosition {
    pub x: i32,
    pub y: i32,
}

impl SquarePosition {
    /// Map a raw joystick sample to a square position
    pub fn from_raw(x_raw: u16, y_raw: u16) -> Self {
        Self {
            x: axis_to_coord(x_raw, WIDTH as i32),
            y: axis_to_coord(y_raw, HEIGHT as i32),
        }
    }
}

/// PWM duty levels for the two intensity LEDs
///
/// Red follows the X axis, blue the Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedLevels {
    pub red: u8,
    pub blue: u8,
}

impl LedLevels {
    /// Map a raw joystick sample to LED duty levels
    pub fn from_raw(x_raw: u16, y_raw: u16) -> Self {
        Self {
            red: axis_intensity(x_raw),
            blue: axis_intensity(y_raw),
        }
    }

    pub const OFF: Self = Self { red: 0, blue: 0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_neutral() {
        let pos = SquarePosition::from_raw(2048, 2048);
        assert_eq!(pos.x, 60); // 128/2 - 8/2
        assert_eq!(pos.y, 28); // 64/2 - 8/2

        let levels = LedLevels::from_raw(2048, 2048);
        assert_eq!(levels, LedLevels::OFF);
    }

    #[test]
    fn test_position_deadzone_boundaries() {
        // Still inside the band at exactly +/- 300
        assert_eq!(axis_to_coord(2048 + 300, WIDTH as i32), 60);
        assert_eq!(axis_to_coord(2048 - 300, WIDTH as i32), 60);

        // One count past the band the formula takes over
        assert_eq!(axis_to_coord(2048 + 301, WIDTH as i32), 301 * 120 / 2047);
        assert_eq!(axis_to_coord(2048 - 301, WIDTH as i32), -301 * 120 / 2047);
    }

    #[test]
    fn test_full_deflection_reaches_screen_edges() {
        // Full right: top-left lands exactly at the clamp limit
        assert_eq!(axis_to_coord(4095, WIDTH as i32), 120);
        assert_eq!(axis_to_coord(4095, HEIGHT as i32), 56);

        // Full left goes negative; the renderer clamps to 0
        assert!(axis_to_coord(0, WIDTH as i32) < 0);
    }

    #[test]
    fn test_max_deflection_intensity_clamps_to_255() {
        assert_eq!(axis_intensity(4095), 255);
        // Low side overshoots (|0 - 2048| > 2047) and saturates
        assert_eq!(axis_intensity(0), 255);
    }

    #[test]
    fn test_intensity_axes_are_independent() {
        let levels = LedLevels::from_raw(4095, 2048);
        assert_eq!(levels.red, 255);
        assert_eq!(levels.blue, 0);

        let levels = LedLevels::from_raw(2048, 4095);
        assert_eq!(levels.red, 0);
        assert_eq!(levels.blue, 255);
    }

    #[test]
    fn test_intensity_deadzone_is_tighter_than_position() {
        // 49 counts: below the intensity band
        assert_eq!(axis_intensity(2048 + 49), 0);

        // 50 counts: intensity responds while position still holds neutral
        assert!(axis_intensity(2048 + 50) > 0);
        assert_eq!(axis_to_coord(2048 + 50, WIDTH as i32), 60);
    }

    #[test]
    fn test_intensity_scales_linearly() {
        // Half deflection is close to half duty
        let duty = axis_intensity(2048 + 1024);
        assert!((126..=129).contains(&duty), "duty = {}", duty);
    }
}
