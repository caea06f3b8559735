//! Status LED driver
//!
//! One digital LED (green, toggled by the joystick button) and two PWM
//! intensity LEDs (red/blue) that follow the joystick deflection. Generic
//! over the core output traits so the policy can be tested with mock pins.

use tessera_core::input::LedLevels;
use tessera_core::traits::{DigitalOutput, PwmOutput};
use tessera_core::ControlState;

/// The board's three status LEDs
pub struct StatusLeds<G, R, B> {
    green: G,
    red: R,
    blue: B,
}

impl<G, R, B> StatusLeds<G, R, B>
where
    G: DigitalOutput,
    R: PwmOutput,
    B: PwmOutput,
{
    /// Create the LED bank with everything off
    pub fn new(green: G, red: R, blue: B) -> Self {
        let mut leds = Self { green, red, blue };
        leds.all_off();
        leds
    }

    /// Force every LED off
    pub fn all_off(&mut self) {
        self.green.set_low();
        self.red.set_duty(0);
        self.blue.set_duty(0);
    }

    /// Drive the LEDs from the current control state and joystick levels
    ///
    /// When PWM is disabled the intensity LEDs are held at zero regardless
    /// of the mapped levels; the green LED follows its toggle either way.
    pub fn apply(&mut self, state: &ControlState, levels: LedLevels) {
        self.green.set_state(state.green_led_on);

        let levels = if state.pwm_enabled {
            levels
        } else {
            LedLevels::OFF
        };
        self.red.set_duty(levels.red);
        self.blue.set_duty(levels.blue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::Button;

    /// Mock digital pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl DigitalOutput for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    /// Mock PWM channel remembering the last duty
    struct MockPwm {
        duty: u8,
    }

    impl MockPwm {
        fn new() -> Self {
            Self { duty: 0 }
        }
    }

    impl PwmOutput for MockPwm {
        fn set_duty(&mut self, duty: u8) {
            self.duty = duty;
        }
    }

    fn leds() -> StatusLeds<MockPin, MockPwm, MockPwm> {
        StatusLeds::new(MockPin::new(), MockPwm::new(), MockPwm::new())
    }

    #[test]
    fn test_starts_all_off() {
        let leds = leds();
        assert!(!leds.green.is_set_high());
        assert_eq!(leds.red.duty, 0);
        assert_eq!(leds.blue.duty, 0);
    }

    #[test]
    fn test_apply_follows_levels_and_green_toggle() {
        let mut leds = leds();
        let mut state = ControlState::new();
        state.apply(Button::Joystick); // green on

        leds.apply(&state, LedLevels { red: 200, blue: 17 });

        assert!(leds.green.is_set_high());
        assert_eq!(leds.red.duty, 200);
        assert_eq!(leds.blue.duty, 17);
    }

    #[test]
    fn test_pwm_disable_forces_intensity_to_zero() {
        let mut leds = leds();
        let mut state = ControlState::new();
        state.apply(Button::Action); // pwm off

        leds.apply(&state, LedLevels { red: 255, blue: 255 });

        assert_eq!(leds.red.duty, 0);
        assert_eq!(leds.blue.duty, 0);

        // Green is unaffected by the PWM switch
        assert!(!leds.green.is_set_high());

        // Re-enabling picks the levels back up next apply
        state.apply(Button::Action);
        leds.apply(&state, LedLevels { red: 90, blue: 40 });
        assert_eq!(leds.red.duty, 90);
        assert_eq!(leds.blue.duty, 40);
    }
}
