use dc_motor_core::peripherals::MotorDriver;
use pwm::MotorPwm;
use stm32f7xx_hal::gpio::{Output, Pin, PB4, PH6, PI2};

pub mod pwm;

/// Drive a push-pull output high or low
pub fn set_level<const P: char, const N: u8>(pin: &mut Pin<P, N, Output>, high: bool) {
    if high {
        pin.set_high();
    } else {
        pin.set_low();
    }
}

/// Brushed DC motor behind an H-bridge driver (TB6612 style)
///
/// This struct is specific to the STM32F746 DISCO board. The
/// pins on the Arduino header are listed in the comment.
///
/// The driver has a standby/enable input and two direction
/// inputs. When enable is low the bridge is off and the motor
/// coasts. When enable is high, line A high and line B low
/// turns the motor clockwise, and the opposite turns it
/// counter-clockwise. Speed is set by the PWM input.
pub struct MotorOutputs {
    pwm: MotorPwm,

    // Enable (standby), CN4, pin 4 (D3)
    enable: PB4<Output>,

    // Direction line A (IN1), CN4, pin 7 (D6)
    line_a: PH6<Output>,

    // Direction line B (IN2), CN7, pin 1 (D8)
    line_b: PI2<Output>,
}

impl MotorOutputs {
    /// Starts with the bridge disabled and zero duty
    pub fn new(pwm: MotorPwm, enable: PB4<Output>, line_a: PH6<Output>, line_b: PI2<Output>) -> Self {
        let mut motor = Self {
            pwm,
            enable,
            line_a,
            line_b,
        };
        motor.set_motor_outputs(false, false, false);
        motor.set_pwm_duty(0);
        motor.pwm.enable(true);
        motor
    }
}

impl MotorDriver for MotorOutputs {
    fn set_motor_outputs(&mut self, enable: bool, line_a: bool, line_b: bool) {
        // Disable before touching the direction lines, and only
        // enable once they are settled
        if !enable {
            set_level(&mut self.enable, false);
        }
        set_level(&mut self.line_a, line_a);
        set_level(&mut self.line_b, line_b);
        if enable {
            set_level(&mut self.enable, true);
        }
    }

    fn set_pwm_duty(&mut self, compare_value: u32) {
        let compare = compare_value.min(self.pwm.period() as u32) as u16;
        self.pwm.set_duty(compare);
    }

    fn pwm_period(&self) -> u32 {
        self.pwm.period() as u32
    }
}
