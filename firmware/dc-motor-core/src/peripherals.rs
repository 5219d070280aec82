//! Hardware seams of the control loop
//!
//! The firmware implements these for the board's pins, ADC
//! and timer. Every method is expected to return quickly;
//! the only wait allowed is the bounded conversion poll.

use crate::fault::ConversionError;
use crate::output::IndicatorChannel;

/// Direction-cycle push button
pub trait Button {
    /// Instantaneous level, `true` while pressed
    fn read_button(&mut self) -> bool;
}

/// Potentiometer behind a single-shot ADC channel
pub trait AnalogInput {
    /// Start a fresh conversion
    ///
    /// A result left over from an earlier conversion that timed
    /// out must be discarded here, so the next poll only returns
    /// a sample taken in the current period.
    fn start_conversion(&mut self);

    /// Wait at most `timeout_ms` for the conversion started by
    /// [`AnalogInput::start_conversion`] and return the sample
    fn poll_conversion(&mut self, timeout_ms: u32) -> Result<u16, ConversionError>;
}

/// H-bridge motor driver with an enable line, two direction
/// lines and a PWM speed input
pub trait MotorDriver {
    fn set_motor_outputs(&mut self, enable: bool, line_a: bool, line_b: bool);

    /// Write the PWM compare register
    fn set_pwm_duty(&mut self, compare_value: u32);

    /// Counts per PWM period, i.e. the compare value for 100%
    fn pwm_period(&self) -> u32;
}

/// Mutually exclusive status lights
pub trait Indicator {
    fn set_indicator(&mut self, channel: IndicatorChannel);
}
