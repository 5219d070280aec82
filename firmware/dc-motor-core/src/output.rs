//! Output side of the control loop: motor driver and indicator

use crate::config::ControlConfig;
use crate::direction::Direction;
use crate::peripherals::{Indicator, MotorDriver};
use crate::state::{MotorCommand, SharedMotorState};

/// Status light selection, at most one lit at a time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorChannel {
    /// Everything off
    #[default]
    None,
    /// Stopped
    A,
    /// Clockwise
    B,
    /// Counter-clockwise
    C,
}

impl From<Direction> for IndicatorChannel {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Stopped => IndicatorChannel::A,
            Direction::Clockwise => IndicatorChannel::B,
            Direction::CounterClockwise => IndicatorChannel::C,
        }
    }
}

/// Every output level for one command
///
/// | Direction        | enable | line A | line B | compare            |
/// |------------------|--------|--------|--------|--------------------|
/// | Stopped          | L      | L      | L      | 0                  |
/// | Clockwise        | H      | H      | L      | duty * period / 100 |
/// | CounterClockwise | H      | L      | H      | duty * period / 100 |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriveSignals {
    pub enable: bool,
    pub line_a: bool,
    pub line_b: bool,
    pub compare: u32,
    pub indicator: IndicatorChannel,
}

impl DriveSignals {
    pub fn for_command(command: MotorCommand, pwm_period: u32) -> Self {
        let (enable, line_a, line_b) = match command.direction() {
            Direction::Stopped => (false, false, false),
            Direction::Clockwise => (true, true, false),
            Direction::CounterClockwise => (true, false, true),
        };
        let compare = if enable {
            command.duty().compare_value(pwm_period).min(pwm_period)
        } else {
            0
        };
        Self {
            enable,
            line_a,
            line_b,
            compare,
            indicator: command.direction().into(),
        }
    }
}

/// State owned by the output task
pub struct OutputController {
    applied: Option<MotorCommand>,
    period_ms: u32,
}

impl OutputController {
    pub const fn new(config: &ControlConfig) -> Self {
        Self {
            applied: None,
            period_ms: config.output_period_ms,
        }
    }

    /// Time between two calls to [`OutputController::apply`]
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Last command written to the hardware
    pub fn applied(&self) -> Option<MotorCommand> {
        self.applied
    }

    /// Run one output period: drive the hardware from the latest
    /// command in `state`
    pub fn apply<M, I>(
        &mut self,
        state: &SharedMotorState,
        motor: &mut M,
        indicator: &mut I,
    ) -> DriveSignals
    where
        M: MotorDriver,
        I: Indicator,
    {
        self.apply_command(state.read(), motor, indicator)
    }

    /// Drive the hardware from `command`
    ///
    /// All outputs are rewritten every call, not only on change,
    /// so a glitched pin is corrected within one period.
    pub fn apply_command<M, I>(
        &mut self,
        command: MotorCommand,
        motor: &mut M,
        indicator: &mut I,
    ) -> DriveSignals
    where
        M: MotorDriver,
        I: Indicator,
    {
        let signals = DriveSignals::for_command(command, motor.pwm_period());

        motor.set_motor_outputs(signals.enable, signals.line_a, signals.line_b);
        motor.set_pwm_duty(signals.compare);
        indicator.set_indicator(signals.indicator);

        if self.applied != Some(command) {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "Motor {} at {}% (compare {})",
                command.direction(),
                command.duty().percent(),
                signals.compare
            );
            self.applied = Some(command);
        }

        signals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duty::Duty;

    #[test]
    fn test_period_from_config() {
        let config = ControlConfig::default();
        let output = OutputController::new(&config);
        assert_eq!(output.period_ms(), config.output_period_ms);
        assert_eq!(output.applied(), None);
    }

    #[test]
    fn test_counter_clockwise_compare() {
        let command = MotorCommand::new(Direction::CounterClockwise, Duty::new(30));
        let signals = DriveSignals::for_command(command, 1000);
        assert_eq!(
            signals,
            DriveSignals {
                enable: true,
                line_a: false,
                line_b: true,
                compare: 300,
                indicator: IndicatorChannel::C,
            }
        );
    }

    #[test]
    fn test_clockwise_lines() {
        let command = MotorCommand::new(Direction::Clockwise, Duty::new(75));
        let signals = DriveSignals::for_command(command, 1000);
        assert!(signals.enable);
        assert!(signals.line_a);
        assert!(!signals.line_b);
        assert_eq!(signals.compare, 750);
        assert_eq!(signals.indicator, IndicatorChannel::B);
    }

    #[test]
    fn test_stopped_disables_driver() {
        let signals = DriveSignals::for_command(MotorCommand::STOPPED, 1000);
        assert!(!signals.enable);
        assert!(!signals.line_a && !signals.line_b);
        assert_eq!(signals.compare, 0);
        assert_eq!(signals.indicator, IndicatorChannel::A);
    }

    #[test]
    fn test_full_duty_never_exceeds_period() {
        for period in [0, 1, 99, 1000, 65_536] {
            let command = MotorCommand::new(Direction::Clockwise, Duty::MAX);
            assert_eq!(DriveSignals::for_command(command, period).compare, period);
        }
    }

    #[test]
    fn test_one_indicator_per_direction() {
        let channels = [
            Direction::Stopped,
            Direction::Clockwise,
            Direction::CounterClockwise,
        ]
        .map(IndicatorChannel::from);
        assert_eq!(
            channels,
            [IndicatorChannel::A, IndicatorChannel::B, IndicatorChannel::C]
        );
    }
}
