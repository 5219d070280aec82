//! Input side of the control loop: button and potentiometer

use crate::config::ControlConfig;
use crate::direction::Direction;
use crate::duty::{Duty, DutyMapper};
use crate::fault::Fault;
use crate::peripherals::{AnalogInput, Button};
use crate::state::{MotorCommand, SharedMotorState};

/// Period-based press detection
///
/// A press is seen only on the sample where the level goes from
/// low to high relative to the previous sample. Holding the
/// button or releasing it does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeDetector {
    last: bool,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self { last: false }
    }

    /// Feed the current level, returns `true` on a rising edge
    pub fn rising(&mut self, level: bool) -> bool {
        let rising = level && !self.last;
        self.last = level;
        rising
    }
}

/// Outcome of one input period
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputReport {
    /// Command published this period
    pub command: MotorCommand,
    /// A button press advanced the direction
    pub pressed: bool,
    /// Fault absorbed this period, if any
    pub fault: Option<Fault>,
}

/// State owned by the input task
///
/// Holds the current direction, the button edge state and the
/// last published duty. [`InputController::poll`] is one
/// period of the task.
pub struct InputController {
    direction: Direction,
    duty: Duty,
    button: EdgeDetector,
    mapper: DutyMapper,
    conversion_timeout_ms: u32,
    period_ms: u32,
}

impl InputController {
    pub const fn new(config: &ControlConfig) -> Self {
        Self {
            direction: Direction::Stopped,
            duty: Duty::ZERO,
            button: EdgeDetector::new(),
            mapper: DutyMapper::new(config.sample_max),
            conversion_timeout_ms: config.conversion_timeout_ms,
            period_ms: config.input_period_ms,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Time between two calls to [`InputController::poll`]
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Run one input period and publish the result to `state`
    ///
    /// The direction is updated before the potentiometer is
    /// sampled, so a press into `Stopped` zeroes the duty in the
    /// same period. If the conversion times out the previous
    /// duty is kept, which is zero after a stop.
    pub fn poll<B, A>(
        &mut self,
        button: &mut B,
        adc: &mut A,
        state: &SharedMotorState,
    ) -> InputReport
    where
        B: Button,
        A: AnalogInput,
    {
        let pressed = self.button.rising(button.read_button());
        if pressed {
            self.direction = self.direction.advance();
            #[cfg(feature = "defmt")]
            defmt::info!("Button pressed, direction now {}", self.direction);
        }

        let mut fault = None;
        adc.start_conversion();
        let duty = match adc.poll_conversion(self.conversion_timeout_ms) {
            Ok(sample) => {
                if self.mapper.is_out_of_range(sample) {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("ADC sample {} above full scale, clamped", sample);
                    fault = Some(Fault::OutOfRangeSample(sample));
                }
                self.mapper.map(sample, self.direction)
            }
            Err(err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("ADC conversion failed ({}), keeping duty {}", err, self.duty);
                fault = Some(Fault::from(err));
                self.duty
            }
        };

        let command = MotorCommand::new(self.direction, duty);
        self.duty = command.duty();
        state.publish(command);

        InputReport {
            command,
            pressed,
            fault,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::ConversionError;

    struct Level(bool);

    impl Button for Level {
        fn read_button(&mut self) -> bool {
            self.0
        }
    }

    struct Adc(Result<u16, ConversionError>);

    impl AnalogInput for Adc {
        fn start_conversion(&mut self) {}

        fn poll_conversion(&mut self, _timeout_ms: u32) -> Result<u16, ConversionError> {
            self.0
        }
    }

    #[test]
    fn test_edge_detector() {
        let mut edge = EdgeDetector::new();
        let levels = [false, true, true, false, true, false, false, true];
        let expected = [false, true, false, false, true, false, false, true];
        for (level, expected) in levels.into_iter().zip(expected) {
            assert_eq!(edge.rising(level), expected);
        }
    }

    #[test]
    fn test_period_from_config() {
        let config = ControlConfig {
            input_period_ms: 40,
            ..ControlConfig::default()
        };
        assert_eq!(InputController::new(&config).period_ms(), 40);
    }

    #[test]
    fn test_held_button_advances_once() {
        let config = ControlConfig::default();
        let mut input = InputController::new(&config);
        let state = SharedMotorState::new();
        let mut adc = Adc(Ok(1000));
        let mut button = Level(true);
        for _ in 0..10 {
            input.poll(&mut button, &mut adc, &state);
        }
        assert_eq!(input.direction(), Direction::Clockwise);
    }

    #[test]
    fn test_press_to_stopped_zeroes_duty_same_period() {
        let config = ControlConfig::default();
        let mut input = InputController::new(&config);
        let state = SharedMotorState::new();
        let mut adc = Adc(Ok(4095));

        // Stopped -> Clockwise -> CounterClockwise, releasing in between
        for level in [true, false, true, false] {
            input.poll(&mut Level(level), &mut adc, &state);
        }
        assert_eq!(state.read().direction(), Direction::CounterClockwise);
        assert_eq!(state.read().duty(), Duty::MAX);

        let report = input.poll(&mut Level(true), &mut adc, &state);
        assert!(report.pressed);
        assert_eq!(report.command, MotorCommand::STOPPED);
        assert_eq!(state.read(), MotorCommand::STOPPED);
    }

    #[test]
    fn test_timeout_keeps_previous_duty() {
        let config = ControlConfig::default();
        let mut input = InputController::new(&config);
        let state = SharedMotorState::new();

        input.poll(&mut Level(true), &mut Adc(Ok(2048)), &state);
        assert_eq!(state.read().duty(), Duty::new(50));

        let report = input.poll(
            &mut Level(true),
            &mut Adc(Err(ConversionError::Timeout)),
            &state,
        );
        assert_eq!(report.fault, Some(Fault::AnalogTimeout));
        assert_eq!(report.command.duty(), Duty::new(50));

        // Recovers on the next good sample
        let report = input.poll(&mut Level(false), &mut Adc(Ok(0)), &state);
        assert_eq!(report.fault, None);
        assert_eq!(state.read().duty(), Duty::ZERO);
    }

    #[test]
    fn test_timeout_right_after_start_is_zero() {
        let config = ControlConfig::default();
        let mut input = InputController::new(&config);
        let state = SharedMotorState::new();
        let report = input.poll(
            &mut Level(true),
            &mut Adc(Err(ConversionError::Timeout)),
            &state,
        );
        assert_eq!(report.command.direction(), Direction::Clockwise);
        assert_eq!(report.command.duty(), Duty::ZERO);
    }

    #[test]
    fn test_out_of_range_is_reported_and_clamped() {
        let config = ControlConfig::default();
        let mut input = InputController::new(&config);
        let state = SharedMotorState::new();
        let report = input.poll(&mut Level(true), &mut Adc(Ok(4200)), &state);
        assert_eq!(report.fault, Some(Fault::OutOfRangeSample(4200)));
        assert_eq!(report.command.duty(), Duty::MAX);
    }
}
