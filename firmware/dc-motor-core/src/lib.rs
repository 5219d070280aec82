//! Control logic for an open-loop brushed DC motor
//!
//! A potentiometer sets the speed, a push-button cycles the
//! direction and a three-channel indicator shows the current
//! direction. Two periodic tasks cooperate through
//! [`SharedMotorState`]: the input side ([`InputController`])
//! samples the button and the ADC and publishes a
//! [`MotorCommand`], and the output side ([`OutputController`])
//! reads the latest command and drives the motor driver.
//!
//! Nothing in here touches hardware. The firmware implements
//! the traits in [`peripherals`] for the real pins, timer and
//! ADC.
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod direction;
pub mod duty;
pub mod fault;
pub mod input;
pub mod output;
pub mod peripherals;
pub mod state;

pub use config::ControlConfig;
pub use direction::Direction;
pub use duty::{Duty, DutyMapper};
pub use fault::{ConversionError, Fault};
pub use input::{EdgeDetector, InputController, InputReport};
pub use output::{DriveSignals, IndicatorChannel, OutputController};
pub use state::{MotorCommand, SharedMotorState};
