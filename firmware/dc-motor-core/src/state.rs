//! Motor state shared between the input and output tasks

use core::sync::atomic::{AtomicU16, Ordering};

use crate::direction::Direction;
use crate::duty::Duty;

/// What the motor should be doing right now
///
/// The duty is zero whenever the direction is `Stopped`; the
/// constructor enforces it, so every value of this type is a
/// valid command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorCommand {
    direction: Direction,
    duty: Duty,
}

impl MotorCommand {
    pub const STOPPED: MotorCommand = MotorCommand {
        direction: Direction::Stopped,
        duty: Duty::ZERO,
    };

    pub const fn new(direction: Direction, duty: Duty) -> Self {
        let duty = if direction.is_stopped() { Duty::ZERO } else { duty };
        Self { direction, duty }
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn duty(&self) -> Duty {
        self.duty
    }

    // Direction in the high byte, duty in the low byte
    const fn pack(self) -> u16 {
        (self.direction.bits() as u16) << 8 | self.duty.percent() as u16
    }

    const fn unpack(word: u16) -> Self {
        match Direction::from_bits((word >> 8) as u8) {
            Some(direction) => Self::new(direction, Duty::new(word as u8)),
            None => Self::STOPPED,
        }
    }
}

/// Single-writer, single-reader exchange of the latest
/// [`MotorCommand`]
///
/// The whole command lives in one atomic word, so a reader
/// sees either the previous command or the new one, never a
/// direction from one write paired with a duty from another.
/// Neither side ever waits on the other, which keeps the
/// higher priority reader from stalling the writer.
///
/// Only the input task may call [`SharedMotorState::write`] and
/// only the output task may call [`SharedMotorState::read`].
pub struct SharedMotorState {
    word: AtomicU16,
}

impl SharedMotorState {
    /// Starts out stopped
    pub const fn new() -> Self {
        Self {
            word: AtomicU16::new(MotorCommand::STOPPED.pack()),
        }
    }

    /// Publish a new direction and duty as one unit
    pub fn write(&self, direction: Direction, duty: Duty) {
        self.publish(MotorCommand::new(direction, duty));
    }

    pub fn publish(&self, command: MotorCommand) {
        self.word.store(command.pack(), Ordering::Release);
    }

    /// Latest published command
    pub fn read(&self) -> MotorCommand {
        MotorCommand::unpack(self.word.load(Ordering::Acquire))
    }
}

impl Default for SharedMotorState {
    fn default() -> Self {
        Self::new()
    }
}
