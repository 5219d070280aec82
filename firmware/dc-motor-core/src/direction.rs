/// Target rotation of the motor
///
/// The button cycles through the variants in declaration
/// order, wrapping back to `Stopped`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Direction {
    #[default]
    Stopped = 0,
    Clockwise = 1,
    CounterClockwise = 2,
}

impl Direction {
    /// Next direction after one button press
    pub const fn advance(self) -> Self {
        match self {
            Direction::Stopped => Direction::Clockwise,
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Stopped,
        }
    }

    pub const fn is_stopped(self) -> bool {
        matches!(self, Direction::Stopped)
    }

    pub(crate) const fn bits(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Direction::Stopped),
            1 => Some(Direction::Clockwise),
            2 => Some(Direction::CounterClockwise),
            _ => None,
        }
    }
}
