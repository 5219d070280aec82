//! PWM duty cycle and the potentiometer-to-duty mapping

use crate::direction::Direction;

/// PWM duty cycle as a whole percentage, always in 0..=100
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duty(u8);

impl Duty {
    pub const ZERO: Duty = Duty(0);
    pub const MAX: Duty = Duty(100);

    /// Make a duty cycle, saturating at 100%
    pub const fn new(percent: u8) -> Self {
        if percent > 100 {
            Self::MAX
        } else {
            Duty(percent)
        }
    }

    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Timer compare value for a PWM period of `pwm_period` counts
    pub const fn compare_value(self, pwm_period: u32) -> u32 {
        // Widen so a large period cannot overflow; the result is
        // never larger than pwm_period.
        (self.0 as u64 * pwm_period as u64 / 100) as u32
    }
}

/// Linear mapping from raw ADC samples to a duty cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DutyMapper {
    sample_max: u16,
}

impl DutyMapper {
    /// A full scale of zero is treated as one so the mapping
    /// never divides by zero.
    pub const fn new(sample_max: u16) -> Self {
        let sample_max = if sample_max == 0 { 1 } else { sample_max };
        Self { sample_max }
    }

    pub const fn sample_max(&self) -> u16 {
        self.sample_max
    }

    /// Converter noise can push a sample past nominal full scale
    pub const fn is_out_of_range(&self, sample: u16) -> bool {
        sample > self.sample_max
    }

    /// Duty for `sample` when turning in `direction`
    ///
    /// The result is `sample * 100 / sample_max`, truncated
    /// towards zero, with the sample clamped to full scale
    /// first. It is always zero when stopped.
    pub fn map(&self, sample: u16, direction: Direction) -> Duty {
        if direction.is_stopped() {
            return Duty::ZERO;
        }
        let sample = sample.min(self.sample_max) as u32;
        let percent = sample * 100 / self.sample_max as u32;
        Duty::new(percent as u8)
    }
}

impl Default for DutyMapper {
    fn default() -> Self {
        Self::new(crate::config::ADC_FULL_SCALE)
    }
}
