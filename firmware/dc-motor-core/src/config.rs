//! Compile-time configuration of the control loop

/// Full scale of the 12-bit ADC
pub const ADC_FULL_SCALE: u16 = 4095;

/// Input task period (button and potentiometer sampling)
pub const INPUT_PERIOD_MS: u32 = 25;

/// Output task period (motor driver and indicator update)
///
/// Must stay shorter than the input period so the output is
/// never the bottleneck after a state change.
pub const OUTPUT_PERIOD_MS: u32 = 10;

/// Longest time the input task waits for an ADC conversion
pub const CONVERSION_TIMEOUT_MS: u32 = 5;

/// PWM period in timer counts (auto-reload value + 1)
pub const PWM_PERIOD: u32 = 1000;

/// Milliseconds since boot for a tick count of a `tick_rate_hz`
/// monotonic
///
/// Computed in 64 bits: `1000 * ticks` leaves the `u32` range
/// after about 72 minutes at 1 kHz.
pub const fn ticks_to_millis(ticks: u32, tick_rate_hz: u32) -> u64 {
    let rate = if tick_rate_hz == 0 { 1 } else { tick_rate_hz };
    1000 * ticks as u64 / rate as u64
}

/// Tunables shared by the input and output controllers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlConfig {
    /// Largest sample the converter nominally returns
    pub sample_max: u16,
    pub input_period_ms: u32,
    pub output_period_ms: u32,
    pub conversion_timeout_ms: u32,
}

impl ControlConfig {
    pub const fn new() -> Self {
        Self {
            sample_max: ADC_FULL_SCALE,
            input_period_ms: INPUT_PERIOD_MS,
            output_period_ms: OUTPUT_PERIOD_MS,
            conversion_timeout_ms: CONVERSION_TIMEOUT_MS,
        }
    }
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self::new()
    }
}
