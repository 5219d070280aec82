/// Failure of a single-shot ADC conversion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionError {
    /// End of conversion was not flagged within the timeout
    Timeout,
}

/// Fault absorbed by the input task during one period
///
/// Faults are never fatal. They are reported so they can be
/// logged, and the next period starts from a clean slate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// No sample this period, the previous duty was kept
    AnalogTimeout,
    /// Sample above full scale, clamped before mapping
    OutOfRangeSample(u16),
}

impl From<ConversionError> for Fault {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::Timeout => Fault::AnalogTimeout,
        }
    }
}
