//! Analog input abstraction
//!
//! Readings use a 10-bit scale (0..=1023). Chip HALs with wider converters
//! scale down so thresholds stay portable across boards.

/// Full-scale value of a raw analog reading
pub const ADC_MAX: u16 = 1023;

/// Analog input channel
pub trait AnalogInput {
    /// Take one raw reading (0..=[`ADC_MAX`])
    ///
    /// Takes `&mut self` because ADC conversions typically require mutable access.
    fn read_raw(&mut self) -> u16;
}
