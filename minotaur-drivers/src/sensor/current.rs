//! ACS712 arm current sensor
//!
//! The ACS712 (20 A variant) outputs Vcc/2 at zero current and swings
//! about 100 mV per amp, which is roughly 20 steps of a 10-bit ADC. The
//! measured slope varies between boards (75-100 mV/A), but the sensor only
//! guards the supply against overload, so the nominal slope is used.
//!
//! The zero-current offset depends on Vcc and is captured at boot with
//! [`CurrentSensor::calibrate`] while the arms are stopped.

use minotaur_hal::AnalogInput;

/// Zero-current reading before calibration (mid-scale of a 10-bit ADC)
pub const DEFAULT_OFFSET: u16 = 512;

/// Nominal ADC steps per amp
pub const DEFAULT_STEPS_PER_AMP: u16 = 20;

/// Arm current sensor
pub struct CurrentSensor<A> {
    adc: A,
    offset: u16,
    steps_per_amp: u16,
}

impl<A: AnalogInput> CurrentSensor<A> {
    /// Create a sensor with the default offset and slope
    pub fn new(adc: A) -> Self {
        Self::with_slope(adc, DEFAULT_STEPS_PER_AMP)
    }

    /// Create a sensor with a custom slope (ADC steps per amp)
    pub fn with_slope(adc: A, steps_per_amp: u16) -> Self {
        Self {
            adc,
            offset: DEFAULT_OFFSET,
            steps_per_amp: steps_per_amp.max(1),
        }
    }

    /// Reading relative to the zero-current offset, in ADC steps
    pub fn value(&mut self) -> i16 {
        self.adc.read_raw() as i16 - self.offset as i16
    }

    /// Capture the current reading as the zero-current offset
    ///
    /// Call with the arm motors stopped.
    pub fn calibrate(&mut self) -> u16 {
        self.offset = self.adc.read_raw();
        self.offset
    }

    /// Zero-current offset in raw ADC steps
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Current in amps
    pub fn amps(&mut self) -> f32 {
        self.value() as f32 / self.steps_per_amp as f32
    }

    /// Check if the current exceeds `limit` steps away from the offset
    ///
    /// Either direction counts: the arm motors run both ways, and a sensor
    /// wired backwards reads below the offset.
    pub fn is_overloaded(&mut self, limit: i16) -> bool {
        self.value().unsigned_abs() > limit.max(0).unsigned_abs()
    }
}
