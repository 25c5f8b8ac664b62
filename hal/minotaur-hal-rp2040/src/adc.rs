//! ADC channels for the arm current sensors
//!
//! RP2040 has a single 12-bit ADC with 4 external channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//!
//! Both current sensors share the converter, so it sits behind a
//! `RefCell` and each sensor holds an [`AdcInput`] borrowing it. Readings
//! are scaled down to 10 bits (`minotaur_hal::adc::ADC_MAX`).

use core::cell::RefCell;

use embassy_rp::adc::{Adc, Blocking, Channel};
use minotaur_hal::AnalogInput;

/// Bits dropped to go from the 12-bit RP2040 range to 10 bits
const SCALE_SHIFT: u16 = 2;

/// Reading reported before the first good conversion (mid-scale)
const INITIAL_READING: u16 = (minotaur_hal::adc::ADC_MAX + 1) / 2;

/// ADC shared between several channels
pub struct SharedAdc<'d> {
    adc: RefCell<Adc<'d, Blocking>>,
}

impl<'d> SharedAdc<'d> {
    /// Wrap a blocking ADC driver
    pub fn new(adc: Adc<'d, Blocking>) -> Self {
        Self {
            adc: RefCell::new(adc),
        }
    }

    /// Bind a channel to this ADC
    pub fn channel<'a>(&'a self, channel: Channel<'d>) -> AdcInput<'a, 'd> {
        AdcInput {
            adc: self,
            channel,
            held: HeldReading::new(),
        }
    }

    /// Single 12-bit conversion
    ///
    /// Returns `None` if the conversion failed or the ADC is already
    /// borrowed.
    fn read(&self, channel: &mut Channel<'d>) -> Option<u16> {
        let mut adc = self.adc.try_borrow_mut().ok()?;
        adc.blocking_read(channel).ok()
    }
}

/// Last good 10-bit reading of a channel
///
/// A failed conversion repeats the previous value instead of jumping to
/// an arbitrary one.
#[derive(Debug, Clone, Copy)]
struct HeldReading {
    last: u16,
    failures: u32,
}

impl HeldReading {
    const fn new() -> Self {
        Self {
            last: INITIAL_READING,
            failures: 0,
        }
    }

    /// Fold one raw 12-bit conversion result into a 10-bit reading
    fn update(&mut self, raw: Option<u16>) -> u16 {
        match raw {
            Some(raw) => self.last = raw >> SCALE_SHIFT,
            None => self.failures = self.failures.saturating_add(1),
        }
        self.last
    }
}

/// One analog channel of a [`SharedAdc`]
pub struct AdcInput<'a, 'd> {
    adc: &'a SharedAdc<'d>,
    channel: Channel<'d>,
    held: HeldReading,
}

impl AdcInput<'_, '_> {
    /// Number of failed conversions so far
    pub fn failures(&self) -> u32 {
        self.held.failures
    }
}

impl AnalogInput for AdcInput<'_, '_> {
    fn read_raw(&mut self) -> u16 {
        let raw = self.adc.read(&mut self.channel);
        if raw.is_none() {
            #[cfg(feature = "defmt")]
            defmt::warn!("ADC conversion failed, holding last reading");
        }
        self.held.update(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scales_to_ten_bits() {
        let mut held = HeldReading::new();
        assert_eq!(held.update(Some(4095)), 1023);
        assert_eq!(held.update(Some(2048)), 512);
        assert_eq!(held.update(Some(0)), 0);
    }

    #[test]
    fn test_failure_holds_last_reading() {
        let mut held = HeldReading::new();
        // Heavy current on the sensor
        assert_eq!(held.update(Some(2400)), 600);

        assert_eq!(held.update(None), 600);
        assert_eq!(held.update(None), 600);
        assert_eq!(held.failures, 2);

        assert_eq!(held.update(Some(2052)), 513);
    }

    #[test]
    fn test_failure_before_first_reading() {
        let mut held = HeldReading::new();
        assert_eq!(held.update(None), INITIAL_READING);
        assert_eq!(held.failures, 1);
    }
}
