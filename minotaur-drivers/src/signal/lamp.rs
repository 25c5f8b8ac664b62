//! Warning lamp output
//!
//! Controls the gate's flashing warning lamp via a GPIO pin. Blinking is
//! the caller's job; this driver only switches the lamp.

use minotaur_core::traits::Indicator;
use minotaur_hal::OutputPin;

/// Warning lamp
pub struct Lamp<P> {
    pin: P,
}

impl<P: OutputPin> Lamp<P> {
    /// Create a new lamp driver; the lamp starts off
    pub fn new(pin: P) -> Self {
        let mut lamp = Self { pin };
        lamp.off();
        lamp
    }
}

impl<P: OutputPin> Indicator for Lamp<P> {
    fn on(&mut self) {
        self.pin.set_high();
    }

    fn off(&mut self) {
        self.pin.set_low();
    }

    fn is_on(&self) -> bool {
        self.pin.is_set_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPin;
    use minotaur_hal::Polarized;

    #[test]
    fn test_starts_off() {
        let pin = MockPin { high: true };
        let lamp = Lamp::new(pin);
        assert!(!lamp.is_on());
        assert!(!lamp.pin.high);
    }

    #[test]
    fn test_on_off() {
        let mut lamp = Lamp::new(MockPin::new());

        lamp.on();
        assert!(lamp.is_on());
        assert!(lamp.pin.high);

        lamp.off();
        assert!(!lamp.is_on());
        assert!(!lamp.pin.high);
    }

    #[test]
    fn test_set() {
        let mut lamp = Lamp::new(MockPin::new());
        lamp.set(true);
        assert!(lamp.is_on());
        lamp.set(false);
        assert!(!lamp.is_on());
    }

    #[test]
    fn test_active_low_lamp() {
        let mut lamp = Lamp::new(Polarized::new(MockPin::new(), true));
        assert!(!lamp.is_on());
        assert!(lamp.pin.inner().high);

        lamp.on();
        assert!(lamp.is_on());
        assert!(!lamp.pin.inner().high);
    }
}
