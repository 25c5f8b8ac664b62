//! Buzzer output

use minotaur_core::traits::Indicator;
use minotaur_hal::OutputPin;

/// Active buzzer (self-oscillating, so on/off is all it needs)
pub struct Buzzer<P> {
    pin: P,
}

impl<P: OutputPin> Buzzer<P> {
    /// Create a new buzzer driver; the buzzer starts silent
    pub fn new(pin: P) -> Self {
        let mut buzzer = Self { pin };
        buzzer.off();
        buzzer
    }
}

impl<P: OutputPin> Indicator for Buzzer<P> {
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

    #[test]
    fn test_buzzer() {
        let mut buzzer = Buzzer::new(MockPin { high: true });
        assert!(!buzzer.is_on());

        buzzer.on();
        assert!(buzzer.pin.high);

        // Use trait method through a generic
        fn silence<I: Indicator>(i: &mut I) {
            i.off();
        }
        silence(&mut buzzer);
        assert!(!buzzer.is_on());
    }
}
