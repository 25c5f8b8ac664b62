//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Toggle the pin state
    fn toggle(&mut self) {
        if self.is_set_high() {
            self.set_low();
        } else {
            self.set_high();
        }
    }

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// The pin is configured for logic-level input when it is constructed;
/// reading it has no side effects.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<T: InputPin + ?Sized> InputPin for &T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}

/// Pin with configurable polarity
///
/// Maps logical levels to electrical ones: when `inverted`, logical high
/// (lamp on, button pressed) is the pin driven or read low.
pub struct Polarized<P> {
    pin: P,
    /// If true, logical high = pin LOW
    inverted: bool,
}

impl<P> Polarized<P> {
    /// Wrap a pin
    pub fn new(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }

    /// Check if the pin is active-low
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Get the underlying pin
    pub fn inner(&self) -> &P {
        &self.pin
    }
}

impl<P: OutputPin> OutputPin for Polarized<P> {
    fn set_high(&mut self) {
        self.pin.set_state(!self.inverted);
    }

    fn set_low(&mut self) {
        self.pin.set_state(self.inverted);
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high() != self.inverted
    }
}

impl<P: InputPin> InputPin for Polarized<P> {
    fn is_high(&self) -> bool {
        self.pin.is_high() != self.inverted
    }
}
