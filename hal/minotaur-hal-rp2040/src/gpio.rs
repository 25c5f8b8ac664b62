//! GPIO wrappers adapting embassy-rp pins to the `minotaur-hal` pin traits
//!
//! Construction takes the board [`PinConfig`]: the pin is driven to its
//! inactive level before the driver takes over, and the returned
//! [`Polarized`] wrapper maps logical levels through `inverted`.

use embassy_rp::gpio::{Input, Level, Output, Pull};
use minotaur_core::config::PinConfig;
use minotaur_hal::{InputPin, OutputPin, Polarized};

use crate::pins::{PinBank, PinError};

/// Digital input (push buttons)
pub struct RpInput<'d> {
    pin: Input<'d>,
}

impl<'d> RpInput<'d> {
    /// Wrap a configured embassy input
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Digital output (lamp, buzzer, arm bridge legs)
pub struct RpOutput<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Wrap a configured embassy output
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Take a configured input from the bank (external pull resistors)
pub fn input(
    bank: &mut PinBank,
    config: PinConfig,
) -> Result<Polarized<RpInput<'static>>, PinError> {
    let pin = Input::new(bank.take(config.pin)?, Pull::None);
    Ok(Polarized::new(RpInput::new(pin), config.inverted))
}

/// Take a configured output from the bank, starting inactive
pub fn output(
    bank: &mut PinBank,
    config: PinConfig,
) -> Result<Polarized<RpOutput<'static>>, PinError> {
    let inactive = if config.inverted { Level::High } else { Level::Low };
    let pin = Output::new(bank.take(config.pin)?, inactive);
    Ok(Polarized::new(RpOutput::new(pin), config.inverted))
}
