//! Pin selection from the board configuration
//!
//! `minotaur_core::config::BoardPins` names pins by GPIO number. This
//! module moves the GPIO peripherals into banks that hand them out by
//! number at runtime, so the firmware never hard-codes `PIN_n`.
//!
//! GPIO26-29 double as ADC inputs and live in [`AdcPins`]; the rest are in
//! [`PinBank`].

use embassy_rp::adc::Channel;
use embassy_rp::gpio::{AnyPin, Pull};
use embassy_rp::peripherals::{ADC, DMA_CH0, FLASH, PIN_26, PIN_27, PIN_28, PIN_29};
use embassy_rp::{Peri, Peripherals};

/// Number of digital-only GPIO pins (GPIO0-25)
pub const DIGITAL_PIN_COUNT: usize = 26;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
    /// Pin is an ADC input and must be taken from [`AdcPins`]
    Reserved,
    /// Pin has no ADC channel
    NotAnalog,
}

/// Digital GPIO pins, taken by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; DIGITAL_PIN_COUNT],
}

impl PinBank {
    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        match pin_num as usize {
            n if n < DIGITAL_PIN_COUNT => self.pins[n].take().ok_or(PinError::AlreadyTaken),
            26..=29 => Err(PinError::Reserved),
            _ => Err(PinError::InvalidPin),
        }
    }

    /// Check if a pin is available
    pub fn is_available(&self, pin_num: u8) -> bool {
        self.pins
            .get(pin_num as usize)
            .is_some_and(|pin| pin.is_some())
    }
}

/// ADC-capable pins (GPIO26-29)
pub struct AdcPins {
    pin26: Option<Peri<'static, PIN_26>>,
    pin27: Option<Peri<'static, PIN_27>>,
    pin28: Option<Peri<'static, PIN_28>>,
    pin29: Option<Peri<'static, PIN_29>>,
}

impl AdcPins {
    /// Take a pin by number as an ADC channel (no pull)
    pub fn channel(&mut self, pin_num: u8) -> Result<Channel<'static>, PinError> {
        let channel = match pin_num {
            26 => self.pin26.take().map(|p| Channel::new_pin(p, Pull::None)),
            27 => self.pin27.take().map(|p| Channel::new_pin(p, Pull::None)),
            28 => self.pin28.take().map(|p| Channel::new_pin(p, Pull::None)),
            29 => self.pin29.take().map(|p| Channel::new_pin(p, Pull::None)),
            n if n < 30 => return Err(PinError::NotAnalog),
            _ => return Err(PinError::InvalidPin),
        };
        channel.ok_or(PinError::AlreadyTaken)
    }
}

/// Non-GPIO peripherals the firmware still needs
pub struct RemainingPeripherals {
    pub flash: Peri<'static, FLASH>,
    pub adc: Peri<'static, ADC>,
    pub dma_ch0: Peri<'static, DMA_CH0>,
}

/// Split the peripherals into pin banks and the remaining peripherals
pub fn split(p: Peripherals) -> (PinBank, AdcPins, RemainingPeripherals) {
    let bank = PinBank {
        pins: [
            Some(p.PIN_0.into()),
            Some(p.PIN_1.into()),
            Some(p.PIN_2.into()),
            Some(p.PIN_3.into()),
            Some(p.PIN_4.into()),
            Some(p.PIN_5.into()),
            Some(p.PIN_6.into()),
            Some(p.PIN_7.into()),
            Some(p.PIN_8.into()),
            Some(p.PIN_9.into()),
            Some(p.PIN_10.into()),
            Some(p.PIN_11.into()),
            Some(p.PIN_12.into()),
            Some(p.PIN_13.into()),
            Some(p.PIN_14.into()),
            Some(p.PIN_15.into()),
            Some(p.PIN_16.into()),
            Some(p.PIN_17.into()),
            Some(p.PIN_18.into()),
            Some(p.PIN_19.into()),
            Some(p.PIN_20.into()),
            Some(p.PIN_21.into()),
            Some(p.PIN_22.into()),
            Some(p.PIN_23.into()),
            Some(p.PIN_24.into()),
            Some(p.PIN_25.into()),
        ],
    };
    let analog = AdcPins {
        pin26: Some(p.PIN_26),
        pin27: Some(p.PIN_27),
        pin28: Some(p.PIN_28),
        pin29: Some(p.PIN_29),
    };
    let remaining = RemainingPeripherals {
        flash: p.FLASH,
        adc: p.ADC,
        dma_ch0: p.DMA_CH0,
    };
    (bank, analog, remaining)
}
