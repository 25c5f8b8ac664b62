//! RP2040-specific HAL for the gate controller
//!
//! Implements the shared `minotaur-hal` traits on top of embassy-rp:
//!
//! - Pin banks handing out GPIOs by number from the board config
//! - GPIO input/output wrappers honouring active-low pins
//! - Millisecond clock from the embassy time driver
//! - Wear-leveled settings storage in the last flash sectors
//! - Shared ADC with 10-bit scaled channels

#![no_std]

pub mod adc;
pub mod clock;
pub mod flash;
pub mod gpio;
pub mod pins;

pub use adc::{AdcInput, SharedAdc};
pub use clock::EmbassyClock;
pub use flash::{flash_nvm, FlashNvm};
pub use gpio::{RpInput, RpOutput};
pub use pins::{split, AdcPins, PinBank, PinError, RemainingPeripherals};
