//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in minotaur-core, on top of the pin and ADC traits from minotaur-hal:
//!
//! - Signalling outputs (lamp, buzzer)
//! - Gate arm motor H-bridge
//! - Arm current sensor (ACS712 Hall-effect)

#![no_std]
#![deny(unsafe_code)]

pub mod arm;
pub mod sensor;
pub mod signal;

#[cfg(test)]
pub(crate) mod mock;
