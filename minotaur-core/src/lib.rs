//! Board-agnostic core logic for the Minotaur gate controller
//!
//! This crate contains the logic that does not depend on a specific chip:
//!
//! - Debounced digital inputs (push buttons, limit switches)
//! - Persistent settings slots in a flat non-volatile device
//! - Gate configuration defaults
//! - Actuator traits implemented by `minotaur-drivers`

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod input;
pub mod persist;
pub mod traits;
