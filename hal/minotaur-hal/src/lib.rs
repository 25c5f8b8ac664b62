//! Minotaur Hardware Abstraction Layer
//!
//! This crate defines the capabilities the gate controller core consumes.
//! Chip-specific crates (RP2040, ...) implement them, and the in-memory
//! implementations here let the same logic run on a host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  minotaur-firmware                      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ minotaur-core │       │   minotaur-   │
//! │               │       │    drivers    │
//! └───────────────┘       └───────────────┘
//!         │                       │
//!         └───────────┬───────────┘
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  minotaur-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  minotaur-hal-rp2040                    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`clock::MonotonicClock`] - Wrapping millisecond clock
//! - [`nvm::NvmStorage`] - Byte-addressed non-volatile storage
//! - [`adc::AnalogInput`] - Raw analog readings
//!
//! # Storage
//!
//! - [`nvm::RamNvm`] - In-memory device for hosts and tests
//! - [`map::MapNvm`] - Wear-leveled EEPROM emulation on any NOR flash

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod clock;
pub mod gpio;
pub mod map;
pub mod nvm;

// Re-export key traits at crate root for convenience
pub use adc::AnalogInput;
pub use clock::{ManualClock, MonotonicClock};
pub use gpio::{InputPin, OutputPin, Polarized};
pub use map::MapNvm;
pub use nvm::{NvmError, NvmStorage, RamNvm};
