//! Sensor drivers

pub mod current;

pub use current::CurrentSensor;
