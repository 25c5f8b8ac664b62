//! Signalling outputs
//!
//! The warning lamp and the buzzer are both single GPIO outputs driving a
//! transistor; they differ only in what they are wired to.

pub mod buzzer;
pub mod lamp;

pub use buzzer::Buzzer;
pub use lamp::Lamp;
