//! Actuator traits
//!
//! These traits define the interface between gate logic and the actuator
//! drivers in `minotaur-drivers`.

/// Direction an arm motor is being driven in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArmMotion {
    /// Not driven (both bridge legs low)
    #[default]
    Off,
    /// Driving towards open
    Opening,
    /// Driving towards closed
    Closing,
}

/// On/off signalling output (lamp, buzzer)
pub trait Indicator {
    /// Switch the output on
    fn on(&mut self);

    /// Switch the output off
    fn off(&mut self);

    /// Check if the output is on
    fn is_on(&self) -> bool;

    /// Switch to a specific state
    fn set(&mut self, on: bool) {
        if on {
            self.on();
        } else {
            self.off();
        }
    }
}

/// Gate arm motor driver
pub trait ArmDriver {
    /// Drive the arm towards open
    fn open(&mut self);

    /// Drive the arm towards closed
    fn close(&mut self);

    /// Stop driving the arm
    fn off(&mut self);

    /// Current drive direction
    fn motion(&self) -> ArmMotion;
}
