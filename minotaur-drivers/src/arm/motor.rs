//! Gate arm motor driver (relay H-bridge)
//!
//! Each arm motor sits between two bridge legs. Switching a leg high
//! connects that motor terminal to +12 V:
//!
//! | Motion  | P leg | N leg |
//! |---------|-------|-------|
//! | Off     | low   | low   |
//! | Opening | high  | low   |
//! | Closing | low   | high  |
//!
//! Both legs high would short the supply through the bridge. Every
//! transition therefore drives the leg that must end low first, then
//! raises the other one.

use minotaur_core::traits::{ArmDriver, ArmMotion};
use minotaur_hal::OutputPin;

/// H-bridge arm motor
pub struct MotorArm<P, N> {
    pin_p: P,
    pin_n: N,
    motion: ArmMotion,
}

impl<P: OutputPin, N: OutputPin> MotorArm<P, N> {
    /// Create a new arm driver; the motor starts off
    pub fn new(pin_p: P, pin_n: N) -> Self {
        let mut arm = Self {
            pin_p,
            pin_n,
            motion: ArmMotion::Off,
        };
        arm.off();
        arm
    }

    /// Get the bridge leg states `(p, n)`
    pub fn leg_states(&self) -> (bool, bool) {
        (self.pin_p.is_set_high(), self.pin_n.is_set_high())
    }
}

impl<P: OutputPin, N: OutputPin> ArmDriver for MotorArm<P, N> {
    fn open(&mut self) {
        self.pin_n.set_low();
        self.pin_p.set_high();
        self.motion = ArmMotion::Opening;
    }

    fn close(&mut self) {
        self.pin_p.set_low();
        self.pin_n.set_high();
        self.motion = ArmMotion::Closing;
    }

    fn off(&mut self) {
        self.pin_p.set_low();
        self.pin_n.set_low();
        self.motion = ArmMotion::Off;
    }

    fn motion(&self) -> ArmMotion {
        self.motion
    }
}
