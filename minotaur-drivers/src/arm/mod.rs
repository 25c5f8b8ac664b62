//! Gate arm drivers

pub mod motor;

pub use motor::MotorArm;
