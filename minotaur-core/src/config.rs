//! Gate controller configuration
//!
//! Timing constants and the board pin map. Defaults match the Minotaur v2
//! board; everything can be overridden before the drivers are built.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::input::DEFAULT_DEBOUNCE_MS;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// Board pin number
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
}

impl PinConfig {
    /// Create a new active-high pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }
}

/// Pin assignments for every input and output on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardPins {
    /// Buzzer output
    pub buzzer: PinConfig,
    /// "Program" push button
    pub btn_program: PinConfig,
    /// "Select" push button
    pub btn_select: PinConfig,
    /// "Open" push button
    pub btn_open: PinConfig,
    /// "Function" push button
    pub btn_function: PinConfig,
    /// "Close" push button
    pub btn_close: PinConfig,
    /// Left arm H-bridge, positive leg
    pub left_arm_p: PinConfig,
    /// Left arm H-bridge, negative leg
    pub left_arm_n: PinConfig,
    /// Right arm H-bridge, positive leg
    pub right_arm_p: PinConfig,
    /// Right arm H-bridge, negative leg
    pub right_arm_n: PinConfig,
    /// Warning lamp output
    pub lamp: PinConfig,
    /// Right arm current sensor (analog)
    pub right_arm_sensor: PinConfig,
    /// Left arm current sensor (analog)
    pub left_arm_sensor: PinConfig,
}

impl Default for BoardPins {
    fn default() -> Self {
        Self {
            buzzer: PinConfig::new(2),
            btn_program: PinConfig::new(3),
            btn_select: PinConfig::new(4),
            btn_open: PinConfig::new(5),
            btn_function: PinConfig::new(6),
            btn_close: PinConfig::new(7),
            left_arm_p: PinConfig::new(8),
            left_arm_n: PinConfig::new(9),
            right_arm_p: PinConfig::new(10),
            right_arm_n: PinConfig::new(11),
            lamp: PinConfig::new(12),
            // ADC0 / ADC1
            right_arm_sensor: PinConfig::new(26),
            left_arm_sensor: PinConfig::new(27),
        }
    }
}

/// Timing and limit configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GateConfig {
    /// Button debounce window (ms)
    pub debounce_ms: u32,
    /// Buzzer beep period (ms)
    pub buzzer_beep_period_ms: u32,
    /// Lamp blink period (ms)
    pub lamp_blink_period_ms: u32,
    /// Time between the lamp starting to blink and the gate moving (ms)
    pub open_close_delay_ms: u32,
    /// Beeps before entering programming mode
    pub beeps_before_program: u8,
    /// Beeps after leaving programming mode
    pub beeps_after_program: u8,
    /// Delay after a button press in programming mode (ms)
    pub program_button_delay_ms: u32,
    /// Maximum arm current, in ADC steps over the zero-current offset
    pub max_current_over_offset: i16,
    /// ADC steps per amp of arm current
    pub current_steps_per_amp: u16,
}

impl Default for GateConfig {
    fn default() -> Self {
        let lamp_blink_period_ms = 1000;
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            buzzer_beep_period_ms: 1000,
            lamp_blink_period_ms,
            open_close_delay_ms: lamp_blink_period_ms * 2,
            beeps_before_program: 3,
            beeps_after_program: 2,
            program_button_delay_ms: 500,
            max_current_over_offset: 100,
            current_steps_per_amp: 20,
        }
    }
}

/// Complete board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    /// Pin assignments
    pub pins: BoardPins,
    /// Timing and limits
    pub gate: GateConfig,
}
