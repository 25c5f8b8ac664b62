//! Persistent gate settings
//!
//! Slots are claimed in field order starting at offset 0. Reordering or
//! inserting fields moves every later value to a different address and
//! invalidates what boards already have stored.

use minotaur_core::persist::{PersistError, PersistentVar, SlotAllocator};
use minotaur_hal::NvmStorage;

/// Value read back from a slot that was never written (erased flash)
pub const UNPROGRAMMED: u32 = u32::MAX;

/// Settings recorded in programming mode
pub struct Settings {
    /// Time for the left arm to travel fully open or closed (ms)
    pub left_arm_run_ms: PersistentVar<u32>,
    /// Time for the right arm to travel fully open or closed (ms)
    pub right_arm_run_ms: PersistentVar<u32>,
}

impl Settings {
    /// Claim the slots in a fixed order and load their values
    pub fn load<S: NvmStorage>(storage: &mut S) -> Result<Self, PersistError> {
        let mut slots = SlotAllocator::for_device(storage);
        let left_arm_run_ms = PersistentVar::new(&mut slots, storage)?;
        let right_arm_run_ms = PersistentVar::new(&mut slots, storage)?;

        Ok(Self {
            left_arm_run_ms,
            right_arm_run_ms,
        })
    }

    /// Check if both arm run times have been recorded
    pub fn is_programmed(&self) -> bool {
        self.left_arm_run_ms.get() != UNPROGRAMMED && self.right_arm_run_ms.get() != UNPROGRAMMED
    }
}
