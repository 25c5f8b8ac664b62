//! Storage slot allocator
//!
//! Owns the cursor into the device address space. Claims are
//! read-then-advance through `&mut self`, so two claims can never observe
//! the same cursor value.

use minotaur_hal::{NvmError, NvmStorage};

/// Errors from persistent variable operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PersistError {
    /// A claim would run past the end of the device
    CapacityExceeded {
        /// Offset the claim would have started at
        offset: usize,
        /// Requested length in bytes
        len: usize,
        /// Device capacity in bytes
        capacity: usize,
    },
    /// The storage device failed
    Storage(NvmError),
}

impl From<NvmError> for PersistError {
    fn from(err: NvmError) -> Self {
        PersistError::Storage(err)
    }
}

/// Hands out consecutive, non-overlapping byte ranges starting at 0
///
/// There is no release operation: the cursor only grows for the lifetime
/// of the allocator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotAllocator {
    /// Next unused offset
    cursor: usize,
    /// Device size, `None` when claims are not bounds-checked
    capacity: Option<usize>,
}

impl SlotAllocator {
    /// Allocator bounded to `capacity` bytes
    pub const fn new(capacity: usize) -> Self {
        Self {
            cursor: 0,
            capacity: Some(capacity),
        }
    }

    /// Allocator bounded to the capacity of `storage`
    pub fn for_device<S: NvmStorage + ?Sized>(storage: &S) -> Self {
        Self::new(storage.capacity())
    }

    /// Allocator that never checks capacity
    ///
    /// Claims past the end of the device are not detected here; the device
    /// itself decides what happens on access.
    pub const fn unbounded() -> Self {
        Self {
            cursor: 0,
            capacity: None,
        }
    }

    /// Claim the next `len` bytes and return their starting offset
    ///
    /// On `CapacityExceeded` the cursor is left unchanged.
    pub fn claim(&mut self, len: usize) -> Result<usize, PersistError> {
        let offset = self.cursor;
        let end = offset.saturating_add(len);

        if let Some(capacity) = self.capacity {
            if end > capacity {
                return Err(PersistError::CapacityExceeded {
                    offset,
                    len,
                    capacity,
                });
            }
        }

        self.cursor = end;
        Ok(offset)
    }

    /// Next unused offset (total bytes claimed so far)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Device capacity, if bounded
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Bytes still available, if bounded
    pub fn remaining(&self) -> Option<usize> {
        self.capacity.map(|c| c.saturating_sub(self.cursor))
    }
}
