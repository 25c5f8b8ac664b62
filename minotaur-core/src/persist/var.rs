//! Persistent variable
//!
//! A cached value mirrored to its own slot in non-volatile storage. Reads
//! come from the cache; every write goes straight through to the device.

use minotaur_hal::NvmStorage;

use super::allocator::{PersistError, SlotAllocator};
use super::codec::{Persist, MAX_PERSIST_SIZE};

/// Value of type `T` backed by a fixed storage slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PersistentVar<T> {
    /// Start of this variable's slot, fixed for its lifetime
    offset: usize,
    /// In-memory mirror of the stored value
    value: T,
}

impl<T: Persist> PersistentVar<T> {
    /// Claim the next slot and load its current contents
    ///
    /// The cached value is whatever the device holds at the slot; on an
    /// erased device that is the decoding of the erased bytes.
    pub fn new<S: NvmStorage + ?Sized>(
        slots: &mut SlotAllocator,
        storage: &mut S,
    ) -> Result<Self, PersistError> {
        let offset = slots.claim(T::SIZE)?;
        let value = Self::load(storage, offset)?;
        Ok(Self { offset, value })
    }

    fn load<S: NvmStorage + ?Sized>(storage: &mut S, offset: usize) -> Result<T, PersistError> {
        let mut buf = [0u8; MAX_PERSIST_SIZE];
        storage.read_bytes(offset, &mut buf[..T::SIZE])?;
        Ok(T::decode(&buf[..T::SIZE]))
    }

    /// Cached value (no device access)
    pub fn get(&self) -> T {
        self.value
    }

    /// Update the cache and write the value through to the device
    ///
    /// The cache is updated even if the device write fails, so `get()`
    /// reflects the last requested value.
    pub fn set<S: NvmStorage + ?Sized>(
        &mut self,
        storage: &mut S,
        value: T,
    ) -> Result<(), PersistError> {
        self.value = value;

        let mut buf = [0u8; MAX_PERSIST_SIZE];
        value.encode(&mut buf);
        storage.write_bytes(self.offset, &buf[..T::SIZE])?;
        Ok(())
    }

    /// Re-read the stored value into the cache
    pub fn reload<S: NvmStorage + ?Sized>(&mut self, storage: &mut S) -> Result<T, PersistError> {
        self.value = Self::load(storage, self.offset)?;
        Ok(self.value)
    }

    /// Start of this variable's slot
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Slot length in bytes
    pub fn slot_len(&self) -> usize {
        T::SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minotaur_hal::{NvmError, RamNvm};

    #[test]
    fn test_offsets_follow_creation_order() {
        let mut nvm = RamNvm::<64>::new();
        let mut slots = SlotAllocator::for_device(&nvm);

        let a = PersistentVar::<u32>::new(&mut slots, &mut nvm).unwrap();
        let b = PersistentVar::<u32>::new(&mut slots, &mut nvm).unwrap();
        let c = PersistentVar::<u32>::new(&mut slots, &mut nvm).unwrap();

        assert_eq!(a.offset(), 0);
        assert_eq!(b.offset(), 4);
        assert_eq!(c.offset(), 8);
        assert_eq!(slots.cursor(), 12);
    }

    #[test]
    fn test_survives_recreation_in_same_order() {
        let mut nvm = RamNvm::<64>::new();

        {
            let mut slots = SlotAllocator::for_device(&nvm);
            let mut a = PersistentVar::<u32>::new(&mut slots, &mut nvm).unwrap();
            let mut b = PersistentVar::<u32>::new(&mut slots, &mut nvm).unwrap();
            let mut c = PersistentVar::<u32>::new(&mut slots, &mut nvm).unwrap();
            a.set(&mut nvm, 1).unwrap();
            c.set(&mut nvm, 3).unwrap();
            b.set(&mut nvm, 7).unwrap();
            assert_eq!(b.get(), 7);
        }

        // Simulated reboot: new allocator, same device, same order
        let mut slots = SlotAllocator::for_device(&nvm);
        let a = PersistentVar::<u32>::new(&mut slots, &mut nvm).unwrap();
        let b = PersistentVar::<u32>::new(&mut slots, &mut nvm).unwrap();
        let c = PersistentVar::<u32>::new(&mut slots, &mut nvm).unwrap();

        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 7);
        assert_eq!(c.get(), 3);
    }

    #[test]
    fn test_set_only_touches_own_slot() {
        let mut nvm = RamNvm::<16>::new();
        let mut slots = SlotAllocator::for_device(&nvm);

        let a = PersistentVar::<u32>::new(&mut slots, &mut nvm).unwrap();
        let mut b = PersistentVar::<u32>::new(&mut slots, &mut nvm).unwrap();
        let c = PersistentVar::<u32>::new(&mut slots, &mut nvm).unwrap();

        b.set(&mut nvm, 7).unwrap();

        assert_eq!(&nvm.as_bytes()[4..8], &[7, 0, 0, 0]);
        assert_eq!(a.get(), u32::MAX);
        assert_eq!(c.get(), u32::MAX);
        assert!(nvm.as_bytes()[..4].iter().all(|&byte| byte == 0xFF));
        assert!(nvm.as_bytes()[8..].iter().all(|&byte| byte == 0xFF));
    }

    #[test]
    fn test_get_does_not_touch_device() {
        let mut nvm = RamNvm::<8>::new();
        let mut slots = SlotAllocator::for_device(&nvm);
        let mut var = PersistentVar::<u16>::new(&mut slots, &mut nvm).unwrap();

        var.set(&mut nvm, 500).unwrap();
        assert_eq!(nvm.write_count(), 1);

        for _ in 0..10 {
            assert_eq!(var.get(), 500);
        }
        assert_eq!(nvm.write_count(), 1);
    }

    #[test]
    fn test_mixed_widths() {
        let mut nvm = RamNvm::<16>::new();
        let mut slots = SlotAllocator::for_device(&nvm);

        let a = PersistentVar::<u8>::new(&mut slots, &mut nvm).unwrap();
        let b = PersistentVar::<i64>::new(&mut slots, &mut nvm).unwrap();
        let c = PersistentVar::<u16>::new(&mut slots, &mut nvm).unwrap();

        assert_eq!((a.offset(), a.slot_len()), (0, 1));
        assert_eq!((b.offset(), b.slot_len()), (1, 8));
        assert_eq!((c.offset(), c.slot_len()), (9, 2));
    }

    #[test]
    fn test_capacity_exceeded_at_construction() {
        let mut nvm = RamNvm::<6>::new();
        let mut slots = SlotAllocator::for_device(&nvm);

        let _a = PersistentVar::<u32>::new(&mut slots, &mut nvm).unwrap();
        let err = PersistentVar::<u32>::new(&mut slots, &mut nvm).unwrap_err();

        assert_eq!(
            err,
            PersistError::CapacityExceeded {
                offset: 4,
                len: 4,
                capacity: 6,
            }
        );
    }

    #[test]
    fn test_unbounded_overrun_reported_by_device() {
        let mut nvm = RamNvm::<6>::new();
        let mut slots = SlotAllocator::unbounded();

        let _a = PersistentVar::<u32>::new(&mut slots, &mut nvm).unwrap();
        let err = PersistentVar::<u32>::new(&mut slots, &mut nvm).unwrap_err();

        assert_eq!(err, PersistError::Storage(NvmError::OutOfBounds));
        // The slot is still consumed
        assert_eq!(slots.cursor(), 8);
    }

    #[test]
    fn test_reload_picks_up_external_write() {
        let mut nvm = RamNvm::<8>::new();
        let mut slots = SlotAllocator::for_device(&nvm);
        let mut var = PersistentVar::<u32>::new(&mut slots, &mut nvm).unwrap();

        nvm.write_bytes(0, &42u32.to_le_bytes()).unwrap();
        assert_eq!(var.get(), u32::MAX);
        assert_eq!(var.reload(&mut nvm), Ok(42));
        assert_eq!(var.get(), 42);
    }
}
