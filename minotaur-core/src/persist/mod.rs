//! Persistent settings in a flat non-volatile device
//!
//! Each [`PersistentVar`] owns a fixed byte range of the device, handed
//! out by a [`SlotAllocator`] in creation order starting at offset 0. The
//! allocator never frees or reuses a range.
//!
//! # Construction order
//!
//! A variable's offset depends only on how many bytes were claimed before
//! it. Variables must therefore be created in the same order on every boot;
//! reordering them between firmware builds silently remaps which setting
//! lives where in storage.
//!
//! ```ignore
//! let mut slots = SlotAllocator::for_device(&nvm);
//! let open_time = PersistentVar::<u32>::new(&mut slots, &mut nvm)?; // offset 0
//! let close_time = PersistentVar::<u32>::new(&mut slots, &mut nvm)?; // offset 4
//! ```

pub mod allocator;
pub mod codec;
pub mod var;

pub use allocator::{PersistError, SlotAllocator};
pub use codec::{Persist, MAX_PERSIST_SIZE};
pub use var::PersistentVar;
