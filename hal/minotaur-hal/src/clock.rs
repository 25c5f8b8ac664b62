//! Monotonic millisecond clock
//!
//! Time is a `u32` count of milliseconds since an arbitrary epoch. The
//! counter wraps after roughly 49.7 days, so elapsed time must always be
//! computed with `wrapping_sub`, never by comparing two instants directly.

use core::cell::Cell;

/// Millisecond clock capability
pub trait MonotonicClock {
    /// Milliseconds elapsed since an arbitrary epoch (wraps at `u32::MAX`)
    fn now_ms(&self) -> u32;

    /// Milliseconds elapsed since `earlier`, correct across one wrap
    fn elapsed_since(&self, earlier: u32) -> u32 {
        self.now_ms().wrapping_sub(earlier)
    }
}

impl<C: MonotonicClock + ?Sized> MonotonicClock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Manually driven clock
///
/// Useful for host-side simulation and tests: time only moves when
/// [`ManualClock::set`] or [`ManualClock::advance`] is called. Shared by
/// reference between every consumer on a single thread.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<u32>,
}

impl ManualClock {
    /// Create a clock reading `start_ms`
    pub const fn new(start_ms: u32) -> Self {
        Self {
            now_ms: Cell::new(start_ms),
        }
    }

    /// Jump to an absolute time
    pub fn set(&self, now_ms: u32) {
        self.now_ms.set(now_ms);
    }

    /// Move forward by `delta_ms`, wrapping like the hardware counter
    pub fn advance(&self, delta_ms: u32) {
        self.now_ms.set(self.now_ms.get().wrapping_add(delta_ms));
    }
}

impl MonotonicClock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.now_ms.get()
    }
}
