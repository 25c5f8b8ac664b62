//! Time-based switch debouncing
//!
//! A raw reading is accepted as the new stable state only after it has held
//! for strictly longer than the debounce window. Every raw transition,
//! bounces included, restarts the stability timer.
//!
//! Timing is relative: elapsed time is `now.wrapping_sub(last_change)`, so
//! the millisecond counter wrapping past `u32::MAX` never produces a
//! spurious elapsed value.
//!
//! # Usage
//!
//! ```ignore
//! let mut open_btn = DebounceFilter::new(pin, &clock);
//!
//! // In the control loop, once per iteration:
//! open_btn.sample();
//! if open_btn.is_active() {
//!     // ...
//! }
//! ```

use minotaur_hal::{InputPin, MonotonicClock};

/// Default debounce window in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;

/// Debounce state machine
///
/// Pure state with no hardware attached; feed it `(reading, now_ms)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    /// Minimum stable time before a reading is accepted (ms)
    window_ms: u32,
    /// Last accepted state
    stable: bool,
    /// Most recent raw sample
    last_reading: bool,
    /// Time at which `last_reading` last changed
    last_change_ms: u32,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl Debouncer {
    /// Create a debouncer with the given window, initially inactive
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            stable: false,
            last_reading: false,
            last_change_ms: 0,
        }
    }

    /// Feed one raw sample taken at `now_ms`
    ///
    /// Returns the (possibly updated) stable state.
    pub fn update(&mut self, reading: bool, now_ms: u32) -> bool {
        self.update_with(reading, || now_ms)
    }

    /// Feed one raw sample, reading the clock on demand
    ///
    /// The clock is consulted when the raw level changes and again for the
    /// stability check.
    pub(crate) fn update_with(&mut self, reading: bool, mut now_ms: impl FnMut() -> u32) -> bool {
        if reading != self.last_reading {
            self.last_change_ms = now_ms();
        }

        if now_ms().wrapping_sub(self.last_change_ms) > self.window_ms && reading != self.stable {
            self.stable = reading;
        }

        self.last_reading = reading;
        self.stable
    }

    /// Last accepted state
    pub fn state(&self) -> bool {
        self.stable
    }

    /// Current debounce window (ms)
    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    /// Change the debounce window; applies from the next sample
    ///
    /// Zero disables debouncing: any reading that differs from the stable
    /// state is accepted one millisecond after it first appears.
    pub fn set_window(&mut self, window_ms: u32) {
        self.window_ms = window_ms;
    }
}

/// Debounced input bound to a pin and a clock
///
/// Polling model: the filter does nothing between calls to
/// [`DebounceFilter::sample`] and has no notion of missed samples.
pub struct DebounceFilter<P, C> {
    pin: P,
    clock: C,
    debouncer: Debouncer,
}

impl<P: InputPin, C: MonotonicClock> DebounceFilter<P, C> {
    /// Create a filter with the default 50 ms window
    pub fn new(pin: P, clock: C) -> Self {
        Self::with_window(pin, clock, DEFAULT_DEBOUNCE_MS)
    }

    /// Create a filter with a custom window
    pub fn with_window(pin: P, clock: C, window_ms: u32) -> Self {
        Self {
            pin,
            clock,
            debouncer: Debouncer::new(window_ms),
        }
    }

    /// Read the pin once and advance the filter
    pub fn sample(&mut self) {
        let reading = self.pin.is_high();
        let clock = &self.clock;
        self.debouncer.update_with(reading, || clock.now_ms());
    }

    /// Debounced state (true = pin high)
    pub fn is_active(&self) -> bool {
        self.debouncer.state()
    }

    /// Change the debounce window; applies from the next sample
    pub fn set_window(&mut self, window_ms: u32) {
        self.debouncer.set_window(window_ms);
    }

    /// Current debounce window (ms)
    pub fn window_ms(&self) -> u32 {
        self.debouncer.window_ms()
    }

    /// Get the underlying pin
    pub fn pin(&self) -> &P {
        &self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use minotaur_hal::ManualClock;

    /// Input pin whose level is set by the test
    struct ScriptedPin<'a> {
        level: &'a Cell<bool>,
    }

    impl InputPin for ScriptedPin<'_> {
        fn is_high(&self) -> bool {
            self.level.get()
        }
    }

    /// Sample the filter once per millisecond over `from..=to`
    fn run_until<P: InputPin>(
        filter: &mut DebounceFilter<P, &ManualClock>,
        clock: &ManualClock,
        from: u32,
        to: u32,
    ) {
        let mut t = from;
        loop {
            clock.set(t);
            filter.sample();
            if t == to {
                break;
            }
            t = t.wrapping_add(1);
        }
    }

    #[test]
    fn test_initial_state() {
        let level = Cell::new(false);
        let clock = ManualClock::new(0);
        let filter = DebounceFilter::new(ScriptedPin { level: &level }, &clock);

        assert!(!filter.is_active());
        assert_eq!(filter.window_ms(), DEFAULT_DEBOUNCE_MS);
    }

    #[test]
    fn test_bounce_then_hold_scenario() {
        let level = Cell::new(false);
        let clock = ManualClock::new(0);
        let mut filter = DebounceFilter::with_window(ScriptedPin { level: &level }, &clock, 50);

        // false at t=0..4
        run_until(&mut filter, &clock, 0, 4);
        assert!(!filter.is_active());

        // bounce high at t=5..7
        level.set(true);
        run_until(&mut filter, &clock, 5, 7);
        assert!(!filter.is_active());

        // bounce low at t=8..11
        level.set(false);
        run_until(&mut filter, &clock, 8, 11);
        assert!(!filter.is_active());

        // held high from t=12
        level.set(true);
        for t in 12..=62 {
            clock.set(t);
            filter.sample();
            assert!(!filter.is_active(), "accepted too early at t={}", t);
        }

        clock.set(63);
        filter.sample();
        assert!(filter.is_active());
    }

    #[test]
    fn test_release_is_debounced_too() {
        let level = Cell::new(true);
        let clock = ManualClock::new(0);
        let mut filter = DebounceFilter::with_window(ScriptedPin { level: &level }, &clock, 20);

        run_until(&mut filter, &clock, 0, 30);
        assert!(filter.is_active());

        level.set(false);
        run_until(&mut filter, &clock, 31, 51);
        assert!(filter.is_active());

        run_until(&mut filter, &clock, 52, 52);
        assert!(!filter.is_active());
    }

    #[test]
    fn test_unchanged_reading_is_idempotent() {
        let mut debouncer = Debouncer::new(10);

        debouncer.update(true, 100);
        assert!(debouncer.update(true, 111));

        for t in 112..500 {
            assert!(debouncer.update(true, t));
        }
        assert!(debouncer.state());
    }

    #[test]
    fn test_single_update_without_prior_samples() {
        // Sparse polling: the second sample is far apart but the level only
        // changed at the first one.
        let mut debouncer = Debouncer::new(50);
        assert!(!debouncer.update(true, 1_000));
        assert!(debouncer.update(true, 5_000));
    }

    #[test]
    fn test_wraparound_elapsed_time() {
        let mut debouncer = Debouncer::new(50);

        let start = u32::MAX - 10;
        debouncer.update(true, start);
        assert!(!debouncer.update(true, u32::MAX));
        // 11 + 39 = 50 ms elapsed: not yet
        assert!(!debouncer.update(true, 39));
        // 51 ms elapsed across the wrap
        assert!(debouncer.update(true, 40));
    }

    #[test]
    fn test_wraparound_does_not_accept_early() {
        let level = Cell::new(false);
        let clock = ManualClock::new(0);
        let mut filter = DebounceFilter::with_window(ScriptedPin { level: &level }, &clock, 50);

        level.set(true);
        run_until(&mut filter, &clock, u32::MAX - 20, 29);
        assert!(!filter.is_active());

        run_until(&mut filter, &clock, 30, 30);
        assert!(filter.is_active());
    }

    #[test]
    fn test_zero_window() {
        let mut debouncer = Debouncer::new(0);

        // Same millisecond as the edge: elapsed is 0, not > 0
        assert!(!debouncer.update(true, 10));
        assert!(debouncer.update(true, 11));
    }

    #[test]
    fn test_set_window_applies_on_next_sample() {
        let level = Cell::new(false);
        let clock = ManualClock::new(0);
        let mut filter = DebounceFilter::with_window(ScriptedPin { level: &level }, &clock, 100);

        level.set(true);
        run_until(&mut filter, &clock, 0, 30);
        assert!(!filter.is_active());

        filter.set_window(10);
        assert_eq!(filter.window_ms(), 10);
        run_until(&mut filter, &clock, 31, 31);
        assert!(filter.is_active());
    }

    #[test]
    fn test_state_changes_at_most_once_per_sample() {
        let mut debouncer = Debouncer::new(5);
        let mut last = debouncer.state();
        let mut changes = 0;

        for t in 0..200u32 {
            // 40 ms period square wave, each level held 20 ms
            let reading = (t / 20) % 2 == 1;
            let state = debouncer.update(reading, t);
            if state != last {
                changes += 1;
                last = state;
            }
        }

        // Each held level is accepted exactly once
        assert_eq!(changes, 9);
    }
}
