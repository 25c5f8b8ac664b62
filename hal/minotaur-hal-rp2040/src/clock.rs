//! Millisecond clock backed by the embassy time driver

use embassy_time::Instant;
use minotaur_hal::MonotonicClock;

/// Milliseconds since boot, truncated to `u32`
///
/// Wraps after about 49.7 days; consumers compare with wrapping
/// subtraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
