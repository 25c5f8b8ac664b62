//! Button sampling task
//!
//! Samples every button once per millisecond, so debounce windows are
//! measured at 1 ms resolution, and logs debounced edges.

use defmt::*;
use embassy_time::{Duration, Ticker};

use minotaur_core::input::DebounceFilter;
use minotaur_hal::Polarized;
use minotaur_hal_rp2040::{EmbassyClock, RpInput};

/// Sampling interval in milliseconds
pub const SAMPLE_INTERVAL_MS: u64 = 1;

/// Debounced push button
pub type Button = DebounceFilter<Polarized<RpInput<'static>>, EmbassyClock>;

/// The five front-panel buttons
pub struct Buttons {
    pub program: Button,
    pub select: Button,
    pub open: Button,
    pub function: Button,
    pub close: Button,
}

impl Buttons {
    fn named_mut(&mut self) -> [(&'static str, &mut Button); 5] {
        [
            ("program", &mut self.program),
            ("select", &mut self.select),
            ("open", &mut self.open),
            ("function", &mut self.function),
            ("close", &mut self.close),
        ]
    }
}

/// Input task - samples all buttons and reports debounced edges
#[embassy_executor::task]
pub async fn input_task(mut buttons: Buttons) {
    info!("Input task started");

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));

    loop {
        ticker.next().await;

        for (name, button) in buttons.named_mut() {
            let was_active = button.is_active();
            button.sample();

            match (was_active, button.is_active()) {
                (false, true) => info!("{} button pressed", name),
                (true, false) => debug!("{} button released", name),
                _ => {}
            }
        }
    }
}
