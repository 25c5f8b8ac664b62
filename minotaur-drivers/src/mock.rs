//! Mock pins shared by the driver tests

use minotaur_hal::{AnalogInput, OutputPin};

/// Mock GPIO output pin
pub struct MockPin {
    pub high: bool,
}

impl MockPin {
    pub fn new() -> Self {
        Self { high: false }
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Mock analog channel returning a settable raw value
pub struct MockAdc {
    pub raw: u16,
}

impl AnalogInput for MockAdc {
    fn read_raw(&mut self) -> u16 {
        self.raw
    }
}
