//! Minotaur - Gate Controller Firmware
//!
//! Main firmware binary for the RP2040-based gate controller board.
//! Brings up the buttons, signalling outputs, arm motors and current
//! sensors, loads the persistent settings, then supervises arm current.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Config as AdcConfig};
use embassy_time::{Duration, Ticker};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use minotaur_core::config::{BoardConfig, PinConfig};
use minotaur_core::input::DebounceFilter;
use minotaur_core::traits::{ArmDriver, ArmMotion, Indicator};
use minotaur_drivers::arm::MotorArm;
use minotaur_drivers::sensor::CurrentSensor;
use minotaur_drivers::signal::{Buzzer, Lamp};
use minotaur_hal_rp2040::gpio::{input, output};
use minotaur_hal_rp2040::{flash_nvm, split, EmbassyClock, PinBank, SharedAdc};

use crate::settings::Settings;
use crate::tasks::{Button, Buttons};

mod settings;
mod tasks;

/// Arm current check interval
const SUPERVISE_INTERVAL_MS: u64 = 10;

// Both current sensors borrow the ADC for the lifetime of the firmware
static ADC: StaticCell<SharedAdc<'static>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Minotaur firmware starting...");

    let p = embassy_rp::init(Default::default());
    let (mut bank, mut analog, periph) = split(p);
    info!("Peripherals initialized");

    let config = BoardConfig::default();
    let pins = config.pins;
    let gate = config.gate;

    // Outputs first so nothing is left floating while the rest comes up
    let lamp = Lamp::new(unwrap!(output(&mut bank, pins.lamp)));
    let buzzer = Buzzer::new(unwrap!(output(&mut bank, pins.buzzer)));
    let mut left_arm = MotorArm::new(
        unwrap!(output(&mut bank, pins.left_arm_p)),
        unwrap!(output(&mut bank, pins.left_arm_n)),
    );
    let mut right_arm = MotorArm::new(
        unwrap!(output(&mut bank, pins.right_arm_p)),
        unwrap!(output(&mut bank, pins.right_arm_n)),
    );
    info!(
        "Outputs initialized (lamp={}, buzzer={}, arms off)",
        lamp.is_on(),
        buzzer.is_on()
    );

    let buttons = Buttons {
        program: button(&mut bank, pins.btn_program, gate.debounce_ms),
        select: button(&mut bank, pins.btn_select, gate.debounce_ms),
        open: button(&mut bank, pins.btn_open, gate.debounce_ms),
        function: button(&mut bank, pins.btn_function, gate.debounce_ms),
        close: button(&mut bank, pins.btn_close, gate.debounce_ms),
    };
    info!("Buttons initialized ({} ms debounce)", gate.debounce_ms);

    // Current sensors: calibrate with the arms stopped
    let adc = ADC.init(SharedAdc::new(Adc::new_blocking(
        periph.adc,
        AdcConfig::default(),
    )));
    let adc: &'static SharedAdc<'static> = adc;
    let mut right_current = CurrentSensor::with_slope(
        adc.channel(unwrap!(analog.channel(pins.right_arm_sensor.pin))),
        gate.current_steps_per_amp,
    );
    let mut left_current = CurrentSensor::with_slope(
        adc.channel(unwrap!(analog.channel(pins.left_arm_sensor.pin))),
        gate.current_steps_per_amp,
    );
    info!(
        "Current sensors calibrated (left offset={}, right offset={})",
        left_current.calibrate(),
        right_current.calibrate()
    );

    // Persistent settings
    let mut nvm = unwrap!(flash_nvm(periph.flash, periph.dma_ch0).await);
    let settings = unwrap!(Settings::load(&mut nvm));
    if settings.is_programmed() {
        info!(
            "Settings loaded: left arm run {} ms, right arm run {} ms",
            settings.left_arm_run_ms.get(),
            settings.right_arm_run_ms.get()
        );
    } else {
        warn!("Arm run times not programmed");
    }

    // Spawn tasks
    spawner.spawn(tasks::input_task(buttons)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task supervises arm current
    let mut ticker = Ticker::every(Duration::from_millis(SUPERVISE_INTERVAL_MS));
    loop {
        ticker.next().await;

        for (name, arm, sensor) in [
            ("left", &mut left_arm, &mut left_current),
            ("right", &mut right_arm, &mut right_current),
        ] {
            if arm.motion() != ArmMotion::Off && sensor.is_overloaded(gate.max_current_over_offset)
            {
                warn!("{} arm overcurrent ({} A), stopping", name, sensor.amps());
                arm.off();
            }
        }
    }
}

/// Build a debounced button from its pin config
fn button(bank: &mut PinBank, pin: PinConfig, window_ms: u32) -> Button {
    DebounceFilter::with_window(unwrap!(input(bank, pin)), EmbassyClock, window_ms)
}
