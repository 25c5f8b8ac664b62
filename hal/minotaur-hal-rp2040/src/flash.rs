//! Flash-backed persistent storage for RP2040
//!
//! The last 16 KiB of the 2 MB flash hold a sequential-storage partition
//! (four erase sectors). On top of it [`MapNvm`] presents a small
//! byte-addressed device for the persistent settings: wear is spread over
//! the whole partition and a power cut during a write leaves the previous
//! value in place.
//!
//! The linker script keeps the partition out of the program image.

use embassy_rp::dma::Channel;
use embassy_rp::flash::{Async, Flash, ERASE_SIZE};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;
use minotaur_hal::{MapNvm, NvmError};

/// Flash storage configuration
pub const FLASH_SIZE: usize = 2 * 1024 * 1024; // 2MB flash on the controller board
pub const NVM_PARTITION_SIZE: usize = 4 * ERASE_SIZE;
pub const NVM_PARTITION_START: usize = FLASH_SIZE - NVM_PARTITION_SIZE;

/// Flash range for the settings partition
pub const NVM_RANGE: core::ops::Range<u32> = (NVM_PARTITION_START as u32)..(FLASH_SIZE as u32);

/// Size of the byte-addressed settings space
pub const NVM_SIZE: usize = 512;

/// RP2040 settings storage
pub type FlashNvm<'d> = MapNvm<Flash<'d, FLASH, Async, FLASH_SIZE>, NVM_SIZE>;

/// Take the flash peripheral and load the stored settings into RAM
pub async fn flash_nvm<'d>(
    flash: Peri<'d, FLASH>,
    dma: Peri<'d, impl Channel>,
) -> Result<FlashNvm<'d>, NvmError> {
    MapNvm::new(Flash::new(flash, dma), NVM_RANGE).await
}
