//! EEPROM emulation on NOR flash
//!
//! The byte address space is split into fixed blocks of [`BLOCK_SIZE`]
//! bytes. Each block is stored as one sequential-storage map item keyed by
//! its index, so flash wear is spread over the whole partition and an
//! interrupted write leaves the previous copy of the block readable.
//!
//! A RAM mirror of the address space is loaded once at init; reads are
//! served from it. A write only touches flash for blocks whose bytes
//! actually change, and the mirror is updated only after the item is
//! stored.
//!
//! Blocks never written read back as [`ERASED_BYTE`].

use core::ops::Range;

use embassy_futures::block_on;
use embedded_storage_async::nor_flash::NorFlash;
use sequential_storage::cache::NoCache;
use sequential_storage::map::{self, Key, SerializationError};

use crate::nvm::{check_range, ERASED_BYTE};
use crate::{NvmError, NvmStorage};

/// Bytes per map item
pub const BLOCK_SIZE: usize = 32;

/// Scratch buffer for one item (key, block and item header)
const ITEM_BUFFER_SIZE: usize = 128;

/// Map key: index of a block in the address space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlockKey(pub u16);

impl Key for BlockKey {
    fn serialize_into(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        if buffer.len() < 2 {
            return Err(SerializationError::BufferTooSmall);
        }
        buffer[..2].copy_from_slice(&self.0.to_le_bytes());
        Ok(2)
    }

    fn deserialize_from(buffer: &[u8]) -> Result<(Self, usize), SerializationError> {
        if buffer.len() < 2 {
            return Err(SerializationError::BufferTooSmall);
        }
        Ok((BlockKey(u16::from_le_bytes([buffer[0], buffer[1]])), 2))
    }
}

/// `N`-byte storage kept as map items in a flash partition
pub struct MapNvm<F, const N: usize> {
    flash: F,
    range: Range<u32>,
    shadow: [u8; N],
}

impl<F: NorFlash, const N: usize> MapNvm<F, N> {
    const BLOCKS: usize = N.div_ceil(BLOCK_SIZE);

    /// Load every stored block of the partition `range` into RAM
    pub async fn new(flash: F, range: Range<u32>) -> Result<Self, NvmError> {
        let mut nvm = Self {
            flash,
            range,
            shadow: [ERASED_BYTE; N],
        };
        for block in 0..Self::BLOCKS {
            nvm.load_block(block).await?;
        }
        Ok(nvm)
    }

    /// Give back the flash device
    pub fn into_inner(self) -> F {
        self.flash
    }

    /// Byte range of a block within the address space
    fn block_span(block: usize) -> Range<usize> {
        let start = block * BLOCK_SIZE;
        start..(start + BLOCK_SIZE).min(N)
    }

    async fn load_block(&mut self, block: usize) -> Result<(), NvmError> {
        let mut buffer = [0u8; ITEM_BUFFER_SIZE];
        let stored = map::fetch_item::<BlockKey, &[u8], _>(
            &mut self.flash,
            self.range.clone(),
            &mut NoCache::new(),
            &mut buffer,
            &BlockKey(block as u16),
        )
        .await
        .map_err(|_| NvmError::Device)?;

        if let Some(data) = stored {
            let span = Self::block_span(block);
            let len = data.len().min(span.len());
            self.shadow[span.start..span.start + len].copy_from_slice(&data[..len]);
        }
        Ok(())
    }

    async fn store_block(&mut self, block: usize, image: &[u8]) -> Result<(), NvmError> {
        let mut buffer = [0u8; ITEM_BUFFER_SIZE];
        map::store_item(
            &mut self.flash,
            self.range.clone(),
            &mut NoCache::new(),
            &mut buffer,
            &BlockKey(block as u16),
            &image,
        )
        .await
        .map_err(|_| NvmError::Device)
    }
}

impl<F: NorFlash, const N: usize> NvmStorage for MapNvm<F, N> {
    fn capacity(&self) -> usize {
        N
    }

    fn read_bytes(&mut self, offset: usize, buffer: &mut [u8]) -> Result<(), NvmError> {
        check_range(offset, buffer.len(), N)?;
        buffer.copy_from_slice(&self.shadow[offset..offset + buffer.len()]);
        Ok(())
    }

    /// Store `data`, one map item per touched block
    ///
    /// A range spanning two blocks is two items; if the second store fails
    /// the first block stays committed.
    fn write_bytes(&mut self, offset: usize, data: &[u8]) -> Result<(), NvmError> {
        check_range(offset, data.len(), N)?;
        let end = offset + data.len();

        let mut block = offset / BLOCK_SIZE;
        while block * BLOCK_SIZE < end {
            let span = Self::block_span(block);
            let mut scratch = [0u8; BLOCK_SIZE];
            let image = &mut scratch[..span.len()];
            image.copy_from_slice(&self.shadow[span.clone()]);

            let from = offset.max(span.start);
            let to = end.min(span.end);
            image[from - span.start..to - span.start]
                .copy_from_slice(&data[from - offset..to - offset]);

            if *image != self.shadow[span.clone()] {
                block_on(self.store_block(block, image))?;
                self.shadow[span].copy_from_slice(image);
            }
            block += 1;
        }
        Ok(())
    }
}
