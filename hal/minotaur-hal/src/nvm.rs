//! Non-volatile storage abstractions
//!
//! Models a small, flat, byte-addressable device such as an EEPROM (or a
//! flash sector emulating one). Addresses start at 0 and run up to
//! [`NvmStorage::capacity`]; there are no keys, headers, or checksums at
//! this layer.

/// Errors from non-volatile storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NvmError {
    /// The requested range runs past the end of the device
    OutOfBounds,
    /// The underlying device reported a failure
    Device,
}

/// Byte-addressable non-volatile storage
///
/// Writes are synchronous: once `write_bytes` returns `Ok`, a subsequent
/// `read_bytes` of the same range (in this run or after a reset) returns
/// the written bytes.
pub trait NvmStorage {
    /// Total device size in bytes
    fn capacity(&self) -> usize;

    /// Fill `buffer` with the bytes stored at `offset..offset + buffer.len()`
    fn read_bytes(&mut self, offset: usize, buffer: &mut [u8]) -> Result<(), NvmError>;

    /// Store `data` at `offset..offset + data.len()`
    fn write_bytes(&mut self, offset: usize, data: &[u8]) -> Result<(), NvmError>;
}

impl<S: NvmStorage + ?Sized> NvmStorage for &mut S {
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn read_bytes(&mut self, offset: usize, buffer: &mut [u8]) -> Result<(), NvmError> {
        (**self).read_bytes(offset, buffer)
    }

    fn write_bytes(&mut self, offset: usize, data: &[u8]) -> Result<(), NvmError> {
        (**self).write_bytes(offset, data)
    }
}

/// Check that `offset..offset + len` fits in a device of `capacity` bytes
pub fn check_range(offset: usize, len: usize, capacity: usize) -> Result<(), NvmError> {
    match offset.checked_add(len) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(NvmError::OutOfBounds),
    }
}

/// Value of an erased EEPROM/flash byte
pub const ERASED_BYTE: u8 = 0xFF;

/// RAM-backed storage of `N` bytes
///
/// Stands in for the real device on a host. Starts erased (all `0xFF`),
/// like a factory-fresh EEPROM. Counts writes so wear-sensitive callers
/// can be checked.
#[derive(Debug, Clone)]
pub struct RamNvm<const N: usize> {
    bytes: [u8; N],
    writes: u32,
}

impl<const N: usize> Default for RamNvm<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RamNvm<N> {
    /// Create an erased device
    pub const fn new() -> Self {
        Self {
            bytes: [ERASED_BYTE; N],
            writes: 0,
        }
    }

    /// Create a device holding a given image
    pub const fn from_image(bytes: [u8; N]) -> Self {
        Self { bytes, writes: 0 }
    }

    /// Raw view of the whole device
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /// Number of successful `write_bytes` calls so far
    pub fn write_count(&self) -> u32 {
        self.writes
    }
}

impl<const N: usize> NvmStorage for RamNvm<N> {
    fn capacity(&self) -> usize {
        N
    }

    fn read_bytes(&mut self, offset: usize, buffer: &mut [u8]) -> Result<(), NvmError> {
        check_range(offset, buffer.len(), N)?;
        buffer.copy_from_slice(&self.bytes[offset..offset + buffer.len()]);
        Ok(())
    }

    fn write_bytes(&mut self, offset: usize, data: &[u8]) -> Result<(), NvmError> {
        check_range(offset, data.len(), N)?;
        self.bytes[offset..offset + data.len()].copy_from_slice(data);
        self.writes = self.writes.saturating_add(1);
        Ok(())
    }
}
