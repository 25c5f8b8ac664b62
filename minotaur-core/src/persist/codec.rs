//! Fixed-width value encoding
//!
//! Values are stored as exactly [`Persist::SIZE`] little-endian bytes with
//! no header or checksum.

/// Largest encoded size of any [`Persist`] type
pub const MAX_PERSIST_SIZE: usize = 8;

/// A fixed-width value that can live in a storage slot
pub trait Persist: Copy {
    /// Encoded size in bytes (at most [`MAX_PERSIST_SIZE`])
    const SIZE: usize;

    /// Write the encoding into `buf[..Self::SIZE]`
    fn encode(&self, buf: &mut [u8]);

    /// Read a value back from `buf[..Self::SIZE]`
    fn decode(buf: &[u8]) -> Self;
}

macro_rules! impl_persist {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Persist for $ty {
                const SIZE: usize = core::mem::size_of::<$ty>();

                fn encode(&self, buf: &mut [u8]) {
                    buf[..Self::SIZE].copy_from_slice(&self.to_le_bytes());
                }

                fn decode(buf: &[u8]) -> Self {
                    let mut raw = [0u8; core::mem::size_of::<$ty>()];
                    raw.copy_from_slice(&buf[..Self::SIZE]);
                    <$ty>::from_le_bytes(raw)
                }
            }
        )*
    };
}

impl_persist!(u8, u16, u32, u64, i8, i16, i32, i64);
