//! Fixed-size element buffer between raw bytes and the pair coder.

use crate::config::ByteOrder;
use crate::element::Element;

/// Elements per chunk. Must be even so every chunk holds whole pairs.
pub const CHUNK_SIZE: usize = 256;

const _: () = assert!(CHUNK_SIZE % 2 == 0);

/// Element count covering `bytes`, rounded up to even.
#[inline]
pub fn ceil_bytes_to_even_values(bytes: usize, width: usize) -> usize {
    let values = bytes.div_ceil(width);
    values + (values & 1)
}

/// Reusable chunk of elements, scoped to one compress or decompress call.
#[derive(Debug)]
pub struct ChunkBuffer<T> {
    values: Vec<T>,
    order: ByteOrder,
}

impl<T: Element> ChunkBuffer<T> {
    /// Create a zeroed chunk reading and writing bytes in `order`.
    pub fn new(order: ByteOrder) -> Self {
        Self {
            values: vec![T::default(); CHUNK_SIZE],
            order,
        }
    }

    /// Chunk capacity in bytes.
    #[inline]
    pub fn size_bytes() -> usize {
        CHUNK_SIZE * T::WIDTH
    }

    /// Elements currently held.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Mutable view of the first `count` elements.
    #[inline]
    pub fn values_mut(&mut self, count: usize) -> &mut [T] {
        &mut self.values[..count]
    }

    /// Load elements from the front of `src`.
    ///
    /// A full chunk is read when `src` holds at least one chunk of bytes.
    /// Otherwise the chunk is zeroed, the remaining bytes are copied over it
    /// (a trailing partial element keeps zero padding), and the count is
    /// rounded up to even.
    ///
    /// Returns the number of elements loaded.
    pub fn import(&mut self, src: &[u8]) -> usize {
        let width = T::WIDTH;
        if src.len() >= Self::size_bytes() {
            for (value, bytes) in self.values.iter_mut().zip(src.chunks_exact(width)) {
                let mut raw = T::Bytes::default();
                raw.as_mut().copy_from_slice(bytes);
                *value = T::from_bytes(raw, self.order);
            }
            return CHUNK_SIZE;
        }

        self.values.fill(T::default());
        for (value, bytes) in self.values.iter_mut().zip(src.chunks(width)) {
            let mut raw = T::Bytes::default();
            raw.as_mut()[..bytes.len()].copy_from_slice(bytes);
            *value = T::from_bytes(raw, self.order);
        }
        ceil_bytes_to_even_values(src.len(), width)
    }

    /// Write the first `count` elements to `dst`, truncated to `dst.len()`.
    ///
    /// Returns the number of bytes written.
    pub fn export(&self, count: usize, dst: &mut [u8]) -> usize {
        let len = dst.len().min(count * T::WIDTH);
        for (value, out) in self.values[..count].iter().zip(dst[..len].chunks_mut(T::WIDTH)) {
            let bytes = value.to_bytes(self.order);
            out.copy_from_slice(&bytes.as_ref()[..out.len()]);
        }
        len
    }
}
