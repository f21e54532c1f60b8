/*!
 * Arena
 * Fixed-size zero-initialized byte buffer backing all granted addresses
 */

use crate::core::types::{Address, Size};

/// Backing storage for the heap
///
/// Allocated once at construction and never resized. Addresses handed out
/// by the allocator are offsets into this buffer.
#[derive(Debug)]
pub struct Arena {
    bytes: Box<[u8]>,
}

impl Arena {
    pub fn with_capacity(capacity: Size) -> Self {
        Self {
            bytes: vec![0u8; capacity].into_boxed_slice(),
        }
    }

    pub fn capacity(&self) -> Size {
        self.bytes.len()
    }

    /// Borrow `size` bytes starting at `offset`
    ///
    /// Callers validate the range against a live allocation first.
    pub(crate) fn slice(&self, offset: Address, size: Size) -> &[u8] {
        &self.bytes[offset..offset + size]
    }

    pub(crate) fn slice_mut(&mut self, offset: Address, size: Size) -> &mut [u8] {
        &mut self.bytes[offset..offset + size]
    }
}
