/*!
 * Heap Types
 * Common types for the arena allocator
 */

use crate::core::types::{Address, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Heap operation result
pub type HeapResult<T> = Result<T, HeapError>;

/// Heap errors
#[derive(Error, Debug, Clone)]
pub enum HeapError {
    #[error("Invalid heap address: 0x{0:x}")]
    InvalidAddress(Address),

    #[error("Out of bounds: {length} bytes at 0x{address:x} overrun the region end 0x{end:x}")]
    OutOfBounds {
        address: Address,
        length: Size,
        end: Address,
    },
}

/// A contiguous span of the arena
///
/// Immutable value: list operations replace regions, they never mutate one
/// in place. The extent is the half-open range `[base, base + length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub base: Address,
    pub length: Size,
}

impl Region {
    pub fn new(base: Address, length: Size) -> Self {
        Self { base, length }
    }

    /// Exclusive end of the extent
    pub fn end(&self) -> Address {
        self.base + self.length
    }

    /// Whether an address falls inside the extent
    pub fn contains(&self, address: Address) -> bool {
        address >= self.base && address < self.end()
    }
}

/// Heap statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeapStats {
    pub total_bytes: usize,
    pub used_bytes: usize,
    pub available_bytes: usize,
    pub usage_percentage: f64,
    pub allocated_regions: usize,
    pub free_regions: usize,
    pub largest_free_region: usize,
}
