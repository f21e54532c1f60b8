/*!
 * Heap Management
 *
 * Explicit first-fit allocator over a fixed arena.
 *
 * ## Allocation behavior
 *
 * - **First-fit**: the sorted free list is scanned in ascending address
 *   order and the lowest-address region large enough wins
 * - **Region splitting**: a larger donor region is split and its tail
 *   returned to the free list
 * - **Explicit coalescing**: adjacent free regions merge only when
 *   `coalesce` is called, so fragmentation stays observable between calls
 * - **Fail-fast contracts**: releasing an unknown address or overflowing a
 *   region list panics rather than corrupting the arena partition
 */

mod allocator;
mod coalesce;
mod stats;
mod storage;

use super::arena::Arena;
use super::region_list::RegionList;
use super::traits::{Allocator, HeapInfo};
use super::types::{HeapStats, Region};
use crate::core::limits::{DEFAULT_ARENA_CAPACITY, REGION_LIST_CAPACITY};
use crate::core::types::{Address, Size};
use log::info;

/// Arena heap
///
/// Owns the arena and the two region lists that partition it. At every
/// point between calls the allocated and free extents cover the arena
/// exactly, with no overlap.
pub struct Heap {
    pub(super) arena: Arena,
    pub(super) allocated: RegionList,
    pub(super) free: RegionList,
}

impl Heap {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ARENA_CAPACITY)
    }

    /// Create a heap with a custom arena capacity (useful for testing)
    pub fn with_capacity(total: Size) -> Self {
        info!(
            "Heap initialized with {} bytes and room for {} regions per list",
            total, REGION_LIST_CAPACITY
        );
        let mut free = RegionList::with_capacity(REGION_LIST_CAPACITY);
        free.insert(Region::new(0, total));
        Self {
            arena: Arena::with_capacity(total),
            allocated: RegionList::with_capacity(REGION_LIST_CAPACITY),
            free,
        }
    }
}

// Implement trait interfaces
impl Allocator for Heap {
    fn allocate(&mut self, size: Size) -> Option<Address> {
        Heap::allocate(self, size)
    }

    fn release(&mut self, address: Address) {
        Heap::release(self, address)
    }

    fn coalesce(&mut self) {
        Heap::coalesce(self)
    }

    fn is_valid(&self, address: Address) -> bool {
        Heap::is_valid(self, address)
    }

    fn region_length(&self, address: Address) -> Option<Size> {
        Heap::region_length(self, address)
    }
}

impl HeapInfo for Heap {
    fn stats(&self) -> HeapStats {
        Heap::stats(self)
    }

    fn info(&self) -> (Size, Size, Size) {
        Heap::info(self)
    }

    fn dump_allocated(&self) -> String {
        Heap::dump_allocated(self)
    }

    fn dump_free(&self) -> String {
        Heap::dump_free(self)
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}
