/*!
 * Heap Traits
 * Allocator abstractions
 */

use super::types::*;
use crate::core::types::{Address, Size};

/// Heap allocator interface
///
/// Mutators take `&mut self`: the allocator is single-threaded and the
/// borrow checker enforces exclusive access.
pub trait Allocator {
    /// Allocate a region of the given size, returning its base address
    fn allocate(&mut self, size: Size) -> Option<Address>;

    /// Return a previously allocated region to the free list
    ///
    /// Panics if `address` is not the base of a live allocation.
    fn release(&mut self, address: Address);

    /// Merge address-adjacent free regions
    fn coalesce(&mut self);

    /// Check if an address is the base of a live allocation
    fn is_valid(&self, address: Address) -> bool;

    /// Get the length of the live allocation based at an address
    fn region_length(&self, address: Address) -> Option<Size>;
}

/// Heap statistics provider
pub trait HeapInfo {
    /// Get overall heap statistics
    fn stats(&self) -> HeapStats;

    /// Get heap info as (total, used, available)
    fn info(&self) -> (Size, Size, Size);

    /// Render the allocated list for diagnostics
    fn dump_allocated(&self) -> String;

    /// Render the free list for diagnostics
    fn dump_free(&self) -> String;
}
