/*!
 * Heap Statistics and Dumps
 * Read-only diagnostics over the region lists
 */

use super::super::types::{HeapStats, Region};
use super::Heap;
use crate::core::types::Size;

impl Heap {
    /// Get overall heap info: (total, used, available)
    pub fn info(&self) -> (Size, Size, Size) {
        let total = self.arena.capacity();
        let used: Size = self
            .allocated
            .as_slice()
            .iter()
            .map(|region| region.length)
            .sum();
        (total, used, total - used)
    }

    /// Get detailed heap statistics
    pub fn stats(&self) -> HeapStats {
        let (total, used, available) = self.info();
        let largest_free_region = self
            .free
            .as_slice()
            .iter()
            .map(|region| region.length)
            .max()
            .unwrap_or(0);

        HeapStats {
            total_bytes: total,
            used_bytes: used,
            available_bytes: available,
            usage_percentage: (used as f64 / total as f64) * 100.0,
            allocated_regions: self.allocated.len(),
            free_regions: self.free.len(),
            largest_free_region,
        }
    }

    /// Render the allocated list for diagnostics
    pub fn dump_allocated(&self) -> String {
        self.allocated.to_string()
    }

    /// Render the free list for diagnostics
    pub fn dump_free(&self) -> String {
        self.free.to_string()
    }

    /// Allocated regions in ascending base order
    pub fn allocated_regions(&self) -> &[Region] {
        self.allocated.as_slice()
    }

    /// Free regions in ascending base order
    pub fn free_regions(&self) -> &[Region] {
        self.free.as_slice()
    }
}
