/*!
 * Free Region Coalescing
 * Merges address-adjacent free regions to reduce fragmentation
 */

use super::Heap;
use log::info;

impl Heap {
    /// Coalesce adjacent free regions
    ///
    /// Runs a single pass over the sorted free list and merges every run
    /// of touching regions. Never touches the allocated list; the union of
    /// free extents is unchanged. Safe to call at any time, typically after
    /// a failed allocation.
    pub fn coalesce(&mut self) {
        let before = self.free.len();
        let merged = self.free.merge_adjacent();

        if merged > 0 {
            info!(
                "Coalesced {} pairs of adjacent free regions, reduced from {} to {} regions",
                merged,
                before,
                self.free.len()
            );
        }
    }
}
