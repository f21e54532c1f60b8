/*!
 * Region List
 * Sorted, capacity-bounded container of non-overlapping regions
 */

use super::types::Region;
use crate::core::types::Address;
use std::fmt;

/// Ordered set of regions, sorted ascending by base address
///
/// Capacity is fixed at construction and the backing storage never grows.
/// Callers must only insert regions that do not overlap existing entries;
/// the list does not check. Exceeding capacity is a fatal contract
/// violation.
#[derive(Debug, Clone)]
pub struct RegionList {
    regions: Vec<Region>,
    capacity: usize,
}

impl RegionList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            regions: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Find the index of the region whose base equals `address`
    ///
    /// Exact-base lookup only: an address in a region's interior is not
    /// found. O(log n) over the sorted entries.
    pub fn find(&self, address: Address) -> Option<usize> {
        self.regions.binary_search_by_key(&address, |r| r.base).ok()
    }

    /// Insert a region at its sorted position, shifting later entries up
    pub fn insert(&mut self, region: Region) {
        assert!(
            self.regions.len() < self.capacity,
            "region list capacity {} exceeded",
            self.capacity
        );
        let pos = self.regions.partition_point(|r| r.base < region.base);
        self.regions.insert(pos, region);
    }

    /// Remove and return the region at `index`, shifting later entries down
    pub fn remove(&mut self, index: usize) -> Region {
        assert!(
            index < self.regions.len(),
            "region index {} out of bounds (len {})",
            index,
            self.regions.len()
        );
        self.regions.remove(index)
    }

    /// Merge address-adjacent regions in a single left-to-right pass
    ///
    /// Returns the number of merges performed. Idempotent: a second pass
    /// over merged output finds nothing left to merge.
    pub fn merge_adjacent(&mut self) -> usize {
        if self.regions.len() < 2 {
            return 0;
        }

        let mut merged = 0;
        let mut i = 0;
        while i + 1 < self.regions.len() {
            let current = self.regions[i];
            let next = self.regions[i + 1];

            if current.end() == next.base {
                self.regions[i] = Region::new(current.base, current.length + next.length);
                self.regions.remove(i + 1);
                merged += 1;
            } else {
                i += 1;
            }
        }

        merged
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    pub fn as_slice(&self) -> &[Region] {
        &self.regions
    }
}

impl fmt::Display for RegionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Regions ({}):", self.regions.len())?;
        for region in &self.regions {
            writeln!(f, "    base: 0x{:x}, length: {}", region.base, region.length)?;
        }
        Ok(())
    }
}
