/*!
 * Heap Allocator Implementation
 * Allocation and release logic
 */

use super::super::types::Region;
use super::Heap;
use crate::core::types::{Address, Size};
use log::{info, warn};

impl Heap {
    /// Allocate `size` bytes, first-fit over the sorted free list
    ///
    /// Returns the base address of the granted region, or `None` when no
    /// free region is large enough (or `size` is zero). Exhaustion is an
    /// expected outcome; callers may `coalesce` and retry.
    pub fn allocate(&mut self, size: Size) -> Option<Address> {
        if size == 0 {
            return None;
        }

        // The whole free list is examined in ascending address order, so
        // the first region with enough room is the lowest-address fit.
        let index = match self
            .free
            .as_slice()
            .iter()
            .position(|region| region.length >= size)
        {
            Some(index) => index,
            None => {
                let largest = self
                    .free
                    .as_slice()
                    .iter()
                    .map(|region| region.length)
                    .max()
                    .unwrap_or(0);
                let (total, used, available) = self.info();
                warn!(
                    "OOM: requested {} bytes, largest free region {} bytes ({} available, {} used / {} total)",
                    size, largest, available, used, total
                );
                return None;
            }
        };

        let donor = self.free.remove(index);
        self.allocated.insert(Region::new(donor.base, size));

        let tail_length = donor.length - size;
        if tail_length > 0 {
            let tail_base = donor.base + size;
            self.free.insert(Region::new(tail_base, tail_length));
            info!(
                "Split region: keeping {} bytes, returning {} bytes at 0x{:x} to free list",
                size, tail_length, tail_base
            );
        }

        info!("Allocated {} bytes at 0x{:x}", size, donor.base);
        Some(donor.base)
    }

    /// Return a previously granted region to the free list
    ///
    /// The address must be the base of a live allocation. Anything else is
    /// a double free or a foreign address, and continuing from it would
    /// corrupt the partition, so this panics.
    pub fn release(&mut self, address: Address) {
        let index = match self.allocated.find(address) {
            Some(index) => index,
            None => panic!("release of address 0x{:x} that is not allocated", address),
        };

        let region = self.allocated.remove(index);
        self.free.insert(region);
        info!("Released {} bytes at 0x{:x}", region.length, region.base);
    }

    /// Check if an address is the base of a live allocation
    pub fn is_valid(&self, address: Address) -> bool {
        self.allocated.find(address).is_some()
    }

    /// Get the length of the live allocation based at an address
    pub fn region_length(&self, address: Address) -> Option<Size> {
        self.allocated
            .find(address)
            .and_then(|index| self.allocated.get(index))
            .map(|region| region.length)
    }
}
