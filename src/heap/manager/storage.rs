/*!
 * Heap Storage Operations
 * Read/write access to allocated arena bytes
 */

use super::super::types::{HeapError, HeapResult, Region};
use super::Heap;
use crate::core::types::{Address, Size};
use log::info;

impl Heap {
    /// Write bytes into an allocated region
    ///
    /// The address may point anywhere inside a live region; the write must
    /// fit between the address and the region's end. Nothing is written on
    /// failure.
    pub fn write(&mut self, address: Address, data: &[u8]) -> HeapResult<()> {
        let region = self
            .region_containing(address)
            .ok_or(HeapError::InvalidAddress(address))?;

        let end = region.end();
        // address + length could overflow; containment already puts address below end
        if data.len() > end - address {
            return Err(HeapError::OutOfBounds {
                address,
                length: data.len(),
                end,
            });
        }

        self.arena
            .slice_mut(address, data.len())
            .copy_from_slice(data);

        info!(
            "Wrote {} bytes to address 0x{:x} (offset {} in region at 0x{:x})",
            data.len(),
            address,
            address - region.base,
            region.base
        );
        Ok(())
    }

    /// Read bytes from an allocated region
    ///
    /// Same containment and bounds rules as `write`. Bytes never written
    /// read back as zero.
    pub fn read(&self, address: Address, size: Size) -> HeapResult<Vec<u8>> {
        let region = self
            .region_containing(address)
            .ok_or(HeapError::InvalidAddress(address))?;

        let end = region.end();
        // address + length could overflow; containment already puts address below end
        if size > end - address {
            return Err(HeapError::OutOfBounds {
                address,
                length: size,
                end,
            });
        }

        let data = self.arena.slice(address, size).to_vec();

        info!(
            "Read {} bytes from address 0x{:x} (offset {} in region at 0x{:x})",
            size,
            address,
            address - region.base,
            region.base
        );
        Ok(data)
    }

    /// Find the allocated region whose extent contains `address`
    ///
    /// O(log n): the allocated list is sorted, so the candidate is the
    /// rightmost region whose base does not exceed the address.
    fn region_containing(&self, address: Address) -> Option<Region> {
        let regions = self.allocated.as_slice();
        let idx = regions.partition_point(|region| region.base <= address);
        if idx == 0 {
            return None;
        }
        let region = regions[idx - 1];
        region.contains(address).then_some(region)
    }
}
