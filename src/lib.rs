/*!
 * Arena Heap Library
 * Explicit first-fit allocator over a fixed-size byte arena
 */

pub mod core;
pub mod heap;

// Re-exports
pub use heap::{
    Allocator, Arena, Heap, HeapError, HeapInfo, HeapResult, HeapStats, Region, RegionList,
};
