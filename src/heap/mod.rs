/*!
 * Heap Module
 * Arena-backed explicit memory allocation
 */

pub mod arena;
pub mod manager;
pub mod region_list;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use arena::Arena;
pub use manager::Heap;
pub use region_list::RegionList;
pub use traits::*;
pub use types::*;
