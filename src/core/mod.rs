/*!
 * Core Module
 * Fundamental types and limits shared across the allocator
 */

pub mod limits;
pub mod types;

// Re-export for convenience
pub use types::*;
