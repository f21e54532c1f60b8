/*!
 * Core Types
 * Common types used across the allocator
 */

/// Offset into the arena; every address handed to callers is one of these
pub type Address = usize;

/// Size type for arena operations
pub type Size = usize;
