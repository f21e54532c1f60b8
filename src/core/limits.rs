/*!
 * Limits and Constants
 *
 * Centralized location for the allocator's fixed bounds.
 * All values include rationale comments explaining why they exist.
 */

/// Default arena capacity (625 KiB)
/// Every address the allocator hands out is an offset below this bound
pub const DEFAULT_ARENA_CAPACITY: usize = 640_000;

/// Maximum live regions per list (allocated or free)
/// Fragment counts are statically bounded; exceeding this is a fatal
/// contract violation, not a recoverable error
pub const REGION_LIST_CAPACITY: usize = 1024;
