//! Size allocation engine.

pub mod allocator;
pub mod conversion;
pub mod distribution;
pub mod mirroring;
pub mod scenario;

pub use allocator::{compute_allocation, AllocationResult, SizeAllocator};
pub use conversion::to_coarse;
pub use distribution::{Aggregation, Bucket, SizeDistribution};
pub use mirroring::mirror_missing_sizes;
pub use scenario::Scenario;
