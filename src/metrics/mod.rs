//! Statistics over allocation results.

pub mod summary;

pub use summary::AllocationSummary;
