//! Purchase-order quantities derived from size shares.

pub mod allocation;

pub use allocation::{OrderAllocator, OrderLine, OrderPlan, RoundingMode};
