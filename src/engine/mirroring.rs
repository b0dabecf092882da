//! Mirroring: imputing missing sizes from a broader reference distribution.
//!
//! A size that the color-filtered set never sold is given the share it holds
//! in the category-level reference distribution, scaled onto the filtered
//! set's own total. Sizes without any reference signal stay absent.

use tracing::trace;

use super::distribution::SizeDistribution;
use crate::core::types::{Quantity, SizeCode};

/// Fill absent or zero sizes on the grid `[min_size, max_size]` (stepping by
/// `step`) with estimates scaled from `reference`.
///
/// Observed positive quantities are never touched. The scaling total is the
/// actual total before any estimate is added, or `baseline` when the actual
/// set sold nothing.
pub fn mirror_missing_sizes(
    actual: &SizeDistribution,
    reference: &SizeDistribution,
    min_size: SizeCode,
    max_size: SizeCode,
    step: SizeCode,
    baseline: Quantity,
) -> SizeDistribution {
    let mut working = actual.clone();

    let total_ref = reference.total();
    if total_ref <= 0.0 || step <= 0 {
        return working;
    }

    let current_total = actual.total();
    let scale = if current_total > 0.0 {
        current_total
    } else {
        baseline
    };

    let mut size = min_size;
    while size <= max_size {
        if working.quantity(size) <= 0.0 {
            let ref_qty = reference.quantity(size);
            if ref_qty > 0.0 {
                let estimate = ref_qty / total_ref * scale;
                trace!(size, ref_qty, estimate, "mirrored missing size");
                working.insert_simulated(size, estimate);
            }
        }

        size = match size.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }

    working
}
