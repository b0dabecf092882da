//! Summary statistics for an allocation result.

use serde::Serialize;

use crate::core::types::{AllocationRow, Quantity, SizeCode};
use crate::engine::{AllocationResult, SizeAllocator};

/// Headline figures for a size-share table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AllocationSummary {
    /// Number of size rows.
    pub size_count: usize,
    /// Number of rows carrying mirrored quantity.
    pub simulated_count: usize,
    /// Sum of all row quantities.
    pub total_quantity: Quantity,
    /// Quantity in rows that are purely observed.
    pub observed_quantity: Quantity,
    /// Quantity in rows that carry mirrored estimates.
    pub simulated_quantity: Quantity,
    /// Sum of shares (1.0 for a non-empty table).
    pub share_sum: f64,
    /// Size with the largest quantity.
    pub dominant: Option<AllocationRow>,
    /// Sizes whose share reaches the key-size threshold, ascending.
    pub key_sizes: Vec<SizeCode>,
    /// Smallest and largest size in the table.
    pub size_span: Option<(SizeCode, SizeCode)>,
}

impl AllocationSummary {
    /// Calculate the summary of a result.
    pub fn from_result(result: &AllocationResult, key_size_share: f64) -> Self {
        let mut summary = Self::default();

        if result.is_empty() {
            return summary;
        }

        summary.size_count = result.rows.len();
        summary.dominant = result.dominant;

        for row in &result.rows {
            summary.total_quantity += row.quantity;
            summary.share_sum += row.share;

            if row.is_simulated {
                summary.simulated_count += 1;
                summary.simulated_quantity += row.quantity;
            } else {
                summary.observed_quantity += row.quantity;
            }

            if row.is_key_size(key_size_share) {
                summary.key_sizes.push(row.size_code);
            }
        }

        // Rows are size-ordered
        if let (Some(first), Some(last)) = (result.rows.first(), result.rows.last()) {
            summary.size_span = Some((first.size_code, last.size_code));
        }

        summary
    }

    /// Fraction of the total that was mirrored rather than observed.
    pub fn simulated_fraction(&self) -> f64 {
        if self.total_quantity <= 0.0 {
            return 0.0;
        }
        self.simulated_quantity / self.total_quantity
    }
}

impl SizeAllocator {
    /// Summarize a result using the configured key-size threshold.
    pub fn summarize(&self, result: &AllocationResult) -> AllocationSummary {
        AllocationSummary::from_result(result, self.config().key_size_share)
    }
}
