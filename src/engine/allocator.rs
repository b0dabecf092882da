//! Size allocation pipeline.
//!
//! Filters records, aggregates reference and actual distributions, optionally
//! simulates a target range and granularity, then renormalizes the surviving
//! buckets into a share table.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::conversion::to_coarse;
use super::distribution::{Aggregation, SizeDistribution};
use super::mirroring::mirror_missing_sizes;
use crate::core::config::EngineConfig;
use crate::core::types::{AllocationRow, Quantity, SalesRecord, SimulationConfig, SizeCode, SizeUnit};
use crate::selection::FilterSelection;

/// Output of one allocation: the share table and its dominant size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Rows in ascending size order. Shares sum to 1 when non-empty.
    pub rows: Vec<AllocationRow>,
    /// Row with the largest quantity, first in size order on ties.
    pub dominant: Option<AllocationRow>,
}

impl AllocationResult {
    /// Result with no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Renormalize a distribution into a share table.
    ///
    /// A distribution whose total is not positive yields an empty result.
    pub fn from_distribution(dist: &SizeDistribution) -> Self {
        let total = dist.total();
        if !(total > 0.0) {
            return Self::empty();
        }

        let rows: Vec<AllocationRow> = dist
            .iter()
            .map(|(size, bucket)| AllocationRow {
                size_code: size,
                quantity: bucket.quantity,
                share: bucket.quantity / total,
                is_simulated: bucket.simulated,
            })
            .collect();

        let dominant = dominant_row(&rows);
        Self { rows, dominant }
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Sum of row quantities.
    pub fn total_quantity(&self) -> Quantity {
        self.rows.iter().map(|r| r.quantity).sum()
    }

    /// Sum of row shares (1.0 for any non-empty result).
    pub fn share_sum(&self) -> f64 {
        self.rows.iter().map(|r| r.share).sum()
    }

    /// Row for a size.
    pub fn row(&self, size: SizeCode) -> Option<&AllocationRow> {
        self.rows.iter().find(|r| r.size_code == size)
    }

    /// Rows ordered by quantity, largest first; ties keep ascending size.
    pub fn ranked(&self) -> Vec<&AllocationRow> {
        let mut ranked: Vec<&AllocationRow> = self.rows.iter().collect();
        ranked.sort_by(|a, b| {
            b.quantity
                .partial_cmp(&a.quantity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.size_code.cmp(&b.size_code))
        });
        ranked
    }
}

/// Largest quantity wins; the earliest row wins ties.
fn dominant_row(rows: &[AllocationRow]) -> Option<AllocationRow> {
    let mut best: Option<&AllocationRow> = None;
    for row in rows {
        match best {
            Some(b) if row.quantity <= b.quantity => {}
            _ => best = Some(row),
        }
    }
    best.copied()
}

/// Size allocation engine.
#[derive(Debug, Clone, Default)]
pub struct SizeAllocator {
    config: EngineConfig,
}

impl SizeAllocator {
    /// Create an allocator with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the size-share table for a filter selection.
    ///
    /// Without `simulation` this returns the raw historical shares of the
    /// selection. With it, missing sizes in the target range are mirrored
    /// from the category-level distribution, buckets are optionally merged
    /// to the coarse grid, and everything outside the range is cut off.
    pub fn compute(
        &self,
        records: &[SalesRecord],
        filter: &FilterSelection,
        simulation: Option<&SimulationConfig>,
    ) -> AllocationResult {
        let agg = Aggregation::from_records(records, filter);

        let working = match simulation {
            None => agg.actual,
            Some(sim) => self.simulate(&agg, sim),
        };

        let result = AllocationResult::from_distribution(&working);

        debug!(
            records = records.len(),
            matched = agg.actual_records,
            simulated = simulation.is_some(),
            rows = result.rows.len(),
            dominant = ?result.dominant.map(|r| r.size_code),
            "computed size allocation"
        );

        result
    }

    /// Apply mirroring, unit conversion and range cutoff to an aggregation.
    pub fn simulate(&self, agg: &Aggregation, sim: &SimulationConfig) -> SizeDistribution {
        if sim.min_size > sim.max_size {
            warn!(
                min_size = sim.min_size,
                max_size = sim.max_size,
                "inverted simulation range, returning no buckets"
            );
            return SizeDistribution::new();
        }

        let mut working = mirror_missing_sizes(
            &agg.actual,
            &agg.reference,
            sim.min_size,
            sim.max_size,
            self.config.fine_step,
            self.config.mirror_baseline,
        );

        if sim.unit == SizeUnit::Coarse {
            working = to_coarse(&working, self.config.fine_step);
        }

        working.retain_range(sim.min_size, sim.max_size);
        working
    }
}

/// Compute an allocation with the default engine configuration.
pub fn compute_allocation(
    records: &[SalesRecord],
    filter: &FilterSelection,
    simulation: Option<&SimulationConfig>,
) -> AllocationResult {
    SizeAllocator::default().compute(records, filter, simulation)
}
