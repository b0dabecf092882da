//! Order-unit allocation across sizes.
//!
//! Turns a size-share table into whole units for a purchase order.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SizeAllocError};
use crate::core::types::{AllocationRow, SizeCode};

/// How fractional units are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Floor every size, then give leftover units to the largest remainders.
    LargestRemainder,
    /// Floor every size and leave the remainder unallocated.
    Floor,
}

impl Default for RoundingMode {
    fn default() -> Self {
        RoundingMode::LargestRemainder
    }
}

/// Units ordered for one size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub size_code: SizeCode,
    pub share: f64,
    pub units: u64,
}

/// Per-size order quantities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderPlan {
    /// Lines in the size order of the input table.
    pub lines: Vec<OrderLine>,
    /// Units requested.
    pub total_units: u64,
    /// Units not assigned to any size.
    pub unallocated: u64,
}

impl OrderPlan {
    /// Units assigned to sizes.
    pub fn allocated(&self) -> u64 {
        self.lines.iter().map(|l| l.units).sum()
    }

    /// Units for a size.
    pub fn units_for(&self, size: SizeCode) -> Option<u64> {
        self.lines
            .iter()
            .find(|l| l.size_code == size)
            .map(|l| l.units)
    }
}

/// Splits an order total across sizes by their shares.
#[derive(Debug, Clone)]
pub struct OrderAllocator {
    /// Total units to order.
    pub total_units: u64,
    /// Rounding mode.
    pub rounding: RoundingMode,
    /// Minimum units every size receives.
    pub min_units: u64,
}

impl OrderAllocator {
    /// Create a new order allocator.
    pub fn new(total_units: u64) -> Self {
        Self {
            total_units,
            rounding: RoundingMode::LargestRemainder,
            min_units: 0,
        }
    }

    /// Set rounding mode.
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Set minimum units per size.
    pub fn with_min_units(mut self, min_units: u64) -> Self {
        self.min_units = min_units;
        self
    }

    /// Allocate the order total across the rows of a share table.
    ///
    /// # Arguments
    /// * `rows` - Size-share rows; shares are renormalized over these rows
    ///
    /// # Returns
    /// An order plan whose lines follow the row order
    pub fn allocate(&self, rows: &[AllocationRow]) -> Result<OrderPlan> {
        if rows.is_empty() {
            return Ok(OrderPlan {
                lines: Vec::new(),
                total_units: self.total_units,
                unallocated: self.total_units,
            });
        }

        if let Some(bad) = rows.iter().find(|r| !r.share.is_finite() || r.share < 0.0) {
            return Err(SizeAllocError::invalid_parameter(format!(
                "share {} for size {} is not a valid fraction",
                bad.share, bad.size_code
            )));
        }

        let share_total: f64 = rows.iter().map(|r| r.share).sum();
        if share_total <= 0.0 {
            return Err(SizeAllocError::invalid_parameter(
                "shares must sum to a positive value",
            ));
        }

        let reserved = self
            .min_units
            .checked_mul(rows.len() as u64)
            .filter(|r| *r <= self.total_units)
            .ok_or_else(|| {
                SizeAllocError::invalid_parameter(format!(
                    "minimum of {} units for {} sizes exceeds order total {}",
                    self.min_units,
                    rows.len(),
                    self.total_units
                ))
            })?;

        let distributable = self.total_units - reserved;

        // Exact entitlement per size, split into whole and fractional parts
        let exact: Vec<f64> = rows
            .iter()
            .map(|r| r.share / share_total * distributable as f64)
            .collect();
        let mut units: Vec<u64> = exact.iter().map(|e| e.floor() as u64).collect();
        let floored: u64 = units.iter().sum();
        let leftover = distributable.saturating_sub(floored);

        let unallocated = match self.rounding {
            RoundingMode::Floor => leftover,
            RoundingMode::LargestRemainder => {
                let mut order: Vec<usize> = (0..rows.len()).collect();
                order.sort_by(|&a, &b| {
                    let rem_a = exact[a] - exact[a].floor();
                    let rem_b = exact[b] - exact[b].floor();
                    rem_b
                        .partial_cmp(&rem_a)
                        .unwrap_or(std::cmp::Ordering::Equal)
                        .then(
                            rows[b]
                                .share
                                .partial_cmp(&rows[a].share)
                                .unwrap_or(std::cmp::Ordering::Equal),
                        )
                        .then(rows[a].size_code.cmp(&rows[b].size_code))
                });

                for &idx in order.iter().cycle().take(leftover as usize) {
                    units[idx] += 1;
                }
                0
            }
        };

        let lines = rows
            .iter()
            .zip(units)
            .map(|(row, u)| OrderLine {
                size_code: row.size_code,
                share: row.share,
                units: u + self.min_units,
            })
            .collect();

        Ok(OrderPlan {
            lines,
            total_units: self.total_units,
            unallocated,
        })
    }
}
