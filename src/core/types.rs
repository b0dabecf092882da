//! Core data types for the size-allocation engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::{Result, SizeAllocError};

/// Type alias for size codes (e.g. millimeters).
pub type SizeCode = i64;

/// Type alias for sold or allocated quantities.
pub type Quantity = f64;

/// A single historical sell-through record.
///
/// Records are read-only input. Several records may share the same
/// (category, sub-category, color group, size) key; the engine sums them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(alias = "CAT")]
    pub category: String,
    #[serde(alias = "SUB_CAT")]
    pub sub_category: String,
    #[serde(alias = "ColorRange")]
    pub color_group: String,
    #[serde(alias = "SIZE_CD")]
    pub size_code: SizeCode,
    #[serde(alias = "SALE_QTY_CNS")]
    pub quantity_sold: Quantity,
}

impl SalesRecord {
    /// Create a new sales record.
    pub fn new(
        category: impl Into<String>,
        sub_category: impl Into<String>,
        color_group: impl Into<String>,
        size_code: SizeCode,
        quantity_sold: Quantity,
    ) -> Self {
        Self {
            category: category.into(),
            sub_category: sub_category.into(),
            color_group: color_group.into(),
            size_code,
            quantity_sold,
        }
    }

    /// Build records from parallel columns.
    ///
    /// All columns must have the same length as `size_codes`.
    pub fn from_columns(
        categories: Vec<String>,
        sub_categories: Vec<String>,
        color_groups: Vec<String>,
        size_codes: Vec<SizeCode>,
        quantities: Vec<Quantity>,
    ) -> Result<Vec<Self>> {
        let n = size_codes.len();
        for len in [
            categories.len(),
            sub_categories.len(),
            color_groups.len(),
            quantities.len(),
        ] {
            if len != n {
                return Err(SizeAllocError::length_mismatch(n, len));
            }
        }

        Ok(categories
            .into_iter()
            .zip(sub_categories)
            .zip(color_groups)
            .zip(size_codes.into_iter().zip(quantities))
            .map(|(((category, sub_category), color_group), (size_code, qty))| Self {
                category,
                sub_category,
                color_group,
                size_code,
                quantity_sold: qty,
            })
            .collect())
    }
}

/// Size granularity used by a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    /// Native granularity of the historical data (e.g. 5mm).
    Fine,
    /// Double the native granularity (e.g. 10mm).
    Coarse,
}

impl Default for SizeUnit {
    fn default() -> Self {
        SizeUnit::Fine
    }
}

impl SizeUnit {
    /// Parse a unit name. Accepts "fine"/"coarse" in any case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "fine" => Some(SizeUnit::Fine),
            "coarse" => Some(SizeUnit::Coarse),
            _ => None,
        }
    }
}

/// Parameters for simulating a target size range and granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub unit: SizeUnit,
    pub min_size: SizeCode,
    pub max_size: SizeCode,
}

impl SimulationConfig {
    /// Create a simulation config, rejecting inverted ranges.
    pub fn new(unit: SizeUnit, min_size: SizeCode, max_size: SizeCode) -> Result<Self> {
        if min_size > max_size {
            return Err(SizeAllocError::invalid_range(min_size, max_size));
        }
        Ok(Self {
            unit,
            min_size,
            max_size,
        })
    }

    /// Check the range order and that both bounds sit on the fine grid.
    pub fn validate(&self, fine_step: SizeCode) -> Result<()> {
        if self.min_size > self.max_size {
            return Err(SizeAllocError::invalid_range(self.min_size, self.max_size));
        }
        for size in [self.min_size, self.max_size] {
            if size.rem_euclid(fine_step) != 0 {
                return Err(SizeAllocError::misaligned_size(size, fine_step));
            }
        }
        Ok(())
    }

    /// Whether `size` lies inside the inclusive target range.
    #[inline]
    pub fn contains(&self, size: SizeCode) -> bool {
        size >= self.min_size && size <= self.max_size
    }
}

/// One row of the size-share table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationRow {
    pub size_code: SizeCode,
    pub quantity: Quantity,
    /// Fraction of the table total, in [0, 1].
    pub share: f64,
    /// True when any part of the quantity was estimated by mirroring.
    pub is_simulated: bool,
}

impl AllocationRow {
    /// Whether this row's share reaches the key-size threshold.
    #[inline]
    pub fn is_key_size(&self, threshold: f64) -> bool {
        self.share >= threshold
    }

    /// Share as a percentage (0-100).
    #[inline]
    pub fn share_pct(&self) -> f64 {
        self.share * 100.0
    }
}

/// Display-only mapping from a concrete color code to its color group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMapping {
    pub color_code: String,
    pub color_name: String,
    #[serde(alias = "ColorRange")]
    pub color_group: String,
}

impl ColorMapping {
    /// Group mappings by color group, keeping input order within a group.
    pub fn by_group(mappings: &[ColorMapping]) -> BTreeMap<&str, Vec<&ColorMapping>> {
        let mut groups: BTreeMap<&str, Vec<&ColorMapping>> = BTreeMap::new();
        for mapping in mappings {
            groups
                .entry(mapping.color_group.as_str())
                .or_default()
                .push(mapping);
        }
        groups
    }
}
