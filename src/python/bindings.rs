//! PyO3 function bindings for the size-allocation engine.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::core::config::EngineConfig;
use crate::core::error::SizeAllocError;
use crate::core::types::{AllocationRow, SalesRecord, SimulationConfig, SizeUnit};
use crate::core::validate::validate_request;
use crate::engine::SizeAllocator;
use crate::metrics::AllocationSummary;
use crate::order::{OrderAllocator, RoundingMode};
use crate::selection::{FilterOptions, FilterSelection};

use super::numpy_bridge::*;

// ============================================================================
// Result Classes
// ============================================================================

/// Python-exposed size-share table.
#[pyclass]
#[derive(Debug, Clone)]
pub struct PyAllocationResult {
    rows: Vec<AllocationRow>,
    dominant: Option<AllocationRow>,
    summary: AllocationSummary,
}

#[pymethods]
impl PyAllocationResult {
    /// Size codes in ascending order.
    #[getter]
    fn sizes<'py>(&self, py: Python<'py>) -> &'py PyArray1<i64> {
        vec_to_numpy_i64(py, self.rows.iter().map(|r| r.size_code).collect())
    }

    /// Quantity per size.
    #[getter]
    fn quantities<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        vec_to_numpy_f64(py, self.rows.iter().map(|r| r.quantity).collect())
    }

    /// Share per size (sums to 1).
    #[getter]
    fn shares<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        vec_to_numpy_f64(py, self.rows.iter().map(|r| r.share).collect())
    }

    /// Whether each size carries mirrored quantity.
    #[getter]
    fn is_simulated<'py>(&self, py: Python<'py>) -> &'py PyArray1<bool> {
        vec_to_numpy_bool(py, self.rows.iter().map(|r| r.is_simulated).collect())
    }

    #[getter]
    fn dominant_size(&self) -> Option<i64> {
        self.dominant.map(|r| r.size_code)
    }

    #[getter]
    fn key_sizes(&self) -> Vec<i64> {
        self.summary.key_sizes.clone()
    }

    #[getter]
    fn total_quantity(&self) -> f64 {
        self.summary.total_quantity
    }

    #[getter]
    fn simulated_count(&self) -> usize {
        self.summary.simulated_count
    }

    fn __len__(&self) -> usize {
        self.rows.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "AllocationResult(sizes={}, dominant={:?}, total={:.1})",
            self.rows.len(),
            self.dominant.map(|r| r.size_code),
            self.summary.total_quantity
        )
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn records_from_columns(
    categories: Vec<String>,
    sub_categories: Vec<String>,
    color_groups: Vec<String>,
    size_codes: PyReadonlyArray1<i64>,
    quantities: PyReadonlyArray1<f64>,
) -> Result<Vec<SalesRecord>, SizeAllocError> {
    SalesRecord::from_columns(
        categories,
        sub_categories,
        color_groups,
        numpy_to_vec_i64(size_codes),
        numpy_to_vec_f64(quantities),
    )
}

fn simulation_from_args(
    unit: Option<&str>,
    min_size: Option<i64>,
    max_size: Option<i64>,
) -> Result<Option<SimulationConfig>, SizeAllocError> {
    let Some(unit) = unit else {
        return Ok(None);
    };
    let unit = SizeUnit::from_name(unit).ok_or_else(|| {
        SizeAllocError::invalid_parameter(format!(
            "unknown unit '{}', expected 'fine' or 'coarse'",
            unit
        ))
    })?;
    match (min_size, max_size) {
        (Some(min), Some(max)) => SimulationConfig::new(unit, min, max).map(Some),
        _ => Err(SizeAllocError::invalid_parameter(
            "simulation requires both min_size and max_size",
        )),
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Compute the size-share table for a selection.
#[pyfunction]
#[pyo3(signature = (
    categories, sub_categories, color_groups, size_codes, quantities,
    category="All", sub_category="All", color_group="All",
    unit=None, min_size=None, max_size=None,
    fine_step=5, mirror_baseline=1000.0, key_size_share=0.2
))]
#[allow(clippy::too_many_arguments)]
pub fn compute_allocation(
    categories: Vec<String>,
    sub_categories: Vec<String>,
    color_groups: Vec<String>,
    size_codes: PyReadonlyArray1<i64>,
    quantities: PyReadonlyArray1<f64>,
    category: &str,
    sub_category: &str,
    color_group: &str,
    unit: Option<&str>,
    min_size: Option<i64>,
    max_size: Option<i64>,
    fine_step: i64,
    mirror_baseline: f64,
    key_size_share: f64,
) -> PyResult<PyAllocationResult> {
    let records = records_from_columns(
        categories,
        sub_categories,
        color_groups,
        size_codes,
        quantities,
    )?;
    let simulation = simulation_from_args(unit, min_size, max_size)?;
    let config = EngineConfig::new(fine_step)
        .with_mirror_baseline(mirror_baseline)
        .with_key_size_share(key_size_share);
    validate_request(&records, simulation.as_ref(), &config)?;

    let filter = FilterSelection::new(category, sub_category, color_group);
    let engine = SizeAllocator::new(config);
    let result = engine.compute(&records, &filter, simulation.as_ref());
    let summary = engine.summarize(&result);

    Ok(PyAllocationResult {
        rows: result.rows,
        dominant: result.dominant,
        summary,
    })
}

/// Filter options: (categories, sub_categories, color_groups), each "All" first.
#[pyfunction]
pub fn filter_options(
    categories: Vec<String>,
    sub_categories: Vec<String>,
    color_groups: Vec<String>,
    size_codes: PyReadonlyArray1<i64>,
    quantities: PyReadonlyArray1<f64>,
) -> PyResult<(Vec<String>, Vec<String>, Vec<String>)> {
    let records = records_from_columns(
        categories,
        sub_categories,
        color_groups,
        size_codes,
        quantities,
    )?;
    let options = FilterOptions::from_records(&records);
    Ok((
        options.categories,
        options.sub_categories,
        options.color_groups,
    ))
}

/// Split an order total into per-size units: (sizes, units, unallocated).
#[pyfunction]
#[pyo3(signature = (size_codes, shares, total_units, min_units=0, rounding="largest_remainder"))]
pub fn allocate_order<'py>(
    py: Python<'py>,
    size_codes: PyReadonlyArray1<i64>,
    shares: PyReadonlyArray1<f64>,
    total_units: u64,
    min_units: u64,
    rounding: &str,
) -> PyResult<(&'py PyArray1<i64>, &'py PyArray1<u64>, u64)> {
    let sizes = numpy_to_vec_i64(size_codes);
    let shares = numpy_to_vec_f64(shares);
    if sizes.len() != shares.len() {
        return Err(SizeAllocError::length_mismatch(sizes.len(), shares.len()).into());
    }

    let rounding = match rounding {
        "largest_remainder" => RoundingMode::LargestRemainder,
        "floor" => RoundingMode::Floor,
        other => {
            return Err(SizeAllocError::invalid_parameter(format!(
                "unknown rounding '{}', expected 'largest_remainder' or 'floor'",
                other
            ))
            .into())
        }
    };

    let rows: Vec<AllocationRow> = sizes
        .into_iter()
        .zip(shares)
        .map(|(size_code, share)| AllocationRow {
            size_code,
            quantity: share,
            share,
            is_simulated: false,
        })
        .collect();

    let plan = OrderAllocator::new(total_units)
        .with_rounding(rounding)
        .with_min_units(min_units)
        .allocate(&rows)?;

    let out_sizes = plan.lines.iter().map(|l| l.size_code).collect();
    let out_units = plan.lines.iter().map(|l| l.units).collect();
    Ok((
        vec_to_numpy_i64(py, out_sizes),
        vec_to_numpy_u64(py, out_units),
        plan.unallocated,
    ))
}
