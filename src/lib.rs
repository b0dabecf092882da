// Suppress warning from PyO3 macro expansion (fixed in newer PyO3 versions)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

//! sizealloc - size-allocation engine for merchandise planning.
//!
//! Given historical per-size sell-through records, this crate produces the
//! percentage breakdown across sizes for a future order:
//! - Category / sub-category / color-group filtering
//! - Mirroring of missing sizes from the category-level distribution
//! - Fine to coarse size-unit conversion
//! - Range cutoff and renormalization to a closed share table
//! - Summary statistics and whole-unit order splitting

pub mod core;
pub mod engine;
pub mod metrics;
pub mod order;
#[cfg(feature = "python")]
pub mod python;
pub mod selection;

pub use crate::core::{
    AllocationRow, ColorMapping, EngineConfig, Result, SalesRecord, SimulationConfig,
    SizeAllocError, SizeUnit,
};
pub use engine::{compute_allocation, AllocationResult, Scenario, SizeAllocator};
pub use metrics::AllocationSummary;
pub use order::{OrderAllocator, OrderPlan, RoundingMode};
pub use selection::{FilterOptions, FilterSelection, Selector};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module entry point
#[cfg(feature = "python")]
#[pymodule]
fn _sizealloc(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<python::bindings::PyAllocationResult>()?;

    m.add_function(wrap_pyfunction!(python::bindings::compute_allocation, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::filter_options, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::allocate_order, m)?)?;

    Ok(())
}
