//! Batch evaluation of independent allocation requests.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::allocator::{AllocationResult, SizeAllocator};
use crate::core::types::{SalesRecord, SimulationConfig};
use crate::selection::FilterSelection;

/// One allocation request over a shared record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub filter: FilterSelection,
    pub simulation: Option<SimulationConfig>,
}

impl Scenario {
    /// Historical shares for a selection.
    pub fn actual(filter: FilterSelection) -> Self {
        Self {
            filter,
            simulation: None,
        }
    }

    /// Simulated shares for a selection.
    pub fn simulated(filter: FilterSelection, simulation: SimulationConfig) -> Self {
        Self {
            filter,
            simulation: Some(simulation),
        }
    }
}

impl SizeAllocator {
    /// Evaluate many scenarios in parallel. Results are in request order.
    pub fn compute_scenarios(
        &self,
        records: &[SalesRecord],
        scenarios: &[Scenario],
    ) -> Vec<AllocationResult> {
        scenarios
            .par_iter()
            .map(|scenario| self.compute(records, &scenario.filter, scenario.simulation.as_ref()))
            .collect()
    }
}
