//! Caller-side precondition checks.
//!
//! The engine accepts any input and never fails. Callers that load records
//! or simulation parameters from outside use these checks before invoking it.

use super::config::EngineConfig;
use super::error::{Result, SizeAllocError};
use super::types::{SalesRecord, SimulationConfig};

/// Check that every record has a finite non-negative quantity and a size on
/// the fine grid.
pub fn validate_records(records: &[SalesRecord], config: &EngineConfig) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        if !record.quantity_sold.is_finite() {
            return Err(SizeAllocError::invalid_record(
                index,
                format!("quantity {} is not finite", record.quantity_sold),
            ));
        }
        if record.quantity_sold < 0.0 {
            return Err(SizeAllocError::invalid_record(
                index,
                format!("quantity {} is negative", record.quantity_sold),
            ));
        }
        if record.size_code.rem_euclid(config.fine_step) != 0 {
            return Err(SizeAllocError::invalid_record(
                index,
                format!(
                    "size {} is not a multiple of the size step {}",
                    record.size_code, config.fine_step
                ),
            ));
        }
    }
    Ok(())
}

/// Validate the engine config, the records and the optional simulation.
pub fn validate_request(
    records: &[SalesRecord],
    simulation: Option<&SimulationConfig>,
    config: &EngineConfig,
) -> Result<()> {
    config.validate()?;
    validate_records(records, config)?;
    if let Some(sim) = simulation {
        sim.validate(config.fine_step)?;
    }
    Ok(())
}
