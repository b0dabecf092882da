//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::error::{Result, SizeAllocError};
use super::types::{SizeCode, SizeUnit};

/// Default fine size step (5mm).
pub const DEFAULT_FINE_STEP: SizeCode = 5;

/// Default scaling total used by mirroring when the filtered set has no sales.
pub const DEFAULT_MIRROR_BASELINE: f64 = 1000.0;

/// Default share at which a size counts as a key size.
pub const DEFAULT_KEY_SIZE_SHARE: f64 = 0.20;

/// Configuration for the allocation engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fine granularity of the size grid. The coarse step is twice this.
    pub fine_step: SizeCode,
    /// Nominal total that mirrored estimates are scaled onto when the
    /// color-filtered set has no sales at all.
    pub mirror_baseline: f64,
    /// Minimum share for a row to be reported as a key size.
    pub key_size_share: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fine_step: DEFAULT_FINE_STEP,
            mirror_baseline: DEFAULT_MIRROR_BASELINE,
            key_size_share: DEFAULT_KEY_SIZE_SHARE,
        }
    }
}

impl EngineConfig {
    /// Create a config with the given fine step and default policies.
    pub fn new(fine_step: SizeCode) -> Self {
        Self {
            fine_step,
            ..Self::default()
        }
    }

    /// Set the mirroring baseline.
    pub fn with_mirror_baseline(mut self, baseline: f64) -> Self {
        self.mirror_baseline = baseline;
        self
    }

    /// Set the key-size share threshold.
    pub fn with_key_size_share(mut self, share: f64) -> Self {
        self.key_size_share = share.clamp(0.0, 1.0);
        self
    }

    /// Coarse granularity (twice the fine step).
    #[inline]
    pub fn coarse_step(&self) -> SizeCode {
        self.fine_step * 2
    }

    /// Bucket width for the given unit.
    #[inline]
    pub fn step_for(&self, unit: SizeUnit) -> SizeCode {
        match unit {
            SizeUnit::Fine => self.fine_step,
            SizeUnit::Coarse => self.coarse_step(),
        }
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.fine_step <= 0 {
            return Err(SizeAllocError::invalid_config(format!(
                "fine_step must be positive, got {}",
                self.fine_step
            )));
        }
        if !self.mirror_baseline.is_finite() || self.mirror_baseline <= 0.0 {
            return Err(SizeAllocError::invalid_config(format!(
                "mirror_baseline must be a positive number, got {}",
                self.mirror_baseline
            )));
        }
        if !(0.0..=1.0).contains(&self.key_size_share) {
            return Err(SizeAllocError::invalid_config(format!(
                "key_size_share must be within [0, 1], got {}",
                self.key_size_share
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.fine_step, 5);
        assert_eq!(config.coarse_step(), 10);
        assert!((config.mirror_baseline - 1000.0).abs() < 1e-12);
        assert!((config.key_size_share - 0.2).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_step_for_unit() {
        let config = EngineConfig::new(10);
        assert_eq!(config.step_for(SizeUnit::Fine), 10);
        assert_eq!(config.step_for(SizeUnit::Coarse), 20);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(EngineConfig::new(0).validate().is_err());
        assert!(EngineConfig::default()
            .with_mirror_baseline(0.0)
            .validate()
            .is_err());
        assert!(EngineConfig::default()
            .with_mirror_baseline(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_key_share_is_clamped() {
        let config = EngineConfig::default().with_key_size_share(1.5);
        assert!((config.key_size_share - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_serde_round_trip_uses_field_names() {
        let json = r#"{"fine_step":5,"mirror_baseline":500.0,"key_size_share":0.25}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.fine_step, 5);
        assert!((config.mirror_baseline - 500.0).abs() < 1e-12);
    }
}
