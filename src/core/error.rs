//! Error types for the size-allocation engine.

use thiserror::Error;

use super::types::SizeCode;

/// Result type alias for size-allocation operations.
pub type Result<T> = std::result::Result<T, SizeAllocError>;

/// Error types for the size-allocation engine.
///
/// The engine itself never fails; these errors come from caller-side
/// validation of inputs before a computation is started.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizeAllocError {
    /// Simulation range with `min_size > max_size`.
    #[error("Invalid size range: min {min_size} is greater than max {max_size}")]
    InvalidRange { min_size: SizeCode, max_size: SizeCode },

    /// Size code that is not a multiple of the fine granularity.
    #[error("Size {size} is not a multiple of the size step {step}")]
    MisalignedSize { size: SizeCode, step: SizeCode },

    /// Malformed sales record.
    #[error("Invalid record at index {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    /// Column length mismatch when building records from columns.
    #[error("Data length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Invalid parameter value.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Invalid engine configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Python conversion error.
    #[error("Python conversion error: {message}")]
    PythonError { message: String },
}

impl SizeAllocError {
    /// Create an invalid range error.
    pub fn invalid_range(min_size: SizeCode, max_size: SizeCode) -> Self {
        Self::InvalidRange { min_size, max_size }
    }

    /// Create a misaligned size error.
    pub fn misaligned_size(size: SizeCode, step: SizeCode) -> Self {
        Self::MisalignedSize { size, step }
    }

    /// Create an invalid record error.
    pub fn invalid_record(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            index,
            message: message.into(),
        }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(feature = "python")]
impl From<SizeAllocError> for pyo3::PyErr {
    fn from(err: SizeAllocError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
