//! Core types and utilities for the size-allocation engine.

pub mod config;
pub mod error;
pub mod types;
pub mod validate;

pub use config::EngineConfig;
pub use error::{Result, SizeAllocError};
pub use types::*;
pub use validate::{validate_records, validate_request};
