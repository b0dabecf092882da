//! Record selection: filters and the options that populate them.

pub mod filter;
pub mod options;

pub use filter::{FilterSelection, Selector, ALL};
pub use options::FilterOptions;
