pub mod catalog;
pub mod comparison;
pub mod domain;
pub mod error;
pub mod filter;

// Re-export primary types for convenience.
pub use catalog::{Catalog, ImageRecord};
pub use comparison::{ComparisonSet, Toggled, COMPARISON_CAPACITY};
pub use domain::{Domains, QuantityDefinition, ANGLES, FIELDS, QUANTITIES, SPINS};
pub use error::CoreError;
pub use filter::{FilterField, FilterSpec};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
