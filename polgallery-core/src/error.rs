use thiserror::Error;

/// Errors originating from the catalog and comparison logic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("You can compare at most {capacity} images at a time.")]
    ComparisonFull { capacity: usize },

    #[error("unknown image id: {0}")]
    UnknownImage(String),

    #[error("invalid {field} filter value: {value:?}")]
    InvalidFilterValue { field: &'static str, value: String },
}
