use thiserror::Error;

use crate::mapping::Markers;
use crate::models::category::Category;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("feedback file contains no responses")]
    EmptyInput,

    #[error("no column matches {markers} for {category}")]
    MissingColumn { category: Category, markers: Markers },

    #[error("column markers {markers} for {category} match several headers: {}", .headers.join(", "))]
    AmbiguousColumn {
        category: Category,
        markers: Markers,
        headers: Vec<String>,
    },
}

/// Failure to decode an uploaded feedback file into rows.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV has no header row")]
    MissingHeader,
}

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("invalid column mapping: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("empty column marker for {0}")]
    EmptyMarker(Category),

    #[error("failed to read column mapping: {0}")]
    Io(#[from] std::io::Error),
}
