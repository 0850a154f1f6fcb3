//! seminar-core
//!
//! Pure domain types for seminar feedback: raw CSV rows, the six score
//! categories, column mapping configuration, and the extractor that turns
//! rows into a `FeedbackDataset`. No HTTP or PDF dependency.

pub mod decode;
pub mod error;
pub mod extract;
pub mod mapping;
pub mod models;
pub mod scoring;

pub use extract::extract;
pub use mapping::ColumnMapping;
pub use models::category::{ScoreCategory, TextCategory};
pub use models::dataset::FeedbackDataset;
pub use models::raw::RawRow;
