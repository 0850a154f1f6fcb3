//! seminar-export
//!
//! PDF report generation for seminar feedback datasets.

pub mod error;
pub mod heatmap;
pub mod pdf;
pub mod styles;
pub mod summary;
pub mod text;
