use tracing::info;

use seminar_core::ColumnMapping;
use seminar_core::decode::decode_csv;
use seminar_core::extract;

use crate::error::PipelineError;
use crate::pdf::render_report;
use crate::styles::ReportStyles;

/// Decode an uploaded CSV, extract the feedback dataset, and render the
/// PDF summary. Nothing is returned unless every stage succeeds.
pub fn summarize_csv(
    csv: &[u8],
    mapping: &ColumnMapping,
    styles: &ReportStyles,
) -> Result<Vec<u8>, PipelineError> {
    let rows = decode_csv(csv)?;
    info!(rows = rows.len(), "decoded feedback upload");

    let dataset = extract(&rows, mapping)?;
    let pdf = render_report(&dataset, styles)?;
    Ok(pdf)
}
