use tracing::debug;

use crate::error::ExtractError;
use crate::mapping::ColumnMapping;
use crate::models::category::{SCORE_CATEGORY_COUNT, ScoreCategory, TextCategory};
use crate::models::dataset::{FeedbackDataset, ScoreRow};
use crate::models::raw::RawRow;
use crate::scoring::{SCORE_MIN, parse_score_cell};

/// Turn decoded response rows into a `FeedbackDataset`.
///
/// Columns are resolved from the first row's headers through `mapping`.
/// Blank or unparsable score cells become `0.0`; blank free-text answers
/// are dropped. Row order is preserved.
pub fn extract(rows: &[RawRow], mapping: &ColumnMapping) -> Result<FeedbackDataset, ExtractError> {
    let first = rows.first().ok_or(ExtractError::EmptyInput)?;
    let columns = mapping.resolve(first.headers())?;

    let mut unparsable = 0usize;
    let mut scores: Vec<ScoreRow> = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells = [SCORE_MIN; SCORE_CATEGORY_COUNT];
        for category in ScoreCategory::ALL {
            let raw = row.get(columns.score_header(category)).unwrap_or_default();
            cells[category.index()] = match parse_score_cell(raw) {
                Some(value) => value,
                None => {
                    if !raw.trim().is_empty() {
                        unparsable += 1;
                    }
                    SCORE_MIN
                }
            };
        }
        scores.push(cells);
    }

    let text = TextCategory::ALL.map(|category| {
        let header = columns.text_header(category);
        rows.iter()
            .filter_map(|row| row.get(header))
            .map(str::to_string)
            .collect::<Vec<_>>()
    });

    let dataset = FeedbackDataset::new(rows.to_vec(), scores, text);

    debug!(
        responses = dataset.response_count(),
        unparsable_cells = unparsable,
        mean_score = ?dataset.mean_score(),
        key_takeaways = dataset.key_takeaways().len(),
        strengths = dataset.strengths().len(),
        improvements = dataset.improvements().len(),
        "extracted feedback dataset"
    );

    Ok(dataset)
}
