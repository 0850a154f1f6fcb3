use crate::models::category::{SCORE_CATEGORY_COUNT, ScoreCategory, TEXT_CATEGORY_COUNT, TextCategory};
use crate::models::raw::RawRow;
use crate::scoring::{SCORE_MAX, SCORE_MIN, positive_mean};

/// Scores of one response, indexed by `ScoreCategory::index`.
pub type ScoreRow = [f64; SCORE_CATEGORY_COUNT];

/// Structured form of one uploaded feedback file.
///
/// Built once per upload and read by reference afterwards; there are no
/// mutating methods.
#[derive(Debug, Clone)]
pub struct FeedbackDataset {
    rows: Vec<RawRow>,
    scores: Vec<ScoreRow>,
    mean_score: Option<f64>,
    text: [Vec<String>; TEXT_CATEGORY_COUNT],
}

impl FeedbackDataset {
    /// Assemble a dataset from extracted parts.
    ///
    /// Scores are clamped into the valid range, free text is trimmed and
    /// blank entries are dropped, and the mean is computed here so every
    /// dataset carries a consistent summary.
    pub fn new(
        rows: Vec<RawRow>,
        scores: Vec<ScoreRow>,
        text: [Vec<String>; TEXT_CATEGORY_COUNT],
    ) -> Self {
        let scores: Vec<ScoreRow> = scores
            .into_iter()
            .map(|row| row.map(|v| if v.is_finite() { v.clamp(SCORE_MIN, SCORE_MAX) } else { SCORE_MIN }))
            .collect();
        let mean_score = positive_mean(scores.iter().flatten().copied());
        let text = text.map(|entries| {
            entries
                .into_iter()
                .filter_map(|entry| {
                    let trimmed = entry.trim();
                    (!trimmed.is_empty()).then(|| trimmed.to_string())
                })
                .collect()
        });

        Self {
            rows,
            scores,
            mean_score,
            text,
        }
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// Number of responses, i.e. heatmap rows.
    pub fn response_count(&self) -> usize {
        self.scores.len()
    }

    pub fn scores(&self) -> &[ScoreRow] {
        &self.scores
    }

    /// Mean of every positive score across all rows and columns.
    pub fn mean_score(&self) -> Option<f64> {
        self.mean_score
    }

    /// Mean of the positive scores in a single column.
    pub fn category_mean(&self, category: ScoreCategory) -> Option<f64> {
        positive_mean(self.scores.iter().map(|r| r[category.index()]))
    }

    pub fn text(&self, category: TextCategory) -> &[String] {
        &self.text[category.index()]
    }

    pub fn key_takeaways(&self) -> &[String] {
        self.text(TextCategory::KeyTakeaways)
    }

    pub fn strengths(&self) -> &[String] {
        self.text(TextCategory::Strengths)
    }

    pub fn improvements(&self) -> &[String] {
        self.text(TextCategory::Improvements)
    }
}
