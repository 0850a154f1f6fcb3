//! Score cell parsing and aggregation.

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 5.0;

/// Parse the leading number of a `"<number>:<label>"` cell.
///
/// Returns `None` for blank, unparsable, or non-finite values. Numbers are
/// clamped into `[SCORE_MIN, SCORE_MAX]`.
pub fn parse_score_cell(raw: &str) -> Option<f64> {
    let head = raw.split(':').next().unwrap_or_default().trim();
    if head.is_empty() {
        return None;
    }
    head.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(SCORE_MIN, SCORE_MAX))
}

/// Arithmetic mean of the strictly positive values, `None` if there are none.
///
/// Zero cells are unanswered questions and do not pull the mean down.
pub fn positive_mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .filter(|v| *v > 0.0)
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    (count > 0).then(|| sum / count as f64)
}
