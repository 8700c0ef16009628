use crate::scoring::ScoringError;

/// Upper bound for every percentage-type sub-score.
pub const PERCENTAGE_CEILING: f64 = 100.0;

/// `min(100, count / denominator * 100)`.
///
/// Shared by the keyword, category-keyword and general-keyword scores
/// (denominator = sentence count) and the job-title score
/// (denominator = total work-experience entries).
pub fn normalize_percentage(
    count: u32,
    denominator: u32,
    quantity: &'static str,
) -> Result<f64, ScoringError> {
    if denominator == 0 {
        return Err(ScoringError::InvalidDenominator { quantity });
    }
    let percentage = f64::from(count) / f64::from(denominator) * 100.0;
    Ok(percentage.min(PERCENTAGE_CEILING))
}
