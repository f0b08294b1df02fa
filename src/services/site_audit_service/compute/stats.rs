use crate::error::ReportError;
use crate::models::{CategoryScores, EcoIndexResult, PageMetrics, Report, ScoreCategory, ScoreEntry};
use crate::services::site_audit_service::compute::grade::get_grade;
use chrono::Utc;

/// Unweighted mean. An empty slice is an error rather than NaN.
pub fn average(scores: &[f64]) -> Result<f64, ReportError> {
    if scores.is_empty() {
        return Err(ReportError::NoScores);
    }
    let sum: f64 = scores.iter().sum();
    Ok(sum / scores.len() as f64)
}

pub fn compute_report(
    url: &str,
    categories: &CategoryScores,
    metrics: PageMetrics,
    eco_index: EcoIndexResult,
) -> Result<Report, ReportError> {
    let mut scores: Vec<ScoreEntry> = categories
        .entries()
        .into_iter()
        .map(|(category, score)| ScoreEntry { category, score })
        .collect();
    scores.push(ScoreEntry {
        category: ScoreCategory::EcoIndex,
        score: eco_index.score,
    });

    let values: Vec<f64> = scores.iter().map(|entry| entry.score).collect();
    let average_score = average(&values)?;

    Ok(Report {
        url: url.to_string(),
        generated_at: Utc::now(),
        scores,
        average_score,
        grade: get_grade(average_score),
        metrics,
        eco_index,
    })
}
