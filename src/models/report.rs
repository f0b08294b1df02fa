use crate::models::metrics::{EcoIndexResult, PageMetrics};
use crate::models::score::{Grade, ScoreCategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub category: ScoreCategory,
    pub score: f64,
}

// Final report for one inspected page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub url: String,
    pub generated_at: DateTime<Utc>,
    pub scores: Vec<ScoreEntry>,
    pub average_score: f64,
    pub grade: Grade,
    pub metrics: PageMetrics,
    pub eco_index: EcoIndexResult,
}

// Console form: one `name: value` line per score, then the custom score and grade
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.scores {
            writeln!(f, "{}: {:.2}", entry.category, entry.score)?;
        }
        writeln!(f, "custom score: {:.2}", self.average_score)?;
        write!(f, "grade: {}", self.grade)
    }
}
