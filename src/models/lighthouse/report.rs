use crate::error::InspectError;
use crate::models::lighthouse::category::{Categories, Category};
use crate::models::score::{CategoryScores, ScoreCategory};
use serde::{Deserialize, Serialize};

/// Subset of the Lighthouse JSON result (`lhr`) needed to build a report.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseReport {
    pub requested_url: String,
    #[serde(default)]
    pub final_url: Option<String>,
    #[serde(default)]
    pub lighthouse_version: Option<String>,
    pub categories: Categories,
}

impl LighthouseReport {
    pub fn from_slice(buffer: &[u8]) -> Result<Self, InspectError> {
        serde_json::from_slice(buffer).map_err(InspectError::LighthouseOutput)
    }

    /// Category scores scaled from Lighthouse's 0..=1 range to 0..=100.
    pub fn category_scores(&self) -> Result<CategoryScores, InspectError> {
        let c = &self.categories;
        Ok(CategoryScores {
            performance: scaled(ScoreCategory::Performance, &c.performance)?,
            accessibility: scaled(ScoreCategory::Accessibility, &c.accessibility)?,
            best_practices: scaled(ScoreCategory::BestPractices, &c.best_practices)?,
            seo: scaled(ScoreCategory::Seo, &c.seo)?,
            pwa: scaled(ScoreCategory::Pwa, &c.pwa)?,
        })
    }
}

fn scaled(category: ScoreCategory, entry: &Option<Category>) -> Result<f64, InspectError> {
    entry
        .as_ref()
        .and_then(|c| c.score)
        .map(|score| score * 100.0)
        .ok_or(InspectError::MissingCategory(category))
}
