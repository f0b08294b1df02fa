use serde::{Deserialize, Serialize};

// Single Lighthouse category, score is 0..=1 or null when the category errored
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Category {
    pub score: Option<f64>,
}

// Lighthouse categories, keyed the way the JSON result keys them
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Categories {
    pub performance: Option<Category>,
    pub accessibility: Option<Category>,
    #[serde(rename = "best-practices")]
    pub best_practices: Option<Category>,
    pub seo: Option<Category>,
    pub pwa: Option<Category>,
}
