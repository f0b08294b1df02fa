use serde::{Deserialize, Serialize};
use std::fmt;

/// Every score that ends up in a report, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Performance,
    Accessibility,
    BestPractices,
    Seo,
    Pwa,
    EcoIndex,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 6] = [
        ScoreCategory::Performance,
        ScoreCategory::Accessibility,
        ScoreCategory::BestPractices,
        ScoreCategory::Seo,
        ScoreCategory::Pwa,
        ScoreCategory::EcoIndex,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ScoreCategory::Performance => "performance",
            ScoreCategory::Accessibility => "accessibility",
            ScoreCategory::BestPractices => "best_practices",
            ScoreCategory::Seo => "seo",
            ScoreCategory::Pwa => "pwa",
            ScoreCategory::EcoIndex => "eco_index",
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// Lighthouse category scores, already scaled to 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub performance: f64,
    pub accessibility: f64,
    pub best_practices: f64,
    pub seo: f64,
    pub pwa: f64,
}

impl CategoryScores {
    pub fn entries(&self) -> [(ScoreCategory, f64); 5] {
        [
            (ScoreCategory::Performance, self.performance),
            (ScoreCategory::Accessibility, self.accessibility),
            (ScoreCategory::BestPractices, self.best_practices),
            (ScoreCategory::Seo, self.seo),
            (ScoreCategory::Pwa, self.pwa),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
            Grade::G => "G",
        };
        write!(f, "{}", letter)
    }
}
