// src/models/mod.rs

pub mod lighthouse;
pub mod metrics;
pub mod report;
pub mod score;

pub use lighthouse::LighthouseReport;
pub use metrics::{EcoIndexResult, PageMetrics};
pub use report::{Report, ScoreEntry};
pub use score::{CategoryScores, Grade, ScoreCategory};
