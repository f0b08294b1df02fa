use crate::models::score::Grade;
use serde::{Deserialize, Serialize};

// Raw page measurements taken inside the browser
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    pub dom_node_count: u64,
    pub request_count: u64,
    pub transfer_size_kb: f64,
}

/// Eco-index score plus the figures derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcoIndexResult {
    pub score: f64,
    pub grade: Grade,
    /// gCO2e per page view
    pub greenhouse_gas_emission: f64,
    /// centilitres per page view
    pub water_consumption: f64,
}
