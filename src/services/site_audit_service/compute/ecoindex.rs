use crate::models::{EcoIndexResult, PageMetrics};
use crate::services::site_audit_service::compute::grade::{grade_from_ladder, ECO_INDEX_LADDER};

// GreenIT reference quantiles: DOM elements, HTTP requests, transferred KB
const QUANTILES_DOM: [f64; 21] = [
    0.0, 47.0, 75.0, 159.0, 233.0, 298.0, 358.0, 417.0, 476.0, 537.0, 603.0, 674.0, 753.0,
    843.0, 949.0, 1076.0, 1237.0, 1459.0, 1801.0, 2479.0, 594601.0,
];

const QUANTILES_REQ: [f64; 21] = [
    0.0, 2.0, 15.0, 25.0, 34.0, 42.0, 49.0, 56.0, 63.0, 70.0, 78.0, 86.0, 95.0, 105.0, 117.0,
    130.0, 147.0, 170.0, 205.0, 281.0, 3920.0,
];

const QUANTILES_SIZE: [f64; 21] = [
    0.0, 1.37, 144.7, 319.53, 479.46, 631.97, 783.38, 937.91, 1098.62, 1265.47, 1448.32,
    1648.27, 1876.08, 2142.06, 2465.37, 2866.31, 3401.59, 4155.73, 5400.08, 8037.54, 223212.26,
];

/// Interpolated position of `value` within a quantile table, in `0..=len-1`.
fn compute_quantile(quantiles: &[f64], value: f64) -> f64 {
    for i in 1..quantiles.len() {
        if value < quantiles[i] {
            return (i - 1) as f64 + (value - quantiles[i - 1]) / (quantiles[i] - quantiles[i - 1]);
        }
    }
    (quantiles.len() - 1) as f64
}

/// Eco-index score in `0..=100`; higher means a lighter page.
pub fn compute_eco_index(dom: u64, req: u64, size_kb: f64) -> f64 {
    let q_dom = compute_quantile(&QUANTILES_DOM, dom as f64);
    let q_req = compute_quantile(&QUANTILES_REQ, req as f64);
    // NaN would slip through every comparison, treat it as saturated
    let size_kb = if size_kb.is_nan() { f64::INFINITY } else { size_kb.max(0.0) };
    let q_size = compute_quantile(&QUANTILES_SIZE, size_kb);

    let score = 100.0 - 5.0 * (3.0 * q_dom + 2.0 * q_req + q_size) / 6.0;
    score.clamp(0.0, 100.0)
}

/// Greenhouse gas emission in gCO2e per page view.
pub fn compute_greenhouse_gases_emission(eco_index: f64) -> f64 {
    round2(2.0 + 2.0 * (50.0 - eco_index) / 100.0)
}

/// Water consumption in centilitres per page view.
pub fn compute_water_consumption(eco_index: f64) -> f64 {
    round2(3.0 + 3.0 * (50.0 - eco_index) / 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn eco_index_for(metrics: &PageMetrics) -> EcoIndexResult {
    let score = compute_eco_index(
        metrics.dom_node_count,
        metrics.request_count,
        metrics.transfer_size_kb,
    );
    EcoIndexResult {
        score,
        grade: grade_from_ladder(score, &ECO_INDEX_LADDER),
        greenhouse_gas_emission: compute_greenhouse_gases_emission(score),
        water_consumption: compute_water_consumption(score),
    }
}
