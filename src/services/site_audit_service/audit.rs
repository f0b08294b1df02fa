use crate::models::Report;
use crate::services::site_audit_service::compute::{compute_report, eco_index_for};
use crate::services::site_audit_service::inspector::PageInspector;
use crate::utils::RunLog;
use anyhow::{Context, Result};
use url::Url;

/// Inspects one page and turns the measurements into a graded report.
pub async fn run_audit(inspector: &dyn PageInspector, url: &Url, run_log: &RunLog) -> Result<Report> {
    run_log.entry(&format!("Inspecting {}", url));
    let inspection = inspector
        .inspect(url)
        .await
        .with_context(|| format!("Inspection failed for {}", url))?;

    let metrics = inspection.metrics;
    run_log.entry(&format!(
        "Page metrics: {} DOM nodes, {} requests, {:.2} KB",
        metrics.dom_node_count, metrics.request_count, metrics.transfer_size_kb
    ));

    let eco_index = eco_index_for(&metrics);
    run_log.entry(&format!(
        "✅ Eco-index {:.2} ({}), {:.2} gCO2e, {:.2} cl water",
        eco_index.score, eco_index.grade, eco_index.greenhouse_gas_emission, eco_index.water_consumption
    ));

    let report = compute_report(url.as_str(), &inspection.categories, metrics, eco_index)?;
    run_log.entry(&format!(
        "✅ Report computed: {:.2} ({})",
        report.average_score, report.grade
    ));
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InspectError;
    use crate::models::{CategoryScores, Grade, PageMetrics, ScoreCategory};
    use crate::services::site_audit_service::inspector::Inspection;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeInspector {
        inspection: Option<Inspection>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PageInspector for FakeInspector {
        async fn inspect(&self, _url: &Url) -> Result<Inspection, InspectError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inspection
                .clone()
                .ok_or(InspectError::MissingCategory(ScoreCategory::Performance))
        }
    }

    fn target() -> Url {
        Url::parse("https://example.org/").unwrap()
    }

    #[tokio::test]
    async fn builds_report_from_inspection() {
        let inspector = FakeInspector {
            inspection: Some(Inspection {
                categories: CategoryScores {
                    performance: 90.0,
                    accessibility: 80.0,
                    best_practices: 70.0,
                    seo: 60.0,
                    pwa: 50.0,
                },
                metrics: PageMetrics {
                    dom_node_count: 500,
                    request_count: 40,
                    transfer_size_kb: 1000.0,
                },
            }),
            calls: AtomicUsize::new(0),
        };

        let report = run_audit(&inspector, &target(), &RunLog::default()).await.unwrap();

        assert_eq!(inspector.calls.load(Ordering::SeqCst), 1);
        assert_eq!(report.url, "https://example.org/");
        assert_eq!(report.eco_index.grade, Grade::C);
        let printed = report.to_string();
        assert!(printed.contains("eco_index: 64.94"));
        assert!(printed.ends_with("grade: C"));
    }

    #[tokio::test]
    async fn inspection_failure_propagates() {
        let inspector = FakeInspector {
            inspection: None,
            calls: AtomicUsize::new(0),
        };

        let err = run_audit(&inspector, &target(), &RunLog::default())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Inspection failed for https://example.org/"));
        assert!(err.downcast_ref::<InspectError>().is_some());
    }
}
