use crate::models::Report;
use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

pub fn save_report(output_path: &Path, report: &Report) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create report file: {}", output_path.display()))?;
    serde_json::to_writer_pretty(file, report)
        .with_context(|| format!("Failed to write report: {}", output_path.display()))?;
    Ok(())
}

pub fn sanitize_filename(url: &str) -> String {
    url.replace(|c: char| !c.is_alphanumeric() && c != '.', &'_'.to_string())
}

/// Writes the raw lighthouse JSON as `<dir>/<sanitized url>.json`.
pub async fn save_lighthouse_output(dir: &Path, url: &str, raw: &[u8]) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(format!("{}.json", sanitize_filename(url)));
    tokio::fs::write(&path, raw).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EcoIndexResult, Grade, PageMetrics, ScoreCategory, ScoreEntry};
    use chrono::Utc;

    #[test]
    fn sanitizes_urls_into_file_names() {
        assert_eq!(
            sanitize_filename("https://www.example.org/a?b=c"),
            "https___www.example.org_a_b_c"
        );
    }

    #[test]
    fn writes_report_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = Report {
            url: "https://example.org/".to_string(),
            generated_at: Utc::now(),
            scores: vec![ScoreEntry {
                category: ScoreCategory::EcoIndex,
                score: 100.0,
            }],
            average_score: 100.0,
            grade: Grade::A,
            metrics: PageMetrics {
                dom_node_count: 0,
                request_count: 0,
                transfer_size_kb: 0.0,
            },
            eco_index: EcoIndexResult {
                score: 100.0,
                grade: Grade::A,
                greenhouse_gas_emission: 1.0,
                water_consumption: 1.5,
            },
        };

        save_report(&path, &report).unwrap();

        let written: Report = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(written.url, report.url);
        assert_eq!(written.grade, Grade::A);
    }

    #[tokio::test]
    async fn stores_raw_lighthouse_output() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("lighthouse");
        let path = save_lighthouse_output(&nested, "https://example.org/", b"{}")
            .await
            .unwrap();
        assert_eq!(path.file_name().unwrap(), "https___example.org_.json");
        assert_eq!(std::fs::read(path).unwrap(), b"{}");
    }
}
