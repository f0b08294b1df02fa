use crate::error::InspectError;
use crate::models::LighthouseReport;
use crate::utils::save_lighthouse_output;
use log::{debug, info};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use url::Url;

#[derive(Debug, Clone)]
pub struct LighthouseOptions {
    /// Program plus leading arguments, e.g. `["npx", "lighthouse@11"]`
    pub command: Vec<String>,
    pub max_wait_for_load: u64,
    pub output_dir: Option<PathBuf>,
}

impl Default for LighthouseOptions {
    fn default() -> Self {
        Self {
            command: vec!["lighthouse".to_string()],
            max_wait_for_load: 120_000,
            output_dir: None,
        }
    }
}

pub fn lighthouse_args(url: &Url, port: u16, max_wait_for_load: u64) -> Vec<String> {
    vec![
        url.to_string(),
        format!("--port={}", port),
        "--output=json".to_string(),
        "--output-path=stdout".to_string(),
        "--no-enable-error-reporting".to_string(),
        format!("--max-wait-for-load={}", max_wait_for_load),
        "--quiet".to_string(),
    ]
}

// Runs lighthouse against the already running browser listening on `port`
pub async fn run_lighthouse(
    url: &Url,
    port: u16,
    options: &LighthouseOptions,
) -> Result<LighthouseReport, InspectError> {
    let (program, leading) = options.command.split_first().ok_or_else(|| {
        InspectError::LighthouseSpawn(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "empty lighthouse command",
        ))
    })?;
    let args = lighthouse_args(url, port, options.max_wait_for_load);
    debug!("running {} {:?} {:?}", program, leading, args);

    let output = Command::new(program)
        .args(leading)
        .args(&args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(InspectError::LighthouseSpawn)?;

    if !output.status.success() {
        return Err(InspectError::Lighthouse {
            url: url.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    if let Some(dir) = &options.output_dir {
        let path = save_lighthouse_output(dir, url.as_str(), &output.stdout)
            .await
            .map_err(InspectError::Save)?;
        info!("Lighthouse report saved to {}", path.display());
    }

    LighthouseReport::from_slice(&output.stdout)
}
