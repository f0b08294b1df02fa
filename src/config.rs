use crate::services::{ChromeInspector, LighthouseOptions};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ecoscore",
    about = "Audit a web page with Lighthouse and grade it with an eco-index weighted score",
    version,
    long_about = None
)]
pub struct Config {
    /// Page to audit
    #[arg(env = "ECOSCORE_URL")]
    pub url: Option<String>,

    /// Show the browser window instead of running headless
    #[arg(long, env = "ECOSCORE_HEADED")]
    pub headed: bool,

    /// Chrome or Chromium executable, detected when omitted
    #[arg(long, env = "CHROME_PATH")]
    pub chrome_path: Option<PathBuf>,

    /// Lighthouse command, may include leading arguments ("npx lighthouse@11")
    #[arg(long, env = "LIGHTHOUSE_BIN", default_value = "lighthouse")]
    pub lighthouse_bin: String,

    /// Milliseconds lighthouse waits for the page to load
    #[arg(long, env = "LIGHTHOUSE_MAX_WAIT", default_value_t = 120_000)]
    pub max_wait_for_load: u64,

    /// Write the full report as JSON to this path
    #[arg(long, env = "ECOSCORE_JSON")]
    pub json: Option<PathBuf>,

    /// Keep the raw lighthouse results in this directory
    #[arg(long, env = "ECOSCORE_LIGHTHOUSE_DIR")]
    pub lighthouse_dir: Option<PathBuf>,

    /// Append progress entries to this file
    #[arg(long, env = "ECOSCORE_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn inspector(&self) -> ChromeInspector {
        ChromeInspector {
            headed: self.headed,
            chrome_path: self.chrome_path.clone(),
            lighthouse: LighthouseOptions {
                command: self
                    .lighthouse_bin
                    .split_whitespace()
                    .map(str::to_string)
                    .collect(),
                max_wait_for_load: self.max_wait_for_load,
                output_dir: self.lighthouse_dir.clone(),
            },
        }
    }
}
