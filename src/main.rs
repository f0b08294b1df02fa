use anyhow::Result;
use clap::Parser;
use log::{error, info};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use ecoscore::config::Config;
use ecoscore::services;
use ecoscore::utils::{save_report, validate_url, RunLog};

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(config: &Config) -> Result<()> {
    let run_log = RunLog::new(config.log_file.clone());
    let url = validate_url(config.url.as_deref().unwrap_or_default())?;

    let inspector = config.inspector();
    let report = services::run_audit(&inspector, &url, &run_log).await?;

    println!("{}", report);

    if let Some(path) = &config.json {
        save_report(path, &report)?;
        run_log.entry(&format!("✅ Report saved successfully at: {}", path.display()));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let config = Config::parse();
    setup_logging(config.verbose);

    info!("ecoscore {}", env!("CARGO_PKG_VERSION"));
    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
