use crate::models::ScoreCategory;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UrlError {
    #[error("please provide a URL")]
    Empty,
    #[error("invalid URL {0:?}: {1}")]
    Invalid(String, url::ParseError),
    #[error("unsupported URL scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),
}

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("invalid browser configuration: {0}")]
    BrowserConfig(String),
    #[error("browser error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),
    #[error("browser did not exit cleanly: {0}")]
    BrowserExit(#[source] std::io::Error),
    #[error("browser websocket endpoint {0:?} has no port")]
    Endpoint(String),
    #[error("failed to run lighthouse: {0}")]
    LighthouseSpawn(#[source] std::io::Error),
    #[error("lighthouse failed for {url}: {stderr}")]
    Lighthouse { url: String, stderr: String },
    #[error("could not parse lighthouse output: {0}")]
    LighthouseOutput(#[source] serde_json::Error),
    #[error("lighthouse result has no score for {0}")]
    MissingCategory(ScoreCategory),
    #[error("could not read page metric {metric}: {source}")]
    Metric {
        metric: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to save lighthouse result: {0}")]
    Save(#[source] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no scores to average")]
    NoScores,
}
