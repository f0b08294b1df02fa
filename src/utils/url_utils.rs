use crate::error::{InspectError, UrlError};
use url::Url;

/// Checks the target URL before any browser work starts.
pub fn validate_url(raw: &str) -> Result<Url, UrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }
    let url = Url::parse(trimmed).map_err(|e| UrlError::Invalid(trimmed.to_string(), e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(UrlError::UnsupportedScheme(other.to_string())),
    }
}

/// DevTools port out of a `ws://127.0.0.1:<port>/devtools/browser/<id>` endpoint.
pub fn debugging_port(ws_endpoint: &str) -> Result<u16, InspectError> {
    Url::parse(ws_endpoint)
        .ok()
        .and_then(|url| url.port())
        .ok_or_else(|| InspectError::Endpoint(ws_endpoint.to_string()))
}
