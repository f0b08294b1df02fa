use crate::error::InspectError;
use crate::models::{CategoryScores, PageMetrics};
use crate::services::site_audit_service::lighthouse::{run_lighthouse, LighthouseOptions};
use crate::utils::debugging_port;
use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use url::Url;

const DOM_NODE_COUNT: &str = "document.querySelectorAll('*').length";
const REQUEST_COUNT: &str = "performance.getEntriesByType('resource').length";
const TRANSFER_SIZE_KB: &str = "performance.getEntriesByType('resource')\
    .reduce((acc, curr) => acc + curr.transferSize, 0) / 1024";

/// Everything measured for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub categories: CategoryScores,
    pub metrics: PageMetrics,
}

#[async_trait]
pub trait PageInspector: Send + Sync {
    async fn inspect(&self, url: &Url) -> Result<Inspection, InspectError>;
}

/// Drives a local Chromium: lighthouse audits it over the DevTools port,
/// then the page is loaded once more to read DOM and network counters.
#[derive(Debug, Clone, Default)]
pub struct ChromeInspector {
    pub headed: bool,
    pub chrome_path: Option<PathBuf>,
    pub lighthouse: LighthouseOptions,
}

impl ChromeInspector {
    fn browser_config(&self) -> Result<BrowserConfig, InspectError> {
        let mut builder = BrowserConfig::builder();
        if self.headed {
            builder = builder.with_head();
        }
        if let Some(path) = &self.chrome_path {
            builder = builder.chrome_executable(path);
        }
        builder.build().map_err(InspectError::BrowserConfig)
    }

    async fn inspect_with(&self, browser: &Browser, url: &Url) -> Result<Inspection, InspectError> {
        let port = debugging_port(browser.websocket_address())?;
        info!("Running lighthouse on {} through port {}", url, port);
        let report = run_lighthouse(url, port, &self.lighthouse).await?;
        debug!(
            "lighthouse {} audited {}",
            report.lighthouse_version.as_deref().unwrap_or("unknown"),
            report.final_url.as_deref().unwrap_or(&report.requested_url)
        );
        let categories = report.category_scores()?;

        let page = browser.new_page(url.as_str()).await?;
        page.wait_for_navigation().await?;
        let metrics = collect_metrics(&page).await?;
        if let Err(e) = page.close().await {
            debug!("closing page: {}", e);
        }

        Ok(Inspection {
            categories,
            metrics,
        })
    }
}

#[async_trait]
impl PageInspector for ChromeInspector {
    async fn inspect(&self, url: &Url) -> Result<Inspection, InspectError> {
        let (mut browser, mut handler) = Browser::launch(self.browser_config()?).await?;
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("cdp handler: {}", e);
                }
            }
        });

        let result = self.inspect_with(&browser, url).await;
        release_browser(&mut browser, handler_task, result).await
    }
}

/// Shutdown surface of a launched browser process.
#[async_trait]
pub trait BrowserHandle: Send {
    /// Polite close over CDP.
    async fn shutdown(&mut self) -> Result<(), InspectError>;
    async fn force_kill(&mut self);
    async fn wait_exit(&mut self) -> Result<(), InspectError>;
}

#[async_trait]
impl BrowserHandle for Browser {
    async fn shutdown(&mut self) -> Result<(), InspectError> {
        self.close().await?;
        Ok(())
    }

    async fn force_kill(&mut self) {
        if let Some(Err(e)) = self.kill().await {
            warn!("❌ Error killing browser: {}", e);
        }
    }

    async fn wait_exit(&mut self) -> Result<(), InspectError> {
        self.wait().await.map_err(InspectError::BrowserExit)?;
        Ok(())
    }
}

const BROWSER_EXIT_TIMEOUT: Duration = Duration::from_secs(10);
const HANDLER_STOP_TIMEOUT: Duration = Duration::from_secs(5);

/// Tears the browser down whatever `result` holds, then hands `result` back.
/// A failed close or a process that outlives the timeout gets killed, and a
/// handler loop that does not stop on its own is aborted.
pub async fn release_browser<B, T>(
    browser: &mut B,
    mut handler_task: JoinHandle<()>,
    result: Result<T, InspectError>,
) -> Result<T, InspectError>
where
    B: BrowserHandle + ?Sized,
{
    if let Err(e) = browser.shutdown().await {
        warn!("❌ Error closing browser, killing it: {}", e);
        browser.force_kill().await;
    }

    match timeout(BROWSER_EXIT_TIMEOUT, browser.wait_exit()).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!("❌ Error waiting for browser exit: {}", e),
        Err(_) => {
            warn!("❌ Browser still running after close, killing it");
            browser.force_kill().await;
        }
    }

    match timeout(HANDLER_STOP_TIMEOUT, &mut handler_task).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!("❌ Browser handler task failed: {}", e),
        Err(_) => {
            debug!("cdp handler still running, aborting it");
            handler_task.abort();
        }
    }

    result
}

async fn evaluate<T: DeserializeOwned>(
    page: &Page,
    metric: &'static str,
    expression: &str,
) -> Result<T, InspectError> {
    page.evaluate(expression)
        .await?
        .into_value::<T>()
        .map_err(|source| InspectError::Metric { metric, source })
}

pub async fn collect_metrics(page: &Page) -> Result<PageMetrics, InspectError> {
    let dom_node_count = evaluate(page, "dom node count", DOM_NODE_COUNT).await?;
    let request_count = evaluate(page, "request count", REQUEST_COUNT).await?;
    let transfer_size_kb = evaluate(page, "transfer size", TRANSFER_SIZE_KB).await?;

    Ok(PageMetrics {
        dom_node_count,
        request_count,
        transfer_size_kb,
    })
}
