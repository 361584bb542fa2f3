use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use url::Url;

use crate::models::MeetingRecord;
use crate::page::MeetingParser;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; CityMeetings/1.0)";
const MAX_ATTEMPTS: u32 = 3;
const BASE_BACKOFF: Duration = Duration::from_millis(500);

pub struct MeetingFetcher {
    client: Client,
}

impl MeetingFetcher {
    pub fn new(user_agent: Option<&str>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    pub async fn fetch_page(&self, url: &Url) -> Result<String> {
        with_retry(url, MAX_ATTEMPTS, BASE_BACKOFF, move || self.try_fetch_page(url)).await
    }

    async fn try_fetch_page(&self, url: &Url) -> Result<String> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .context("Failed to send HTTP request")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP error: {}", status);
        }

        response.text().await.context("Failed to read response body")
    }

    /// Follows next-page links from `start` until the listing runs out.
    pub async fn crawl(
        &self,
        parser: &MeetingParser,
        start: Url,
        max_pages: Option<usize>,
    ) -> Result<Vec<MeetingRecord>> {
        crawl_pages(parser, start, max_pages, move |url| async move {
            self.fetch_page(&url).await
        })
        .await
    }
}

/// Runs `op` up to `attempts` times, doubling the pause after each failure.
async fn with_retry<T, F, Fut>(
    url: &Url,
    attempts: u32,
    base_backoff: Duration,
    mut op: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt + 1 < attempts => {
                log::warn!("Fetching {} failed (attempt {}): {}", url, attempt + 1, e);
                tokio::time::sleep(base_backoff * 2_u32.pow(attempt)).await;
                attempt += 1;
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Giving up on {} after {} attempts", url, attempts))
            }
        }
    }
}

/// Walks the listing one page at a time, fetching each URL with `fetch`.
///
/// Stops when a page has no next link, at `max_pages`, or when a page
/// links back to one already visited. Records keep page order.
pub async fn crawl_pages<F, Fut>(
    parser: &MeetingParser,
    start: Url,
    max_pages: Option<usize>,
    mut fetch: F,
) -> Result<Vec<MeetingRecord>>
where
    F: FnMut(Url) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let mut meetings = Vec::new();
    let mut visited = HashSet::new();
    let mut next = Some(start);

    while let Some(url) = next.take() {
        if let Some(max) = max_pages {
            if visited.len() >= max {
                log::info!("Reached max pages ({}), stopping", max);
                break;
            }
        }
        if !visited.insert(url.clone()) {
            log::warn!("Pagination loops back to {}, stopping", url);
            break;
        }

        log::debug!("Fetching page {}: {}", visited.len(), url);
        let html = fetch(url.clone()).await?;
        let page = parser.parse_page(&html, &url);

        meetings.extend(page.meetings);
        next = page.next_page;
    }

    log::info!(
        "Crawl complete: {} meetings from {} pages",
        meetings.len(),
        visited.len()
    );
    Ok(meetings)
}
