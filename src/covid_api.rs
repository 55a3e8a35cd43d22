use crate::report::{Report, ReportsResponse};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Thin client for the reports endpoint (`GET <base>?iso=..` / `?region_name=..`).
///
/// One attempt per call: no retries and no timeout, so a hung connection
/// hangs the caller.
#[derive(Debug, Clone)]
pub struct CovidApi {
    client: reqwest::Client,
    base_url: String,
}

impl CovidApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Reports for a region code such as "BRA".
    pub async fn reports_by_iso(&self, iso: &str) -> Result<Vec<Report>> {
        self.get_reports("iso", iso).await
    }

    /// Reports for a canonical region name such as "Brazil".
    pub async fn reports_by_region_name(&self, name: &str) -> Result<Vec<Report>> {
        self.get_reports("region_name", name).await
    }

    async fn get_reports(&self, key: &str, value: &str) -> Result<Vec<Report>> {
        debug!("GET {}?{}={}", self.base_url, key, value);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[(key, value)])
            .send()
            .await
            .context("Failed to send request to reports API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            anyhow::bail!("Reports API error ({}): {}", status, body);
        }

        let reports: ReportsResponse = response
            .json()
            .await
            .context("Failed to parse reports API response")?;

        info!(
            "Reports API returned {} record(s) for {}={}",
            reports.data.len(),
            key,
            value
        );

        Ok(reports.data)
    }
}
