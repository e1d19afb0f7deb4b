use pulse_core::{
    decode_response, normalize_ticker, normalize_ticker_list, AnalysisResponse, BatchReport,
    CacheStats, HealthReport, TrendingReport,
};
use serde::de::DeserializeOwned;
use std::time::Instant;

use crate::error::{ClientError, ClientResult};
use crate::ClientConfig;

#[derive(Clone)]
pub struct PulseClient {
    client: reqwest::Client,
    base_url: String,
}

impl PulseClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint for an already normalized ticker.
    pub fn analyze_url(&self, ticker: &str) -> String {
        format!("{}/api/v1/analyze/{}", self.base_url, ticker)
    }

    /// GET and return the body of a 2xx response.
    async fn get_body(&self, url: &str, query: &[(&str, String)]) -> ClientResult<String> {
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "API request failed");
            return Err(ClientError::http(status));
        }

        Ok(response.text().await?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let body = self.get_body(url, query).await?;
        serde_json::from_str(&body).map_err(|e| ClientError::decode(e.to_string()))
    }

    /// Run an analysis for `ticker` (trimmed and uppercased first).
    pub async fn analyze(&self, ticker: &str) -> ClientResult<AnalysisResponse> {
        let ticker = normalize_ticker(ticker)?;
        let url = self.analyze_url(&ticker);
        let started = Instant::now();

        let body = self.get_body(&url, &[]).await?;
        let response = decode_response(&body).map_err(|e| ClientError::decode(e.to_string()))?;

        tracing::info!(
            ticker = %ticker,
            source = %response.source,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Analysis received"
        );
        Ok(response)
    }

    pub async fn health(&self) -> ClientResult<HealthReport> {
        self.get_json(&format!("{}/api/v1/health", self.base_url), &[])
            .await
    }

    pub async fn cache_stats(&self) -> ClientResult<CacheStats> {
        self.get_json(&format!("{}/api/v1/cache/stats", self.base_url), &[])
            .await
    }

    pub async fn trending(&self, limit: usize) -> ClientResult<TrendingReport> {
        self.get_json(
            &format!("{}/api/v1/trending", self.base_url),
            &[("limit", limit.to_string())],
        )
        .await
    }

    /// At most ten tickers per call; the list is validated before any request.
    pub async fn batch_analyze<S: AsRef<str>>(&self, tickers: &[S]) -> ClientResult<BatchReport> {
        let tickers = normalize_ticker_list(tickers)?;
        tracing::debug!(count = tickers.len(), "Batch analysis");
        self.get_json(
            &format!("{}/api/v1/batch_analyze", self.base_url),
            &[("tickers", tickers.join(","))],
        )
        .await
    }
}
