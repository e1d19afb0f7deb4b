use async_trait::async_trait;
use pulse_core::{Analysis, AnalysisResponse, CacheStats, HealthReport};

use crate::error::{ClientError, ClientResult};
use crate::PulseClient;

/// Backend-agnostic access to the analysis service.
///
/// The dashboard only talks to this trait, so the HTTP backend can be
/// replaced (fixtures, a different transport) without touching the UI.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn analyze(&self, ticker: &str) -> ClientResult<AnalysisResponse>;

    async fn health(&self) -> ClientResult<HealthReport>;

    async fn cache_stats(&self) -> ClientResult<CacheStats> {
        Err(ClientError::request("cache statistics not available"))
    }

    fn backend_name(&self) -> &'static str;
}

#[async_trait]
impl AnalysisProvider for PulseClient {
    async fn analyze(&self, ticker: &str) -> ClientResult<AnalysisResponse> {
        PulseClient::analyze(self, ticker).await
    }

    async fn health(&self) -> ClientResult<HealthReport> {
        PulseClient::health(self).await
    }

    async fn cache_stats(&self) -> ClientResult<CacheStats> {
        PulseClient::cache_stats(self).await
    }

    fn backend_name(&self) -> &'static str {
        "http"
    }
}

/// Fetch a result and run it through the boundary adapter.
pub async fn fetch_analysis(
    provider: &dyn AnalysisProvider,
    ticker: &str,
) -> ClientResult<Analysis> {
    provider.analyze(ticker).await.map(Analysis::from)
}
