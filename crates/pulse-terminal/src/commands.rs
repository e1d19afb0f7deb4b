//! One-shot commands that print to stdout and exit.

use pulse_client::PulseClient;
use pulse_core::Analysis;
use tracing::info;

use crate::report;

pub async fn analyze(client: &PulseClient, ticker: &str, json: bool) -> anyhow::Result<()> {
    let analysis = Analysis::from(client.analyze(ticker).await?);
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", report::analysis_report(&analysis));
    }
    Ok(())
}

pub async fn health(client: &PulseClient) -> anyhow::Result<()> {
    let report = client.health().await?;
    if !report.is_healthy() {
        info!(status = %report.status, "Backend reports a non-healthy status");
    }
    println!("{}", report::health_report(&report));

    // Cache statistics are informational; an older backend may not expose them.
    match client.cache_stats().await {
        Ok(stats) => println!(
            "Cache: {} stocks, {} fresh ({} hit rate)",
            stats.total_cached_stocks, stats.fresh_cache_entries, stats.cache_hit_rate
        ),
        Err(e) => info!(error = %e, "Cache statistics unavailable"),
    }
    Ok(())
}

pub async fn trending(client: &PulseClient, limit: usize) -> anyhow::Result<()> {
    let report = client.trending(limit).await?;
    println!("{}", report::trending_report(&report));
    Ok(())
}

pub async fn batch(client: &PulseClient, tickers: &[String]) -> anyhow::Result<()> {
    let report = client.batch_analyze(tickers).await?;
    println!("{}", report::batch_report(&report));
    Ok(())
}
