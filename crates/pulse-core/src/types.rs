use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::{score_from_value, PulseError};

/// Envelope returned by `GET /api/v1/analyze/{ticker}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Empty when the envelope omits it; the payload's own ticker wins anyway
    #[serde(default, deserialize_with = "lenient_string")]
    pub ticker: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: String,
    /// Set when the backend served the result from its cache
    #[serde(default, deserialize_with = "lenient_text")]
    pub cached_at: Option<String>,
    /// Set when the backend ran a live analysis
    #[serde(default, deserialize_with = "lenient_text")]
    pub analyzed_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_payload")]
    pub data: AnalysisPayload,
}

/// The decorated `data` block. Keys are human labels, not identifiers.
///
/// Every field decodes leniently: a value of the wrong shape degrades to a
/// rendered string or to "missing" instead of failing the whole result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisPayload {
    #[serde(rename = "\u{1F3AF} TICKER", default, deserialize_with = "lenient_text")]
    pub ticker: Option<String>,

    #[serde(rename = "\u{1F4CA} FINAL SCORE", default)]
    pub final_score: Option<Value>,

    #[serde(rename = "\u{1F3AA} TRADING SIGNAL", default, deserialize_with = "lenient_text")]
    pub trading_signal: Option<String>,

    #[serde(rename = "\u{1F3AF} CONFIDENCE", default, deserialize_with = "lenient_text")]
    pub confidence: Option<String>,

    #[serde(rename = "\u{1F4CB} COMPONENT SCORES", default, deserialize_with = "lenient_object")]
    pub component_scores: Option<Map<String, Value>>,

    #[serde(rename = "\u{1F52C} ADVANCED METRICS", default, deserialize_with = "lenient_object")]
    pub advanced_metrics: Option<Map<String, Value>>,

    #[serde(rename = "\u{2696}\u{FE0F} DYNAMIC WEIGHTS", default, deserialize_with = "lenient_weights")]
    pub dynamic_weights: Option<RawWeights>,
}

/// Engine weights as sent by the backend (fractions, expected to sum to ~1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWeights {
    #[serde(default, deserialize_with = "lenient_number")]
    pub sentiment: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub gamma: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub volume: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub valuation: f64,
}

/// Scalars as display text; `null` is missing.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(score_from_value(&Value::deserialize(deserializer)?))
}

fn lenient_object<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Map<String, Value>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => Some(map),
        _ => None,
    })
}

fn lenient_weights<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<RawWeights>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => RawWeights::deserialize(value).ok(),
        _ => None,
    })
}

fn lenient_payload<'de, D: Deserializer<'de>>(deserializer: D) -> Result<AnalysisPayload, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => AnalysisPayload::deserialize(value).unwrap_or_default(),
        _ => AnalysisPayload::default(),
    })
}

/// Decode an analysis body, keeping serde's message on failure.
pub fn decode_response(body: &str) -> Result<AnalysisResponse, PulseError> {
    serde_json::from_str(body).map_err(|e| PulseError::InvalidPayload(e.to_string()))
}

/// `GET /api/v1/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub components: BTreeMap<String, String>,
    #[serde(default)]
    pub rate_limiting: Option<String>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }

    /// Components not reporting "healthy", in name order.
    pub fn degraded_components(&self) -> Vec<&str> {
        self.components
            .iter()
            .filter(|(_, status)| !status.eq_ignore_ascii_case("healthy"))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// `GET /api/v1/cache/stats`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheStats {
    #[serde(default)]
    pub total_cached_stocks: u64,
    #[serde(default)]
    pub fresh_cache_entries: u64,
    #[serde(default)]
    pub cache_hit_rate: String,
    #[serde(default)]
    pub oldest_cache: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingStock {
    pub ticker: String,
    pub analysis_count: u64,
}

/// `GET /api/v1/trending`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendingReport {
    #[serde(default)]
    pub trending_stocks: Vec<TrendingStock>,
    #[serde(default)]
    pub generated_at: Option<String>,
}

/// One entry of a batch response. The backend reports `"pending"` as the
/// score for tickers that still need a live run, and `{"error": ...}` on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchEntry {
    Failed {
        error: String,
    },
    Scored {
        score: Value,
        #[serde(default)]
        signal: String,
        #[serde(default)]
        source: String,
    },
}

impl BatchEntry {
    /// Numeric score, `None` when pending or failed.
    pub fn score(&self) -> Option<f64> {
        match self {
            BatchEntry::Scored { score, .. } => score.as_f64(),
            BatchEntry::Failed { .. } => None,
        }
    }

    pub fn needs_refresh(&self) -> bool {
        matches!(self, BatchEntry::Scored { source, .. } if source == "needs_refresh")
    }
}

/// `GET /api/v1/batch_analyze`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    #[serde(default)]
    pub batch_results: BTreeMap<String, BatchEntry>,
    #[serde(default)]
    pub processed_count: usize,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_live_response() {
        let body = r#"{
            "ticker": "NVDA",
            "source": "live_analysis",
            "analyzed_at": "2025-12-04T10:15:30.123456",
            "data": {
                "🎯 TICKER": "NVDA",
                "📊 FINAL SCORE": "73.2/100",
                "🎪 TRADING SIGNAL": "🚀 STRONG BUY - Momentum Breakout",
                "🎯 CONFIDENCE": "HIGH (REGIME-BOOSTED)",
                "📋 COMPONENT SCORES": {"💭 Sentiment": "61.0/100"},
                "⚖️ DYNAMIC WEIGHTS": {"sentiment": 0.2, "gamma": 0.4, "volume": 0.1, "valuation": 0.3}
            }
        }"#;

        let response = decode_response(body).unwrap();
        assert_eq!(response.ticker, "NVDA");
        assert_eq!(response.source, "live_analysis");
        assert_eq!(
            response.data.trading_signal.as_deref(),
            Some("🚀 STRONG BUY - Momentum Breakout")
        );
        let weights = response.data.dynamic_weights.unwrap();
        assert_eq!(weights.gamma, 0.4);
        assert!(response.data.advanced_metrics.is_none());
    }

    #[test]
    fn test_decode_minimal_response() {
        let response = decode_response(r#"{"ticker": "AAPL"}"#).unwrap();
        assert_eq!(response.source, "");
        assert!(response.data.final_score.is_none());
        assert!(response.data.component_scores.is_none());
    }

    #[test]
    fn test_decode_without_envelope_ticker() {
        let response = decode_response(
            r#"{"data": {"🎪 TRADING SIGNAL": "🚀 STRONG BUY - Momentum Breakout"}}"#,
        )
        .unwrap();
        assert_eq!(response.ticker, "");
        assert_eq!(
            response.data.trading_signal.as_deref(),
            Some("🚀 STRONG BUY - Momentum Breakout")
        );
    }

    #[test]
    fn test_decode_odd_field_types() {
        let response = decode_response(
            r#"{
                "ticker": "AMD",
                "source": null,
                "data": {
                    "🎪 TRADING SIGNAL": 3,
                    "🎯 CONFIDENCE": 0.8,
                    "📋 COMPONENT SCORES": "unavailable",
                    "⚖️ DYNAMIC WEIGHTS": {"sentiment": null, "gamma": "0.4", "volume": 0.3, "valuation": 0.3}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(response.source, "");
        assert_eq!(response.data.trading_signal.as_deref(), Some("3"));
        assert_eq!(response.data.confidence.as_deref(), Some("0.8"));
        assert!(response.data.component_scores.is_none());
        let weights = response.data.dynamic_weights.unwrap();
        assert_eq!(weights.sentiment, 0.0);
        assert_eq!(weights.gamma, 0.4);
        assert_eq!(weights.volume, 0.3);
    }

    #[test]
    fn test_decode_non_object_data() {
        let response = decode_response(r#"{"ticker": "AMD", "data": null}"#).unwrap();
        assert!(response.data.trading_signal.is_none());
        assert!(response.data.dynamic_weights.is_none());
    }

    #[test]
    fn test_decode_malformed_body() {
        let err = decode_response("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, PulseError::InvalidPayload(_)));
    }

    #[test]
    fn test_batch_entries() {
        let body = r#"{
            "batch_results": {
                "NVDA": {"score": 73.2, "signal": "BUY - Trend", "source": "cache"},
                "TSLA": {"score": "pending", "signal": "analysis_required", "source": "needs_refresh"},
                "XXXX": {"error": "boom"}
            },
            "processed_count": 3
        }"#;

        let report: BatchReport = serde_json::from_str(body).unwrap();
        assert_eq!(report.processed_count, 3);
        assert_eq!(report.batch_results["NVDA"].score(), Some(73.2));
        assert!(report.batch_results["TSLA"].needs_refresh());
        assert_eq!(report.batch_results["TSLA"].score(), None);
        assert!(matches!(report.batch_results["XXXX"], BatchEntry::Failed { .. }));
    }

    #[test]
    fn test_health_degraded_components() {
        let report: HealthReport = serde_json::from_str(
            r#"{"status": "healthy", "version": "2.1.0",
                "components": {"algorithm": "error", "api": "healthy", "database": "healthy"}}"#,
        )
        .unwrap();
        assert!(report.is_healthy());
        assert_eq!(report.degraded_components(), vec!["algorithm"]);
    }
}
