//! Boundary adapter: the only place that scrapes the decorated payload.
//!
//! Everything downstream of [`Analysis::from_response`] works with typed
//! values and never looks at emoji-prefixed labels again.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    parse_score, score_from_value, strip_target_prefix, AnalysisResponse, Confidence, PulseError,
    RawWeights, Regime, Signal,
};

/// Max tickers accepted by the batch endpoint.
pub const MAX_BATCH_TICKERS: usize = 10;

const COMPONENT_DECORATIONS: &[char] = &[
    '\u{1F4AD}', // thought bubble
    '\u{1F680}', // rocket
    '\u{2696}',  // scales
    '\u{1F4B0}', // money bag
    '\u{FE0F}',
];

/// Trim and uppercase user input into a request ticker.
pub fn normalize_ticker(input: &str) -> Result<String, PulseError> {
    let ticker = input.trim();
    if ticker.is_empty() {
        return Err(PulseError::EmptyTicker);
    }
    Ok(ticker.to_uppercase())
}

/// Normalize a batch of tickers; entries may themselves be comma separated.
pub fn normalize_ticker_list<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<String>, PulseError> {
    let tickers: Vec<String> = inputs
        .iter()
        .flat_map(|s| s.as_ref().split(','))
        .filter_map(|t| normalize_ticker(t).ok())
        .collect();

    if tickers.is_empty() {
        return Err(PulseError::EmptyTicker);
    }
    if tickers.len() > MAX_BATCH_TICKERS {
        return Err(PulseError::TooManyTickers {
            count: tickers.len(),
            max: MAX_BATCH_TICKERS,
        });
    }
    Ok(tickers)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    Cache,
    Live,
    Other(String),
}

impl Source {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "cache" => Source::Cache,
            "live_analysis" => Source::Live,
            other => Source::Other(other.to_string()),
        }
    }

    pub fn to_label(&self) -> &str {
        match self {
            Source::Cache => "Cached",
            Source::Live => "Live Analysis",
            Source::Other(raw) if raw.is_empty() => "Unknown",
            Source::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub value: f64,
    /// Label exactly as sent, `N/A` when missing
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    Sentiment,
    Gamma,
    VolumeBias,
    Valuation,
    Other,
}

impl ComponentKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Sentiment" => ComponentKind::Sentiment,
            "Gamma" => ComponentKind::Gamma,
            "Volume Bias" => ComponentKind::VolumeBias,
            "Valuation" => ComponentKind::Valuation,
            _ => ComponentKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub name: String,
    pub kind: ComponentKind,
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedMetrics {
    /// First word of `Market Regime`, `Normal` when missing
    pub regime_tag: String,
    pub regime: Regime,
    pub regime_label: Option<String>,
    pub vix: Option<f64>,
    pub linear_score: String,
    pub non_linear_score: String,
    pub z_scores: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub sentiment: f64,
    pub gamma: f64,
    pub volume: f64,
    pub valuation: f64,
}

impl Weights {
    /// Labelled fractions in display order.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("Sentiment", self.sentiment),
            ("Gamma", self.gamma),
            ("Volume", self.volume),
            ("Valuation", self.valuation),
        ]
    }

    pub fn total(&self) -> f64 {
        self.sentiment + self.gamma + self.volume + self.valuation
    }
}

impl From<RawWeights> for Weights {
    fn from(raw: RawWeights) -> Self {
        Self {
            sentiment: raw.sentiment,
            gamma: raw.gamma,
            volume: raw.volume,
            valuation: raw.valuation,
        }
    }
}

/// A fully typed analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub ticker: String,
    pub source: Source,
    /// Human-readable cache or analysis time
    pub timestamp: Option<String>,
    pub score: Score,
    pub signal: Signal,
    pub confidence: Confidence,
    pub components: Vec<ComponentScore>,
    pub advanced: Option<AdvancedMetrics>,
    pub weights: Option<Weights>,
}

impl Analysis {
    pub fn from_response(response: AnalysisResponse) -> Self {
        let data = response.data;

        let ticker = data
            .ticker
            .as_deref()
            .map(strip_target_prefix)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(response.ticker.as_str())
            .to_string();

        let score = match data.final_score.as_ref() {
            Some(Value::String(label)) if !label.is_empty() => Score {
                value: parse_score(label),
                label: label.clone(),
            },
            Some(Value::Number(n)) => Score {
                value: n.as_f64().unwrap_or(0.0),
                label: n.to_string(),
            },
            _ => Score {
                value: 0.0,
                label: "N/A".to_string(),
            },
        };

        let timestamp = response
            .cached_at
            .as_deref()
            .or(response.analyzed_at.as_deref())
            .map(format_timestamp);

        Self {
            ticker,
            source: Source::parse(&response.source),
            timestamp,
            score,
            signal: Signal::parse(data.trading_signal.as_deref().unwrap_or("")),
            confidence: Confidence::parse(data.confidence.as_deref().unwrap_or("")),
            components: data
                .component_scores
                .as_ref()
                .map(parse_components)
                .unwrap_or_default(),
            advanced: data.advanced_metrics.as_ref().map(parse_advanced),
            weights: data.dynamic_weights.map(Weights::from),
        }
    }
}

impl From<AnalysisResponse> for Analysis {
    fn from(response: AnalysisResponse) -> Self {
        Self::from_response(response)
    }
}

fn parse_components(scores: &Map<String, Value>) -> Vec<ComponentScore> {
    let mut components: Vec<ComponentScore> = scores
        .iter()
        .map(|(key, value)| {
            let name = key.trim_start_matches(COMPONENT_DECORATIONS).trim_start().to_string();
            ComponentScore {
                kind: ComponentKind::from_name(&name),
                value: score_from_value(value),
                label: value_label(value).unwrap_or_else(|| "N/A".to_string()),
                name,
            }
        })
        .collect();

    components.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
    components
}

fn parse_advanced(metrics: &Map<String, Value>) -> AdvancedMetrics {
    let text = |key: &str| metrics.get(key).and_then(value_label);

    let regime_label = text("Market Regime");
    let regime_tag = regime_label
        .as_deref()
        .and_then(|label| label.split_whitespace().next())
        .unwrap_or("Normal")
        .to_string();

    let vix = metrics
        .get("VIX")
        .map(score_from_value)
        .or_else(|| regime_label.as_deref().and_then(vix_from_label));

    AdvancedMetrics {
        regime: Regime::from_tag(&regime_tag),
        regime_tag,
        regime_label,
        vix,
        linear_score: text("Linear Score").unwrap_or_else(|| "N/A".to_string()),
        non_linear_score: text("Non-Linear Score").unwrap_or_else(|| "N/A".to_string()),
        z_scores: text("Z-Scores").unwrap_or_else(|| "N/A".to_string()),
    }
}

/// `"FEAR (VIX: 32.4)"` -> 32.4
fn vix_from_label(label: &str) -> Option<f64> {
    let (_, rest) = label.split_once("VIX")?;
    let rest = rest.trim_start_matches(|c: char| c == ':' || c == '=' || c.is_whitespace());
    let value = parse_score(rest);
    rest.starts_with(|c: char| c.is_ascii_digit() || c == '.' || c == '-')
        .then_some(value)
}

fn value_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Render a backend timestamp (naive UTC or RFC 3339) for display.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.naive_utc().format("%Y-%m-%d %H:%M UTC").to_string();
    }
    match raw.parse::<NaiveDateTime>() {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        Err(_) => raw.to_string(),
    }
}
