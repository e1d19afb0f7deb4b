use serde::{Deserialize, Serialize};

/// Decorations the backend prepends to trading signals.
const SIGNAL_DECORATIONS: &[char] = &[
    '\u{1F680}', // rocket
    '\u{1F53B}', // red triangle down
    '\u{1F4C8}', // chart up
    '\u{1F4C9}', // chart down
    '\u{23F8}',  // pause
    '\u{26A0}',  // warning
    '\u{1F6A8}', // siren
    '\u{FE0F}',  // variation selector
];

const TARGET_PREFIX: &str = "\u{1F3AF} ";

/// Direction of a trading signal, decided by keyword containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalClass {
    Bullish,
    Bearish,
    Neutral,
}

impl SignalClass {
    /// `BUY`/`OPPORTUNITY` win over `SELL`; everything else is neutral.
    pub fn classify(signal: &str) -> Self {
        if signal.contains("BUY") || signal.contains("OPPORTUNITY") {
            SignalClass::Bullish
        } else if signal.contains("SELL") {
            SignalClass::Bearish
        } else {
            SignalClass::Neutral
        }
    }

    pub fn to_label(&self) -> &'static str {
        match self {
            SignalClass::Bullish => "Bullish",
            SignalClass::Bearish => "Bearish",
            SignalClass::Neutral => "Neutral",
        }
    }
}

/// A trading signal split into its display parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub raw: String,
    pub headline: String,
    pub subtitle: Option<String>,
    pub class: SignalClass,
    /// STRONG or CRISIS signals get a pulsing marker
    pub intense: bool,
}

impl Signal {
    pub const DEFAULT_HEADLINE: &'static str = "HOLD";

    pub fn parse(raw: &str) -> Self {
        let cleaned = strip_signal_decorations(raw);
        let mut parts = cleaned.split(" - ");
        let headline = parts
            .next()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .unwrap_or(Self::DEFAULT_HEADLINE)
            .to_string();
        let subtitle = parts
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            raw: raw.to_string(),
            headline,
            subtitle,
            class: SignalClass::classify(raw),
            intense: raw.contains("STRONG") || raw.contains("CRISIS"),
        }
    }
}

impl Default for Signal {
    fn default() -> Self {
        Self::parse("")
    }
}

/// Remove leading signal emoji and the whitespace after them.
pub fn strip_signal_decorations(raw: &str) -> &str {
    raw.trim_start_matches(SIGNAL_DECORATIONS).trim_start()
}

/// Remove the `🎯 ` prefix the backend puts on ticker and confidence values.
pub fn strip_target_prefix(raw: &str) -> &str {
    raw.strip_prefix(TARGET_PREFIX).unwrap_or(raw)
}

/// Confidence label, e.g. `"HIGH (REGIME-BOOSTED)"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    pub raw: String,
    /// First word, e.g. `HIGH`
    pub level: String,
    pub boosted: bool,
}

impl Confidence {
    pub fn parse(raw: &str) -> Self {
        let stripped = strip_target_prefix(raw);
        let level = stripped
            .split(' ')
            .next()
            .filter(|w| !w.is_empty())
            .unwrap_or("N/A")
            .to_string();

        Self {
            raw: stripped.to_string(),
            level,
            boosted: stripped.contains("(REGIME-BOOSTED)"),
        }
    }

    /// `(STANDARD)` dropped, `(REGIME-BOOSTED)` shortened to a bolt.
    pub fn short(&self) -> String {
        self.raw
            .replace("(STANDARD)", "")
            .replace("(REGIME-BOOSTED)", "\u{26A1}")
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_keywords() {
        assert_eq!(SignalClass::classify("🚀 STRONG BUY"), SignalClass::Bullish);
        assert_eq!(SignalClass::classify("WEAK BUY - Limited Upside"), SignalClass::Bullish);
        assert_eq!(SignalClass::classify("🚨 CRISIS OPPORTUNITY"), SignalClass::Bullish);
        assert_eq!(SignalClass::classify("🔻 STRONG SELL"), SignalClass::Bearish);
        assert_eq!(SignalClass::classify("HOLD - Mixed Signals"), SignalClass::Neutral);
        assert_eq!(SignalClass::classify(""), SignalClass::Neutral);
    }

    #[test]
    fn test_classify_bullish_wins_over_bearish() {
        assert_eq!(SignalClass::classify("SELL PUTS TO BUY"), SignalClass::Bullish);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(SignalClass::classify("buy"), SignalClass::Neutral);
    }

    #[test]
    fn test_parse_headline_and_subtitle() {
        let signal = Signal::parse("🚀 STRONG BUY - Momentum Breakout");
        assert_eq!(signal.headline, "STRONG BUY");
        assert_eq!(signal.subtitle.as_deref(), Some("Momentum Breakout"));
        assert_eq!(signal.class, SignalClass::Bullish);
        assert!(signal.intense);
    }

    #[test]
    fn test_parse_strips_variation_selector_emoji() {
        let signal = Signal::parse("⏸️ HOLD - Mixed Signals");
        assert_eq!(signal.headline, "HOLD");
        let signal = Signal::parse("⚠️🚨 SELL - Downtrend Confirmed");
        assert_eq!(signal.headline, "SELL");
        assert_eq!(signal.class, SignalClass::Bearish);
        assert!(!signal.intense);
    }

    #[test]
    fn test_parse_without_subtitle() {
        let signal = Signal::parse("📈 BUY");
        assert_eq!(signal.headline, "BUY");
        assert_eq!(signal.subtitle, None);
    }

    #[test]
    fn test_parse_keeps_only_second_segment() {
        let signal = Signal::parse("HOLD - Error: upstream - timeout");
        assert_eq!(signal.headline, "HOLD");
        assert_eq!(signal.subtitle.as_deref(), Some("Error: upstream"));
    }

    #[test]
    fn test_parse_empty_defaults_to_hold() {
        let signal = Signal::default();
        assert_eq!(signal.headline, "HOLD");
        assert_eq!(signal.class, SignalClass::Neutral);
        assert_eq!(Signal::parse("🚀 ").headline, "HOLD");
    }

    #[test]
    fn test_confidence_short_forms() {
        let boosted = Confidence::parse("🎯 HIGH (REGIME-BOOSTED)");
        assert_eq!(boosted.level, "HIGH");
        assert!(boosted.boosted);
        assert_eq!(boosted.short(), "HIGH ⚡");

        let standard = Confidence::parse("MEDIUM (STANDARD)");
        assert_eq!(standard.level, "MEDIUM");
        assert!(!standard.boosted);
        assert_eq!(standard.short(), "MEDIUM");
    }

    #[test]
    fn test_confidence_missing() {
        let confidence = Confidence::parse("");
        assert_eq!(confidence.level, "N/A");
        assert_eq!(confidence.short(), "");
    }
}
