use serde::{Deserialize, Serialize};

use crate::Tone;

/// Volatility regime reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    Fear,
    Complacency,
    /// NORMAL and every tag we do not recognise
    Normal,
}

/// Fixed presentation of a regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegimeDescriptor {
    pub icon: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

impl Regime {
    /// Exact, case-sensitive match on the tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "FEAR" => Regime::Fear,
            "COMPLACENCY" => Regime::Complacency,
            _ => Regime::Normal,
        }
    }

    pub fn descriptor(&self) -> RegimeDescriptor {
        match self {
            Regime::Fear => RegimeDescriptor {
                icon: "\u{1F525}",
                description: "High Volatility - Math Over Hype",
                tone: Tone::Negative,
            },
            Regime::Complacency => RegimeDescriptor {
                icon: "\u{1F634}",
                description: "Low Volatility - Sentiment Driven",
                tone: Tone::Positive,
            },
            Regime::Normal => RegimeDescriptor {
                icon: "\u{1F4CA}",
                description: "Normal Market - Balanced Approach",
                tone: Tone::Info,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fear_descriptor() {
        let d = Regime::from_tag("FEAR").descriptor();
        assert_eq!(d.icon, "🔥");
        assert_eq!(d.description, "High Volatility - Math Over Hype");
        assert_eq!(d.tone, Tone::Negative);
    }

    #[test]
    fn test_complacency_descriptor() {
        let d = Regime::from_tag("COMPLACENCY").descriptor();
        assert_eq!(d.icon, "😴");
        assert_eq!(d.description, "Low Volatility - Sentiment Driven");
    }

    #[test]
    fn test_unknown_tags_fall_back_to_normal() {
        for tag in ["NORMAL", "", "xyz", "fear"] {
            let d = Regime::from_tag(tag).descriptor();
            assert_eq!(d.icon, "📊");
            assert_eq!(d.description, "Normal Market - Balanced Approach");
        }
    }
}
