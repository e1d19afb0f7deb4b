//! Shared colour themes. Every widget picks its colours through [`theme`].

use crate::{BarBand, ComponentKind, GaugeBand, SignalClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(value: u32) -> Self {
        Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

/// What a themed element is saying, independent of where it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Caution,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Card body
    pub fill: Rgb,
    pub border: Rgb,
    /// Headlines and bar fills
    pub accent: Rgb,
}

pub const GREEN: Rgb = Rgb::hex(0x22C55E);
pub const YELLOW: Rgb = Rgb::hex(0xEAB308);
pub const ORANGE: Rgb = Rgb::hex(0xF97316);
pub const RED: Rgb = Rgb::hex(0xEF4444);
pub const TRACK: Rgb = Rgb::hex(0x4B5563);
pub const MUTED: Rgb = Rgb::hex(0x9CA3AF);

pub fn theme(tone: Tone) -> Theme {
    match tone {
        Tone::Positive => Theme {
            fill: Rgb::hex(0x16A34A),
            border: Rgb::hex(0x4ADE80),
            accent: GREEN,
        },
        Tone::Negative => Theme {
            fill: Rgb::hex(0xDC2626),
            border: Rgb::hex(0xF87171),
            accent: RED,
        },
        Tone::Caution => Theme {
            fill: Rgb::hex(0xCA8A04),
            border: Rgb::hex(0xFACC15),
            accent: YELLOW,
        },
        Tone::Info => Theme {
            fill: Rgb::hex(0x2563EB),
            border: Rgb::hex(0x60A5FA),
            accent: Rgb::hex(0x3B82F6),
        },
    }
}

impl From<SignalClass> for Tone {
    fn from(class: SignalClass) -> Self {
        match class {
            SignalClass::Bullish => Tone::Positive,
            SignalClass::Bearish => Tone::Negative,
            SignalClass::Neutral => Tone::Caution,
        }
    }
}

impl GaugeBand {
    pub fn color(&self) -> Rgb {
        match self {
            GaugeBand::Strong => GREEN,
            GaugeBand::Fair => YELLOW,
            GaugeBand::Weak => ORANGE,
            GaugeBand::Poor => RED,
        }
    }
}

impl BarBand {
    pub fn color(&self) -> Rgb {
        match self {
            BarBand::High => GREEN,
            BarBand::Mid => YELLOW,
            BarBand::Low => RED,
        }
    }
}

impl ComponentKind {
    /// Label colour of a component card.
    pub fn color(&self) -> Rgb {
        match self {
            ComponentKind::Sentiment => Rgb::hex(0xFCD34D),
            ComponentKind::Gamma => Rgb::hex(0xFCA5A5),
            ComponentKind::VolumeBias => Rgb::hex(0x93C5FD),
            ComponentKind::Valuation => Rgb::hex(0x86EFAC),
            ComponentKind::Other => Rgb::hex(0xD1D5DB),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_channels() {
        assert_eq!(Rgb::hex(0x22C55E), Rgb(0x22, 0xC5, 0x5E));
    }

    #[test]
    fn test_signal_classes_share_tones() {
        assert_eq!(theme(SignalClass::Bullish.into()), theme(Tone::Positive));
        assert_eq!(theme(SignalClass::Bearish.into()).accent, RED);
        assert_eq!(theme(SignalClass::Neutral.into()).accent, YELLOW);
    }

    #[test]
    fn test_gauge_ramp() {
        assert_eq!(GaugeBand::of(80.0).color(), GREEN);
        assert_eq!(GaugeBand::of(60.0).color(), YELLOW);
        assert_eq!(GaugeBand::of(30.0).color(), ORANGE);
        assert_eq!(GaugeBand::of(10.0).color(), RED);
    }
}
