//! Numeric scraping of formatted score strings (`"73.2/100"`, `"3.2%"`, ...).

use serde_json::Value;

/// Parse the numeric prefix of a score label.
///
/// Only the part before the first `/` is considered, and within it the longest
/// leading numeric prefix (`"73.2/100"` -> 73.2, `"3.2%"` -> 3.2). Anything
/// without a numeric prefix parses to `0.0`.
pub fn parse_score(label: &str) -> f64 {
    let head = label.split('/').next().unwrap_or("");
    numeric_prefix(head.trim_start()).unwrap_or(0.0)
}

/// Score from a JSON value that may be a number or a formatted string.
pub fn score_from_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Value::String(s) => parse_score(s),
        _ => 0.0,
    }
}

/// Clamp a score into a progress-bar width percentage.
pub fn percent_width(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Needle rotation in degrees: 0 -> -90, 50 -> 0, 100 -> +90.
pub fn needle_angle(value: f64) -> f64 {
    (value / 100.0) * 180.0 - 90.0
}

fn numeric_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Three-way band used by the component progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarBand {
    High,
    Mid,
    Low,
}

impl BarBand {
    pub fn of(value: f64) -> Self {
        if value >= 75.0 {
            BarBand::High
        } else if value <= 25.0 {
            BarBand::Low
        } else {
            BarBand::Mid
        }
    }
}

/// Four-way band used by the gauge colour ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeBand {
    Strong,
    Fair,
    Weak,
    Poor,
}

impl GaugeBand {
    pub fn of(value: f64) -> Self {
        if value >= 75.0 {
            GaugeBand::Strong
        } else if value >= 50.0 {
            GaugeBand::Fair
        } else if value >= 25.0 {
            GaugeBand::Weak
        } else {
            GaugeBand::Poor
        }
    }
}
