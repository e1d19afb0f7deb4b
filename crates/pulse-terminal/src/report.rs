//! Plain-text output for the one-shot CLI commands.

use pulse_core::{Analysis, BatchEntry, BatchReport, HealthReport, TrendingReport};

use crate::widgets::weight_label;

pub fn analysis_report(analysis: &Analysis) -> String {
    let mut lines = vec![
        format!("{} ({})", analysis.ticker, analysis.source.to_label()),
        format!("Signal:      {}", analysis.signal.headline),
    ];
    if let Some(subtitle) = &analysis.signal.subtitle {
        lines.push(format!("             {}", subtitle));
    }
    lines.push(format!("Score:       {:.1}/100", analysis.score.value));
    lines.push(format!("Confidence:  {}", analysis.confidence.raw));
    if let Some(time) = &analysis.timestamp {
        lines.push(format!("As of:       {}", time));
    }

    if !analysis.components.is_empty() {
        lines.push(String::new());
        lines.push("Components".to_string());
        for component in &analysis.components {
            lines.push(format!("  {:<16} {:>6.1}  {}", component.name, component.value, component.label));
        }
    }

    if let Some(advanced) = &analysis.advanced {
        let descriptor = advanced.regime.descriptor();
        lines.push(String::new());
        lines.push(format!(
            "Regime:      {} {} ({})",
            descriptor.icon, advanced.regime_tag, descriptor.description
        ));
        if let Some(vix) = advanced.vix {
            lines.push(format!("VIX:         {:.1}", vix));
        }
        lines.push(format!("Linear:      {}", advanced.linear_score));
        lines.push(format!("Non-Linear:  {}", advanced.non_linear_score));
        lines.push(format!("Z-Scores:    {}", advanced.z_scores));
    }

    if let Some(weights) = &analysis.weights {
        let parts: Vec<String> = weights
            .entries()
            .iter()
            .map(|(label, fraction)| format!("{} {}", label, weight_label(*fraction)))
            .collect();
        lines.push(format!("Weights:     {}", parts.join("  ")));
    }

    lines.join("\n")
}

pub fn health_report(report: &HealthReport) -> String {
    let mut lines = vec![format!(
        "Status: {}{}",
        report.status,
        report
            .version
            .as_deref()
            .map(|v| format!(" (v{})", v))
            .unwrap_or_default()
    )];
    for (name, status) in &report.components {
        lines.push(format!("  {:<16} {}", name, status));
    }
    if let Some(limits) = &report.rate_limiting {
        lines.push(format!("Rate limiting: {}", limits));
    }
    lines.join("\n")
}

pub fn trending_report(report: &TrendingReport) -> String {
    if report.trending_stocks.is_empty() {
        return "No trending stocks yet".to_string();
    }
    report
        .trending_stocks
        .iter()
        .enumerate()
        .map(|(i, stock)| format!("{:>2}. {:<6} {} analyses", i + 1, stock.ticker, stock.analysis_count))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn batch_report(report: &BatchReport) -> String {
    let mut lines: Vec<String> = report
        .batch_results
        .iter()
        .map(|(ticker, entry)| match entry {
            BatchEntry::Failed { error } => format!("{:<6} error: {}", ticker, error),
            BatchEntry::Scored { signal, .. } => {
                let score = entry
                    .score()
                    .map(|s| format!("{:.1}", s))
                    .unwrap_or_else(|| "pending".to_string());
                let refresh = if entry.needs_refresh() { "  (needs refresh)" } else { "" };
                format!("{:<6} {:>7}  {}{}", ticker, score, signal, refresh)
            }
        })
        .collect();
    lines.push(format!("{} processed", report.processed_count));
    lines.join("\n")
}
