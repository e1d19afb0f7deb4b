use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::widgets::{muted, ComponentGrid, RegimeIndicator, SignalDisplay};
use pulse_core::{AdvancedMetrics, Analysis, Weights};

const SIGNAL_HEIGHT: u16 = 9;
const ADVANCED_HEIGHT: u16 = 8;
const METRICS_WIDTH: u16 = 34;

/// `"Cached • 2025-12-04 14:30 UTC"`, or the source alone without a time.
pub fn tagline(analysis: &Analysis) -> String {
    match &analysis.timestamp {
        Some(time) => format!("{} \u{2022} {}", analysis.source.to_label(), time),
        None => format!("{} \u{2022} Hedge Fund Grade", analysis.source.to_label()),
    }
}

pub fn draw_results(frame: &mut Frame, area: Rect, analysis: &Analysis) {
    let advanced_height = if analysis.advanced.is_some() {
        ADVANCED_HEIGHT
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SIGNAL_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(advanced_height),
        ])
        .split(area);

    let tagline = tagline(analysis);
    frame.render_widget(
        SignalDisplay::new(
            &analysis.signal,
            analysis.score.value,
            &analysis.confidence,
            &analysis.ticker,
        )
        .tagline(Some(tagline.as_str())),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Component Analysis Dashboard",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        chunks[1],
    );
    frame.render_widget(ComponentGrid::new(&analysis.components), chunks[2]);

    if let Some(advanced) = &analysis.advanced {
        draw_advanced(frame, chunks[3], advanced, analysis.weights);
    }
}

fn draw_advanced(frame: &mut Frame, area: Rect, advanced: &AdvancedMetrics, weights: Option<Weights>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(METRICS_WIDTH)])
        .split(area);

    frame.render_widget(
        RegimeIndicator::new(&advanced.regime_tag, advanced.regime)
            .vix(advanced.vix)
            .weights(weights),
        columns[0],
    );

    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let metrics = Paragraph::new(vec![
        metric_line("Linear Score", &advanced.linear_score, value),
        metric_line("Non-Linear Score", &advanced.non_linear_score, value),
        metric_line("Z-Scores", &advanced.z_scores, value),
    ])
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Advanced Metrics "),
    );
    frame.render_widget(metrics, columns[1]);
}

fn metric_line(label: &'static str, value: &str, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<18}", label), muted()),
        Span::styled(value.to_string(), style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::{Confidence, Score, Signal, Source};

    fn analysis(source: Source, timestamp: Option<&str>) -> Analysis {
        Analysis {
            ticker: "AAPL".into(),
            source,
            timestamp: timestamp.map(String::from),
            score: Score {
                value: 50.0,
                label: "50.0/100".into(),
            },
            signal: Signal::parse("HOLD"),
            confidence: Confidence::parse("MEDIUM"),
            components: vec![],
            advanced: None,
            weights: None,
        }
    }

    #[test]
    fn test_tagline() {
        assert_eq!(
            tagline(&analysis(Source::Cache, Some("2025-12-04 14:30 UTC"))),
            "Cached \u{2022} 2025-12-04 14:30 UTC"
        );
        assert_eq!(
            tagline(&analysis(Source::Live, None)),
            "Live Analysis \u{2022} Hedge Fund Grade"
        );
    }

    #[test]
    fn test_metric_line() {
        let line = metric_line("Z-Scores", "S:+1.2", Style::default());
        assert_eq!(line.to_string(), format!("{:<18}S:+1.2", "Z-Scores"));
    }
}
