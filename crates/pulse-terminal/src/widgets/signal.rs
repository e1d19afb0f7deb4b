use pulse_core::{theme, Confidence, Signal};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Paragraph};

use super::{color, muted};

pub const PULSE_MARKER: &str = "\u{25CF}";

/// The verdict card.
pub struct SignalDisplay<'a> {
    signal: &'a Signal,
    score: f64,
    confidence: &'a Confidence,
    ticker: &'a str,
    tagline: Option<&'a str>,
}

impl<'a> SignalDisplay<'a> {
    pub fn new(signal: &'a Signal, score: f64, confidence: &'a Confidence, ticker: &'a str) -> Self {
        Self {
            signal,
            score,
            confidence,
            ticker,
            tagline: None,
        }
    }

    /// Replaces the default "Live Analysis" line, e.g. with the cache time.
    pub fn tagline(mut self, tagline: Option<&'a str>) -> Self {
        self.tagline = tagline;
        self
    }

    pub fn score_text(&self) -> String {
        format!("{:.1}", self.score)
    }

    pub fn confidence_text(&self) -> String {
        let short = self.confidence.short();
        if short.is_empty() {
            "N/A".to_string()
        } else {
            short
        }
    }
}

impl Widget for SignalDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = theme(self.signal.class.into());
        let white = Style::default().fg(Color::White);
        let bold = white.add_modifier(Modifier::BOLD);

        let block = Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(color(palette.border)));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(1), Constraint::Min(0)])
            .split(inner);
        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(24)])
            .split(rows[0]);

        Paragraph::new(vec![
            Line::from(Span::styled(self.ticker.to_string(), bold)),
            Line::from(Span::styled(
                self.tagline
                    .unwrap_or("Live Analysis \u{2022} Hedge Fund Grade")
                    .to_string(),
                muted(),
            )),
        ])
        .render(header[0], buf);

        Paragraph::new(vec![
            Line::from(Span::styled("CONFIDENCE", muted())),
            Line::from(Span::styled(self.confidence_text(), bold)),
        ])
        .alignment(Alignment::Right)
        .render(header[1], buf);

        let mut headline = vec![Span::styled(
            self.signal.headline.clone(),
            Style::default()
                .fg(color(palette.accent))
                .add_modifier(Modifier::BOLD),
        )];
        if self.signal.intense {
            headline.push(Span::raw("  "));
            headline.push(Span::styled(
                PULSE_MARKER,
                white.add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let mut lines = vec![Line::from(headline)];
        if let Some(subtitle) = &self.signal.subtitle {
            lines.push(Line::from(Span::styled(subtitle.clone(), white)));
        }
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("ALGORITHM SCORE  ", muted()),
            Span::styled(self.score_text(), bold),
            Span::styled("/100", white),
        ]));

        Paragraph::new(lines).render(rows[2], buf);
    }
}
