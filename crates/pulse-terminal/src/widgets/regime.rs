use pulse_core::{theme, Regime, Weights};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Paragraph};

use super::{bar_line, color, muted};

/// Regime badge plus the dynamic weight distribution.
pub struct RegimeIndicator<'a> {
    tag: &'a str,
    regime: Regime,
    vix: Option<f64>,
    weights: Option<Weights>,
}

impl<'a> RegimeIndicator<'a> {
    pub fn new(tag: &'a str, regime: Regime) -> Self {
        Self {
            tag,
            regime,
            vix: None,
            weights: None,
        }
    }

    pub fn vix(mut self, vix: Option<f64>) -> Self {
        self.vix = vix;
        self
    }

    pub fn weights(mut self, weights: Option<Weights>) -> Self {
        self.weights = weights;
        self
    }

    pub fn vix_text(&self) -> String {
        self.vix
            .map(|v| format!("{:.1}", v))
            .unwrap_or_else(|| "--".to_string())
    }
}

/// `0.15` -> `"15%"`, no clamping.
pub fn weight_label(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

impl Widget for RegimeIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let descriptor = self.regime.descriptor();
        let palette = theme(descriptor.tone);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color(palette.border)));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(8)])
            .split(chunks[0]);

        Paragraph::new(vec![
            Line::from(vec![
                Span::raw(format!("{} ", descriptor.icon)),
                Span::styled(
                    format!("{} REGIME", self.tag),
                    Style::default()
                        .fg(color(palette.accent))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(descriptor.description, Style::default().fg(Color::White))),
        ])
        .render(header[0], buf);

        Paragraph::new(vec![
            Line::from(Span::styled("VIX", muted())),
            Line::from(Span::styled(
                self.vix_text(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Right)
        .render(header[1], buf);

        let Some(weights) = self.weights else {
            return;
        };

        Paragraph::new(Span::styled("DYNAMIC ALGORITHM WEIGHTS", muted())).render(chunks[1], buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(chunks[2]);

        for ((label, fraction), column) in weights.entries().into_iter().zip(columns.iter()) {
            let bar_width = column.width.saturating_sub(1);
            Paragraph::new(vec![
                Line::from(Span::styled(label, muted())),
                Line::from(Span::styled(
                    weight_label(fraction),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                bar_line(fraction * 100.0, bar_width, palette.accent),
            ])
            .render(*column, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::buffer_lines;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(indicator: RegimeIndicator, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(indicator, frame.area()))
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn test_weight_label_is_not_normalized() {
        assert_eq!(weight_label(0.15), "15%");
        assert_eq!(weight_label(1.7), "170%");
        assert_eq!(weight_label(-0.2), "-20%");
    }

    #[test]
    fn test_renders_fear_badge_and_weights() {
        let weights = Weights {
            sentiment: 0.15,
            gamma: 0.45,
            volume: 0.1,
            valuation: 0.3,
        };
        let lines = render(
            RegimeIndicator::new("FEAR", Regime::Fear)
                .vix(Some(32.44))
                .weights(Some(weights)),
            60,
            9,
        );
        let text = lines.join("\n");

        assert!(text.contains("FEAR REGIME"));
        assert!(text.contains("High Volatility - Math Over Hype"));
        assert!(text.contains("32.4"));
        assert!(text.contains("DYNAMIC ALGORITHM WEIGHTS"));
        assert!(text.contains("45%"));
        assert!(text.contains("Valuation"));
    }

    #[test]
    fn test_unknown_tag_renders_default_description() {
        let lines = render(RegimeIndicator::new("xyz", Regime::from_tag("xyz")), 60, 5);
        let text = lines.join("\n");
        assert!(text.contains("xyz REGIME"));
        assert!(text.contains("Normal Market - Balanced Approach"));
        assert!(text.contains("--"));
        assert!(!text.contains("WEIGHTS"));
    }

    #[test]
    fn test_oversized_weights_render_without_panic() {
        let weights = Weights {
            sentiment: 2.5,
            gamma: -1.0,
            volume: f64::NAN,
            valuation: 0.0,
        };
        let lines = render(
            RegimeIndicator::new("NORMAL", Regime::Normal).weights(Some(weights)),
            40,
            8,
        );
        assert!(lines.join("\n").contains("250%"));
    }
}
