use pulse_core::{percent_width, BarBand, ComponentScore};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Paragraph};

use super::{bar_line, color, muted, GaugeChart};

const CARDS_PER_ROW: usize = 4;

/// Component scores laid out as gauge cards, four per row.
pub struct ComponentGrid<'a> {
    components: &'a [ComponentScore],
}

impl<'a> ComponentGrid<'a> {
    pub fn new(components: &'a [ComponentScore]) -> Self {
        Self { components }
    }

    pub fn rows(&self) -> usize {
        self.components.len().div_ceil(CARDS_PER_ROW)
    }
}

fn render_card(component: &ComponentScore, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color(component.kind.color())));
    let inner = block.inner(area);
    block.render(area, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    GaugeChart::new(component.value, &component.name).render(chunks[0], buf);

    Paragraph::new(Span::styled(component.label.clone(), muted()))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    let band = BarBand::of(component.value);
    Paragraph::new(bar_line(
        percent_width(component.value),
        chunks[2].width,
        band.color(),
    ))
    .render(chunks[2], buf);
}

impl Widget for ComponentGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.components.is_empty() {
            Paragraph::new(Span::styled("No component scores in this result", muted()))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let rows = self.rows();
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
            .split(area);

        for (chunk, row_area) in self.components.chunks(CARDS_PER_ROW).zip(row_areas.iter()) {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, CARDS_PER_ROW as u32); CARDS_PER_ROW])
                .split(*row_area);
            for (component, cell) in chunk.iter().zip(cells.iter()) {
                render_card(component, *cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::buffer_lines;
    use pulse_core::ComponentKind;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn component(name: &str, value: f64) -> ComponentScore {
        ComponentScore {
            name: name.to_string(),
            kind: ComponentKind::from_name(name),
            value,
            label: format!("{:.1}/100", value),
        }
    }

    #[test]
    fn test_rows() {
        let five: Vec<ComponentScore> = (0..5).map(|i| component("X", i as f64)).collect();
        assert_eq!(ComponentGrid::new(&five).rows(), 2);
        assert_eq!(ComponentGrid::new(&five[..4]).rows(), 1);
        assert_eq!(ComponentGrid::new(&[]).rows(), 0);
    }

    #[test]
    fn test_renders_cards() {
        let components = vec![
            component("Sentiment", 61.0),
            component("Gamma", 88.1),
            component("Volume Bias", 120.0),
            component("Valuation", 12.0),
        ];
        let mut terminal = Terminal::new(TestBackend::new(100, 14)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(ComponentGrid::new(&components), frame.area()))
            .unwrap();
        let text = buffer_lines(terminal.backend().buffer()).join("\n");

        assert!(text.contains("SENTIMENT"));
        assert!(text.contains("VOLUME BIAS"));
        assert!(text.contains("88.1/100"));
        assert!(text.contains("120.0"));
    }

    #[test]
    fn test_empty_grid() {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(ComponentGrid::new(&[]), frame.area()))
            .unwrap();
        let text = buffer_lines(terminal.backend().buffer()).join("\n");
        assert!(text.contains("No component scores"));
    }
}
