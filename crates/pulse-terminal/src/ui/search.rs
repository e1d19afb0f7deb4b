use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::app::App;
use crate::widgets::{color, muted};
use pulse_core::{theme, Tone};

const BUTTON_WIDTH: u16 = 18;

/// Button caption for the current state.
pub fn button_label(app: &App) -> &'static str {
    if app.is_loading() {
        "Analyzing..."
    } else {
        "Analyze"
    }
}

pub fn draw_search(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(BUTTON_WIDTH)])
        .split(area);

    let accent = color(theme(Tone::Positive).accent);
    let input = if app.ticker.is_empty() {
        Paragraph::new(Span::styled("Enter ticker (NVDA, TSLA, AAPL)", muted()))
    } else {
        Paragraph::new(Span::styled(
            app.ticker.clone(),
            Style::default().fg(Color::White),
        ))
    };
    frame.render_widget(
        input.block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent))
                .title(" Ticker "),
        ),
        chunks[0],
    );

    if !app.is_loading() {
        let cursor_x = chunks[0].x + 1 + app.ticker.chars().count() as u16;
        frame.set_cursor_position((cursor_x.min(chunks[0].right().saturating_sub(2)), chunks[0].y + 1));
    }

    let button_style = if app.can_analyze() {
        Style::default()
            .fg(Color::White)
            .bg(color(theme(Tone::Positive).fill))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    };
    let button = Paragraph::new(Span::styled(format!(" {} ", button_label(app)), button_style))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_type(BorderType::Rounded));
    frame.render_widget(button, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ViewState;

    #[test]
    fn test_button_label() {
        let mut app = App::new("http://localhost:8000", "http");
        assert_eq!(button_label(&app), "Analyze");
        app.view = ViewState::Loading;
        assert_eq!(button_label(&app), "Analyzing...");
        app.view = ViewState::Failed("boom".into());
        assert_eq!(button_label(&app), "Analyze");
    }
}
