use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::widgets::muted;

pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(vec![
        Line::from(Span::styled(
            "MarketPulse Terminal v2.0 - Not financial advice. For informational purposes only.",
            muted(),
        )),
        Line::from(Span::styled(
            "[Enter] Analyze  [Tab] Popular  [Ctrl+U] Clear  [F5] API status  [Esc] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
