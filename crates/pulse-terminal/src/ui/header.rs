use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, BackendStatus};
use crate::widgets::{color, muted};
use pulse_core::{theme, Tone};

pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(color(theme(Tone::Positive).fill)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(56)])
        .split(inner);

    let title = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                "\u{25B2} ",
                Style::default().fg(color(theme(Tone::Positive).accent)),
            ),
            Span::styled(
                "MarketPulse Terminal",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Professional Financial Intelligence Platform",
            muted(),
        )),
    ]);
    frame.render_widget(title, chunks[0]);

    let status = Paragraph::new(vec![backend_line(app), cache_line(app)])
        .alignment(Alignment::Right);
    frame.render_widget(status, chunks[1]);
}

fn backend_line(app: &App) -> Line<'static> {
    let (text, tone) = match &app.backend {
        BackendStatus::Checking => ("\u{25CB} Checking API...".to_string(), None),
        BackendStatus::Online { degraded, .. } if !degraded.is_empty() => (
            format!("\u{25CF} API Degraded: {}", degraded.join(", ")),
            Some(Tone::Caution),
        ),
        BackendStatus::Online { version, .. } => (
            match version {
                Some(v) => format!("\u{25CF} API Connected (v{})", v),
                None => "\u{25CF} API Connected".to_string(),
            },
            Some(Tone::Positive),
        ),
        BackendStatus::Offline(_) => ("\u{25CF} API Unreachable".to_string(), Some(Tone::Negative)),
    };

    let style = match tone {
        Some(tone) => Style::default().fg(color(theme(tone).accent)),
        None => muted(),
    };
    Line::from(vec![
        Span::styled(text, style),
        Span::styled(format!("  [{}]", app.backend_name), muted()),
    ])
}

fn cache_line(app: &App) -> Line<'static> {
    match &app.cache {
        Some(stats) => Line::from(Span::styled(
            format!(
                "\u{25C6} Cache Active: {} stocks, {} fresh ({} hit rate)",
                stats.total_cached_stocks, stats.fresh_cache_entries, stats.cache_hit_rate
            ),
            Style::default().fg(color(theme(Tone::Info).border)),
        )),
        None => Line::from(Span::styled(app.api_url.clone(), muted())),
    }
}
