//! Page layout.

mod footer;
mod header;
mod results;
mod search;

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::app::{App, ViewState, POPULAR_TICKERS};
use crate::widgets::{color, muted};
use pulse_core::{theme, Tone};

pub fn draw(frame: &mut Frame, app: &App) {
    let banner = app.error_banner();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(if banner.is_some() { 3 } else { 0 }),
            Constraint::Min(8),
            Constraint::Length(2),
        ])
        .split(frame.area());

    header::draw_header(frame, chunks[0], app);
    search::draw_search(frame, chunks[1], app);
    if let Some(message) = banner {
        draw_error_banner(frame, chunks[2], &message);
    }

    match &app.view {
        ViewState::Loaded(analysis) => results::draw_results(frame, chunks[3], analysis),
        ViewState::Loading => draw_loading(frame, chunks[3], app),
        ViewState::Idle | ViewState::Failed(_) => draw_landing(frame, chunks[3], app),
    }

    footer::draw_footer(frame, chunks[4]);
}

fn draw_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let palette = theme(Tone::Negative);
    let banner = Paragraph::new(Span::styled(
        message.to_string(),
        Style::default().fg(color(palette.border)),
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color(palette.fill))),
    );
    frame.render_widget(banner, area);
}

fn draw_loading(frame: &mut Frame, area: Rect, app: &App) {
    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("Analyzing {}...", app.ticker.trim()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Waiting for the analysis service", muted())),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_type(BorderType::Rounded)),
        area,
    );
}

fn draw_landing(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.selected_popular();
    let mut picks = vec![Span::styled("Popular  ", muted())];
    for ticker in POPULAR_TICKERS {
        let style = if Some(ticker) == selected {
            Style::default()
                .fg(Color::Black)
                .bg(color(theme(Tone::Positive).accent))
        } else {
            Style::default().fg(Color::White)
        };
        picks.push(Span::styled(format!(" {} ", ticker), style));
        picks.push(Span::raw(" "));
    }

    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            "Stock Analysis",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Enter a ticker and press Enter to run the full analysis",
            muted(),
        )),
        Line::default(),
        Line::from(picks),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_type(BorderType::Rounded)),
        area,
    );
}
