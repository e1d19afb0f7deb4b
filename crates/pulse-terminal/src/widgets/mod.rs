//! Presentational widgets. Each one is a pure function of its inputs.

mod components;
mod gauge;
mod regime;
mod signal;

pub use components::ComponentGrid;
pub use gauge::GaugeChart;
pub use regime::{weight_label, RegimeIndicator};
pub use signal::SignalDisplay;

use pulse_core::{Rgb, MUTED, TRACK};
use ratatui::prelude::*;

pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub fn muted() -> Style {
    Style::default().fg(color(MUTED))
}

/// Number of cells to fill for `percent` of `width`. Only the drawable
/// range is enforced; the percentage itself is not validated.
pub fn filled_cells(percent: f64, width: u16) -> u16 {
    if !percent.is_finite() || percent <= 0.0 {
        return 0;
    }
    let cells = (percent / 100.0 * f64::from(width)).round();
    cells.min(f64::from(width)) as u16
}

/// A one-row progress bar.
pub fn bar_line(percent: f64, width: u16, fill: Rgb) -> Line<'static> {
    let filled = filled_cells(percent, width);
    Line::from(vec![
        Span::styled("\u{2588}".repeat(filled as usize), Style::default().fg(color(fill))),
        Span::styled(
            "\u{2591}".repeat((width - filled) as usize),
            Style::default().fg(color(TRACK)),
        ),
    ])
}

#[cfg(test)]
pub(crate) fn buffer_lines(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}
