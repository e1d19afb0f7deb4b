use std::f64::consts::PI;

use pulse_core::{needle_angle, percent_width, GaugeBand, Rgb, TRACK};
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::Paragraph;

use super::{color, muted};

const INNER_RADIUS: f64 = 40.0;
const OUTER_RADIUS: f64 = 60.0;
const NEEDLE_LENGTH: f64 = 48.0;
const ARC_STEPS: u32 = 72;

/// Semicircular 0-100 gauge with a needle and a one-decimal readout.
pub struct GaugeChart<'a> {
    value: f64,
    title: &'a str,
    color: Option<Rgb>,
}

impl<'a> GaugeChart<'a> {
    pub fn new(value: f64, title: &'a str) -> Self {
        Self {
            value,
            title,
            color: None,
        }
    }

    pub fn color(mut self, color: Option<Rgb>) -> Self {
        self.color = color;
        self
    }

    /// Override, or the threshold ramp.
    pub fn fill_color(&self) -> Rgb {
        self.color.unwrap_or_else(|| GaugeBand::of(self.value).color())
    }

    pub fn filled_fraction(&self) -> f64 {
        percent_width(self.value) / 100.0
    }

    pub fn needle_degrees(&self) -> f64 {
        needle_angle(percent_width(self.value))
    }

    pub fn readout(&self) -> String {
        format!("{:.1}", self.value)
    }
}

impl Widget for GaugeChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(2),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let fill = color(self.fill_color());
        let track = color(TRACK);
        let filled = self.filled_fraction();
        // 0 deg needle points straight up; -90 is the left end of the arc.
        let needle = (90.0 - self.needle_degrees()).to_radians();

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-OUTER_RADIUS - 5.0, OUTER_RADIUS + 5.0])
            .y_bounds([-5.0, OUTER_RADIUS + 5.0])
            .paint(move |ctx| {
                for step in 0..=ARC_STEPS {
                    let t = f64::from(step) / f64::from(ARC_STEPS);
                    let theta = PI * (1.0 - t);
                    let (sin, cos) = theta.sin_cos();
                    ctx.draw(&CanvasLine::new(
                        INNER_RADIUS * cos,
                        INNER_RADIUS * sin,
                        OUTER_RADIUS * cos,
                        OUTER_RADIUS * sin,
                        if t <= filled && filled > 0.0 { fill } else { track },
                    ));
                }
                ctx.draw(&CanvasLine::new(
                    0.0,
                    0.0,
                    NEEDLE_LENGTH * needle.cos(),
                    NEEDLE_LENGTH * needle.sin(),
                    Color::White,
                ));
            })
            .render(chunks[0], buf);

        Paragraph::new(Span::styled(
            self.readout(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

        Paragraph::new(Span::styled(self.title.to_uppercase(), muted()))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}
