//! Progress bar rendering.
//!
//! [`Gauge`] turns a ratio into a renderable line; the state machine never
//! sees how the bar is drawn.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use super::theme;

/// Default bar width, in cells.
pub const DEFAULT_GAUGE_WIDTH: u16 = 40;

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Something that can draw a 0..1 ratio as a bar.
pub trait Gauge {
    /// Render the bar for `ratio`; values outside `[0, 1]` are clamped.
    fn bar(&self, ratio: f64) -> Line<'static>;
}

/// Fixed-width bar whose filled cells blend linearly between two colors
/// across the full width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientGauge {
    pub width: u16,
    pub start: (u8, u8, u8),
    pub end: (u8, u8, u8),
}

impl Default for GradientGauge {
    fn default() -> Self {
        GradientGauge {
            width: DEFAULT_GAUGE_WIDTH,
            start: theme::GRADIENT_START,
            end: theme::GRADIENT_END,
        }
    }
}

impl GradientGauge {
    /// Number of filled cells for a ratio.
    pub fn filled_cells(&self, ratio: f64) -> usize {
        let width = usize::from(self.width);
        // NaN casts to 0
        let filled = (ratio.clamp(0.0, 1.0) * f64::from(self.width)).round() as usize;
        filled.min(width)
    }

    /// Gradient color of the cell at `index`.
    pub fn color_at(&self, index: usize) -> Color {
        let span = usize::from(self.width).saturating_sub(1).max(1);
        let t = index.min(span) as f64 / span as f64;
        let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Color::Rgb(
            lerp(self.start.0, self.end.0),
            lerp(self.start.1, self.end.1),
            lerp(self.start.2, self.end.2),
        )
    }
}

impl Gauge for GradientGauge {
    fn bar(&self, ratio: f64) -> Line<'static> {
        let filled = self.filled_cells(ratio);
        let mut spans: Vec<Span<'static>> = (0..filled)
            .map(|i| Span::styled(FILLED, Style::new().fg(self.color_at(i))))
            .collect();

        let empty = usize::from(self.width) - filled;
        if empty > 0 {
            spans.push(Span::styled(EMPTY.repeat(empty), theme::STYLE_GAUGE_EMPTY));
        }
        Line::from(spans)
    }
}
