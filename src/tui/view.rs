//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated function producing its body lines. The main
//! `render()` wraps the body in the shared bordered box and adds the
//! footer. Widget-building functions are pure (state in, widgets out); the
//! only effect is Frame::render_widget() which writes to the terminal
//! buffer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use super::gauge::{Gauge, GradientGauge};
use super::input::TextEditor;
use super::state::{App, Screen};
use super::theme;

/// Keybinding summary shown under every screen.
pub const FOOTER: &str = "[1] Menu  [2] Progress  [3] Search  [4] Help  [q] Quit";

const PAD_X: u16 = 2;
const PAD_Y: u16 = 1;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render<E: TextEditor>(app: &App<E>, frame: &mut Frame) {
    render_with_gauge(app, &GradientGauge::default(), frame);
}

/// Render with a caller-supplied progress bar.
pub fn render_with_gauge<E: TextEditor>(app: &App<E>, gauge: &dyn Gauge, frame: &mut Frame) {
    let area = frame.area();
    let lines = screen_lines(app, gauge);

    let (box_area, footer_area) = layout(&lines, area);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme::STYLE_BORDER)
        .padding(Padding::new(PAD_X, PAD_X, PAD_Y, PAD_Y));
    frame.render_widget(Paragraph::new(lines).block(block), box_area);

    frame.render_widget(
        Paragraph::new(Span::styled(FOOTER, theme::STYLE_FOOTER)),
        footer_area,
    );
}

/// Full frame body for the active screen: header, blank line, content.
pub fn screen_lines<E: TextEditor>(app: &App<E>, gauge: &dyn Gauge) -> Vec<Line<'static>> {
    let (title, body) = match app.screen {
        Screen::Menu => ("MAIN MENU", menu_lines()),
        Screen::Progress => ("PROGRESS DEMO", progress_lines(app, gauge)),
        Screen::Search => ("SEARCH DEMO", search_lines(app)),
        Screen::Help => ("HELP", help_lines()),
    };

    let mut lines = vec![
        Line::from(Span::styled(format!(" {} ", title), theme::STYLE_HEADER)),
        Line::from(""),
    ];
    lines.extend(body);
    lines
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Size the box to its content, clipped to the frame, with the footer on
/// the row below it. The footer row is always reserved, so the box never
/// covers it.
fn layout(lines: &[Line], area: Rect) -> (Rect, Rect) {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let content_height = lines.len();

    let want_width = u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .saturating_add(2 * PAD_X + 2);
    let want_height = u16::try_from(content_height)
        .unwrap_or(u16::MAX)
        .saturating_add(2 * PAD_Y + 2);

    let box_width = want_width.min(area.width);
    let box_height = want_height.min(area.height.saturating_sub(1));
    let box_area = Rect::new(area.x, area.y, box_width, box_height);

    let footer_height = u16::from(area.height > 0);
    let footer_area = Rect::new(area.x, area.y + box_height, area.width, footer_height);

    (box_area, footer_area)
}

// ============================================================================
// SCREEN: MENU
// ============================================================================

fn menu_lines() -> Vec<Line<'static>> {
    [
        "🚀 Terminal UI Showcase",
        "",
        "This interface demonstrates:",
        "",
        "• Multi-screen architecture",
        "• Real-time tick updates",
        "• Search filtering",
        "• Responsive layout handling",
        "• Styled components with Ratatui",
        "• Component-based state management",
        "",
        "Press numbers to navigate.",
    ]
    .into_iter()
    .map(Line::from)
    .collect()
}

// ============================================================================
// SCREEN: PROGRESS
// ============================================================================

fn progress_lines<E>(app: &App<E>, gauge: &dyn Gauge) -> Vec<Line<'static>> {
    vec![
        Line::from("📊 Live Progress Demo"),
        Line::from(""),
        Line::from(Span::styled("Animated by a self-renewing tick", theme::STYLE_DIM)),
        Line::from(""),
        gauge.bar(app.progress_ratio()),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}%", app.progress_percent()),
            theme::STYLE_IMPORTANT,
        )),
    ]
}

// ============================================================================
// SCREEN: SEARCH
// ============================================================================

fn search_lines<E: TextEditor>(app: &App<E>) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from("🔍 Search & Filter Demo"),
        Line::from(""),
        app.search.line(),
        Line::from(""),
    ];

    for (i, item) in app.filtered_items.iter().enumerate() {
        let line = if i == app.cursor {
            Line::from(format!("> {}", item)).style(theme::STYLE_SELECTED)
        } else {
            Line::from(format!("  {}", item))
        };
        lines.push(line);
    }

    if app.filtered_items.is_empty() {
        lines.push(Line::from(Span::styled("  (no matches)", theme::STYLE_DIM)));
    }

    lines
}

// ============================================================================
// SCREEN: HELP
// ============================================================================

fn help_lines() -> Vec<Line<'static>> {
    [
        "📘 Help & Keybindings",
        "",
        "Navigation:",
        "  1 → Menu screen",
        "  2 → Progress demo",
        "  3 → Search demo",
        "  4 → Help screen",
        "",
        "Movement:",
        "  ↑ / k → Move up",
        "  ↓ / j → Move down",
        "",
        "Exit:",
        "  q or Ctrl+C",
        "",
        "This TUI is structured using the Elm Architecture",
        "(Model → Update → View pattern).",
    ]
    .into_iter()
    .map(Line::from)
    .collect()
}

// ============================================================================
// TESTS
// ============================================================================
