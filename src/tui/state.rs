//! TUI state algebra: pure types, zero effects.
//!
//! These types define the whole state space of the showcase. The
//! transition function and the rendering layer both program against them.
//!
//! Design principle: the cursor, the search text and the animation phase
//! live in [`App`] and survive navigation; [`Screen`] only says which view
//! is active.

use std::time::Instant;

use crossterm::event::KeyEvent;

use crate::catalog::{feature_catalog, filter_items};
use crate::config::Config;

use super::input::{LineInput, TextEditor};

/// Number of animation steps in one full sweep of the progress bar.
///
/// One step is 0.005 of the bar; the phase wraps back to zero after the
/// last step, so the ratio stays in `[0, 1)`.
pub const PROGRESS_STEPS: u16 = 200;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the update function can receive.
///
/// The runtime produces these one at a time: key presses and resizes from
/// the terminal, ticks from the one-shot tick timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A key press.
    Key(KeyEvent),
    /// The terminal was resized to (width, height).
    Resize(u16, u16),
    /// A previously requested tick came due at this instant.
    Tick(Instant),
}

// ============================================================================
// SCREENS
// ============================================================================

/// The four mutually exclusive views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Static overview of the demo.
    #[default]
    Menu,
    /// Animated gradient progress bar.
    Progress,
    /// Live substring filter over the feature catalog.
    Search,
    /// Keybinding reference.
    Help,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// Keys that map to no action are handed to the search input while the
/// Search screen is active, and ignored elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Switch to a screen.
    Navigate(Screen),
    /// Move the list cursor up.
    MoveUp,
    /// Move the list cursor down.
    MoveDown,
    /// Quit the application.
    Quit,
}

// ============================================================================
// COMMANDS
// ============================================================================

/// Directive returned by the update function to the runtime.
///
/// Pure code never schedules or exits by itself; it only describes what the
/// runtime should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Nothing to do.
    None,
    /// Deliver one `Tick` after the tick interval.
    RequestTick,
    /// Stop the event loop.
    Quit,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// Generic over the text editor backing the search field so the transition
/// logic depends only on [`TextEditor`].
#[derive(Debug, Clone, PartialEq)]
pub struct App<E = LineInput> {
    /// Active view.
    pub screen: Screen,

    /// Selected index in `filtered_items`, or 0 when the list is empty.
    pub cursor: usize,

    /// Last known terminal width.
    pub viewport_width: u16,

    /// Last known terminal height.
    pub viewport_height: u16,

    /// Animation phase, in `0..PROGRESS_STEPS`.
    pub progress_steps: u16,

    /// Search field editor; its value is the search query.
    pub search: E,

    /// The fixed catalog, in display order.
    pub all_items: Vec<String>,

    /// Items of `all_items` matching the current query, in catalog order.
    pub filtered_items: Vec<String>,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App<LineInput> {
    /// Create the start state: Menu, cursor at top, empty query, bar at 0.
    pub fn new(config: &Config) -> Self {
        App::with_editor(LineInput::from_config(config))
    }
}

impl<E: TextEditor> App<E> {
    /// Create the start state around a caller-supplied editor.
    pub fn with_editor(search: E) -> Self {
        let all_items = feature_catalog();
        let filtered_items = filter_items(&all_items, search.value());
        App {
            screen: Screen::Menu,
            cursor: 0,
            viewport_width: 0,
            viewport_height: 0,
            progress_steps: 0,
            search,
            all_items,
            filtered_items,
        }
    }

    /// Current search text.
    pub fn search_query(&self) -> &str {
        self.search.value()
    }

    /// Recompute the filtered list from the current query and clamp the
    /// cursor into it.
    pub fn refilter(&mut self) {
        self.filtered_items = filter_items(&self.all_items, self.search.value());
        self.cursor = self.cursor.min(self.last_index());
    }
}

impl<E> App<E> {
    /// Animation phase as a ratio in `[0, 1)`.
    pub fn progress_ratio(&self) -> f64 {
        f64::from(self.progress_steps) / f64::from(PROGRESS_STEPS)
    }

    /// Animation phase as a whole percentage, rounded half up.
    pub fn progress_percent(&self) -> u16 {
        // One step is half a percent
        (self.progress_steps + 1) / 2
    }

    /// Advance the animation one step, wrapping after a full sweep.
    pub fn advance_progress(&mut self) {
        self.progress_steps = (self.progress_steps + 1) % PROGRESS_STEPS;
    }

    /// Highest valid cursor position (0 for an empty list).
    pub fn last_index(&self) -> usize {
        self.filtered_items.len().saturating_sub(1)
    }

    /// The filtered item under the cursor, if any.
    pub fn selected_item(&self) -> Option<&str> {
        self.filtered_items.get(self.cursor).map(String::as_str)
    }
}

// ============================================================================
// TESTS
// ============================================================================
