//! TUI effects boundary: event loop, terminal lifecycle, tick scheduling.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal, all intelligence lives in the pure layers.
//!
//! Architecture: one thread, one loop. Each turn draws a frame, then waits
//! for either a terminal event or the pending tick deadline, whichever
//! comes first, and feeds exactly one event to `update`.

use std::io;
use std::time::Instant;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::TuiError;

use super::state::{App, AppEvent, Command};
use super::timer::TickTimer;
use super::update::{init, update};
use super::view::render;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
///
/// Once raw mode is on, any later failure restores the terminal before the
/// error is returned.
fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    with_rollback(enter_alternate_screen, || {
        if let Err(e) = restore_terminal() {
            warn!(error = %e, "terminal restore after failed setup failed");
        }
    })
}

fn enter_alternate_screen() -> io::Result<Term> {
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

/// Run `step`; if it fails, run `rollback` before handing the error back.
fn with_rollback<T>(
    step: impl FnOnce() -> io::Result<T>,
    rollback: impl FnOnce(),
) -> io::Result<T> {
    step().inspect_err(|_| rollback())
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT SOURCES
// ============================================================================

/// Translate a crossterm event into an app event.
///
/// Only key presses count; releases and repeats reported by terminals with
/// enhanced keyboard support are dropped, as are mouse, focus and paste.
pub fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Resize(width, height) => Some(AppEvent::Resize(width, height)),
        _ => None,
    }
}

/// Wait for the next app event.
///
/// A due tick wins over terminal input so a stream of key presses cannot
/// starve the animation. Returns None when something arrived that the app
/// does not care about, or the wait ended just short of the deadline.
fn next_event(timer: &mut TickTimer) -> Result<Option<AppEvent>, TuiError> {
    if let Some(at) = timer.fire(Instant::now()) {
        return Ok(Some(AppEvent::Tick(at)));
    }

    let ready = match timer.timeout(Instant::now()) {
        Some(timeout) => event::poll(timeout).map_err(TuiError::EventRead)?,
        // Nothing scheduled: block until the terminal has something
        None => true,
    };

    if !ready {
        return Ok(timer.fire(Instant::now()).map(AppEvent::Tick));
    }

    let event = event::read().map_err(TuiError::EventRead)?;
    Ok(translate(event))
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI until the user quits.
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// on the way out, also when the loop fails.
pub fn run(config: &Config) -> Result<(), TuiError> {
    install_panic_hook();
    let mut terminal = setup_terminal().map_err(TuiError::TerminalSetup)?;
    info!("terminal ready");

    let result = event_loop(&mut terminal, config);

    let restored = restore_terminal().map_err(TuiError::TerminalRestore);
    if let Err(e) = &restored {
        warn!(error = %e, "terminal restore failed");
    }
    info!("terminal restored");

    result.and(restored)
}

fn event_loop(terminal: &mut Term, config: &Config) -> Result<(), TuiError> {
    let mut app = App::new(config);
    let mut timer = TickTimer::default();

    // Seed the viewport the way a resize would
    let size = terminal.size().map_err(TuiError::TerminalSetup)?;
    app = update(app, &AppEvent::Resize(size.width, size.height)).0;

    let mut command = init(&app);

    loop {
        match command {
            Command::Quit => {
                info!("quit requested");
                break;
            }
            Command::RequestTick => {
                if timer.schedule(Instant::now(), config.tick_interval) {
                    debug!(interval = ?config.tick_interval, "tick scheduled");
                }
            }
            Command::None => {}
        }

        terminal
            .draw(|frame| render(&app, frame))
            .map_err(TuiError::Draw)?;

        let Some(event) = next_event(&mut timer)? else {
            command = Command::None;
            continue;
        };

        if let AppEvent::Resize(width, height) = event {
            debug!(width, height, "resize");
        }

        let (previous, previous_cursor) = (app.screen, app.cursor);
        let (next, next_command) = update(app, &event);
        app = next;

        if app.screen != previous {
            debug!(from = ?previous, to = ?app.screen, "screen changed");
        }
        if app.cursor != previous_cursor {
            debug!(cursor = app.cursor, selected = ?app.selected_item(), "cursor moved");
        }
        if matches!(event, AppEvent::Tick(_)) && next_command == Command::None {
            debug!(screen = ?app.screen, "tick chain paused");
        }

        command = next_command;
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
