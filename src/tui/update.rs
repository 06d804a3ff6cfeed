//! Pure state transitions: (App, AppEvent) → (App, Command).
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Every event is accepted; anything without a meaning on the active
//! screen leaves the state unchanged.

use crossterm::event::KeyEvent;

use super::input::TextEditor;
use super::keys::map_key;
use super::state::{Action, App, AppEvent, Command, Screen};

/// Command issued once at startup, before any event.
///
/// The first tick is requested unconditionally; if the app is not on the
/// Progress screen when it fires, the chain simply pauses.
pub fn init<E>(_app: &App<E>) -> Command {
    Command::RequestTick
}

/// Pure state transition function.
///
/// Consumes the current state and one event, returns the next state and the
/// directive for the runtime.
pub fn update<E: TextEditor>(app: App<E>, event: &AppEvent) -> (App<E>, Command) {
    match event {
        AppEvent::Resize(width, height) => update_resize(app, *width, *height),
        AppEvent::Tick(_) => update_tick(app),
        AppEvent::Key(key) => update_key(app, *key),
    }
}

// ============================================================================
// PER-EVENT HANDLERS
// ============================================================================

/// Resize: record the viewport. A running tick chain is unaffected.
fn update_resize<E>(mut app: App<E>, width: u16, height: u16) -> (App<E>, Command) {
    app.viewport_width = width;
    app.viewport_height = height;
    (app, Command::None)
}

/// Tick: advance the animation and renew the chain, only on Progress.
fn update_tick<E>(mut app: App<E>) -> (App<E>, Command) {
    if app.screen != Screen::Progress {
        return (app, Command::None);
    }
    app.advance_progress();
    (app, Command::RequestTick)
}

/// Key: global bindings first, then the search editor on Search.
fn update_key<E: TextEditor>(mut app: App<E>, key: KeyEvent) -> (App<E>, Command) {
    let command = match map_key(key) {
        Some(Action::Quit) => return (app, Command::Quit),
        Some(Action::Navigate(screen)) => navigate(&mut app, screen),
        Some(Action::MoveUp) => {
            app.cursor = app.cursor.saturating_sub(1);
            Command::None
        }
        Some(Action::MoveDown) => {
            app.cursor = (app.cursor + 1).min(app.last_index());
            Command::None
        }
        None => {
            if app.screen == Screen::Search {
                app.search.handle_key(key);
            }
            Command::None
        }
    };

    // Any key on Search re-derives the list, whichever key it was
    if app.screen == Screen::Search {
        app.refilter();
    }

    (app, command)
}

/// Switch screens. Entering Progress restarts the tick chain; the runtime
/// absorbs the request if a tick is still pending.
fn navigate<E>(app: &mut App<E>, screen: Screen) -> Command {
    app.screen = screen;
    if screen == Screen::Progress {
        Command::RequestTick
    } else {
        Command::None
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::tui::state::PROGRESS_STEPS;
    use crossterm::event::{KeyCode, KeyModifiers};
    use proptest::prelude::*;
    use std::time::Instant;

    fn start() -> App {
        App::new(&Config::default())
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ch(c: char) -> AppEvent {
        key(KeyCode::Char(c))
    }

    fn tick() -> AppEvent {
        AppEvent::Tick(Instant::now())
    }

    /// Feed events in order, returning the final state and last command.
    fn run_events(app: App, events: &[AppEvent]) -> (App, Command) {
        events
            .iter()
            .fold((app, Command::None), |(app, _), event| update(app, event))
    }

    fn type_str(app: App, s: &str) -> App {
        let events: Vec<AppEvent> = s.chars().map(ch).collect();
        run_events(app, &events).0
    }

    // -- Init --

    #[test]
    fn init_requests_first_tick() {
        assert_eq!(init(&start()), Command::RequestTick);
    }

    // -- Resize --

    #[test]
    fn resize_records_viewport() {
        let (app, cmd) = update(start(), &AppEvent::Resize(120, 40));
        assert_eq!((app.viewport_width, app.viewport_height), (120, 40));
        assert_eq!(cmd, Command::None);
    }

    #[test]
    fn resize_on_progress_keeps_animation_state() {
        let (app, _) = run_events(start(), &[ch('2'), tick(), tick()]);
        let (app, cmd) = update(app, &AppEvent::Resize(80, 24));
        assert_eq!(app.progress_steps, 2);
        assert_eq!(app.screen, Screen::Progress);
        assert_eq!(cmd, Command::None);
    }

    // -- Tick --

    #[test]
    fn tick_on_progress_advances_and_renews() {
        let (app, _) = update(start(), &ch('2'));
        let (app, cmd) = update(app, &tick());
        assert_eq!(app.progress_steps, 1);
        assert!((app.progress_ratio() - 0.005).abs() < 1e-12);
        assert_eq!(cmd, Command::RequestTick);
    }

    #[test]
    fn tick_off_progress_is_ignored_and_pauses() {
        for screen_key in ['1', '3', '4'] {
            let (before, _) = update(start(), &ch(screen_key));
            let (after, cmd) = update(before.clone(), &tick());
            assert_eq!(after, before);
            assert_eq!(cmd, Command::None);
        }
    }

    #[test]
    fn two_hundred_and_one_ticks_wrap_to_one_step() {
        let (mut app, _) = update(start(), &ch('2'));
        for _ in 0..201 {
            app = update(app, &tick()).0;
        }
        assert_eq!(app.progress_steps, 1);
        assert!((app.progress_ratio() - 0.005).abs() < 1e-12);
        assert_eq!(app.progress_percent(), 1);
    }

    #[test]
    fn progress_is_kept_across_navigation() {
        let (app, _) = run_events(start(), &[ch('2'), tick(), tick(), tick(), ch('1'), tick()]);
        assert_eq!(app.progress_steps, 3);
        let (app, cmd) = update(app, &ch('2'));
        assert_eq!(app.progress_steps, 3);
        assert_eq!(cmd, Command::RequestTick);
    }

    // -- Navigation --

    #[test]
    fn number_keys_switch_screens() {
        let cases = [
            ('1', Screen::Menu),
            ('2', Screen::Progress),
            ('3', Screen::Search),
            ('4', Screen::Help),
        ];
        for (c, screen) in cases {
            let (app, _) = update(start(), &ch(c));
            assert_eq!(app.screen, screen);
        }
    }

    #[test]
    fn entering_progress_requests_tick() {
        let (_, cmd) = update(start(), &ch('2'));
        assert_eq!(cmd, Command::RequestTick);
        let (_, cmd) = update(start(), &ch('4'));
        assert_eq!(cmd, Command::None);
    }

    #[test]
    fn navigation_does_not_reset_cursor_or_query() {
        let app = type_str(update(start(), &ch('3')).0, "s");
        let (app, _) = run_events(app, &[key(KeyCode::Down), ch('4'), ch('3')]);
        assert_eq!(app.search_query(), "s");
        assert_eq!(app.cursor, 1);
    }

    // -- Quit --

    #[test]
    fn q_quits_from_every_screen_without_state_change() {
        for screen_key in ['1', '2', '3', '4'] {
            let (before, _) = update(start(), &ch(screen_key));
            let (after, cmd) = update(before.clone(), &ch('q'));
            assert_eq!(cmd, Command::Quit);
            assert_eq!(after, before);
        }
    }

    #[test]
    fn ctrl_c_quits() {
        let event = AppEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let (_, cmd) = update(start(), &event);
        assert_eq!(cmd, Command::Quit);
    }

    // -- Cursor --

    #[test]
    fn cursor_up_at_top_stays() {
        let (app, _) = update(start(), &key(KeyCode::Up));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn cursor_moves_with_arrows_and_vim_keys() {
        let (app, _) = run_events(start(), &[ch('j'), key(KeyCode::Down), ch('k')]);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn cursor_down_clamps_at_end() {
        let mut app = start();
        app.filtered_items.truncate(3);
        app.cursor = 2;
        let (app, _) = update(app, &key(KeyCode::Down));
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn cursor_down_on_empty_list_stays_at_zero() {
        let app = type_str(update(start(), &ch('3')).0, "xyz");
        assert!(app.filtered_items.is_empty());
        let (app, _) = update(app, &key(KeyCode::Down));
        assert_eq!(app.cursor, 0);
    }

    // -- Search --

    #[test]
    fn typing_search_filters_to_one_item() {
        let app = type_str(update(start(), &ch('3')).0, "search");
        assert_eq!(app.search_query(), "search");
        assert_eq!(app.filtered_items, vec!["Search & Filter"]);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn narrowing_the_filter_clamps_the_cursor() {
        let (app, _) = run_events(start(), &[ch('3'), ch('j'), ch('j'), ch('j'), ch('j')]);
        assert_eq!(app.cursor, 4);
        let app = type_str(app, "bar");
        assert_eq!(app.filtered_items, vec!["Progress Bar with Ticks"]);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn backspace_widens_the_filter() {
        let app = type_str(update(start(), &ch('3')).0, "searchx");
        assert!(app.filtered_items.is_empty());
        let (app, _) = update(app, &key(KeyCode::Backspace));
        assert_eq!(app.filtered_items, vec!["Search & Filter"]);
    }

    #[test]
    fn bound_keys_are_not_typed_into_search() {
        let (app, _) = run_events(start(), &[ch('3'), ch('j'), ch('1'), ch('3')]);
        assert_eq!(app.search_query(), "");
    }

    #[test]
    fn typing_off_search_is_ignored() {
        let app = type_str(start(), "abc");
        assert_eq!(app.search_query(), "");
        assert_eq!(app.filtered_items.len(), 7);
    }

    #[test]
    fn unbound_key_on_other_screens_is_noop() {
        let before = start();
        let (after, cmd) = update(before.clone(), &key(KeyCode::Enter));
        assert_eq!(after, before);
        assert_eq!(cmd, Command::None);
    }

    // -- Properties --

    fn arb_key() -> impl Strategy<Value = AppEvent> {
        prop_oneof![
            3 => Just(key(KeyCode::Up)),
            3 => Just(key(KeyCode::Down)),
            1 => Just(ch('k')),
            1 => Just(ch('j')),
            2 => proptest::char::range('a', 'z')
                .prop_filter("bound keys", |c| !matches!(c, 'j' | 'k' | 'q'))
                .prop_map(ch),
            1 => Just(ch(' ')),
            1 => Just(key(KeyCode::Backspace)),
            1 => Just(ch('1')),
            1 => Just(ch('3')),
        ]
    }

    proptest! {
        /// Cursor stays inside the filtered list whatever keys arrive.
        #[test]
        fn prop_cursor_stays_in_bounds(events in prop::collection::vec(arb_key(), 0..80)) {
            let mut app = start();
            for event in &events {
                app = update(app, event).0;
                prop_assert!(app.cursor <= app.filtered_items.len().saturating_sub(1));
            }
        }

        /// The filtered list is exactly the order-preserving case-insensitive match.
        #[test]
        fn prop_filter_matches_query(query in "[a-zA-Z &()-]{0,12}") {
            let typed: String = query
                .chars()
                .filter(|c| !matches!(c, 'j' | 'k' | 'q'))
                .collect();
            let app = type_str(update(start(), &ch('3')).0, &typed);

            let needle = typed.to_lowercase();
            let expected: Vec<String> = app
                .all_items
                .iter()
                .filter(|item| item.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            prop_assert_eq!(app.search_query(), typed.as_str());
            prop_assert_eq!(&app.filtered_items, &expected);
            if typed.is_empty() {
                prop_assert_eq!(app.filtered_items.len(), 7);
            }
        }

        /// Ticks on Progress advance one step modulo a full sweep.
        #[test]
        fn prop_ticks_advance_modulo_sweep(n in 0usize..1000) {
            let mut app = update(start(), &ch('2')).0;
            for _ in 0..n {
                let (next, cmd) = update(app, &tick());
                prop_assert_eq!(cmd, Command::RequestTick);
                prop_assert!(next.progress_ratio() < 1.0);
                app = next;
            }
            prop_assert_eq!(usize::from(app.progress_steps), n % usize::from(PROGRESS_STEPS));
        }

        /// Ticks change nothing off the Progress screen.
        #[test]
        fn prop_ticks_ignored_off_progress(n in 0usize..50, screen_key in prop::sample::select(vec!['1', '3', '4'])) {
            let before = update(start(), &ch(screen_key)).0;
            let mut app = before.clone();
            for _ in 0..n {
                app = update(app, &tick()).0;
            }
            prop_assert_eq!(app, before);
        }
    }
}
