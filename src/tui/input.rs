//! Single-line text editing for the search field.
//!
//! [`TextEditor`] is the narrow capability the state machine depends on:
//! feed it keys, read back the text, render it as one line.
//! [`LineInput`] is the implementation used by the application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::{Line, Span};

use crate::config::Config;

use super::theme;

/// Prompt drawn in front of the editable text.
pub const PROMPT: &str = "> ";

/// A single-line text editor driven by raw key events.
pub trait TextEditor {
    /// Apply one key. Returns true when the text changed.
    fn handle_key(&mut self, key: KeyEvent) -> bool;

    /// Current text.
    fn value(&self) -> &str;

    /// Renderable line: prompt, visible text and edit cursor.
    fn line(&self) -> Line<'static>;
}

/// Editable text with a cursor, a character limit and a scrolling
/// display window.
///
/// Positions (`cursor`, `offset`) count chars, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInput {
    text: String,
    cursor: usize,
    offset: usize,
    char_limit: usize,
    width: usize,
    placeholder: String,
}

impl LineInput {
    /// Create an empty editor.
    pub fn new(char_limit: usize, width: usize, placeholder: impl Into<String>) -> Self {
        LineInput {
            text: String::new(),
            cursor: 0,
            offset: 0,
            char_limit,
            width: width.max(1),
            placeholder: placeholder.into(),
        }
    }

    /// Create an empty editor using the search field settings.
    pub fn from_config(config: &Config) -> Self {
        LineInput::new(
            config.search_char_limit,
            config.search_display_width,
            config.search_placeholder.clone(),
        )
    }

    /// Replace the text, truncated to the char limit, cursor at the end.
    pub fn set_value(&mut self, value: &str) {
        self.text = value.chars().take(self.char_limit).collect();
        self.cursor = self.len();
        self.scroll_to_cursor();
    }

    #[cfg(test)]
    fn cursor(&self) -> usize {
        self.cursor
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn insert(&mut self, c: char) {
        if self.len() >= self.char_limit {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.delete_range(self.cursor - 1, self.cursor);
    }

    fn delete(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        self.delete_range(self.cursor, self.cursor + 1);
    }

    fn delete_word_backward(&mut self) {
        let chars: Vec<char> = self.text.chars().collect();
        let mut start = self.cursor;
        while start > 0 && chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !chars[start - 1].is_whitespace() {
            start -= 1;
        }
        self.delete_range(start, self.cursor);
    }

    /// Remove chars in `start..end` and leave the cursor at `start`.
    fn delete_range(&mut self, start: usize, end: usize) {
        let (from, to) = (self.byte_index(start), self.byte_index(end));
        self.text.replace_range(from..to, "");
        self.cursor = start;
    }

    /// Keep the cursor cell inside the visible window, and keep the window
    /// filled when the text shrinks.
    fn scroll_to_cursor(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.width {
            self.offset = self.cursor + 1 - self.width;
        }
        self.offset = self.offset.min(self.len().saturating_sub(self.width - 1));
    }

    fn placeholder_line(&self) -> Line<'static> {
        let mut chars = self.placeholder.chars().take(self.width);
        let first = chars.next().map_or_else(|| " ".to_string(), String::from);
        Line::from(vec![
            Span::styled(PROMPT, theme::STYLE_PROMPT),
            Span::styled(first, theme::STYLE_EDIT_CURSOR),
            Span::styled(chars.collect::<String>(), theme::STYLE_PLACEHOLDER),
        ])
    }
}

impl TextEditor for LineInput {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let before = self.text.clone();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char(c) if ctrl => match c {
                'a' => self.cursor = 0,
                'e' => self.cursor = self.len(),
                'b' => self.cursor = self.cursor.saturating_sub(1),
                'f' => self.cursor = (self.cursor + 1).min(self.len()),
                'h' => self.backspace(),
                'd' => self.delete(),
                'u' => self.delete_range(0, self.cursor),
                'k' => {
                    let at = self.byte_index(self.cursor);
                    self.text.truncate(at);
                }
                'w' => self.delete_word_backward(),
                _ => {}
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.len(),
            _ => {}
        }

        self.scroll_to_cursor();
        self.text != before
    }

    fn value(&self) -> &str {
        &self.text
    }

    fn line(&self) -> Line<'static> {
        if self.text.is_empty() {
            return self.placeholder_line();
        }

        let chars: Vec<char> = self.text.chars().collect();
        let end = (self.offset + self.width).min(chars.len());
        let before: String = chars[self.offset..self.cursor].iter().collect();
        let (at, after) = match chars.get(self.cursor) {
            Some(c) => (c.to_string(), chars[self.cursor + 1..end].iter().collect()),
            None => (" ".to_string(), String::new()),
        };

        Line::from(vec![
            Span::styled(PROMPT, theme::STYLE_PROMPT),
            Span::raw(before),
            Span::styled(at, theme::STYLE_EDIT_CURSOR),
            Span::raw(after),
        ])
    }
}

// ============================================================================
// TESTS
// ============================================================================
