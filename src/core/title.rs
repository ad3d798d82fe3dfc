//! # Title Editing
//!
//! View/edit state machine for the document title.
//!
//! ```text
//!            start_edit(committed)
//!  Viewing ─────────────────────────▶ Editing
//!     ▲                                  │
//!     │   save() Ok + finish_edit()      │  save() Err(Empty): stays
//!     └──────────────────────────────────┤
//!     │   cancel(committed)              │
//!     └──────────────────────────────────┘
//! ```
//!
//! The committed title belongs to the parent. The editor only holds a
//! temporary buffer, so the parent sees a new title only when a save goes
//! through, never per keystroke.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleError {
    /// Buffer is empty or whitespace only.
    Empty,
}

impl fmt::Display for TitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleError::Empty => write!(f, "Title cannot be empty"),
        }
    }
}

impl std::error::Error for TitleError {}

/// Edits applied to the buffer while the title input is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleEdit {
    /// Replace the whole buffer (cursor moves to the end).
    SetText(String),
    InsertChar(char),
    InsertStr(String),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

#[derive(Debug, Clone, Default)]
pub struct TitleEditor {
    editing: bool,
    buffer: String,
    /// Byte offset into `buffer`, always on a char boundary.
    cursor: usize,
}

impl TitleEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Viewing → Editing. The buffer starts as a copy of the committed title.
    pub fn start_edit(&mut self, committed: &str) {
        self.buffer = committed.to_string();
        self.cursor = self.buffer.len();
        self.editing = true;
    }

    /// Validate the buffer for saving. Returns the raw buffer (untrimmed) on
    /// success; the caller commits it and then calls [`finish_edit`].
    ///
    /// [`finish_edit`]: TitleEditor::finish_edit
    pub fn save(&self) -> Result<String, TitleError> {
        if self.buffer.trim().is_empty() {
            return Err(TitleError::Empty);
        }
        Ok(self.buffer.clone())
    }

    /// Editing → Viewing after a successful save.
    pub fn finish_edit(&mut self) {
        self.editing = false;
    }

    /// Discard the buffer and go back to Viewing.
    pub fn cancel(&mut self, committed: &str) {
        self.buffer = committed.to_string();
        self.cursor = self.buffer.len();
        self.editing = false;
    }

    /// Apply a buffer edit. Returns false when nothing changed (including any
    /// edit attempted while not editing).
    pub fn apply(&mut self, edit: TitleEdit) -> bool {
        if !self.editing {
            return false;
        }
        match edit {
            TitleEdit::SetText(text) => {
                self.buffer = single_line(&text);
                self.cursor = self.buffer.len();
                true
            }
            TitleEdit::InsertChar(c) => {
                if c == '\n' || c == '\r' {
                    return false;
                }
                self.buffer.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                true
            }
            TitleEdit::InsertStr(text) => {
                let text = single_line(&text);
                if text.is_empty() {
                    return false;
                }
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                true
            }
            TitleEdit::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                true
            }
            TitleEdit::Delete => {
                if self.cursor >= self.buffer.len() {
                    return false;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                true
            }
            TitleEdit::Left => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                true
            }
            TitleEdit::Right => {
                if self.cursor >= self.buffer.len() {
                    return false;
                }
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                true
            }
            TitleEdit::Home => (self.cursor != 0).then(|| self.cursor = 0).is_some(),
            TitleEdit::End => {
                let end = self.buffer.len();
                (self.cursor != end).then(|| self.cursor = end).is_some()
            }
        }
    }
}

/// Titles are one line; pasted newlines become spaces.
fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
