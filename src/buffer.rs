//! Rope-backed line buffer with cursor tracking.
//!
//! [`LineBuffer`] owns an ordered sequence of lines and a cursor position,
//! and keeps both consistent under character insertion, line splitting,
//! deletion with line merging, and four-directional cursor movement.
//! Every operation is total: boundary cases are documented no-ops, never
//! errors.

use std::borrow::Cow;
use std::fmt;

use ropey::Rope;
use tracing::trace;

use crate::cursor::{Cursor, Direction};
use crate::style::RenderStyle;

/// A text buffer backed by a rope, with cursor tracking.
///
/// The buffer always contains at least one line: an empty document is a
/// single empty line, never zero lines. Columns are character offsets
/// within a line, from 0 (before the first character) to the line length
/// (after the last character). After every operation the cursor satisfies
/// `cursor.line < line_count()` and `cursor.col <= line_len(cursor.line)`.
///
/// Internally lines are separated by `\n` only; construction and string
/// insertion normalize CRLF, lone CR and the Unicode line-break characters
/// to `\n` (see [`LineBuffer::from_text`]).
///
/// # Example
///
/// ```
/// use linebuf::buffer::LineBuffer;
/// use linebuf::cursor::Direction;
///
/// let mut buf = LineBuffer::new();
/// buf.insert_char('a');
/// buf.insert_char('b');
/// buf.move_cursor(Direction::Left);
/// assert_eq!(buf.render(), "a|b");
/// ```
pub struct LineBuffer {
    rope: Rope,
    cursor: Cursor,
    dirty: bool,
}

impl LineBuffer {
    /// Create an empty buffer: one empty line, cursor at (0, 0).
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: Cursor::new(),
            dirty: false,
        }
    }

    /// Create a buffer from existing text, cursor at (0, 0).
    ///
    /// Line endings are normalized: `\r\n`, lone `\r` and the Unicode
    /// line-break characters (VT, FF, NEL, LS, PS) all become `\n`, so
    /// that column arithmetic sees exactly one separator character per
    /// line break.
    pub fn from_text(text: &str) -> Self {
        let normalized = normalize_line_breaks(text);
        Self {
            rope: Rope::from_str(&normalized),
            cursor: Cursor::new(),
            dirty: false,
        }
    }

    // ==================== Observers ====================

    /// The current cursor position.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether the buffer has been modified since creation or the last
    /// [`mark_clean`](Self::mark_clean). Cursor movement never sets this.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g. after the embedder saves it).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// The content of a line, without its trailing separator.
    ///
    /// Returns `None` if `line_idx` is out of bounds.
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let mut line = self.rope.line(line_idx).to_string();
        if line.ends_with('\n') {
            line.pop();
        }
        Some(line)
    }

    /// Length of a line in characters, excluding its separator.
    ///
    /// Returns 0 if `line_idx` is out of bounds.
    pub fn line_len(&self, line_idx: usize) -> usize {
        if line_idx >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(line_idx);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Total character count across all lines, separators excluded.
    pub fn char_count(&self) -> usize {
        // Internal separators are exactly the `\n`s, one per line break.
        self.rope.len_chars() - (self.rope.len_lines() - 1)
    }

    /// Whether the buffer holds no characters at all (a single empty line).
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// The full text content, lines separated by `\n`.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    // ==================== Insertion ====================

    /// Insert a character at the cursor and advance the column by 1.
    ///
    /// Inserting a line-break character (`\n`, `\r`, or one of the Unicode
    /// break characters) is defined as [`insert_line_break`]: a separator
    /// cannot be stored "inside" a line.
    ///
    /// [`insert_line_break`]: Self::insert_line_break
    pub fn insert_char(&mut self, ch: char) {
        if is_line_break(ch) {
            self.insert_line_break();
            return;
        }
        let idx = self.cursor_char_idx();
        self.rope.insert_char(idx, ch);
        self.cursor.col += 1;
        self.dirty = true;
        trace!(%ch, cursor = %self.cursor, "inserted char");
        self.check_cursor_bounds();
    }

    /// Insert a string at the cursor position.
    ///
    /// Multi-line input splits lines; the cursor lands after the inserted
    /// text. Line endings are normalized as in [`from_text`](Self::from_text).
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let normalized = normalize_line_breaks(s);
        let idx = self.cursor_char_idx();
        self.rope.insert(idx, &normalized);

        let lines: Vec<&str> = normalized.split('\n').collect();
        if lines.len() > 1 {
            self.cursor.line += lines.len() - 1;
            self.cursor.col = lines.last().map_or(0, |l| l.chars().count());
        } else {
            self.cursor.col += normalized.chars().count();
        }
        self.dirty = true;
        trace!(chars = normalized.chars().count(), cursor = %self.cursor, "inserted string");
        self.check_cursor_bounds();
    }

    /// Split the current line at the cursor (Enter key).
    ///
    /// Text from the cursor column onward becomes a new line inserted
    /// immediately after the current one; the cursor moves to the start of
    /// that new line. The total character count is unchanged and the line
    /// count increases by exactly 1.
    pub fn insert_line_break(&mut self) {
        let idx = self.cursor_char_idx();
        self.rope.insert_char(idx, '\n');
        self.cursor.line += 1;
        self.cursor.col = 0;
        self.dirty = true;
        trace!(cursor = %self.cursor, "split line");
        self.check_cursor_bounds();
    }

    // ==================== Deletion ====================

    /// Delete the character before the cursor (Backspace).
    ///
    /// At column 0 of any line but the first, merges the current line onto
    /// the end of the previous one and places the cursor at the join
    /// point. At the very start of the document this is a no-op.
    ///
    /// Returns `true` if anything was deleted.
    pub fn backspace(&mut self) -> bool {
        if self.cursor.col == 0 && self.cursor.line == 0 {
            // Start of document: nothing before the cursor.
            return false;
        }

        let idx = self.cursor_char_idx();
        if self.cursor.col == 0 {
            // Join with previous line by removing its separator.
            let prev_len = self.line_len(self.cursor.line - 1);
            self.rope.remove(idx - 1..idx);
            self.cursor.line -= 1;
            self.cursor.col = prev_len;
            trace!(cursor = %self.cursor, "merged with previous line");
        } else {
            self.rope.remove(idx - 1..idx);
            self.cursor.col -= 1;
            trace!(cursor = %self.cursor, "deleted char before cursor");
        }
        self.dirty = true;
        self.check_cursor_bounds();
        true
    }

    /// Delete the character at the cursor (Delete key).
    ///
    /// At the end of a line, joins the next line onto the current one; at
    /// the very end of the document this is a no-op.
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_forward(&mut self) -> bool {
        let line_len = self.line_len(self.cursor.line);
        if self.cursor.col >= line_len && self.cursor.line + 1 >= self.line_count() {
            return false;
        }

        let idx = self.cursor_char_idx();
        self.rope.remove(idx..idx + 1);
        self.dirty = true;
        trace!(cursor = %self.cursor, "deleted char at cursor");
        self.check_cursor_bounds();
        true
    }

    // ==================== Cursor movement ====================

    /// Move the cursor one step in the given direction.
    ///
    /// `Left`/`Right` wrap around line breaks; `Up`/`Down` clamp the
    /// column to the target line's length. At the document extremes the
    /// move is a no-op: the cursor never wraps around the document and
    /// movement never changes content.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
        trace!(%direction, cursor = %self.cursor, "moved cursor");
        self.check_cursor_bounds();
    }

    /// Move the cursor to the beginning of the line (Home).
    pub const fn move_home(&mut self) {
        self.cursor.col = 0;
    }

    /// Move the cursor to the end of the line (End).
    pub fn move_end(&mut self) {
        self.cursor.col = self.line_len(self.cursor.line);
    }

    /// Move the cursor one word to the left.
    ///
    /// At column 0, moves to the end of the previous line like
    /// [`Direction::Left`] does.
    pub fn move_word_left(&mut self) {
        if self.cursor.col == 0 {
            if self.cursor.line > 0 {
                self.cursor.line -= 1;
                self.cursor.col = self.line_len(self.cursor.line);
            }
            return;
        }

        let line = self.line_at(self.cursor.line).unwrap_or_default();
        let before: Vec<char> = line.chars().take(self.cursor.col).collect();
        let mut pos = before.len();
        while pos > 0 && !is_word_char(before[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && is_word_char(before[pos - 1]) {
            pos -= 1;
        }
        self.cursor.col = pos;
    }

    /// Move the cursor one word to the right.
    ///
    /// At the end of a line, moves to the start of the next line like
    /// [`Direction::Right`] does.
    pub fn move_word_right(&mut self) {
        let line_len = self.line_len(self.cursor.line);
        if self.cursor.col >= line_len {
            if self.cursor.line + 1 < self.line_count() {
                self.cursor.line += 1;
                self.cursor.col = 0;
            }
            return;
        }

        let line = self.line_at(self.cursor.line).unwrap_or_default();
        let chars: Vec<char> = line.chars().collect();
        let mut pos = self.cursor.col;
        while pos < chars.len() && is_word_char(chars[pos]) {
            pos += 1;
        }
        while pos < chars.len() && !is_word_char(chars[pos]) {
            pos += 1;
        }
        self.cursor.col = pos;
    }

    /// Move the cursor to a specific line and column, clamped to bounds.
    pub fn move_to(&mut self, line: usize, col: usize) {
        let max_line = self.line_count().saturating_sub(1);
        self.cursor.line = line.min(max_line);
        let max_col = self.line_len(self.cursor.line);
        self.cursor.col = col.min(max_col);
    }

    /// Move the cursor to the start of the document.
    pub const fn move_to_start(&mut self) {
        self.cursor.line = 0;
        self.cursor.col = 0;
    }

    /// Move the cursor to the end of the document.
    pub fn move_to_end(&mut self) {
        let last_line = self.line_count().saturating_sub(1);
        self.cursor.line = last_line;
        self.cursor.col = self.line_len(last_line);
    }

    // ==================== Rendering ====================

    /// Render the buffer as a single string with the cursor marked.
    ///
    /// Lines are joined by `\n` and a `|` is inserted at the exact cursor
    /// position, so an empty buffer renders as `"|"`. This is a pure
    /// projection of current state; it never mutates.
    pub fn render(&self) -> String {
        self.render_with(RenderStyle::default())
    }

    /// Render with explicit marker characters.
    pub fn render_with(&self, style: RenderStyle) -> String {
        let cursor_idx = self.cursor_char_idx();
        let mut out = String::with_capacity(self.rope.len_bytes() + style.cursor_marker.len_utf8());
        for (idx, ch) in self.rope.chars().enumerate() {
            if idx == cursor_idx {
                out.push(style.cursor_marker);
            }
            out.push(if ch == '\n' { style.line_separator } else { ch });
        }
        if cursor_idx == self.rope.len_chars() {
            out.push(style.cursor_marker);
        }
        out
    }

    // ==================== Private helpers ====================

    /// The cursor position as a rope char index.
    fn cursor_char_idx(&self) -> usize {
        self.rope.line_to_char(self.cursor.line) + self.cursor.col
    }

    fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.line_len(self.cursor.line);
        }
    }

    fn move_right(&mut self) {
        if self.cursor.col < self.line_len(self.cursor.line) {
            self.cursor.col += 1;
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.col = 0;
        }
    }

    fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.line));
        }
    }

    fn move_down(&mut self) {
        if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.line));
        }
    }

    /// Debug-build check of the cursor invariants after a mutation.
    fn check_cursor_bounds(&self) {
        debug_assert!(
            self.cursor.line < self.line_count(),
            "cursor line {} out of bounds ({} lines)",
            self.cursor.line,
            self.line_count()
        );
        debug_assert!(
            self.cursor.col <= self.line_len(self.cursor.line),
            "cursor col {} past end of line {} (len {})",
            self.cursor.col,
            self.cursor.line,
            self.line_len(self.cursor.line)
        );
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineBuffer")
            .field("lines", &self.line_count())
            .field("chars", &self.char_count())
            .field("cursor", &self.cursor)
            .field("dirty", &self.dirty)
            .finish()
    }
}

/// True for every character the rope could treat as a line break.
const fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Normalize CRLF, lone CR and the Unicode break characters to `\n`.
fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|ch| ch != '\n' && is_line_break(ch)) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' && chars.peek() == Some(&'\n') {
            // CRLF collapses to the LF that follows.
            continue;
        }
        out.push(if is_line_break(ch) { '\n' } else { ch });
    }
    Cow::Owned(out)
}
