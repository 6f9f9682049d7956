//! Rendering configuration.
//!
//! [`RenderStyle`] controls the two marker characters used when projecting
//! a buffer to a string: the cursor marker and the line separator.

/// Configuration for buffer snapshots.
///
/// The defaults match the notation used throughout the tests: `|` marks
/// the cursor and `\n` separates lines, so an empty buffer renders as
/// `"|"`.
///
/// # Example
///
/// ```
/// use linebuf::buffer::LineBuffer;
/// use linebuf::style::RenderStyle;
///
/// let buf = LineBuffer::from_text("ab\ncd");
/// let style = RenderStyle::new().with_cursor_marker('^').with_line_separator('/');
/// assert_eq!(buf.render_with(style), "^ab/cd");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    /// Character inserted at the cursor position.
    pub cursor_marker: char,
    /// Character placed between lines.
    pub line_separator: char,
}

impl RenderStyle {
    /// Create the default style: `|` cursor marker, `\n` line separator.
    pub const fn new() -> Self {
        Self {
            cursor_marker: '|',
            line_separator: '\n',
        }
    }

    /// Use a different cursor marker.
    #[must_use]
    pub const fn with_cursor_marker(mut self, marker: char) -> Self {
        self.cursor_marker = marker;
        self
    }

    /// Use a different line separator.
    #[must_use]
    pub const fn with_line_separator(mut self, separator: char) -> Self {
        self.line_separator = separator;
        self
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::new()
    }
}
