// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. cursor::Cursor)
    clippy::module_name_repetitions
)]

//! # Linebuf
//!
//! A line-oriented text editing buffer with cursor tracking.
//!
//! [`LineBuffer`](buffer::LineBuffer) owns an ordered sequence of lines and
//! a `(line, column)` cursor, and keeps both consistent under:
//! - Character and string insertion
//! - Line splitting (Enter) and line merging (Backspace/Delete at a line
//!   boundary)
//! - Four-directional cursor movement, plus home/end, word and absolute
//!   moves
//!
//! Every operation is total: boundary cases (backspace at the start of the
//! document, movement at the document edges) are documented no-ops, never
//! errors. The buffer always holds at least one line, and after every
//! operation the cursor points inside the buffer.
//!
//! The crate is a pure in-memory data structure: no I/O, no threads, no
//! interior mutability. A driving harness feeds it operations and observes
//! state through [`render`](buffer::LineBuffer::render), which projects
//! the buffer to a string with a `|` marking the cursor:
//!
//! ```
//! use linebuf::buffer::LineBuffer;
//! use linebuf::cursor::Direction;
//!
//! let mut buf = LineBuffer::new();
//! assert_eq!(buf.render(), "|");
//!
//! buf.insert_str("hello");
//! buf.insert_line_break();
//! buf.insert_char('w');
//! assert_eq!(buf.render(), "hello\nw|");
//!
//! buf.move_cursor(Direction::Up);
//! assert_eq!(buf.render(), "h|ello\nw");
//! ```
//!
//! ## Modules
//!
//! - [`buffer`]: The [`LineBuffer`](buffer::LineBuffer) core
//! - [`cursor`]: Cursor position and movement direction types
//! - [`style`]: Rendering configuration

pub mod buffer;
pub mod cursor;
pub mod style;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::buffer::LineBuffer;
    pub use crate::cursor::{Cursor, Direction, ParseDirectionError};
    pub use crate::style::RenderStyle;
}
