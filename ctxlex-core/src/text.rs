//! Text input with line metadata
//!
//! Offsets into the content are 0-based byte indices. Line and column numbers
//! are 1-based, columns counting characters.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// A span of text as a starting byte index and a byte length
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextSpan {
    pub index: usize,
    pub length: usize,
}

impl TextSpan {
    pub fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }

    /// Byte index just past the span, saturating at `usize::MAX`
    pub fn end(&self) -> usize {
        self.index.saturating_add(self.length)
    }
}

impl PartialOrd for TextSpan {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TextSpan {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index
            .cmp(&other.index)
            .then(self.length.cmp(&other.length))
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}+{}", self.index, self.length)
    }
}

/// A line and column in a text input
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextPosition {
    pub line: usize,
    pub column: usize,
}

impl TextPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl PartialOrd for TextPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TextPosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then(self.column.cmp(&other.column))
    }
}

impl fmt::Display for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.column)
    }
}

/// A line of text and a caret pointer under a span of it
///
/// ```text
/// content = "let value = 12"
/// pointer = "    ^^^^^"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextContext<'a> {
    pub content: &'a str,
    pub pointer: String,
}

impl fmt::Display for TextContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.content, self.pointer)
    }
}

/// Lexer input with cached line starts
#[derive(Debug, Clone)]
pub struct Text<'a> {
    content: Cow<'a, str>,
    lines: Vec<usize>,
}

impl<'a> Text<'a> {
    pub fn new(content: &'a str) -> Self {
        let lines = line_starts(content);
        Self {
            content: Cow::Borrowed(content),
            lines,
        }
    }

    pub fn from_string(content: String) -> Text<'static> {
        let lines = line_starts(&content);
        Text {
            content: Cow::Owned(content),
            lines,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether `index` is at or past the end of the content
    pub fn is_end(&self, index: usize) -> bool {
        index >= self.content.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Content from `index` to the end
    pub fn tail(&self, index: usize) -> &str {
        self.content.get(index..).unwrap_or_default()
    }

    /// Content covered by a span, or `None` if the span is out of bounds or
    /// not on character boundaries
    pub fn value(&self, span: TextSpan) -> Option<&str> {
        self.content.get(span.index..span.end())
    }

    /// Byte index where a 1-based line starts
    pub fn line_index(&self, line: usize) -> Option<usize> {
        line.checked_sub(1).and_then(|i| self.lines.get(i)).copied()
    }

    /// Content of a 1-based line, including its terminator
    pub fn line_content(&self, line: usize) -> Option<&str> {
        let start = self.line_index(line)?;
        let end = self.line_index(line + 1).unwrap_or(self.content.len());
        self.content.get(start..end)
    }

    /// Position of a byte index; indices past the end map to the end
    pub fn position_at(&self, index: usize) -> TextPosition {
        let index = index.min(self.content.len());
        let line = self.lines.partition_point(|&start| start <= index) - 1;
        let start = self.lines[line];
        let column = self
            .content
            .get(start..index)
            .map_or(index - start, |prefix| prefix.chars().count());
        TextPosition::new(line + 1, column + 1)
    }

    /// Line context with carets under the part of `span` that lies on its
    /// first line
    pub fn context_of(&self, span: TextSpan) -> TextContext<'_> {
        let position = self.position_at(span.index);
        let line_start = self.lines[position.line - 1];
        let content = self
            .line_content(position.line)
            .unwrap_or_default()
            .trim_end_matches(is_line_ending_char);
        let from = span.index.min(self.content.len()) - line_start;
        let to = span.end().min(line_start + content.len()).max(line_start + from) - line_start;
        let carets = content
            .get(from..to)
            .map(|covered| covered.chars().count())
            .unwrap_or_default()
            .max(1);

        let mut pointer = " ".repeat(position.column - 1);
        pointer.push_str(&"^".repeat(carets));
        TextContext { content, pointer }
    }
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(content: &'a str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Text<'static> {
    fn from(content: String) -> Self {
        Text::from_string(content)
    }
}

fn is_line_ending_char(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Byte indices at which each line starts.
/// `\r\n` counts as a single terminator.
fn line_starts(content: &str) -> Vec<usize> {
    let mut starts = vec![0];
    let mut chars = content.char_indices().peekable();
    while let Some((offset, c)) = chars.next() {
        if !is_line_ending_char(c) {
            continue;
        }
        if c == '\r' && matches!(chars.peek(), Some(&(_, '\n'))) {
            chars.next();
            starts.push(offset + 2);
        } else {
            starts.push(offset + c.len_utf8());
        }
    }
    starts
}
