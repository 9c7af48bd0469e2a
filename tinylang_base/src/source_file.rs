//! Contains the source buffer that the compiler reads from and the types pointing into it.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    fs::File,
    hash::{Hash, Hasher},
    iter::Peekable,
    path::PathBuf,
    str::CharIndices,
    sync::Arc,
};

use getset::{CopyGetters, Getters};
use memmap::{Mmap, MmapOptions};
use ouroboros::self_referencing;
use thiserror::Error;

/// Represents an error that occurs when loading/creating a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Utf8Error(#[from] std::str::Utf8Error),
}

/// Is an unsigned integer that represents a byte offset into the source code.
pub type ByteIndex = usize;

#[self_referencing]
struct MappedContent {
    mapping: Option<Mmap>,

    #[borrows(mapping)]
    text: &'this str,
}

impl MappedContent {
    fn map(file: &File) -> Result<Self, Error> {
        // an empty file cannot be mapped
        let mapping = if file.metadata()?.len() == 0 {
            None
        } else {
            Some(unsafe { MmapOptions::new().map(file)? })
        };

        MappedContentTryBuilder {
            mapping,
            text_builder: |mapping| {
                mapping
                    .as_deref()
                    .map_or(Ok(""), std::str::from_utf8)
                    .map_err(Error::from)
            },
        }
        .try_build()
    }

    fn text(&self) -> &str { self.borrow_text() }
}

/// Represents a read-only tinylang source buffer.
///
/// The content is memory mapped and never changes after loading, so every [`Span`] and every
/// borrowed token text stays valid for as long as the [`SourceFile`] is alive.
#[derive(Getters)]
pub struct SourceFile {
    content: MappedContent,

    /// Gets the full path to the source file, which identifies the compilation unit.
    #[get = "pub"]
    full_path: PathBuf,

    /// The byte index at which each line starts; the first entry is always `0`.
    line_starts: Vec<ByteIndex>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("full_path", &self.full_path)
            .field("line_starts", &self.line_starts)
            .finish_non_exhaustive()
    }
}

impl SourceFile {
    /// Loads the source file from an already opened file handle.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when mapping the file to memory.
    /// - [`Error::Utf8Error`]: The file content is not valid UTF-8.
    pub fn load(file: File, full_path: PathBuf) -> Result<Arc<Self>, Error> {
        let content = MappedContent::map(&file)?;
        let line_starts = line_starts(content.text());

        Ok(Arc::new(Self {
            content,
            full_path,
            line_starts,
        }))
    }

    /// Opens and loads the source file at the given path.
    ///
    /// # Errors
    /// See [`SourceFile::load`].
    pub fn open(full_path: impl Into<PathBuf>) -> Result<Arc<Self>, Error> {
        let full_path = full_path.into();
        let file = File::open(&full_path)?;
        Self::load(file, full_path)
    }

    /// Creates a temporary source file containing the given displayable object.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating, writing to, or mapping the temporary
    ///   file.
    /// - [`Error::Utf8Error`]: The written content is not valid UTF-8.
    pub fn temp(display: impl Display) -> Result<Arc<Self>, Error> {
        use std::io::Write;

        let mut tempfile = tempfile::Builder::new()
            .prefix("tinylang")
            .suffix(".mod")
            .tempfile()?;

        write!(tempfile.as_file_mut(), "{display}")?;
        tempfile.as_file_mut().flush()?;
        let full_path = tempfile.path().to_owned();

        Self::load(tempfile.into_file(), full_path)
    }

    /// Gets the whole text of the source file.
    #[must_use]
    pub fn content(&self) -> &str { self.content.text() }

    /// Gets the number of lines in the source file.
    #[must_use]
    pub fn line_count(&self) -> usize { self.line_starts.len() }

    /// Gets the text of the given line, including its line terminator.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or_else(|| self.content().len());

        Some(&self.content()[start..end])
    }

    /// Resolves the given byte index into a line and column [`Location`].
    ///
    /// The index one past the last byte resolves too, so the end of input has a location.
    /// Returns [`None`] if the index is out of bounds or not on a character boundary.
    #[must_use]
    pub fn get_location(&self, byte_index: ByteIndex) -> Option<Location> {
        let content = self.content();
        if !content.is_char_boundary(byte_index) {
            return None;
        }

        let line = self
            .line_starts
            .partition_point(|start| *start <= byte_index);
        let line_start = self.line_starts[line - 1];

        // columns count characters, not bytes
        let column = content[line_start..byte_index].chars().count() + 1;

        Some(Location { line, column })
    }

    /// Gets a [`Cursor`] positioned at the start of the source file.
    #[must_use]
    pub fn cursor<'a>(self: &'a Arc<Self>) -> Cursor<'a> {
        Cursor {
            source_file: self,
            chars: self.content().char_indices().peekable(),
        }
    }
}

/// Is a struct pointing to a particular line and column in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// The line number of the location (starts at 1).
    pub line: usize,

    /// The column number of the location in characters (starts at 1).
    pub column: usize,
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Represents a `[start, end)` byte range of a source file.
#[derive(Clone, Getters, CopyGetters)]
pub struct Span {
    /// Gets the start byte index of the span.
    #[get_copy = "pub"]
    start: ByteIndex,

    /// Gets the end byte index of the span (exclusive).
    #[get_copy = "pub"]
    end: ByteIndex,

    /// Gets the source file that the span is located in.
    #[get = "pub"]
    source_file: Arc<SourceFile>,
}

impl Span {
    /// Creates a span from the given start and end byte indices in the source file.
    ///
    /// Returns [`None`] if the range is reversed, out of bounds, or splits a character.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>, start: ByteIndex, end: ByteIndex) -> Option<Self> {
        let content = source_file.content();
        if start > end || !content.is_char_boundary(start) || !content.is_char_boundary(end) {
            return None;
        }

        Some(Self {
            start,
            end,
            source_file,
        })
    }

    /// Creates an empty span located at the end of the source file.
    #[must_use]
    pub fn at_end(source_file: Arc<SourceFile>) -> Self {
        let end = source_file.content().len();

        Self {
            start: end,
            end,
            source_file,
        }
    }

    /// Gets the source text that the span covers.
    #[must_use]
    pub fn str(&self) -> &str { &self.source_file.content()[self.start..self.end] }

    /// Gets the number of bytes the span covers.
    #[must_use]
    pub fn len(&self) -> usize { self.end - self.start }

    /// Checks whether the span covers no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.start == self.end }

    /// Gets the [`Location`] of the first character of the span.
    #[must_use]
    pub fn start_location(&self) -> Option<Location> { self.source_file.get_location(self.start) }

    /// Gets the [`Location`] just past the last character of the span.
    #[must_use]
    pub fn end_location(&self) -> Option<Location> { self.source_file.get_location(self.end) }

    /// Joins the start of this span with the end of the given span.
    ///
    /// Returns [`None`] if the spans belong to different source files or are out of order.
    #[must_use]
    pub fn join(&self, end: &Self) -> Option<Self> {
        if !Arc::ptr_eq(&self.source_file, &end.source_file) || self.start > end.end {
            return None;
        }

        Some(Self {
            start: self.start,
            end: end.end,
            source_file: self.source_file.clone(),
        })
    }

    fn key(&self) -> (usize, ByteIndex, ByteIndex) {
        (
            Arc::as_ptr(&self.source_file) as usize,
            self.start,
            self.end,
        )
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("content", &self.str())
            .finish()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool { self.key() == other.key() }
}

impl Eq for Span {}

impl PartialOrd for Span {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Span {
    fn cmp(&self, other: &Self) -> Ordering { self.key().cmp(&other.key()) }
}

impl Hash for Span {
    fn hash<H: Hasher>(&self, state: &mut H) { self.key().hash(state); }
}

/// Represents an element that is located within a source file.
pub trait SourceElement {
    /// Gets the span location of the element.
    fn span(&self) -> Span;
}

/// Is a forward-only cursor over the characters of a source file with one character of
/// lookahead.
#[derive(Debug, Clone, CopyGetters)]
pub struct Cursor<'a> {
    /// Gets the source file that the cursor walks over.
    #[get_copy = "pub"]
    source_file: &'a Arc<SourceFile>,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Cursor<'a> {
    /// Peeks at the next character without consuming it.
    pub fn peek(&mut self) -> Option<(ByteIndex, char)> { self.chars.peek().copied() }

    /// Gets the byte index of the next character, or the content length at the end of input.
    pub fn position(&mut self) -> ByteIndex {
        match self.peek() {
            Some((index, _)) => index,
            None => self.source_file.content().len(),
        }
    }

    /// Consumes the next character if it equals `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        self.chars
            .next_if(|&(_, character)| character == expected)
            .is_some()
    }

    /// Consumes characters as long as the predicate holds.
    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self
            .chars
            .next_if(|&(_, character)| predicate(character))
            .is_some()
        {}
    }
}

impl<'a> std::iter::Iterator for Cursor<'a> {
    type Item = (ByteIndex, char);

    fn next(&mut self) -> Option<Self::Item> { self.chars.next() }
}

fn line_starts(text: &str) -> Vec<ByteIndex> {
    let bytes = text.as_bytes();

    std::iter::once(0)
        .chain(
            bytes
                .iter()
                .enumerate()
                .filter_map(|(index, byte)| match byte {
                    b'\n' => Some(index + 1),
                    // a lone carriage return ends a line, crlf ends at the lf
                    b'\r' if bytes.get(index + 1) != Some(&b'\n') => Some(index + 1),
                    _ => None,
                }),
        )
        .collect()
}

#[cfg(test)]
mod tests;
