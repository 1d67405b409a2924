//! Buffered, rewindable character sources for non-string input.
//!
//! Streams are collaborators of the core, not parsers: they materialize
//! content for cursor construction and support explicit rewinding. Unlike a
//! cursor, reading from a stream is destructive, so failed reads re-queue
//! the consumed content and also report it in the error.

use crate::error::{ErrorKind, ParseError, Position};
use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

/// Failure of a stream operation, carrying the partial content involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// Fewer characters remained than requested. The partial content has
    /// been re-queued and is reported here as well.
    EndOfStream { partial: String },
    /// A rewind reached past the earliest retained content; `partial` is
    /// what could still have been rewound. Nothing was rewound.
    BeginningOfStream { partial: String },
}

impl StreamError {
    pub fn partial(&self) -> &str {
        match self {
            StreamError::EndOfStream { partial } => partial,
            StreamError::BeginningOfStream { partial } => partial,
        }
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::EndOfStream { .. } => write!(f, "end of stream reached"),
            StreamError::BeginningOfStream { .. } => write!(f, "beginning of stream reached"),
        }
    }
}

impl Error for StreamError {}

/// Buffered character stream over any char source, with push-back.
pub struct Stream<I> {
    source: I,
    queued: VecDeque<char>,
}

impl<I> Stream<I>
where
    I: Iterator<Item = char>,
{
    pub fn new(source: I) -> Self {
        Stream {
            source,
            queued: VecDeque::new(),
        }
    }

    /// Push content back to the front of the stream, to be read again in
    /// its original order.
    pub fn put(&mut self, content: &str) {
        for ch in content.chars().rev() {
            self.queued.push_front(ch);
        }
    }

    fn next_char(&mut self) -> Option<char> {
        self.queued.pop_front().or_else(|| self.source.next())
    }

    /// Read exactly `count` characters.
    ///
    /// When the stream runs out first, the partial content is re-queued and
    /// also carried in the error.
    pub fn read(&mut self, count: usize) -> Result<String, StreamError> {
        let mut result = String::new();
        let mut taken = 0;

        while taken < count {
            match self.next_char() {
                Some(ch) => {
                    result.push(ch);
                    taken += 1;
                }
                None => {
                    self.put(&result);
                    return Err(StreamError::EndOfStream { partial: result });
                }
            }
        }

        Ok(result)
    }

    /// Read all remaining characters; fails when nothing remains.
    pub fn read_all(&mut self) -> Result<String, StreamError> {
        let mut result: String = self.queued.drain(..).collect();
        result.extend(&mut self.source);

        if result.is_empty() {
            return Err(StreamError::EndOfStream {
                partial: String::new(),
            });
        }

        Ok(result)
    }
}

impl<'a> Stream<std::str::Chars<'a>> {
    pub fn from_str(content: &'a str) -> Self {
        Stream::new(content.chars())
    }
}

/// Stream with position tracking and bounded rewinding.
///
/// Every read is remembered, so previously read content can be "ungotten"
/// back onto the stream; rewinding exactly reverses both content and the
/// line/column position.
pub struct ScrollingStream<I> {
    stream: Stream<I>,
    line: usize,
    column: usize,
    line_columns: Vec<usize>,
    consumed: Vec<char>,
}

impl<I> ScrollingStream<I>
where
    I: Iterator<Item = char>,
{
    pub fn new(source: I) -> Self {
        ScrollingStream {
            stream: Stream::new(source),
            line: 1,
            column: 1,
            line_columns: Vec::new(),
            consumed: Vec::new(),
        }
    }

    fn advance(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line_columns.push(self.column);
                self.column = 1;
                self.line += 1;
            } else {
                self.column += 1;
            }
            self.consumed.push(ch);
        }
    }

    /// Read exactly `count` characters, advancing the position.
    pub fn read(&mut self, count: usize) -> Result<String, StreamError> {
        let text = self.stream.read(count)?;
        self.advance(&text);
        Ok(text)
    }

    /// Read all remaining characters, advancing the position.
    pub fn read_all(&mut self) -> Result<String, StreamError> {
        let text = self.stream.read_all()?;
        self.advance(&text);
        Ok(text)
    }

    /// Rewind the last `count` characters back onto the stream, restoring
    /// the position they were read at.
    ///
    /// Fails with `BeginningOfStream` when fewer than `count` characters
    /// have been read; nothing is rewound in that case.
    pub fn unget(&mut self, count: usize) -> Result<(), StreamError> {
        if count > self.consumed.len() {
            return Err(StreamError::BeginningOfStream {
                partial: self.consumed.iter().collect(),
            });
        }

        let ungotten = self.consumed.split_off(self.consumed.len() - count);
        let text: String = ungotten.iter().collect();
        self.stream.put(&text);

        // Reverse position updates newest-first so each newline restores
        // the column recorded when it was read.
        for ch in ungotten.iter().rev() {
            if *ch == '\n' {
                self.column = self.line_columns.pop().unwrap_or(1);
                self.line -= 1;
            } else {
                self.column -= 1;
            }
        }

        Ok(())
    }

    /// Rewind everything read so far; fails when nothing has been read.
    pub fn unget_all(&mut self) -> Result<(), StreamError> {
        if self.consumed.is_empty() {
            return Err(StreamError::BeginningOfStream {
                partial: String::new(),
            });
        }
        self.unget(self.consumed.len())
    }

    /// Read `count` characters and immediately rewind them.
    pub fn peek(&mut self, count: usize) -> Result<String, StreamError> {
        let text = self.read(count)?;
        self.unget(text.chars().count())?;
        Ok(text)
    }

    /// Current 1-based line/column position.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Build a `ParseError` annotated with this stream's current position.
    pub fn get_error(&self, kind: ErrorKind, message: impl Into<String>) -> ParseError {
        ParseError::new(kind, message, Some(self.position()))
    }
}

impl<'a> ScrollingStream<std::str::Chars<'a>> {
    pub fn from_str(content: &'a str) -> Self {
        ScrollingStream::new(content.chars())
    }
}
