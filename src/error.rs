use std::error::Error;
use std::fmt;

/// Discriminant for the two kinds of parse failure.
///
/// `NotEnoughInput` is structural: the remaining input was too short for a
/// fixed-width request. `ImproperInput` is semantic: content was present but
/// rejected by a predicate, literal match or compound rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotEnoughInput,
    ImproperInput,
}

/// A 1-based line/column position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, col {}", self.line, self.column)
    }
}

/// Error returned by every failing parse.
///
/// Compound combinators catch these wholesale and either re-raise a summary
/// (`Sequence`, `Alternatives`) or substitute a default outcome (`Optional`);
/// callers can still distinguish the two kinds through `kind()`. The position
/// is present when the error was produced by a position-tracking source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrorKind,
    message: String,
    position: Option<Position>,
}

impl ParseError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, position: Option<Position>) -> Self {
        ParseError {
            kind,
            message: message.into(),
            position,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "at {}: {}", pos, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_position() {
        let error = ParseError::new(
            ErrorKind::ImproperInput,
            "condition not met",
            Some(Position::new(3, 7)),
        );
        assert_eq!(error.to_string(), "at line 3, col 7: condition not met");
    }

    #[test]
    fn test_display_without_position() {
        let error = ParseError::new(ErrorKind::NotEnoughInput, "end of stream reached", None);
        assert_eq!(error.to_string(), "end of stream reached");
    }

    #[test]
    fn test_kind_is_preserved() {
        let error = ParseError::new(ErrorKind::NotEnoughInput, "too short", None);
        assert_eq!(error.kind(), ErrorKind::NotEnoughInput);

        let error = ParseError::new(ErrorKind::ImproperInput, "rejected", None);
        assert_eq!(error.kind(), ErrorKind::ImproperInput);
    }
}
