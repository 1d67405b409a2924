use crate::error::{ErrorKind, ParseError, Position};
use crate::util::preview;

/// Immutable position-tracked view over remaining input.
///
/// A cursor is a cheap `Copy` value; every successful read produces a new
/// cursor over the suffix and leaves the original untouched. Backtracking is
/// therefore free: a failed branch simply drops its cursor and the caller
/// retries from an earlier one.
#[derive(Debug, Clone, Copy)]
pub struct CharCursor<'src> {
    rest: &'src str,
    line: usize,
    column: usize,
}

impl<'src> CharCursor<'src> {
    pub fn new(input: &'src str) -> Self {
        CharCursor {
            rest: input,
            line: 1,
            column: 1,
        }
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'src str {
        self.rest
    }

    pub fn is_at_end(&self) -> bool {
        self.rest.is_empty()
    }

    /// Current 1-based line/column position.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Consume exactly `count` characters.
    ///
    /// Returns the consumed prefix and a cursor over the suffix, with the
    /// position advanced across any newlines in the prefix. `read(0)` always
    /// succeeds with an empty prefix and the identical remainder. Fails with
    /// `NotEnoughInput` when fewer than `count` characters remain; since the
    /// cursor is unaffected by a failed read, all remaining content stays
    /// available to the caller.
    pub fn read(self, count: usize) -> Result<(&'src str, Self), ParseError> {
        let mut line = self.line;
        let mut column = self.column;
        let mut consumed = 0;
        let mut end = self.rest.len();

        for (index, ch) in self.rest.char_indices() {
            if consumed == count {
                end = index;
                break;
            }
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
            consumed += 1;
        }

        if consumed < count {
            return Err(self.get_error(
                ErrorKind::NotEnoughInput,
                format!(
                    "expected at least {} char(s) in \"{}\"",
                    count,
                    preview(self.rest)
                ),
            ));
        }

        Ok((
            &self.rest[..end],
            CharCursor {
                rest: &self.rest[end..],
                line,
                column,
            },
        ))
    }

    /// Consume all remaining characters.
    ///
    /// Fails with `NotEnoughInput` when nothing remains.
    pub fn read_all(self) -> Result<(&'src str, Self), ParseError> {
        if self.rest.is_empty() {
            return Err(self.get_error(ErrorKind::NotEnoughInput, "no input remaining"));
        }

        let mut line = self.line;
        let mut column = self.column;
        for ch in self.rest.chars() {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }

        Ok((
            self.rest,
            CharCursor {
                rest: &self.rest[self.rest.len()..],
                line,
                column,
            },
        ))
    }

    /// Consume a single character.
    pub fn read_char(self) -> Result<(char, Self), ParseError> {
        match self.rest.chars().next() {
            Some(ch) => {
                let (line, column) = if ch == '\n' {
                    (self.line + 1, 1)
                } else {
                    (self.line, self.column + 1)
                };
                Ok((
                    ch,
                    CharCursor {
                        rest: &self.rest[ch.len_utf8()..],
                        line,
                        column,
                    },
                ))
            }
            None => Err(self.get_error(
                ErrorKind::NotEnoughInput,
                "expected at least 1 char(s) in \"\"",
            )),
        }
    }

    /// Build a `ParseError` annotated with this cursor's current position,
    /// for uniform diagnostics across all combinators.
    pub fn get_error(&self, kind: ErrorKind, message: impl Into<String>) -> ParseError {
        ParseError::new(kind, message, Some(self.position()))
    }
}

/// Two cursors are equal iff their remaining content is equal; the position
/// is derived metadata, used for error reporting but not identity.
impl PartialEq for CharCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.rest == other.rest
    }
}

impl Eq for CharCursor<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_splits_prefix_and_remainder() {
        let cursor = CharCursor::new("arst");
        let (prefix, rest) = cursor.read(3).unwrap();
        assert_eq!(prefix, "ars");
        assert_eq!(rest.rest(), "t");
    }

    #[test]
    fn test_read_concat_equals_original() {
        let input = "hello world";
        for n in 0..=input.len() {
            let cursor = CharCursor::new(input);
            let (prefix, rest) = cursor.read(n).unwrap();
            assert_eq!(format!("{}{}", prefix, rest.rest()), input);
        }
    }

    #[test]
    fn test_read_zero_is_identity() {
        let cursor = CharCursor::new("arst");
        let (prefix, rest) = cursor.read(0).unwrap();
        assert_eq!(prefix, "");
        assert_eq!(rest, cursor);
        assert_eq!(rest.position(), cursor.position());
    }

    #[test]
    fn test_read_zero_succeeds_on_empty_input() {
        let cursor = CharCursor::new("");
        let (prefix, rest) = cursor.read(0).unwrap();
        assert_eq!(prefix, "");
        assert!(rest.is_at_end());
    }

    #[test]
    fn test_read_too_much_fails() {
        let cursor = CharCursor::new("arst");
        let error = cursor.read(10).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotEnoughInput);
        // Failed read leaves the cursor usable.
        assert_eq!(cursor.rest(), "arst");
    }

    #[test]
    fn test_read_tracks_columns() {
        let cursor = CharCursor::new("abcdef");
        let (_, rest) = cursor.read(4).unwrap();
        assert_eq!(rest.position(), Position::new(1, 5));
    }

    #[test]
    fn test_read_tracks_newlines() {
        let cursor = CharCursor::new("ab\ncd\nef");
        let (_, rest) = cursor.read(7).unwrap();
        assert_eq!(rest.position(), Position::new(3, 2));
    }

    #[test]
    fn test_read_ending_in_newline_resets_column() {
        let cursor = CharCursor::new("ab\ncd");
        let (prefix, rest) = cursor.read(3).unwrap();
        assert_eq!(prefix, "ab\n");
        assert_eq!(rest.position(), Position::new(2, 1));
    }

    #[test]
    fn test_read_multibyte_chars() {
        let cursor = CharCursor::new("héllo");
        let (prefix, rest) = cursor.read(2).unwrap();
        assert_eq!(prefix, "hé");
        assert_eq!(rest.rest(), "llo");
        assert_eq!(rest.position(), Position::new(1, 3));
    }

    #[test]
    fn test_read_all() {
        let cursor = CharCursor::new("ab\ncd");
        let (content, rest) = cursor.read_all().unwrap();
        assert_eq!(content, "ab\ncd");
        assert!(rest.is_at_end());
        assert_eq!(rest.position(), Position::new(2, 3));
    }

    #[test]
    fn test_read_all_empty_fails() {
        let cursor = CharCursor::new("");
        let error = cursor.read_all().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotEnoughInput);
    }

    #[test]
    fn test_read_char() {
        let cursor = CharCursor::new("\nx");
        let (ch, rest) = cursor.read_char().unwrap();
        assert_eq!(ch, '\n');
        assert_eq!(rest.position(), Position::new(2, 1));

        let (ch, rest) = rest.read_char().unwrap();
        assert_eq!(ch, 'x');
        assert!(rest.is_at_end());
    }

    #[test]
    fn test_equality_ignores_position() {
        let a = CharCursor::new("xy\nrest");
        let (_, a) = a.read(3).unwrap();
        let b = CharCursor::new("rest");
        assert_eq!(a, b);
        assert_ne!(a.position(), b.position());
    }

    #[test]
    fn test_get_error_carries_position() {
        let cursor = CharCursor::new("a\nbc");
        let (_, rest) = cursor.read(3).unwrap();
        let error = rest.get_error(ErrorKind::ImproperInput, "bad content");
        assert_eq!(error.position(), Some(Position::new(2, 2)));
        assert_eq!(error.to_string(), "at line 2, col 2: bad content");
    }

    #[test]
    fn test_copy_independence() {
        let cursor = CharCursor::new("abcd");
        let saved = cursor;
        let (_, advanced) = cursor.read(2).unwrap();
        assert_eq!(saved.rest(), "abcd");
        assert_eq!(advanced.rest(), "cd");
    }
}
