use crate::cursor::CharCursor;
use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;
use crate::util::preview;

/// Parser that matches exact content at the front of the input.
///
/// A fixed-width take specialized to an equality check.
pub struct Literal<'lit> {
    expected: &'lit str,
    count: usize,
}

impl<'lit> Literal<'lit> {
    /// # Panics
    ///
    /// Panics when `expected` is empty; a zero-width literal is meaningless.
    pub fn new(expected: &'lit str) -> Self {
        assert!(!expected.is_empty(), "Literal requires non-empty content");
        Literal {
            expected,
            count: expected.chars().count(),
        }
    }
}

impl<'src, 'lit> Parser<'src> for Literal<'lit> {
    type Output = &'src str;

    fn parse(
        &self,
        cursor: CharCursor<'src>,
    ) -> Result<(Self::Output, CharCursor<'src>), ParseError> {
        let (matched, rest) = cursor.read(self.count)?;

        if matched == self.expected {
            Ok((matched, rest))
        } else {
            Err(cursor.get_error(
                ErrorKind::ImproperInput,
                format!(
                    "expected \"{}\", found \"{}\"",
                    preview(self.expected),
                    preview(matched)
                ),
            ))
        }
    }
}

/// Convenience function to create a `Literal` parser.
pub fn literal(expected: &str) -> Literal<'_> {
    Literal::new(expected)
}
