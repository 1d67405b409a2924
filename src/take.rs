use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that consumes exactly `count` characters unconditionally.
pub struct Take {
    count: usize,
}

impl Take {
    /// # Panics
    ///
    /// Panics when `count` is zero: a zero-width take is meaningless for
    /// this primitive. Use `Optional` or a repetition combinator when an
    /// empty match should succeed.
    pub fn new(count: usize) -> Self {
        assert!(count >= 1, "Take requires a count of at least one");
        Take { count }
    }
}

impl<'src> Parser<'src> for Take {
    type Output = &'src str;

    fn parse(
        &self,
        cursor: CharCursor<'src>,
    ) -> Result<(Self::Output, CharCursor<'src>), ParseError> {
        cursor.read(self.count)
    }
}

/// Convenience function to create a `Take` parser.
pub fn take(count: usize) -> Take {
    Take::new(count)
}
