use crate::cursor::CharCursor;
use crate::error::{ErrorKind, ParseError};
use crate::parser::{BoxedParser, Parser, ParserExt};
use crate::util::preview;
use crate::value::Value;

/// Compound parser that tries its children in order against the unmodified
/// entry cursor and returns the first success.
///
/// First-match, not longest-match: when two children can both match a
/// prefix, the earlier one always wins. Fails with `ImproperInput` at the
/// entry cursor only when every child fails.
pub struct Alternatives<'src> {
    parsers: Vec<BoxedParser<'src>>,
}

impl<'src> Alternatives<'src> {
    pub fn new(parsers: Vec<BoxedParser<'src>>) -> Self {
        Alternatives { parsers }
    }
}

impl<'src> Parser<'src> for Alternatives<'src> {
    type Output = Value<'src>;

    fn parse(
        &self,
        cursor: CharCursor<'src>,
    ) -> Result<(Self::Output, CharCursor<'src>), ParseError> {
        for parser in &self.parsers {
            if let Ok(hit) = parser.parse(cursor) {
                return Ok(hit);
            }
        }

        Err(cursor.get_error(
            ErrorKind::ImproperInput,
            format!("no alternatives matched \"{}\"", preview(cursor.rest())),
        ))
    }
}

/// Convenience function to create an `Alternatives` parser.
pub fn one_of(parsers: Vec<BoxedParser<'_>>) -> Alternatives<'_> {
    Alternatives::new(parsers)
}

/// Extension trait adding `.or()`, the method rendering of alternation.
pub trait OrExt<'src>: Parser<'src> + Sized {
    fn or<Q>(self, other: Q) -> Alternatives<'src>
    where
        Self: 'src,
        Self::Output: Into<Value<'src>>,
        Q: Parser<'src> + 'src,
        Q::Output: Into<Value<'src>>,
    {
        Alternatives::new(vec![self.boxed(), other.boxed()])
    }
}

impl<'src, P> OrExt<'src> for P where P: Parser<'src> {}
