use crate::cursor::CharCursor;
use crate::error::{ErrorKind, ParseError};
use crate::parser::{BoxedParser, Parser, ParserExt};
use crate::util::preview;
use crate::value::Value;

/// Compound parser that runs its children left to right on the successive
/// remainders.
///
/// Non-discardable results are collected into a `Value::Seq` in call order;
/// `Discarded` results are validated and consumed but excluded. Any child
/// failure fails the whole sequence with `ImproperInput` referencing the
/// entry cursor, so no partial consumption escapes to the caller.
pub struct Sequence<'src> {
    parsers: Vec<BoxedParser<'src>>,
}

impl<'src> Sequence<'src> {
    pub fn new(parsers: Vec<BoxedParser<'src>>) -> Self {
        Sequence { parsers }
    }
}

impl<'src> Parser<'src> for Sequence<'src> {
    type Output = Value<'src>;

    fn parse(
        &self,
        cursor: CharCursor<'src>,
    ) -> Result<(Self::Output, CharCursor<'src>), ParseError> {
        let entry = cursor;
        let mut current = cursor;
        let mut results = Vec::new();

        for parser in &self.parsers {
            match parser.parse(current) {
                Ok((value, next)) => {
                    if !value.is_discarded() {
                        results.push(value);
                    }
                    current = next;
                }
                Err(_) => {
                    return Err(entry.get_error(
                        ErrorKind::ImproperInput,
                        format!("sequence not found in \"{}\"", preview(entry.rest())),
                    ));
                }
            }
        }

        Ok((Value::Seq(results), current))
    }
}

/// Convenience function to create a `Sequence` parser.
pub fn sequence_of(parsers: Vec<BoxedParser<'_>>) -> Sequence<'_> {
    Sequence::new(parsers)
}

/// Extension trait adding `.then()`, the method rendering of sequencing.
pub trait ThenExt<'src>: Parser<'src> + Sized {
    fn then<Q>(self, other: Q) -> Sequence<'src>
    where
        Self: 'src,
        Self::Output: Into<Value<'src>>,
        Q: Parser<'src> + 'src,
        Q::Output: Into<Value<'src>>,
    {
        Sequence::new(vec![self.boxed(), other.boxed()])
    }
}

impl<'src, P> ThenExt<'src> for P where P: Parser<'src> {}
