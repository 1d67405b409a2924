use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::value::Value;

/// Core trait for parser combinators.
///
/// A parser is a pure function from a cursor to either a parsed value plus
/// the remainder cursor, or a `ParseError`. Failures never consume input:
/// the caller keeps its own cursor and is free to retry another branch with
/// it. Parsers hold no mutable state and are reusable across independent
/// parse invocations.
pub trait Parser<'src> {
    type Output;

    fn parse(
        &self,
        cursor: CharCursor<'src>,
    ) -> Result<(Self::Output, CharCursor<'src>), ParseError>;

    /// Run this parser against the start of `input`.
    ///
    /// The returned cursor is the unconsumed tail, itself a valid starting
    /// point for a further parse.
    fn parse_str(
        &self,
        input: &'src str,
    ) -> Result<(Self::Output, CharCursor<'src>), ParseError> {
        self.parse(CharCursor::new(input))
    }
}

impl<'src, P> Parser<'src> for Box<P>
where
    P: Parser<'src> + ?Sized,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: CharCursor<'src>,
    ) -> Result<(Self::Output, CharCursor<'src>), ParseError> {
        (**self).parse(cursor)
    }
}

/// A type-erased parser producing a `Value`, the currency of the compound
/// combinators.
pub type BoxedParser<'src> = Box<dyn Parser<'src, Output = Value<'src>> + 'src>;

/// Adapter lifting a parser's output into `Value`.
pub struct ToValue<P> {
    parser: P,
}

impl<P> ToValue<P> {
    pub fn new(parser: P) -> Self {
        ToValue { parser }
    }
}

impl<'src, P> Parser<'src> for ToValue<P>
where
    P: Parser<'src>,
    P::Output: Into<Value<'src>>,
{
    type Output = Value<'src>;

    fn parse(
        &self,
        cursor: CharCursor<'src>,
    ) -> Result<(Self::Output, CharCursor<'src>), ParseError> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok((value.into(), cursor))
    }
}

pub trait ParserExt<'src>: Parser<'src> + Sized {
    /// Erase this parser's type so it can join a `Sequence` or
    /// `Alternatives` alongside parsers of other shapes.
    fn boxed(self) -> BoxedParser<'src>
    where
        Self: 'src,
        Self::Output: Into<Value<'src>>,
    {
        Box::new(ToValue::new(self))
    }
}

impl<'src, P> ParserExt<'src> for P where P: Parser<'src> {}
