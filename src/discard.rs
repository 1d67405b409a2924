use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::value::Value;

/// Parser whose successful result is marked discardable.
///
/// The child still has to match and its input is still consumed; only the
/// result is excluded from a surrounding `Sequence`'s collected output.
pub struct Discard<P> {
    parser: P,
}

impl<P> Discard<P> {
    pub fn new(parser: P) -> Self {
        Discard { parser }
    }
}

impl<'src, P> Parser<'src> for Discard<P>
where
    P: Parser<'src>,
    P::Output: Into<Value<'src>>,
{
    type Output = Value<'src>;

    fn parse(
        &self,
        cursor: CharCursor<'src>,
    ) -> Result<(Self::Output, CharCursor<'src>), ParseError> {
        let (value, rest) = self.parser.parse(cursor)?;
        Ok((Value::Discarded(Some(Box::new(value.into()))), rest))
    }
}

/// Convenience function to create a `Discard` parser.
pub fn discard<'src, P>(parser: P) -> Discard<P>
where
    P: Parser<'src>,
    P::Output: Into<Value<'src>>,
{
    Discard::new(parser)
}
