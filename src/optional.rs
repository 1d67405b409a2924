use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::value::Value;

/// Parser that never fails: on the child's failure it succeeds with the
/// absent marker `Value::Discarded(None)` and the entry cursor unchanged.
///
/// The absent marker is what lets `Sequence` omit a missing optional part
/// from its collected results while a present one is included as-is.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'src, P> Parser<'src> for Optional<P>
where
    P: Parser<'src>,
    P::Output: Into<Value<'src>>,
{
    type Output = Value<'src>;

    fn parse(
        &self,
        cursor: CharCursor<'src>,
    ) -> Result<(Self::Output, CharCursor<'src>), ParseError> {
        match self.parser.parse(cursor) {
            Ok((value, rest)) => Ok((value.into(), rest)),
            Err(_) => Ok((Value::Discarded(None), cursor)),
        }
    }
}

/// Convenience function to create an `Optional` parser.
pub fn optional<'src, P>(parser: P) -> Optional<P>
where
    P: Parser<'src>,
    P::Output: Into<Value<'src>>,
{
    Optional::new(parser)
}
