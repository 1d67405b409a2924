use crate::cursor::CharCursor;
use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;
use crate::util::preview;

/// Parser that applies a child parser repeatedly for as long as it succeeds.
///
/// Collects the results in order. Zero successes is a failure, mirroring the
/// non-empty policy of `TakeWhile`.
pub struct TakeAll<P> {
    parser: P,
}

impl<P> TakeAll<P> {
    pub fn new(parser: P) -> Self {
        TakeAll { parser }
    }
}

impl<'src, P> Parser<'src> for TakeAll<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: CharCursor<'src>,
    ) -> Result<(Self::Output, CharCursor<'src>), ParseError> {
        let mut results = Vec::new();
        let mut current = cursor;

        loop {
            match self.parser.parse(current) {
                Ok((value, next)) => {
                    results.push(value);
                    current = next;
                }
                Err(_) => break,
            }
        }

        if results.is_empty() {
            return Err(cursor.get_error(
                ErrorKind::ImproperInput,
                format!("could not parse anything from \"{}\"", preview(cursor.rest())),
            ));
        }

        Ok((results, current))
    }
}

/// Convenience function to create a `TakeAll` parser.
pub fn take_all<'src, P>(parser: P) -> TakeAll<P>
where
    P: Parser<'src>,
{
    TakeAll::new(parser)
}
