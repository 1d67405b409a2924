use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that transforms a child's successful result through a function.
///
/// A pure transform: the child's failures pass through untouched.
pub struct Apply<P, F> {
    function: F,
    parser: P,
}

impl<P, F> Apply<P, F> {
    pub fn new(function: F, parser: P) -> Self {
        Apply { function, parser }
    }
}

impl<'src, P, F, U> Parser<'src> for Apply<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(
        &self,
        cursor: CharCursor<'src>,
    ) -> Result<(Self::Output, CharCursor<'src>), ParseError> {
        let (value, rest) = self.parser.parse(cursor)?;
        Ok(((self.function)(value), rest))
    }
}

/// Convenience function to create an `Apply` parser.
pub fn apply<'src, P, F, U>(function: F, parser: P) -> Apply<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> U,
{
    Apply::new(function, parser)
}

/// Extension trait adding `.apply()` to any parser.
pub trait ApplyExt<'src>: Parser<'src> + Sized {
    fn apply<F, U>(self, function: F) -> Apply<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Apply::new(function, self)
    }
}

impl<'src, P> ApplyExt<'src> for P where P: Parser<'src> {}
