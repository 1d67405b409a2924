use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser, ToValue};
use crate::value::Value;
use std::sync::{Arc, OnceLock};

/// Indirection cell for self-referential grammars.
///
/// Created unbound with `declare()`, shared by cloning, and bound exactly
/// once with `bind()`; afterwards it behaves like any other parser. Binding
/// twice or parsing before binding is a programmer error and panics; it is
/// never reported as a `ParseError`, so alternation and sequencing logic
/// cannot accidentally swallow it.
#[derive(Clone)]
pub struct Forward<'src> {
    cell: Arc<OnceLock<BoxedParser<'src>>>,
}

impl<'src> Forward<'src> {
    pub fn declare() -> Self {
        Forward {
            cell: Arc::new(OnceLock::new()),
        }
    }

    /// # Panics
    ///
    /// Panics when the cell is already bound.
    pub fn bind<P>(&self, parser: P)
    where
        P: Parser<'src> + 'src,
        P::Output: Into<Value<'src>>,
    {
        let bound: BoxedParser<'src> = Box::new(ToValue::new(parser));
        if self.cell.set(bound).is_err() {
            panic!("forward parser bound twice");
        }
    }
}

impl<'src> Parser<'src> for Forward<'src> {
    type Output = Value<'src>;

    fn parse(
        &self,
        cursor: CharCursor<'src>,
    ) -> Result<(Self::Output, CharCursor<'src>), ParseError> {
        match self.cell.get() {
            Some(parser) => parser.parse(cursor),
            None => panic!("forward parser used before being bound"),
        }
    }
}
