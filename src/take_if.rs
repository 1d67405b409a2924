use crate::cursor::CharCursor;
use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;
use crate::take::Take;
use crate::util::preview;
use std::fmt;

/// Parser that runs a child parser and validates the result with a predicate.
///
/// The predicate is any `Fn(&Output) -> bool`; rejection raises
/// `ImproperInput` with previews of the rejected value and the surrounding
/// input.
pub struct TakeIf<P, F> {
    parser: P,
    predicate: F,
    negated: bool,
}

impl<P, F> TakeIf<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        TakeIf {
            parser,
            predicate,
            negated: false,
        }
    }

    /// Invert the predicate: accept exactly what the original rejects.
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }
}

impl<'src, P, F> Parser<'src> for TakeIf<P, F>
where
    P: Parser<'src>,
    P::Output: fmt::Display,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: CharCursor<'src>,
    ) -> Result<(Self::Output, CharCursor<'src>), ParseError> {
        let (value, rest) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) != self.negated {
            Ok((value, rest))
        } else {
            Err(cursor.get_error(
                ErrorKind::ImproperInput,
                format!(
                    "condition not met for \"{}\" parsed from \"{}\"",
                    preview(&value.to_string()),
                    preview(rest.rest())
                ),
            ))
        }
    }
}

/// Convenience function to create a `TakeIf` parser.
pub fn take_if<'src, P, F>(parser: P, predicate: F) -> TakeIf<P, F>
where
    P: Parser<'src>,
    F: Fn(&P::Output) -> bool,
{
    TakeIf::new(parser, predicate)
}

/// Take exactly `count` characters, validated by `predicate`.
pub fn take_items_if<F>(count: usize, predicate: F) -> TakeIf<Take, F>
where
    F: Fn(&&str) -> bool,
{
    TakeIf::new(Take::new(count), predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::is_alpha;

    fn all_alpha(s: &&str) -> bool {
        s.chars().all(is_alpha)
    }

    #[test]
    fn test_take_if_accepts_matching_content() {
        let parser = take_items_if(3, all_alpha);
        let (matched, rest) = parser.parse_str("arst").unwrap();
        assert_eq!(matched, "ars");
        assert_eq!(rest.rest(), "t");
    }

    #[test]
    fn test_take_if_rejects_with_improper_input() {
        let parser = take_items_if(3, all_alpha);
        let error = parser.parse_str("ar12").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ImproperInput);
        assert!(error.message().contains("ar1"));
    }

    #[test]
    fn test_take_if_propagates_not_enough_input() {
        let parser = take_items_if(3, all_alpha);
        let error = parser.parse_str("ar").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotEnoughInput);
    }

    #[test]
    fn test_take_if_is_invertible() {
        let parser = take_items_if(3, all_alpha).negate();
        let (matched, rest) = parser.parse_str("1234").unwrap();
        assert_eq!(matched, "123");
        assert_eq!(rest.rest(), "4");

        assert!(parser.parse_str("arst").is_err());
    }

    #[test]
    fn test_take_if_double_negation_restores() {
        let parser = take_items_if(2, all_alpha).negate().negate();
        assert!(parser.parse_str("ab").is_ok());
        assert!(parser.parse_str("12").is_err());
    }

    #[test]
    fn test_take_if_message_truncates_long_previews() {
        let parser = take_items_if(15, |_: &&str| false);
        let error = parser.parse_str("abcdefghijklmnop").unwrap_err();
        assert!(error.message().contains("abcdefghij..."));
    }

    #[test]
    fn test_take_if_over_composite_parser() {
        use crate::basic::alphas;
        use crate::token::token;
        use crate::util::equals;

        let parser = take_if(token(alphas()), equals("yodude"));
        let (matched, rest) = parser.parse_str("yodude arst").unwrap();
        assert_eq!(matched, "yodude");
        assert_eq!(rest.rest(), "arst");

        let error = parser.parse_str("arst arst").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ImproperInput);
    }
}
