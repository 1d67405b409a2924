use crate::cursor::CharCursor;
use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;
use crate::util::preview;

/// Parser that consumes characters while a predicate holds.
///
/// At least one character must match: an empty run is always a failure,
/// propagating whichever error stopped the first iteration (`NotEnoughInput`
/// at end of input, `ImproperInput` when the predicate rejects).
pub struct TakeWhile<F> {
    predicate: F,
}

impl<F> TakeWhile<F> {
    pub fn new(predicate: F) -> Self {
        TakeWhile { predicate }
    }
}

impl<'src, F> Parser<'src> for TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'src str;

    fn parse(
        &self,
        cursor: CharCursor<'src>,
    ) -> Result<(Self::Output, CharCursor<'src>), ParseError> {
        let start = cursor;
        let mut current = cursor;
        let mut consumed = 0;

        loop {
            match current.read_char() {
                Ok((ch, next)) => {
                    if (self.predicate)(ch) {
                        consumed += ch.len_utf8();
                        current = next;
                    } else if consumed == 0 {
                        return Err(current.get_error(
                            ErrorKind::ImproperInput,
                            format!(
                                "condition not met for \"{}\" parsed from \"{}\"",
                                ch,
                                preview(next.rest())
                            ),
                        ));
                    } else {
                        break;
                    }
                }
                Err(error) => {
                    if consumed == 0 {
                        return Err(error);
                    }
                    break;
                }
            }
        }

        Ok((&start.rest()[..consumed], current))
    }
}

/// Convenience function to create a `TakeWhile` parser.
pub fn take_while<F>(predicate: F) -> TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile::new(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::is_alpha;

    #[test]
    fn test_take_while_stops_at_first_rejection() {
        let parser = take_while(is_alpha);
        let (matched, rest) = parser.parse_str("ars1").unwrap();
        assert_eq!(matched, "ars");
        assert_eq!(rest.rest(), "1");
    }

    #[test]
    fn test_take_while_consumes_to_end() {
        let parser = take_while(is_alpha);
        let (matched, rest) = parser.parse_str("arst").unwrap();
        assert_eq!(matched, "arst");
        assert!(rest.is_at_end());
    }

    #[test]
    fn test_take_while_never_matches_empty() {
        let parser = take_while(is_alpha);

        // Predicate false on the very first char.
        let error = parser.parse_str("1234").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ImproperInput);

        // Nothing to read at all.
        let error = parser.parse_str("").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotEnoughInput);
    }

    #[test]
    fn test_take_while_run_satisfies_predicate() {
        let parser = take_while(is_alpha);
        let (matched, rest) = parser.parse_str("abc123").unwrap();
        assert!(matched.chars().all(is_alpha));
        // The char immediately after the run does not satisfy the predicate.
        assert!(!rest.rest().starts_with(is_alpha));
    }

    #[test]
    fn test_take_while_tracks_position() {
        let parser = take_while(|ch| ch != 'x');
        let (matched, rest) = parser.parse_str("ab\ncdx").unwrap();
        assert_eq!(matched, "ab\ncd");
        assert_eq!(rest.position().line, 2);
        assert_eq!(rest.position().column, 3);
    }
}
