use crate::cursor::CharCursor;
use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;
use crate::util::preview;

/// Parser that consumes characters until a terminator parser succeeds.
///
/// At each step the terminator is probed against the current remainder
/// without consuming anything; on its success the loop stops and the
/// terminator's content is left unconsumed. At least one character must be
/// captured, and the terminator must succeed before the input runs out;
/// both violations are `ImproperInput` (content was present but did not
/// form a valid match).
pub struct TakeUntil<P> {
    terminator: P,
}

impl<P> TakeUntil<P> {
    pub fn new(terminator: P) -> Self {
        TakeUntil { terminator }
    }
}

impl<'src, P> Parser<'src> for TakeUntil<P>
where
    P: Parser<'src>,
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
            if self.terminator.parse(current).is_ok() {
                break;
            }

            match current.read_char() {
                Ok((ch, next)) => {
                    consumed += ch.len_utf8();
                    current = next;
                }
                Err(_) => {
                    return Err(start.get_error(
                        ErrorKind::ImproperInput,
                        format!(
                            "terminator never succeeded in \"{}\"",
                            preview(start.rest())
                        ),
                    ));
                }
            }
        }

        if consumed == 0 {
            return Err(start.get_error(
                ErrorKind::ImproperInput,
                format!(
                    "no content captured before terminator succeeded in \"{}\"",
                    preview(start.rest())
                ),
            ));
        }

        Ok((&start.rest()[..consumed], current))
    }
}

/// Convenience function to create a `TakeUntil` parser.
pub fn take_until<'src, P>(terminator: P) -> TakeUntil<P>
where
    P: Parser<'src>,
{
    TakeUntil::new(terminator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;

    #[test]
    fn test_take_until_stops_before_terminator() {
        let parser = take_until(literal("arst"));
        let (matched, rest) = parser.parse_str("before arst after").unwrap();
        assert_eq!(matched, "before ");
        assert_eq!(rest.rest(), "arst after");
    }

    #[test]
    fn test_take_until_terminator_never_succeeds() {
        let parser = take_until(literal("arst"));
        let error = parser.parse_str("before after").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ImproperInput);
        assert!(error.message().contains("terminator never succeeded"));
    }

    #[test]
    fn test_take_until_immediate_terminator_fails() {
        let parser = take_until(literal("arst"));
        let error = parser.parse_str("arst").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ImproperInput);
        assert!(error.message().contains("no content captured"));
    }

    #[test]
    fn test_take_until_empty_input_is_improper_not_structural() {
        let parser = take_until(literal("x"));
        let error = parser.parse_str("").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ImproperInput);
    }

    #[test]
    fn test_take_until_tracks_position_across_newlines() {
        let parser = take_until(literal("end"));
        let (matched, rest) = parser.parse_str("a\nb\nend").unwrap();
        assert_eq!(matched, "a\nb\n");
        assert_eq!(rest.position().line, 3);
        assert_eq!(rest.position().column, 1);
    }
}
