use crate::basic::spaces;
use crate::cursor::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::take_while::TakeWhile;

/// Parser augmented to consume trailing separator content after a success.
///
/// Separator consumption is best-effort: trailing separation is optional by
/// convention, so a failing separator parse is swallowed and the cursor is
/// left right after the main match.
pub struct Token<P, S> {
    parser: P,
    separator: S,
}

impl<P, S> Token<P, S> {
    pub fn new(parser: P, separator: S) -> Self {
        Token { parser, separator }
    }
}

impl<'src, P, S> Parser<'src> for Token<P, S>
where
    P: Parser<'src>,
    S: Parser<'src>,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: CharCursor<'src>,
    ) -> Result<(Self::Output, CharCursor<'src>), ParseError> {
        let (value, rest) = self.parser.parse(cursor)?;

        let rest = match self.separator.parse(rest) {
            Ok((_, after_separator)) => after_separator,
            Err(_) => rest,
        };

        Ok((value, rest))
    }
}

/// Token with the conventional whitespace separator.
pub fn token<'src, P>(parser: P) -> Token<P, TakeWhile<fn(char) -> bool>>
where
    P: Parser<'src>,
{
    Token::new(parser, spaces())
}

/// Token with a custom separator parser.
pub fn token_with<'src, P, S>(parser: P, separator: S) -> Token<P, S>
where
    P: Parser<'src>,
    S: Parser<'src>,
{
    Token::new(parser, separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::alphas;
    use crate::literal::literal;

    #[test]
    fn test_token_consumes_trailing_whitespace() {
        let parser = token(alphas());
        let (matched, rest) = parser.parse_str("arst arst").unwrap();
        assert_eq!(matched, "arst");
        assert_eq!(rest.rest(), "arst");
    }

    #[test]
    fn test_token_separator_is_optional() {
        let parser = token(alphas());

        let (matched, rest) = parser.parse_str("arst ").unwrap();
        assert_eq!(matched, "arst");
        assert!(rest.is_at_end());

        let (matched, rest) = parser.parse_str("arst").unwrap();
        assert_eq!(matched, "arst");
        assert!(rest.is_at_end());
    }

    #[test]
    fn test_token_swallows_separator_mismatch() {
        // Content follows immediately with no separator in between.
        let parser = token(alphas());
        let (matched, rest) = parser.parse_str("arst=1").unwrap();
        assert_eq!(matched, "arst");
        assert_eq!(rest.rest(), "=1");
    }

    #[test]
    fn test_token_main_parser_failure_propagates() {
        let parser = token(alphas());
        assert!(parser.parse_str("1234 ").is_err());
    }

    #[test]
    fn test_token_with_custom_separator() {
        let parser = token_with(alphas(), literal(","));
        let (matched, rest) = parser.parse_str("arst,more").unwrap();
        assert_eq!(matched, "arst");
        assert_eq!(rest.rest(), "more");
    }
}
