//! Convenience parsers built purely from the core combinators.

use crate::cursor::CharCursor;
use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;
use crate::take_while::{TakeWhile, take_while};
use crate::token::{Token, token};

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn is_alpha(ch: char) -> bool {
    ch.is_alphabetic()
}

pub fn is_space(ch: char) -> bool {
    ch.is_whitespace()
}

/// One or more ASCII digits.
pub fn digits() -> TakeWhile<fn(char) -> bool> {
    take_while(is_digit)
}

/// One or more alphabetic characters.
pub fn alphas() -> TakeWhile<fn(char) -> bool> {
    take_while(is_alpha)
}

/// One or more whitespace characters.
pub fn spaces() -> TakeWhile<fn(char) -> bool> {
    take_while(is_space)
}

/// A run of alphabetic characters with trailing whitespace consumed.
pub fn word() -> Token<TakeWhile<fn(char) -> bool>, TakeWhile<fn(char) -> bool>> {
    token(alphas())
}

/// Parser that matches one or more digits and returns them as an `i64`.
pub struct PositiveInteger;

impl<'src> Parser<'src> for PositiveInteger {
    type Output = i64;

    fn parse(
        &self,
        cursor: CharCursor<'src>,
    ) -> Result<(Self::Output, CharCursor<'src>), ParseError> {
        let (digit_run, rest) = digits().parse(cursor)?;

        match digit_run.parse::<i64>() {
            Ok(value) => Ok((value, rest)),
            Err(_) => Err(cursor.get_error(
                ErrorKind::ImproperInput,
                format!("number too large: {}", digit_run),
            )),
        }
    }
}

pub fn positive_integer() -> PositiveInteger {
    PositiveInteger
}
