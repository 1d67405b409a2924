//! # CharComb - Parser Combinator Library
//!
//! A parser combinator library over character input: a small set of
//! primitive parsers and combinator operators that build arbitrarily complex
//! grammars by composition instead of hand-written recursive descent.
//!
//! - **Immutable cursors**: every successful read produces a new cursor over
//!   the remainder; backtracking is just dropping a cursor
//! - **Zero shared state**: parsers are pure values, reusable across
//!   independent parse invocations
//! - **Two-kind error taxonomy**: `NotEnoughInput` for structural shortfalls,
//!   `ImproperInput` for rejected content, both positioned by line and column
//! - **Composability**: sequencing, alternation, repetition, optionality,
//!   transformation and discarding combine into larger parsers

pub mod alternatives;
pub mod apply;
pub mod basic;
pub mod cursor;
pub mod discard;
pub mod error;
pub mod forward;
pub mod literal;
pub mod optional;
pub mod parser;
pub mod sequence;
pub mod stream;
pub mod take;
pub mod take_all;
pub mod take_if;
pub mod take_until;
pub mod take_while;
pub mod token;
pub mod util;
pub mod value;

pub use alternatives::{Alternatives, OrExt, one_of};
pub use apply::{Apply, ApplyExt, apply};
pub use basic::{alphas, digits, positive_integer, spaces, word};
pub use cursor::CharCursor;
pub use discard::{Discard, discard};
pub use error::{ErrorKind, ParseError, Position};
pub use forward::Forward;
pub use literal::{Literal, literal};
pub use optional::{Optional, optional};
pub use parser::{BoxedParser, Parser, ParserExt, ToValue};
pub use sequence::{Sequence, ThenExt, sequence_of};
pub use stream::{ScrollingStream, Stream, StreamError};
pub use take::{Take, take};
pub use take_all::{TakeAll, take_all};
pub use take_if::{TakeIf, take_if, take_items_if};
pub use take_until::{TakeUntil, take_until};
pub use take_while::{TakeWhile, take_while};
pub use token::{Token, token, token_with};
pub use util::{equals, flatten, join, preview};
pub use value::Value;
