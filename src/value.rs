use std::fmt;

/// Result of a compound parse.
///
/// Compound combinators (`Sequence`, `Alternatives`, `Optional`, `Discard`)
/// work over this common shape so that heterogeneous grammars compose without
/// a type parameter per child. Primitive parsers produce plain `&str` slices
/// and are lifted into `Value` at the composition boundary (`ParserExt::boxed`).
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'src> {
    /// A slice borrowed from the input.
    Str(&'src str),
    /// Owned text, produced by transformations.
    Text(String),
    Int(i64),
    Float(f64),
    /// Ordered results of a `Sequence`, in call order.
    Seq(Vec<Value<'src>>),
    /// A result excluded from `Sequence` output. `Some` holds a value that
    /// was parsed and then discarded; `None` is the absent marker produced
    /// by `Optional` when its child failed.
    Discarded(Option<Box<Value<'src>>>),
}

impl<'src> Value<'src> {
    pub fn is_discarded(&self) -> bool {
        matches!(self, Value::Discarded(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value<'src>]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }
}

/// Concatenates the textual content of the value; sequences render as their
/// members joined, discarded values as nothing.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Text(s) => write!(f, "{}", s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Seq(items) => {
                for item in items {
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            Value::Discarded(_) => Ok(()),
        }
    }
}

impl<'src> From<&'src str> for Value<'src> {
    fn from(s: &'src str) -> Self {
        Value::Str(s)
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value<'_> {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value<'_> {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl<'src, T> From<Vec<T>> for Value<'src>
where
    T: Into<Value<'src>>,
{
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}
