use crate::value::Value;

/// Longest preview embedded in diagnostic messages, in chars.
const PREVIEW_LIMIT: usize = 10;

/// Truncate `content` for use in an error message.
///
/// Purely cosmetic; never part of a parsing decision.
pub fn preview(content: &str) -> String {
    let mut chars = content.char_indices();
    match chars.nth(PREVIEW_LIMIT) {
        Some((index, _)) => format!("{}...", &content[..index]),
        None => content.to_string(),
    }
}

/// Splice nested `Seq` values into a flat list, preserving order.
pub fn flatten(value: Value<'_>) -> Vec<Value<'_>> {
    match value {
        Value::Seq(items) => items.into_iter().flat_map(flatten).collect(),
        other => vec![other],
    }
}

/// Concatenate the textual content of a value.
pub fn join(value: &Value<'_>) -> String {
    value.to_string()
}

/// Equality predicate for `TakeIf` over string-producing parsers.
pub fn equals<'a>(expected: &'a str) -> impl Fn(&&str) -> bool + 'a {
    move |actual: &&str| *actual == expected
}
