//! Reconstruction of partially typed literals.
//!
//! A completion request arrives with the user in the middle of typing, so argument
//! fragments are usually cut off: `["a","b","c`, `by="Na`, `[1, [2,`. This module
//! recovers what can be recovered from such fragments:
//!
//! - [`reconstruct`] closes open quotes and brackets synthetically, parses the
//!   result, and reports the completed elements separately from the token still
//!   being typed.
//! - [`trailing_value`] extracts only that trailing token, without parsing.
//!
//! Bracket balance is judged by counting bracket characters. Brackets inside
//! string literals are not discounted; fragments that rely on them may fail to
//! reconstruct, which callers treat as "nothing to complete".

mod parser;

pub use parser::{coerce_number, parse_literal, MAX_DEPTH};

use crate::error::LiteralError;
use crate::types::{Literal, LiteralValue};

const OPEN_BRACKETS: [char; 3] = ['[', '(', '{'];
const CLOSE_BRACKETS: [char; 3] = [']', ')', '}'];

/// Characters dropped from the front of a trailing token.
const DELIMITER_CHARS: [char; 6] = ['\'', '"', '[', ']', '(', ')'];

/// Reconstructs the value of a possibly incomplete fragment.
///
/// # Examples
///
/// ```
/// use framehint_core::literal::reconstruct;
/// use framehint_core::types::Literal;
///
/// let value = reconstruct(r#"["a","b","c"#).unwrap();
/// assert_eq!(
///     value.value,
///     Literal::Collection(vec![Literal::str("a"), Literal::str("b")])
/// );
/// assert!(!value.is_complete);
/// assert_eq!(value.current_value.as_deref(), Some("c"));
/// ```
pub fn reconstruct(fragment: &str) -> Result<LiteralValue, LiteralError> {
    if fragment.is_empty() {
        return Ok(LiteralValue::complete(Literal::Absent));
    }

    let stripped = strip_fragment(fragment);
    match stripped.chars().next() {
        Some(first) if OPEN_BRACKETS.contains(&first) => reconstruct_collection(stripped),
        _ => Ok(reconstruct_scalar(fragment.trim())),
    }
}

fn reconstruct_collection(fragment: &str) -> Result<LiteralValue, LiteralError> {
    if !has_open_bracket(fragment) {
        return parse_literal(fragment).map(LiteralValue::complete);
    }

    let quote = open_quote(fragment);
    let current_value = quote.and_then(|quote| {
        fragment
            .rfind(quote)
            .map(|idx| fragment[idx + quote.len_utf8()..].to_string())
    });

    let mut closed = fragment.to_string();
    while let Some(missing) = open_quote(&closed) {
        closed.push(missing);
    }
    closed.extend(missing_closers(&closed));

    let mut value = parse_literal(&closed)?;
    if quote.is_some() {
        // The synthetic element is the partial token; it is reported through
        // `current_value` only.
        if let Literal::Collection(items) = &mut value {
            items.pop();
        }
    }

    Ok(LiteralValue::partial(value, current_value))
}

fn reconstruct_scalar(text: &str) -> LiteralValue {
    if text.is_empty() {
        return LiteralValue::complete(Literal::Absent);
    }
    if let Ok(value) = parse_literal(text) {
        return LiteralValue::complete(value);
    }

    let partial = match text.chars().next() {
        Some(quote @ ('"' | '\'')) => &text[quote.len_utf8()..],
        _ => text,
    };
    LiteralValue::partial(Literal::str(partial), Some(partial.to_string()))
}

/// Extracts the clean trailing token of an argument fragment.
///
/// For a collection this is the last element being typed; for a scalar it is the
/// leading token. Quotes and brackets around the token are removed.
///
/// ```
/// use framehint_core::literal::trailing_value;
///
/// assert_eq!(trailing_value(r#"["a","b","c"#), "c");
/// assert_eq!(trailing_value(r#""Fav"#), "Fav");
/// assert_eq!(trailing_value("["), "");
/// ```
pub fn trailing_value(fragment: &str) -> String {
    let stripped = strip_fragment(fragment);
    match stripped.chars().next() {
        Some('[' | '(') => {
            if stripped.len() == 1 {
                return String::new();
            }
            let last = stripped.rsplit(',').next().unwrap_or_default().trim();
            strip_leading_delimiters(last).to_string()
        }
        _ => strip_leading_delimiters(stripped)
            .split(['"', '\'', ','])
            .next()
            .unwrap_or_default()
            .trim_end()
            .to_string(),
    }
}

/// Returns the quote character that occurs an odd number of times.
///
/// `"` is checked before `'`, so with nested quotes the double quote wins.
pub fn open_quote(text: &str) -> Option<char> {
    ['"', '\'']
        .into_iter()
        .find(|quote| text.matches(*quote).count() % 2 == 1)
}

/// True when opening and closing bracket counts differ.
pub fn has_open_bracket(text: &str) -> bool {
    let opened = text.chars().filter(|c| OPEN_BRACKETS.contains(c)).count();
    let closed = text.chars().filter(|c| CLOSE_BRACKETS.contains(c)).count();
    opened != closed
}

/// Closing brackets needed to balance `text`, innermost first.
fn missing_closers(text: &str) -> Vec<char> {
    let mut stack = Vec::new();
    for ch in text.chars() {
        if let Some(idx) = OPEN_BRACKETS.iter().position(|open| *open == ch) {
            stack.push(CLOSE_BRACKETS[idx]);
        } else if CLOSE_BRACKETS.contains(&ch) {
            stack.pop();
        }
    }
    stack.into_iter().rev().collect()
}

fn strip_fragment(fragment: &str) -> &str {
    fragment.trim_matches('"').trim_matches('\'').trim()
}

fn strip_leading_delimiters(text: &str) -> &str {
    text.trim_start_matches(DELIMITER_CHARS)
}
