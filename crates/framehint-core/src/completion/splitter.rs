//! Positional argument splitting for truncated argument lists.
//!
//! A plain comma split is wrong as soon as a collection is involved, because the
//! comma may sit inside the collection. Instead of tracking bracket depth, the
//! splitter recognises the common truncated shapes:
//!
//! ```text
//! ['a', 'b'], ['b', 'c', 'd'     closed collection, then a comma
//! 'a', ['b', 'c', 'd'            comma, then a new collection
//! ['a', '                        a single open collection
//! 'a', 'b'                       scalars only
//! ```

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// A comma preceded (through optional whitespace) by a closing bracket.
/// Group 1 is the separator; the bracket stays with the left argument.
static COMMA_AFTER_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\]})](\s*,)").expect("valid regex"));

/// A comma followed (through optional whitespace) by an opening bracket.
/// Group 1 is the separator; the bracket stays with the right argument.
static COMMA_BEFORE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(,\s*)[\[{(]").expect("valid regex"));

/// Splits the text after a call's opening parenthesis into argument fragments.
///
/// The first applicable rule wins:
/// 1. split on commas that follow a closing bracket;
/// 2. split on commas that precede an opening bracket;
/// 3. any opening bracket makes the whole text one argument;
/// 4. split on every comma.
pub fn split_arguments(fragment: &str) -> Vec<&str> {
    let after_close = separators(&COMMA_AFTER_CLOSE, fragment);
    if !after_close.is_empty() {
        return split_at(fragment, &after_close);
    }

    let before_open = separators(&COMMA_BEFORE_OPEN, fragment);
    if !before_open.is_empty() {
        return split_at(fragment, &before_open);
    }

    if fragment.contains(['[', '{', '(']) {
        return vec![fragment];
    }

    fragment.split(',').collect()
}

/// True when `fragment` still holds a comma outside every bracket and quote,
/// i.e. it spans more than one argument.
pub fn holds_multiple_arguments(fragment: &str) -> bool {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for ch in fragment.chars() {
        match (quote, ch) {
            (Some(open), ch) if ch == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '[' | '(' | '{') => depth += 1,
            (None, ']' | ')' | '}') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => return true,
            (None, _) => {}
        }
    }
    false
}

fn separators(pattern: &Regex, fragment: &str) -> Vec<Range<usize>> {
    pattern
        .captures_iter(fragment)
        .filter_map(|caps| caps.get(1).map(|sep| sep.range()))
        .collect()
}

fn split_at<'a>(fragment: &'a str, separators: &[Range<usize>]) -> Vec<&'a str> {
    let mut parts = Vec::with_capacity(separators.len() + 1);
    let mut start = 0;
    for sep in separators {
        parts.push(&fragment[start..sep.start]);
        start = sep.end;
    }
    parts.push(&fragment[start..]);
    parts
}
