//! Call-site detection on the text before the cursor.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{CallSite, SiteKind};

/// `object.method(`; the parenthesis must still be open for a call site.
static METHOD_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<object>\w+)\.(?P<function>\w+)\(").expect("valid regex")
});

/// `object[[` column selection running to the end of the text, optionally
/// closed by `]` or `]]`.
static DOUBLE_BRACKET_SLICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<object>\w+)\[\[(?P<contents>[\w'",\s]*)\]?\]?\z"#).expect("valid regex")
});

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Finds the call or slice the cursor is in.
///
/// `text` must be the whole logical input up to the cursor, which for multi-line
/// cells spans several physical lines. Method calls are checked first: the last
/// `object.method(` whose parenthesis is still open wins. Returns `None` when the
/// cursor is in neither.
pub fn locate(text: &str) -> Option<CallSite> {
    locate_call(text).or_else(|| locate_slice(text))
}

fn locate_call(text: &str) -> Option<CallSite> {
    METHOD_CALL
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let arguments = &text[whole.end()..];
            paren_left_open(arguments).then(|| CallSite {
                target: caps["object"].to_string(),
                kind: SiteKind::Call {
                    function: caps["function"].to_string(),
                },
                arguments: arguments.to_string(),
            })
        })
        .last()
}

fn locate_slice(text: &str) -> Option<CallSite> {
    let caps = DOUBLE_BRACKET_SLICE.captures(text)?;
    Some(CallSite {
        target: caps["object"].to_string(),
        kind: SiteKind::Slice,
        arguments: caps["contents"].to_string(),
    })
}

/// The last bare word typed inside a slice, or `""` when nothing was typed.
pub fn slice_current_value(contents: &str) -> &str {
    WORD.find_iter(contents).last().map_or("", |m| m.as_str())
}

/// True when the text following an opening parenthesis never closes it.
fn paren_left_open(arguments: &str) -> bool {
    let mut depth = 1usize;
    let mut quote: Option<char> = None;

    for ch in arguments.chars() {
        match (quote, ch) {
            (Some(open), ch) if ch == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '(') => depth += 1,
            (None, ')') => {
                depth -= 1;
                if depth == 0 {
                    return false;
                }
            }
            (None, _) => {}
        }
    }
    true
}
