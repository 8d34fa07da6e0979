//! Keyword and positional argument resolution.
//!
//! Turns the raw text after a call's opening parenthesis into an ordered list of
//! [`KeywordMatch`] bindings. Explicit `name=value` tokens are preferred; when none
//! are present, fragments are paired with the method's declared parameters by
//! position.

use std::sync::LazyLock;

use regex::Regex;
#[cfg(feature = "tracing")]
use tracing::debug;

use super::splitter::{holds_multiple_arguments, split_arguments};
use crate::literal::{coerce_number, reconstruct, trailing_value};
use crate::types::{ArgumentValue, KeywordMatch, ParsedArgument};

/// `identifier=value`, where value is a quoted string on one line, a number, a
/// bare name such as `True` or a variable, or a bracket-led fragment running to
/// the end of a line. The value group is optional so that `by=` with nothing
/// typed still matches.
static KEYWORD_ARGUMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)(?P<identifier>\w+)=(?P<value>'[^'\n]*'?|"[^"\n]*"?|-?[\d.]+|[A-Za-z_]\w*|[\[{(][{@\w:,\s'"]+[}\])]?$)?"#,
    )
    .expect("valid regex")
});

const OPENING_BRACKETS: [char; 3] = ['[', '(', '{'];

/// Extracts argument fragments from the text typed after `(`.
///
/// Returns the explicit `name=value` tokens when there is at least one; otherwise
/// the positional fragments produced by [`split_arguments`], without identifiers.
pub fn parse_arguments(arguments: &str) -> Vec<ParsedArgument> {
    let keyword_arguments = keyword_arguments(arguments);
    if !keyword_arguments.is_empty() {
        return keyword_arguments.into_iter().map(|(arg, _)| arg).collect();
    }

    positional_arguments(arguments)
}

/// A keyword token and whether its value is a collection the pattern could not
/// follow.
type KeywordToken = (ParsedArgument, bool);

fn keyword_arguments(arguments: &str) -> Vec<KeywordToken> {
    KEYWORD_ARGUMENT
        .captures_iter(arguments)
        .filter_map(|caps| {
            let identifier = caps.name("identifier")?.as_str().to_string();
            let (raw, lost_collection) = match caps.name("value") {
                Some(value) => (value.as_str(), false),
                None => {
                    let rest = &arguments[caps.get(0)?.end()..];
                    ("", rest.starts_with(OPENING_BRACKETS))
                }
            };
            Some((parsed_argument(raw, Some(identifier)), lost_collection))
        })
        .collect()
}

fn positional_arguments(arguments: &str) -> Vec<ParsedArgument> {
    split_arguments(arguments)
        .into_iter()
        .map(|raw| parsed_argument(raw, None))
        .collect()
}

/// Resolves the bindings of a partially typed argument list.
///
/// `parameters` is the declared parameter list of the called method, used only when
/// no explicit keyword was typed. Without it, purely positional input resolves to
/// nothing.
///
/// Resolution stops at the first argument whose position can no longer be
/// trusted: a keyword whose collection value the pattern could not follow and
/// that is not the last one, or a positional fragment that still spans several
/// arguments (later fragments would pair with the wrong parameters).
pub fn resolve(arguments: &str, parameters: Option<&[String]>) -> Vec<KeywordMatch> {
    let keyword_arguments = keyword_arguments(arguments);
    if !keyword_arguments.is_empty() {
        #[cfg(feature = "tracing")]
        debug!(count = keyword_arguments.len(), "resolved explicit keyword arguments");
        return bind_explicit(keyword_arguments);
    }

    match parameters {
        Some(parameters) => {
            #[cfg(feature = "tracing")]
            debug!("no keyword arguments, pairing fragments with the method signature");
            bind_positional(positional_arguments(arguments), parameters)
        }
        None => Vec::new(),
    }
}

fn bind_explicit(tokens: Vec<KeywordToken>) -> Vec<KeywordMatch> {
    let last = tokens.len().saturating_sub(1);
    tokens
        .into_iter()
        .enumerate()
        .take_while(|(idx, (_, lost_collection))| *idx == last || !lost_collection)
        .filter_map(|(_, (arg, _))| {
            let keyword = arg.identifier?;
            Some(KeywordMatch::new(keyword, arg.value).with_complete(arg.is_complete))
        })
        .collect()
}

fn bind_positional(parsed: Vec<ParsedArgument>, parameters: &[String]) -> Vec<KeywordMatch> {
    let mut matches = Vec::new();
    for (parameter, arg) in parameters.iter().zip(parsed) {
        let spans_several = holds_multiple_arguments(&arg.raw);
        matches.push(KeywordMatch::new(parameter.clone(), arg.value).with_complete(arg.is_complete));
        if spans_several {
            break;
        }
    }
    matches
}

fn parsed_argument(raw: &str, identifier: Option<String>) -> ParsedArgument {
    let (value, is_complete) = evaluate(raw);
    ParsedArgument {
        raw: raw.to_string(),
        identifier,
        value,
        is_complete,
    }
}

/// Computes the value bound to one fragment and whether the fragment is closed.
fn evaluate(raw: &str) -> (ArgumentValue, bool) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return (ArgumentValue::Empty, false);
    }
    if let Some(number) = coerce_number(trimmed) {
        return (ArgumentValue::Number(number), true);
    }

    // Scalars always reconstruct; only collections can fail.
    match reconstruct(raw) {
        Ok(literal) => (ArgumentValue::Text(trailing_value(raw)), literal.is_complete),
        Err(_) => (ArgumentValue::Unparseable, false),
    }
}
