//! Human-readable output formatting.

use framehint_core::{ArgumentValue, CompletionContext, CompletionResult, SiteKind};
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Format completion results as an indented listing with optional colors.
pub fn format_table(results: &[CompletionResult], colored: bool) -> String {
    let mut out = String::new();

    for result in results {
        if colored {
            writeln!(out, "{}", result.text.bold()).unwrap();
        } else {
            writeln!(out, "{}", result.text).unwrap();
        }

        if let Some(context) = &result.context {
            write_context(&mut out, context, colored);
        }

        if result.suggestions.is_empty() {
            let none = "(no suggestions)";
            if colored {
                writeln!(out, "  {}", none.dimmed()).unwrap();
            } else {
                writeln!(out, "  {none}").unwrap();
            }
        }
        for suggestion in &result.suggestions {
            if colored {
                writeln!(out, "  {}", suggestion.green()).unwrap();
            } else {
                writeln!(out, "  {suggestion}").unwrap();
            }
        }
    }

    out
}

fn write_context(out: &mut String, context: &CompletionContext, colored: bool) {
    let site = match &context.kind {
        SiteKind::Call { function } => format!("{}.{function}(", context.target),
        SiteKind::Slice => format!("{}[[", context.target),
    };
    let binding = context
        .current()
        .map(|m| format!("{} = {}", m.keyword, describe_value(&m.value)))
        .unwrap_or_else(|| "no binding".to_string());

    let line = format!("{site} {binding}");
    if colored {
        writeln!(out, "  {}", line.cyan()).unwrap();
    } else {
        writeln!(out, "  {line}").unwrap();
    }
}

fn describe_value(value: &ArgumentValue) -> String {
    match value {
        ArgumentValue::Empty => "<empty>".to_string(),
        ArgumentValue::Text(text) => format!("{text:?}"),
        ArgumentValue::Number(number) => number.to_string(),
        ArgumentValue::Unparseable => "<unparseable>".to_string(),
    }
}
