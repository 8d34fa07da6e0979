//! JSON output formatting.

use framehint_core::CompletionResult;

/// Format completion results as a JSON array.
///
/// If `compact` is true, outputs minified JSON without whitespace.
pub fn format_json(results: &[CompletionResult], compact: bool) -> String {
    if compact {
        serde_json::to_string(results).expect("serialization cannot fail")
    } else {
        serde_json::to_string_pretty(results).expect("serialization cannot fail")
    }
}
