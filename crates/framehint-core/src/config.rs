//! Configuration for column completion.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Configuration for the column completer.
///
/// The default table covers the column-valued keywords of common data-frame
/// methods and `frame[[` selections. Keywords can be added or switched off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletionConfig {
    /// Master toggle for completion (default: true).
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Extra keywords whose values are column names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<KeywordRule>,

    /// Keywords to remove from the table (e.g., ["subset"]).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled_keywords: Vec<String>,

    /// Complete inside `frame[[` selections (default: true).
    #[serde(default = "default_enabled")]
    pub complete_slices: bool,
}

/// A keyword that completes to column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRule {
    pub keyword: String,

    /// Method the keyword applies to; every method when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            keywords: Vec::new(),
            disabled_keywords: Vec::new(),
            complete_slices: true,
        }
    }
}

fn default_enabled() -> bool {
    true
}

impl CompletionConfig {
    /// Returns true if `keyword` has not been disabled.
    pub fn is_keyword_enabled(&self, keyword: &str) -> bool {
        self.enabled && !self.disabled_keywords.iter().any(|k| k == keyword)
    }
}
