use std::borrow::Cow;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Number;

/// Value bound to a keyword or positional parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ArgumentValue {
    /// Nothing typed after the keyword or separator yet.
    Empty,
    /// Clean partial token, quotes and brackets removed.
    Text(String),
    /// Numeric capture, coerced.
    Number(Number),
    /// Collection fragment that could not be closed into a valid literal.
    Unparseable,
}

impl ArgumentValue {
    pub fn text(value: impl Into<String>) -> Self {
        ArgumentValue::Text(value.into())
    }

    /// Prefix to match column names against.
    ///
    /// `None` means the value can never name a column.
    pub fn completion_prefix(&self) -> Option<Cow<'_, str>> {
        match self {
            ArgumentValue::Empty => Some(Cow::Borrowed("")),
            ArgumentValue::Text(text) => Some(Cow::Borrowed(text)),
            ArgumentValue::Number(_) | ArgumentValue::Unparseable => None,
        }
    }
}

/// One argument fragment pulled out of a call's argument list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedArgument {
    /// Raw fragment text. Empty when nothing was captured.
    pub raw: String,
    /// Explicit identifier when written as `name=value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub value: ArgumentValue,
    /// Every bracket and quote in the fragment was closed.
    pub is_complete: bool,
}

/// Resolved binding used to drive completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMatch {
    /// Explicit keyword or inferred parameter name.
    pub keyword: String,
    pub value: ArgumentValue,
    pub is_complete: bool,
}

impl KeywordMatch {
    pub fn new(keyword: impl Into<String>, value: ArgumentValue) -> Self {
        Self {
            keyword: keyword.into(),
            value,
            is_complete: false,
        }
    }

    pub fn with_complete(mut self, is_complete: bool) -> Self {
        self.is_complete = is_complete;
        self
    }
}

/// Which syntactic site the cursor is in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SiteKind {
    /// `target.function(` with the parenthesis still open.
    Call { function: String },
    /// `target[[` column selection.
    Slice,
}

/// Output of the call-site locator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CallSite {
    /// Identifier of the object being called or indexed.
    pub target: String,
    #[serde(flatten)]
    pub kind: SiteKind,
    /// Text after the opening delimiter up to the cursor.
    pub arguments: String,
}

impl CallSite {
    pub fn function(&self) -> Option<&str> {
        match &self.kind {
            SiteKind::Call { function } => Some(function),
            SiteKind::Slice => None,
        }
    }
}

/// Input to the completion dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletionContext {
    pub target: String,
    #[serde(flatten)]
    pub kind: SiteKind,
    /// Bindings in source order; the last one is being typed.
    pub matches: Vec<KeywordMatch>,
}

impl CompletionContext {
    /// The binding under the cursor.
    pub fn current(&self) -> Option<&KeywordMatch> {
        self.matches.last()
    }
}

/// Suggestions for one piece of input, as reported by the CLI host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<CompletionContext>,
    pub suggestions: Vec<String>,
}
