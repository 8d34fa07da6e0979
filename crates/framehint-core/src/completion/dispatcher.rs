//! Strategy lookup and dispatch for resolved completion contexts.
//!
//! Strategies are kept in an explicit ordered table keyed by keyword and method.
//! A method-specific entry wins over a [`FunctionKey::Any`] entry for the same
//! keyword; a keyword with no entry completes to nothing.

use crate::config::CompletionConfig;
use crate::types::{ArgumentValue, CompletionContext, KeywordMatch, SiteKind};

use super::locator::slice_current_value;

/// Maps the available columns and the partial value to suggestions.
pub type CompletionStrategy = fn(&[String], &str) -> Vec<String>;

/// Method part of a strategy key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionKey {
    Named(String),
    /// Applies to every method that has no entry of its own.
    Any,
}

impl FunctionKey {
    fn matches(&self, function: &str) -> bool {
        match self {
            FunctionKey::Named(name) => name == function,
            FunctionKey::Any => true,
        }
    }
}

#[derive(Debug, Clone)]
struct StrategyEntry {
    keyword: String,
    function: FunctionKey,
    strategy: CompletionStrategy,
}

/// Keyword/method pairs whose values are column names, as registered by default.
const COLUMN_KEYWORDS: &[(&str, &[&str])] = &[
    ("by", &["groupby", "sort_values"]),
    ("subset", &["drop_duplicates", "dropna", "duplicated"]),
    ("columns", &["drop", "pivot", "pivot_table"]),
    ("index", &["pivot", "pivot_table"]),
    ("values", &["pivot", "pivot_table"]),
    ("keys", &["set_index"]),
    ("on", &["merge", "join"]),
    ("left_on", &["merge"]),
    ("right_on", &["merge"]),
    ("id_vars", &["melt"]),
    ("value_vars", &["melt"]),
];

/// Ordered table of completion strategies.
#[derive(Debug, Clone, Default)]
pub struct StrategyTable {
    entries: Vec<StrategyEntry>,
    slice: Option<CompletionStrategy>,
}

impl StrategyTable {
    /// An empty table: nothing completes.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in data-frame table: column keywords of common methods plus
    /// `frame[[` column selection.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        for (keyword, functions) in COLUMN_KEYWORDS {
            for function in *functions {
                table.register(
                    *keyword,
                    FunctionKey::Named(function.to_string()),
                    complete_columns,
                );
            }
        }
        table.set_slice_strategy(Some(complete_columns));
        table
    }

    /// Builds the default table adjusted by `config`.
    pub fn from_config(config: &CompletionConfig) -> Self {
        let mut table = Self::with_defaults();
        for rule in &config.keywords {
            let function = match &rule.function {
                Some(name) => FunctionKey::Named(name.clone()),
                None => FunctionKey::Any,
            };
            table.register(rule.keyword.clone(), function, complete_columns);
        }
        table
            .entries
            .retain(|entry| config.is_keyword_enabled(&entry.keyword));
        if !config.complete_slices {
            table.set_slice_strategy(None);
        }
        table
    }

    /// Adds an entry. Later entries never shadow earlier ones for the same key.
    pub fn register(
        &mut self,
        keyword: impl Into<String>,
        function: FunctionKey,
        strategy: CompletionStrategy,
    ) {
        self.entries.push(StrategyEntry {
            keyword: keyword.into(),
            function,
            strategy,
        });
    }

    pub fn set_slice_strategy(&mut self, strategy: Option<CompletionStrategy>) {
        self.slice = strategy;
    }

    /// Finds the strategy for `keyword` inside `function`.
    ///
    /// An entry naming the method wins over a wildcard entry.
    pub fn lookup(&self, keyword: &str, function: &str) -> Option<CompletionStrategy> {
        let for_keyword = || self.entries.iter().filter(move |e| e.keyword == keyword);

        for_keyword()
            .find(|e| matches!(&e.function, FunctionKey::Named(_)) && e.function.matches(function))
            .or_else(|| for_keyword().find(|e| e.function == FunctionKey::Any))
            .map(|e| e.strategy)
    }

    pub fn slice_strategy(&self) -> Option<CompletionStrategy> {
        self.slice
    }
}

/// Returns every column starting with `current_value`, in source order.
///
/// Matching is case-sensitive. An empty value matches every column.
pub fn complete_columns(columns: &[String], current_value: &str) -> Vec<String> {
    columns
        .iter()
        .filter(|column| column.starts_with(current_value))
        .cloned()
        .collect()
}

/// Routes a resolved context to its strategy.
///
/// Never fails: an unknown keyword, a numeric or unparseable value, or an empty
/// binding list all produce an empty list.
pub fn dispatch(context: &CompletionContext, table: &StrategyTable, columns: &[String]) -> Vec<String> {
    match &context.kind {
        SiteKind::Slice => {
            let Some(strategy) = table.slice_strategy() else {
                return Vec::new();
            };
            let current = context
                .current()
                .and_then(|binding| binding.value.completion_prefix())
                .unwrap_or_default();
            strategy(columns, &current)
        }
        SiteKind::Call { function } => {
            let Some(binding) = context.current() else {
                return Vec::new();
            };
            let Some(strategy) = table.lookup(&binding.keyword, function) else {
                return Vec::new();
            };
            match binding.value.completion_prefix() {
                Some(prefix) => strategy(columns, &prefix),
                None => Vec::new(),
            }
        }
    }
}

/// Keyword recorded for the binding of a `frame[[` selection.
pub const SLICE_KEYWORD: &str = "[[";

/// The binding for the word being typed inside a selection's brackets.
pub fn slice_binding(contents: &str) -> KeywordMatch {
    let value = match slice_current_value(contents) {
        "" => ArgumentValue::Empty,
        word => ArgumentValue::text(word),
    };
    KeywordMatch::new(SLICE_KEYWORD, value)
}
