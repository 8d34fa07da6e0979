//! The completion pipeline as a host provider.

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

use super::dispatcher::{dispatch, slice_binding, StrategyTable};
use super::locator::locate;
use super::resolver::resolve;
use crate::config::CompletionConfig;
use crate::error::CompletionError;
use crate::host::{CompletionProvider, Namespace, TabularObject};
use crate::types::{CompletionContext, CompletionRequest, SiteKind};

/// Suggests column names for the call or selection under the cursor.
///
/// ```
/// use framehint_core::host::{Namespace, TabularObject};
/// use framehint_core::ColumnCompleter;
///
/// struct Frame;
/// impl TabularObject for Frame {
///     fn column_names(&self) -> Vec<String> {
///         vec!["Name".into(), "FavoriteFood".into()]
///     }
/// }
///
/// struct Session;
/// impl Namespace for Session {
///     fn lookup(&self, name: &str) -> Option<&dyn TabularObject> {
///         (name == "df").then_some(&Frame as &dyn TabularObject)
///     }
/// }
///
/// let completer = ColumnCompleter::new();
/// assert_eq!(completer.complete_text(r#"df.groupby(by="Fa"#, &Session), vec!["FavoriteFood"]);
/// ```
#[derive(Debug, Clone)]
pub struct ColumnCompleter {
    config: CompletionConfig,
    table: StrategyTable,
}

impl Default for ColumnCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnCompleter {
    /// Identifier under which the completer registers with a host.
    pub const ID: &'static str = "framehint.columns";

    pub fn new() -> Self {
        Self::with_config(CompletionConfig::default())
    }

    pub fn with_config(config: CompletionConfig) -> Self {
        let table = StrategyTable::from_config(&config);
        Self { config, table }
    }

    /// Uses `table` as is, ignoring keyword settings in `config`.
    pub fn with_table(config: CompletionConfig, table: StrategyTable) -> Self {
        Self { config, table }
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Resolves what the cursor is in, without computing suggestions.
    ///
    /// `Ok(None)` when completion is disabled, the text has no call or selection
    /// shape, or the target is not a tabular object.
    pub fn completion_context(
        &self,
        text: &str,
        namespace: &dyn Namespace,
    ) -> Result<Option<CompletionContext>, CompletionError> {
        Ok(self.resolve_site(text, namespace)?.map(|(context, _)| context))
    }

    /// Suggestions for `text`, surfacing host introspection failures.
    pub fn try_complete(
        &self,
        text: &str,
        namespace: &dyn Namespace,
    ) -> Result<Vec<String>, CompletionError> {
        let Some((context, object)) = self.resolve_site(text, namespace)? else {
            return Ok(Vec::new());
        };
        let suggestions = dispatch(&context, &self.table, &object.column_names());

        #[cfg(feature = "tracing")]
        debug!(
            keyword = context.current().map(|m| m.keyword.as_str()),
            count = suggestions.len(),
            "dispatched completion"
        );

        Ok(suggestions)
    }

    /// Suggestions for `text`; any error yields an empty list.
    pub fn complete_text(&self, text: &str, namespace: &dyn Namespace) -> Vec<String> {
        match self.try_complete(text, namespace) {
            Ok(suggestions) => suggestions,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                warn!(error = %_err, "column completion failed");
                Vec::new()
            }
        }
    }

    fn resolve_site<'a>(
        &self,
        text: &str,
        namespace: &'a dyn Namespace,
    ) -> Result<Option<(CompletionContext, &'a dyn TabularObject)>, CompletionError> {
        if !self.config.enabled {
            return Ok(None);
        }
        let Some(site) = locate(text) else {
            return Ok(None);
        };

        #[cfg(feature = "tracing")]
        debug!(target_name = %site.target, function = ?site.function(), "located call site");

        let Some(object) = namespace.lookup(&site.target) else {
            #[cfg(feature = "tracing")]
            debug!(target_name = %site.target, "target is not a tabular object");
            return Ok(None);
        };

        let matches = match &site.kind {
            SiteKind::Slice => vec![slice_binding(&site.arguments)],
            SiteKind::Call { function } => {
                let parameters = object.describe_parameters(function)?;
                resolve(&site.arguments, parameters.as_deref())
            }
        };

        let context = CompletionContext {
            target: site.target,
            kind: site.kind,
            matches,
        };
        Ok(Some((context, object)))
    }
}

impl CompletionProvider for ColumnCompleter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn complete(&self, request: &CompletionRequest, namespace: &dyn Namespace) -> Vec<String> {
        self.complete_text(request.text_until_cursor(), namespace)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::HostError;
    use crate::types::{ArgumentValue, KeywordMatch};

    struct Frame {
        columns: Vec<String>,
        broken: bool,
    }

    impl TabularObject for Frame {
        fn column_names(&self) -> Vec<String> {
            self.columns.clone()
        }

        fn describe_parameters(&self, method: &str) -> Result<Option<Vec<String>>, HostError> {
            if self.broken {
                return Err(HostError::new(method, "signature unavailable"));
            }
            Ok(crate::host::signatures::parameters_of(method))
        }
    }

    #[derive(Default)]
    struct Session(HashMap<String, Frame>);

    impl Session {
        fn with_frame(mut self, name: &str, columns: &[&str], broken: bool) -> Self {
            let frame = Frame {
                columns: columns.iter().map(|c| c.to_string()).collect(),
                broken,
            };
            self.0.insert(name.to_string(), frame);
            self
        }
    }

    impl Namespace for Session {
        fn lookup(&self, name: &str) -> Option<&dyn TabularObject> {
            self.0.get(name).map(|frame| frame as &dyn TabularObject)
        }
    }

    fn session() -> Session {
        Session::default()
            .with_frame("df", &["Name", "FavoriteFood"], false)
            .with_frame("bad", &["Name"], true)
    }

    #[test]
    fn test_keyword_completion() {
        let completer = ColumnCompleter::new();
        assert_eq!(
            completer.complete_text(r#"df.groupby(by=""#, &session()),
            vec!["Name", "FavoriteFood"]
        );
        assert_eq!(
            completer.complete_text("df.groupby(", &session()),
            vec!["Name", "FavoriteFood"]
        );
    }

    #[test]
    fn test_unknown_target_is_empty() {
        let completer = ColumnCompleter::new();
        assert!(completer.complete_text(r#"other.groupby(by=""#, &session()).is_empty());
        assert_eq!(
            completer.completion_context(r#"other.groupby(by=""#, &session()),
            Ok(None)
        );
    }

    #[test]
    fn test_context_for_call() {
        let completer = ColumnCompleter::new();
        let context = completer
            .completion_context(r#"df.drop_duplicates(subset=["Name", "Fa"#, &session())
            .unwrap()
            .unwrap();
        assert_eq!(context.target, "df");
        assert_eq!(
            context.kind,
            SiteKind::Call {
                function: "drop_duplicates".to_string()
            }
        );
        assert_eq!(
            context.matches,
            vec![KeywordMatch::new("subset", ArgumentValue::text("Fa"))]
        );
    }

    #[test]
    fn test_host_error_degrades_to_empty() {
        let completer = ColumnCompleter::new();
        assert!(matches!(
            completer.try_complete("bad.groupby(", &session()),
            Err(CompletionError::Host(_))
        ));
        assert!(completer.complete_text("bad.groupby(", &session()).is_empty());
    }

    #[test]
    fn test_host_error_not_raised_for_slices() {
        let completer = ColumnCompleter::new();
        assert_eq!(completer.try_complete("bad[[", &session()), Ok(vec!["Name".to_string()]));
    }

    #[test]
    fn test_disabled_completer() {
        let completer = ColumnCompleter::with_config(CompletionConfig {
            enabled: false,
            ..CompletionConfig::default()
        });
        assert!(completer.complete_text("df.groupby(", &session()).is_empty());
        assert_eq!(completer.completion_context("df[[", &session()), Ok(None));
    }

    #[test]
    fn test_provider_uses_cell_for_continuation_lines() {
        let completer = ColumnCompleter::new();
        let code = "df.groupby(\n  by=\"Fa\")";
        let cursor = code.find("Fa").unwrap() + 2;
        let request = CompletionRequest::from_line("  by=\"Fa").with_cell(code, cursor);

        assert_eq!(completer.id(), ColumnCompleter::ID);
        assert_eq!(completer.complete(&request, &session()), vec!["FavoriteFood"]);
    }
}
