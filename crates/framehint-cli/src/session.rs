//! Session loading and the CLI's stand-in shell.
//!
//! A session file names the data frames in scope and, optionally, the
//! completion settings:
//!
//! ```json
//! {
//!   "frames": { "df": ["Name", "FavoriteFood"] },
//!   "config": { "disabledKeywords": ["subset"] }
//! }
//! ```
//!
//! [`Shell`] plays the role of an interactive shell: it owns the namespace and a
//! provider chain that starts with a generic name completer, and the column
//! completer is installed in front of it.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use framehint_core::host::{
    install, uninstall, CompletionProvider, Installation, Namespace, ProviderRegistry,
    TabularObject,
};
use framehint_core::{ColumnCompleter, CompletionConfig, CompletionContext, CompletionRequest};
use serde::Deserialize;

/// On-disk session description.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SessionFile {
    /// Frame name to column names, in column order.
    #[serde(default)]
    pub frames: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    pub config: Option<CompletionConfig>,
}

/// Load a session from a JSON file.
pub fn load_session(path: &Path) -> Result<SessionFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read session file: {}", path.display()))?;

    parse_session(&content)
        .with_context(|| format!("Invalid session file: {}", path.display()))
}

fn parse_session(content: &str) -> Result<SessionFile> {
    Ok(serde_json::from_str(content)?)
}

/// A data frame known only by its columns.
#[derive(Debug, Clone)]
pub struct DataFrame {
    columns: Vec<String>,
}

impl TabularObject for DataFrame {
    fn column_names(&self) -> Vec<String> {
        self.columns.clone()
    }
}

/// Names bound in the session.
#[derive(Debug, Clone, Default)]
pub struct SessionNamespace {
    frames: BTreeMap<String, DataFrame>,
}

impl SessionNamespace {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.frames.keys().map(String::as_str)
    }
}

impl Namespace for SessionNamespace {
    fn lookup(&self, name: &str) -> Option<&dyn TabularObject> {
        self.frames.get(name).map(|frame| frame as &dyn TabularObject)
    }
}

/// Completes the identifier under the cursor against bound names.
#[derive(Debug, Clone)]
pub struct NameCompleter {
    names: Vec<String>,
}

impl NameCompleter {
    pub const ID: &'static str = "framehint.names";

    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl CompletionProvider for NameCompleter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn complete(&self, request: &CompletionRequest, _namespace: &dyn Namespace) -> Vec<String> {
        let word = request
            .text_until_cursor()
            .rsplit(|c: char| !(c.is_alphanumeric() || c == '_'))
            .next()
            .unwrap_or_default();
        if word.is_empty() {
            return Vec::new();
        }

        self.names
            .iter()
            .filter(|name| name.starts_with(word))
            .cloned()
            .collect()
    }
}

/// Ordered provider chain with a merge switch.
#[derive(Default)]
pub struct ProviderChain {
    providers: Vec<Box<dyn CompletionProvider>>,
    merge: bool,
}

impl ProviderChain {
    pub fn new(merge: bool) -> Self {
        Self {
            providers: Vec::new(),
            merge,
        }
    }

    pub fn provider_ids(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    /// Runs the chain.
    ///
    /// With merging on, results of every provider are concatenated without
    /// duplicates. With merging off, the first non-empty result wins.
    pub fn complete(&self, request: &CompletionRequest, namespace: &dyn Namespace) -> Vec<String> {
        if !self.merge {
            return self
                .providers
                .iter()
                .map(|provider| provider.complete(request, namespace))
                .find(|suggestions| !suggestions.is_empty())
                .unwrap_or_default();
        }

        let mut seen = HashSet::new();
        let mut merged = Vec::new();
        for provider in &self.providers {
            for suggestion in provider.complete(request, namespace) {
                if seen.insert(suggestion.clone()) {
                    merged.push(suggestion);
                }
            }
        }
        merged
    }
}

impl ProviderRegistry for ProviderChain {
    fn insert_first(&mut self, provider: Box<dyn CompletionProvider>) {
        self.providers.insert(0, provider);
    }

    fn remove(&mut self, id: &str) -> Option<Box<dyn CompletionProvider>> {
        let idx = self.providers.iter().position(|p| p.id() == id)?;
        Some(self.providers.remove(idx))
    }

    fn merge_results(&self) -> bool {
        self.merge
    }

    fn set_merge_results(&mut self, merge: bool) {
        self.merge = merge;
    }
}

/// Stand-in interactive shell with the column completer installed.
pub struct Shell {
    namespace: SessionNamespace,
    chain: ProviderChain,
    completer: ColumnCompleter,
    installation: Option<Installation>,
}

impl Shell {
    /// Builds the shell and installs the column completer.
    pub fn new(session: SessionFile) -> Self {
        let frames = session
            .frames
            .into_iter()
            .map(|(name, columns)| (name, DataFrame { columns }))
            .collect();
        let namespace = SessionNamespace { frames };

        let mut chain = ProviderChain::new(true);
        chain.insert_first(Box::new(NameCompleter::new(
            namespace.names().map(str::to_string).collect(),
        )));

        let completer = ColumnCompleter::with_config(session.config.unwrap_or_default());
        let installation = install(&mut chain, Box::new(completer.clone()));

        Self {
            namespace,
            chain,
            completer,
            installation: Some(installation),
        }
    }

    pub fn complete(&self, request: &CompletionRequest) -> Vec<String> {
        self.chain.complete(request, &self.namespace)
    }

    /// The column completer's view of the request, for `--context` output.
    pub fn context(&self, request: &CompletionRequest) -> Option<CompletionContext> {
        match self
            .completer
            .completion_context(request.text_until_cursor(), &self.namespace)
        {
            Ok(context) => context,
            Err(err) => {
                tracing::warn!(error = %err, "cannot resolve completion context");
                None
            }
        }
    }

    pub fn chain(&self) -> &ProviderChain {
        &self.chain
    }
}

impl Drop for Shell {
    fn drop(&mut self) {
        if let Some(installation) = self.installation.take() {
            uninstall(&mut self.chain, installation);
        }
    }
}
