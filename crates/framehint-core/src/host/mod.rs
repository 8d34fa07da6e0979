//! Collaborator traits implemented by the host shell.
//!
//! The completer never resolves names or reads columns itself. A host provides:
//!
//! - a [`Namespace`] that resolves identifiers to [`TabularObject`]s;
//! - a [`ProviderRegistry`], the host's ordered chain of completion providers.
//!
//! [`install`] puts a [`CompletionProvider`] at the front of the chain and turns
//! off result merging, so this provider's suggestions replace the host's generic
//! ones whenever it has any. The returned [`Installation`] carries the previous
//! merge setting and must be handed back to [`uninstall`].

pub mod signatures;

use crate::error::HostError;
use crate::types::CompletionRequest;

/// An object with named columns.
pub trait TabularObject {
    /// Column names in source order.
    fn column_names(&self) -> Vec<String>;

    /// Declared parameter names of `method`, in order.
    ///
    /// `Ok(None)` means the method is unknown; `Err` means introspection failed.
    /// The default answers from [`signatures::parameters_of`].
    fn describe_parameters(&self, method: &str) -> Result<Option<Vec<String>>, HostError> {
        Ok(signatures::parameters_of(method))
    }
}

/// Name lookup in the interactive session.
pub trait Namespace {
    /// Resolves `name` to a tabular object.
    ///
    /// Names bound to anything else, and unbound names, return `None`.
    fn lookup(&self, name: &str) -> Option<&dyn TabularObject>;
}

/// One entry of a host's completion chain.
pub trait CompletionProvider {
    /// Stable identifier used to remove the provider again.
    fn id(&self) -> &str;

    fn complete(&self, request: &CompletionRequest, namespace: &dyn Namespace) -> Vec<String>;
}

/// The host's ordered provider chain.
pub trait ProviderRegistry {
    /// Inserts `provider` ahead of every existing provider.
    fn insert_first(&mut self, provider: Box<dyn CompletionProvider>);

    /// Removes the provider registered under `id`, returning it.
    fn remove(&mut self, id: &str) -> Option<Box<dyn CompletionProvider>>;

    /// Whether results of all providers are merged.
    fn merge_results(&self) -> bool;

    fn set_merge_results(&mut self, merge: bool);
}

/// Proof that a provider is installed, holding the state to restore.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "pass the installation to `uninstall` to restore the registry"]
pub struct Installation {
    provider_id: String,
    previous_merge: bool,
}

impl Installation {
    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    /// Merge setting in effect before installation.
    pub fn previous_merge(&self) -> bool {
        self.previous_merge
    }
}

/// Installs `provider` first in `registry` and disables merging.
pub fn install(
    registry: &mut dyn ProviderRegistry,
    provider: Box<dyn CompletionProvider>,
) -> Installation {
    let installation = Installation {
        provider_id: provider.id().to_string(),
        previous_merge: registry.merge_results(),
    };
    registry.insert_first(provider);
    registry.set_merge_results(false);

    #[cfg(feature = "tracing")]
    tracing::debug!(provider = %installation.provider_id, "completion provider installed");

    installation
}

/// Removes the installed provider and restores the previous merge setting.
///
/// Returns the removed provider, or `None` if it was already gone; the merge
/// setting is restored either way.
pub fn uninstall(
    registry: &mut dyn ProviderRegistry,
    installation: Installation,
) -> Option<Box<dyn CompletionProvider>> {
    let removed = registry.remove(&installation.provider_id);
    registry.set_merge_results(installation.previous_merge);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        provider = %installation.provider_id,
        found = removed.is_some(),
        "completion provider uninstalled"
    );

    removed
}
