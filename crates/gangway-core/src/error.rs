//! Startup and load error taxonomy.
//!
//! Only configuration errors escalate past the assembly boundary. Navigation
//! misses, guard denials, and extension load failures are contained and
//! rendered locally at the point they occur.

use thiserror::Error;

use crate::binding::ExternalRouteRef;
use crate::plugin::PluginId;

/// Fatal configuration errors, surfaced before first render. Composition
/// halts rather than proceeding with partial tables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two sibling routes declared the same path pattern.
    #[error("duplicate route pattern '{pattern}' under '{parent}'")]
    DuplicateSiblingPath { parent: String, pattern: String },

    /// A `*` appears somewhere other than the final segment of a pattern.
    #[error("wildcard must be the final segment in pattern '{pattern}'")]
    NonTrailingWildcard { pattern: String },

    /// A redirect rule points at a path no route matches.
    #[error("redirect from '{from}' targets unmatched path '{to}'")]
    UnknownRedirectTarget { from: String, to: String },

    /// Two plugins registered under the same id.
    #[error("duplicate plugin id '{0}'")]
    DuplicatePluginId(PluginId),

    /// A binding names a route its provider plugin does not own.
    #[error("plugin '{plugin}' owns no route named '{route}'")]
    UnknownProviderRoute { plugin: PluginId, route: String },

    /// Declared external routes that were never bound to a concrete route.
    /// Lists every unresolved dependency, not just the first.
    #[error("{} unresolved external route(s): {}", unresolved.len(), join_refs(unresolved))]
    UnresolvedExternalRoutes { unresolved: Vec<ExternalRouteRef> },

    /// A theme omitted the page-theme entry for its declared default
    /// category.
    #[error("theme '{theme}' is missing its default page category '{category}'")]
    MissingDefaultPageTheme { theme: String, category: String },

    /// A color literal could not be parsed as `#rrggbb`.
    #[error("invalid color literal '{0}'")]
    InvalidColor(String),
}

fn join_refs(refs: &[ExternalRouteRef]) -> String {
    refs.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Extension load failure. Cloneable because the loader caches the failed
/// outcome and replays it to every later caller until an explicit reload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("extension load failed: {message}")]
pub struct LoadError {
    message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
