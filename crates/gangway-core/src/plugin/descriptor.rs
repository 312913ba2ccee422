//! Typed plugin declarations.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::binding::RouteRef;
use crate::routing::PageId;

use super::loader::ExtensionLoader;

/// Unique process-wide plugin identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PluginId(String);

impl PluginId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PluginId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PluginId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A lazily loaded renderable unit a plugin contributes at a route.
#[derive(Debug, Clone)]
pub struct Extension {
    name: String,
    mount_point: RouteRef,
    loader: ExtensionLoader,
}

impl Extension {
    pub fn new(name: impl Into<String>, mount_point: RouteRef, loader: ExtensionLoader) -> Self {
        Self {
            name: name.into(),
            mount_point,
            loader,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mount_point(&self) -> &RouteRef {
        &self.mount_point
    }

    pub fn loader(&self) -> &ExtensionLoader {
        &self.loader
    }
}

/// Declares a plugin's identity, the routes it owns, the external routes it
/// requires from other plugins, and the extensions it exports.
#[derive(Debug)]
pub struct PluginDescriptor {
    id: PluginId,
    routes: BTreeMap<String, PageId>,
    external_routes: Vec<String>,
    extensions: Vec<Extension>,
}

impl PluginDescriptor {
    pub fn new(id: impl Into<PluginId>) -> Self {
        Self {
            id: id.into(),
            routes: BTreeMap::new(),
            external_routes: Vec::new(),
            extensions: Vec::new(),
        }
    }

    /// Declare an owned route: a named mount the plugin's page renders at.
    pub fn route(mut self, name: impl Into<String>, page_id: impl Into<PageId>) -> Self {
        self.routes.insert(name.into(), page_id.into());
        self
    }

    /// Declare a route this plugin requires but does not own. Must be bound
    /// at assembly time or composition fails.
    pub fn external_route(mut self, name: impl Into<String>) -> Self {
        self.external_routes.push(name.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.extensions.push(extension);
        self
    }

    pub fn id(&self) -> &PluginId {
        &self.id
    }

    pub fn routes(&self) -> &BTreeMap<String, PageId> {
        &self.routes
    }

    pub fn owns_route(&self, name: &str) -> Option<&PageId> {
        self.routes.get(name)
    }

    pub fn external_routes(&self) -> &[String] {
        &self.external_routes
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    /// Reference one of this plugin's routes for use in a binding.
    pub fn route_ref(&self, name: impl Into<String>) -> RouteRef {
        RouteRef::new(self.id.clone(), name)
    }
}
