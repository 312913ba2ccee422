//! External-route binding.
//!
//! Plugins reference each other's pages by abstract name rather than by
//! compile-time dependency. At assembly time every declared external route
//! is resolved to a concrete route supplied by another plugin; the resolved
//! table is immutable for the process lifetime.

use std::collections::BTreeMap;
use std::fmt;

use crate::plugin::PluginId;
use crate::routing::PageId;

/// A concrete route owned by a plugin, addressed as `(plugin, route name)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RouteRef {
    pub plugin: PluginId,
    pub name: String,
}

impl RouteRef {
    pub fn new(plugin: impl Into<PluginId>, name: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RouteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.plugin, self.name)
    }
}

/// An abstract route a plugin requires but does not own.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExternalRouteRef {
    pub plugin: PluginId,
    pub name: String,
}

impl ExternalRouteRef {
    pub fn new(plugin: impl Into<PluginId>, name: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ExternalRouteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.plugin, self.name)
    }
}

/// A fully resolved binding target: the provider's route, the page it
/// renders, and the pattern path it is mounted at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundRoute {
    pub target: RouteRef,
    pub page_id: PageId,
    pub path: String,
}

/// Immutable map from `(consuming plugin, external route name)` to the
/// provider's concrete route. Built exactly once by the app builder, before
/// the route table is used; never re-evaluated.
#[derive(Debug, Default)]
pub struct BindingTable {
    bindings: BTreeMap<(PluginId, String), BoundRoute>,
}

impl BindingTable {
    pub(crate) fn insert(&mut self, external: ExternalRouteRef, bound: BoundRoute) {
        self.bindings
            .insert((external.plugin, external.name), bound);
    }

    pub fn lookup(&self, plugin: &PluginId, name: &str) -> Option<&BoundRoute> {
        self.bindings.get(&(plugin.clone(), name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
