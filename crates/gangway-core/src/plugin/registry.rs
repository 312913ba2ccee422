//! Closed, id-keyed plugin registry.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::ConfigError;

use super::descriptor::{PluginDescriptor, PluginId};

/// All plugins known to the application, keyed by unique id. Populated
/// during assembly and never mutated afterwards.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: BTreeMap<PluginId, PluginDescriptor>,
    order: Vec<PluginId>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, descriptor: PluginDescriptor) -> Result<(), ConfigError> {
        let id = descriptor.id().clone();
        if self.plugins.contains_key(&id) {
            return Err(ConfigError::DuplicatePluginId(id));
        }
        debug!(plugin = %id, "registered plugin");
        self.order.push(id.clone());
        self.plugins.insert(id, descriptor);
        Ok(())
    }

    pub fn get(&self, id: &PluginId) -> Option<&PluginDescriptor> {
        self.plugins.get(id)
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &PluginDescriptor> {
        self.order.iter().filter_map(|id| self.plugins.get(id))
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut registry = PluginRegistry::new();
        registry
            .register(PluginDescriptor::new("catalog"))
            .unwrap();
        let err = registry
            .register(PluginDescriptor::new("catalog"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePluginId(id) if id.as_str() == "catalog"));
    }

    #[test]
    fn iteration_preserves_registration_order() {
        let mut registry = PluginRegistry::new();
        for id in ["scaffolder", "catalog", "techdocs"] {
            registry.register(PluginDescriptor::new(id)).unwrap();
        }
        let ids: Vec<_> = registry.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["scaffolder", "catalog", "techdocs"]);
    }
}
