//! Plugin descriptors, the closed plugin registry, and lazy extension
//! loading.

mod descriptor;
mod loader;
mod registry;

pub use descriptor::{Extension, PluginDescriptor, PluginId};
pub use loader::{
    ExtensionLoader, ExtensionState, Renderable, RenderableHandle, StaticPage,
};
pub use registry::PluginRegistry;
