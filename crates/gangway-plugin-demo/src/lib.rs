//! Demo plugin: registers one owned route and one lazily loaded extension
//! mounted at it. Exists to exercise the assembly layer end to end the way
//! a real secondary plugin would.

use gangway_core::{
    Extension, ExtensionLoader, PluginDescriptor, Renderable, RenderableHandle, RouteRef,
};
use std::sync::Arc;
use tracing::debug;

/// Page id the demo plugin's root route renders.
pub const DEMO_PAGE_ID: &str = "demo-plugin-page";

/// Plugin id, unique process-wide.
pub const PLUGIN_ID: &str = "demo-plugin";

/// Name of the plugin's single owned route.
pub const ROOT_ROUTE: &str = "root";

struct DemoPage;

impl Renderable for DemoPage {
    fn name(&self) -> &str {
        "DemoPluginPage"
    }
}

/// Build the demo plugin descriptor. The page is produced lazily by the
/// extension loader on first render request.
pub fn plugin() -> PluginDescriptor {
    PluginDescriptor::new(PLUGIN_ID)
        .route(ROOT_ROUTE, DEMO_PAGE_ID)
        .extension(Extension::new(
            "DemoPluginPage",
            RouteRef::new(PLUGIN_ID, ROOT_ROUTE),
            ExtensionLoader::new("DemoPluginPage", || async {
                debug!("producing demo plugin page");
                Ok(Arc::new(DemoPage) as RenderableHandle)
            }),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_owns_its_root_route() {
        let descriptor = plugin();
        assert_eq!(descriptor.id().as_str(), PLUGIN_ID);
        assert_eq!(
            descriptor.owns_route(ROOT_ROUTE).map(|p| p.as_str()),
            Some(DEMO_PAGE_ID)
        );
        assert_eq!(descriptor.extensions().len(), 1);
        assert_eq!(
            descriptor.extensions()[0].mount_point(),
            &RouteRef::new(PLUGIN_ID, ROOT_ROUTE)
        );
    }

    #[tokio::test]
    async fn extension_loads_the_demo_page() {
        let descriptor = plugin();
        let handle = descriptor.extensions()[0].loader().resolve().await.unwrap();
        assert_eq!(handle.name(), "DemoPluginPage");
    }
}
