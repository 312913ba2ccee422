//! Application assembly.
//!
//! Collects the static declarations - plugins, routes, redirects, external
//! route bindings, themes, sign-in - validates them, and produces the
//! immutable [`App`] handed to the host framework. Any configuration error
//! halts composition before first render; partial tables are never handed
//! out.

use std::sync::Arc;

use tracing::info;

use crate::auth::SignInConfig;
use crate::binding::{BindingTable, BoundRoute, ExternalRouteRef, RouteRef};
use crate::error::ConfigError;
use crate::guard::PermissionEvaluator;
use crate::navigation::Navigator;
use crate::plugin::{Extension, PluginDescriptor, PluginId, PluginRegistry};
use crate::routing::{RouteEntry, RouteTable, RouteTableBuilder};
use crate::theme::ThemeDescriptor;

/// Builder for an [`App`].
#[derive(Debug, Default)]
pub struct AppBuilder {
    registry: PluginRegistry,
    routes: RouteTableBuilder,
    binds: Vec<(ExternalRouteRef, RouteRef)>,
    themes: Vec<ThemeDescriptor>,
    sign_in: Option<SignInConfig>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin. Ids are unique process-wide.
    pub fn plugin(mut self, descriptor: PluginDescriptor) -> Result<Self, ConfigError> {
        self.registry.register(descriptor)?;
        Ok(self)
    }

    /// Append a top-level route. Declaration order decides precedence.
    pub fn route(mut self, entry: RouteEntry) -> Self {
        self.routes = self.routes.route(entry);
        self
    }

    pub fn redirect(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.routes = self.routes.redirect(from, to);
        self
    }

    /// Bind a plugin's declared external route to a concrete route owned by
    /// another plugin.
    pub fn bind(mut self, external: ExternalRouteRef, target: RouteRef) -> Self {
        self.binds.push((external, target));
        self
    }

    pub fn theme(mut self, theme: ThemeDescriptor) -> Self {
        self.themes.push(theme);
        self
    }

    pub fn sign_in(mut self, config: SignInConfig) -> Self {
        self.sign_in = Some(config);
        self
    }

    /// Validate everything and freeze the assembly. Route-table validation
    /// runs first, then external-route binding resolution.
    pub fn build(self) -> Result<App, ConfigError> {
        let table = self.routes.build()?;
        let bindings = resolve_bindings(&self.registry, &table, &self.binds)?;
        info!(
            routes = table.routes().len(),
            plugins = self.registry.len(),
            bindings = bindings.len(),
            themes = self.themes.len(),
            "application assembled"
        );
        Ok(App {
            route_table: Arc::new(table),
            bindings,
            registry: self.registry,
            themes: self.themes,
            sign_in: self.sign_in,
        })
    }
}

/// Resolve every declared external route, or fail listing all of the
/// unresolved ones. Runs exactly once, before the route table is used.
fn resolve_bindings(
    registry: &PluginRegistry,
    table: &RouteTable,
    binds: &[(ExternalRouteRef, RouteRef)],
) -> Result<BindingTable, ConfigError> {
    // Bind targets must name routes their provider actually owns.
    for (_, target) in binds {
        let owned = registry
            .get(&target.plugin)
            .and_then(|plugin| plugin.owns_route(&target.name));
        if owned.is_none() {
            return Err(ConfigError::UnknownProviderRoute {
                plugin: target.plugin.clone(),
                route: target.name.clone(),
            });
        }
    }

    let mut resolved = BindingTable::default();
    let mut unresolved = Vec::new();
    for plugin in registry.iter() {
        for name in plugin.external_routes() {
            let external = ExternalRouteRef::new(plugin.id().clone(), name.clone());
            let bound = binds
                .iter()
                .find(|(declared, _)| declared == &external)
                .and_then(|(_, target)| {
                    let page_id = registry
                        .get(&target.plugin)?
                        .owns_route(&target.name)?
                        .clone();
                    // The provider's page must actually be mounted somewhere.
                    let path = table.path_of(&page_id)?;
                    Some(BoundRoute {
                        target: target.clone(),
                        page_id,
                        path,
                    })
                });
            match bound {
                Some(bound) => resolved.insert(external, bound),
                None => unresolved.push(external),
            }
        }
    }

    if unresolved.is_empty() {
        Ok(resolved)
    } else {
        Err(ConfigError::UnresolvedExternalRoutes { unresolved })
    }
}

/// The immutable product of assembly: route table, binding table, themes,
/// plugins, and sign-in configuration. Safe for unsynchronized concurrent
/// reads; the extension loader caches are the only interior mutability.
#[derive(Debug)]
pub struct App {
    route_table: Arc<RouteTable>,
    bindings: BindingTable,
    registry: PluginRegistry,
    themes: Vec<ThemeDescriptor>,
    sign_in: Option<SignInConfig>,
}

impl App {
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn route_table(&self) -> &RouteTable {
        &self.route_table
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    pub fn plugins(&self) -> &PluginRegistry {
        &self.registry
    }

    pub fn themes(&self) -> &[ThemeDescriptor] {
        &self.themes
    }

    /// Look up a theme by id, falling back to the first registered theme.
    pub fn theme(&self, id: &str) -> Option<&ThemeDescriptor> {
        self.themes
            .iter()
            .find(|theme| theme.id() == id)
            .or_else(|| self.themes.first())
    }

    pub fn sign_in(&self) -> Option<&SignInConfig> {
        self.sign_in.as_ref()
    }

    /// Construct a navigator over this app's route table with the given
    /// permission evaluator.
    pub fn navigator(&self, permissions: Arc<dyn PermissionEvaluator>) -> Navigator {
        Navigator::new(Arc::clone(&self.route_table), permissions)
    }

    /// All `{loader, mount point}` pairs for the host, in plugin
    /// registration order.
    pub fn extensions(&self) -> impl Iterator<Item = (&PluginId, &Extension)> {
        self.registry
            .iter()
            .flat_map(|plugin| plugin.extensions().iter().map(move |ext| (plugin.id(), ext)))
    }
}

/// The external rendering host. Receives the assembled tables and drives
/// rendering from there; everything past this trait is out of scope for the
/// assembly layer.
pub trait RenderHost {
    fn receive(&mut self, app: &App);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::{ExtensionLoader, StaticPage};

    fn catalog() -> PluginDescriptor {
        PluginDescriptor::new("catalog")
            .route("catalogIndex", "catalog-index")
            .route("catalogEntity", "catalog-entity")
            .external_route("createComponent")
            .external_route("viewTechDoc")
    }

    fn scaffolder() -> PluginDescriptor {
        PluginDescriptor::new("scaffolder").route("root", "scaffolder-page")
    }

    fn techdocs() -> PluginDescriptor {
        PluginDescriptor::new("techdocs").route("docRoot", "techdocs-reader")
    }

    fn base_routes(builder: AppBuilder) -> AppBuilder {
        builder
            .redirect("/", "/catalog")
            .route(RouteEntry::new("/catalog", "catalog-index"))
            .route(RouteEntry::new(
                "/catalog/:namespace/:kind/:name",
                "catalog-entity",
            ))
            .route(RouteEntry::new("/create", "scaffolder-page"))
            .route(RouteEntry::new(
                "/docs/:namespace/:kind/:name/*",
                "techdocs-reader",
            ))
    }

    #[test]
    fn binding_resolution_succeeds_when_everything_is_bound() {
        let app = base_routes(AppBuilder::new())
            .plugin(catalog())
            .unwrap()
            .plugin(scaffolder())
            .unwrap()
            .plugin(techdocs())
            .unwrap()
            .bind(
                ExternalRouteRef::new("catalog", "createComponent"),
                RouteRef::new("scaffolder", "root"),
            )
            .bind(
                ExternalRouteRef::new("catalog", "viewTechDoc"),
                RouteRef::new("techdocs", "docRoot"),
            )
            .build()
            .unwrap();

        let bound = app
            .bindings()
            .lookup(&PluginId::new("catalog"), "createComponent")
            .unwrap();
        assert_eq!(bound.target, RouteRef::new("scaffolder", "root"));
        assert_eq!(bound.path, "/create");
    }

    #[test]
    fn unresolved_bindings_are_all_listed() {
        let err = base_routes(AppBuilder::new())
            .plugin(catalog())
            .unwrap()
            .plugin(scaffolder())
            .unwrap()
            .plugin(techdocs())
            .unwrap()
            .build()
            .unwrap_err();

        match err {
            ConfigError::UnresolvedExternalRoutes { unresolved } => {
                assert_eq!(
                    unresolved,
                    vec![
                        ExternalRouteRef::new("catalog", "createComponent"),
                        ExternalRouteRef::new("catalog", "viewTechDoc"),
                    ]
                );
            }
            other => panic!("expected unresolved bindings, got {other}"),
        }
    }

    #[test]
    fn binding_to_unowned_route_is_rejected() {
        let err = base_routes(AppBuilder::new())
            .plugin(catalog())
            .unwrap()
            .plugin(scaffolder())
            .unwrap()
            .plugin(techdocs())
            .unwrap()
            .bind(
                ExternalRouteRef::new("catalog", "createComponent"),
                RouteRef::new("scaffolder", "nonexistent"),
            )
            .bind(
                ExternalRouteRef::new("catalog", "viewTechDoc"),
                RouteRef::new("techdocs", "docRoot"),
            )
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownProviderRoute { ref route, .. } if route == "nonexistent"
        ));
    }

    #[test]
    fn duplicate_plugin_ids_fail_assembly() {
        let err = AppBuilder::new()
            .plugin(PluginDescriptor::new("catalog"))
            .unwrap()
            .plugin(PluginDescriptor::new("catalog"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePluginId(_)));
    }

    #[test]
    fn extensions_are_exposed_in_registration_order() {
        let plugin = PluginDescriptor::new("demo").route("root", "demo-page").extension(
            Extension::new(
                "DemoPage",
                RouteRef::new("demo", "root"),
                ExtensionLoader::new("DemoPage", || async { Ok(StaticPage::new("demo")) }),
            ),
        );
        let app = AppBuilder::new()
            .route(RouteEntry::new("/demo", "demo-page"))
            .plugin(plugin)
            .unwrap()
            .build()
            .unwrap();
        let mounts: Vec<_> = app
            .extensions()
            .map(|(id, ext)| (id.as_str().to_string(), ext.name().to_string()))
            .collect();
        assert_eq!(mounts, vec![("demo".to_string(), "DemoPage".to_string())]);
    }
}
