//! The demo portal assembly: which plugin pages exist, how paths map to
//! them, how plugins reference each other's routes, and how sign-in and
//! theming are configured.

use gangway_core::{
    App, AppBuilder, ConfigError, ExternalRouteRef, PluginDescriptor, RouteEntry, RouteRef,
    SignInConfig, SignInProvider,
};

use crate::config::AppConfig;

// Page identifiers, one per pre-built plugin page.
pub const PAGE_CATALOG_INDEX: &str = "catalog-index";
pub const PAGE_CATALOG_ENTITY: &str = "catalog-entity";
pub const PAGE_ENTITY_DOCS: &str = "catalog-entity-docs";
pub const PAGE_ENTITY_API: &str = "catalog-entity-api";
pub const PAGE_TECHDOCS_INDEX: &str = "techdocs-index";
pub const PAGE_TECHDOCS_READER: &str = "techdocs-reader";
pub const PAGE_SCAFFOLDER: &str = "scaffolder";
pub const PAGE_API_EXPLORER: &str = "api-explorer";
pub const PAGE_TECH_RADAR: &str = "tech-radar";
pub const PAGE_CATALOG_IMPORT: &str = "catalog-import";
pub const PAGE_SEARCH: &str = "search";
pub const PAGE_SEARCH_RESULTS: &str = "search-results";
pub const PAGE_SETTINGS: &str = "user-settings";
pub const PAGE_CATALOG_GRAPH: &str = "catalog-graph";

/// Capability gating the catalog import page.
pub const CATALOG_ENTITY_CREATE: &str = "catalog.entity.create";

fn catalog() -> PluginDescriptor {
    PluginDescriptor::new("catalog")
        .route("catalogIndex", PAGE_CATALOG_INDEX)
        .route("catalogEntity", PAGE_CATALOG_ENTITY)
        .external_route("createComponent")
        .external_route("viewTechDoc")
}

fn catalog_import() -> PluginDescriptor {
    PluginDescriptor::new("catalog-import").route("importPage", PAGE_CATALOG_IMPORT)
}

fn scaffolder() -> PluginDescriptor {
    PluginDescriptor::new("scaffolder")
        .route("root", PAGE_SCAFFOLDER)
        .external_route("registerComponent")
}

fn api_docs() -> PluginDescriptor {
    PluginDescriptor::new("api-docs")
        .route("root", PAGE_API_EXPLORER)
        .external_route("registerApi")
}

fn techdocs() -> PluginDescriptor {
    PluginDescriptor::new("techdocs")
        .route("indexPage", PAGE_TECHDOCS_INDEX)
        .route("docRoot", PAGE_TECHDOCS_READER)
}

fn org() -> PluginDescriptor {
    PluginDescriptor::new("org").external_route("catalogIndex")
}

fn search() -> PluginDescriptor {
    PluginDescriptor::new("search").route("root", PAGE_SEARCH)
}

fn tech_radar() -> PluginDescriptor {
    PluginDescriptor::new("tech-radar").route("root", PAGE_TECH_RADAR)
}

fn user_settings() -> PluginDescriptor {
    PluginDescriptor::new("user-settings").route("root", PAGE_SETTINGS)
}

fn catalog_graph() -> PluginDescriptor {
    PluginDescriptor::new("catalog-graph").route("root", PAGE_CATALOG_GRAPH)
}

/// Assemble the portal: construct the four static tables and validate them.
/// Fails fast on any configuration error; nothing partial escapes.
pub fn assemble(config: &AppConfig) -> Result<App, ConfigError> {
    AppBuilder::new()
        .plugin(catalog())?
        .plugin(catalog_import())?
        .plugin(scaffolder())?
        .plugin(api_docs())?
        .plugin(techdocs())?
        .plugin(org())?
        .plugin(search())?
        .plugin(tech_radar())?
        .plugin(user_settings())?
        .plugin(catalog_graph())?
        .plugin(gangway_plugin_demo::plugin())?
        .redirect("/", "/catalog")
        .route(RouteEntry::new("/catalog", PAGE_CATALOG_INDEX))
        .route(
            RouteEntry::new("/catalog/:namespace/:kind/:name", PAGE_CATALOG_ENTITY)
                .child(RouteEntry::new("/docs", PAGE_ENTITY_DOCS))
                .child(RouteEntry::new("/api", PAGE_ENTITY_API)),
        )
        .route(RouteEntry::new("/docs", PAGE_TECHDOCS_INDEX))
        .route(RouteEntry::new(
            "/docs/:namespace/:kind/:name/*",
            PAGE_TECHDOCS_READER,
        ))
        .route(RouteEntry::new("/create", PAGE_SCAFFOLDER))
        .route(RouteEntry::new("/api-docs", PAGE_API_EXPLORER))
        .route(RouteEntry::new("/tech-radar", PAGE_TECH_RADAR))
        .route(RouteEntry::new("/catalog-import", PAGE_CATALOG_IMPORT).guarded(CATALOG_ENTITY_CREATE))
        .route(
            RouteEntry::new("/search", PAGE_SEARCH)
                .child(RouteEntry::new("/results", PAGE_SEARCH_RESULTS)),
        )
        .route(RouteEntry::new("/settings", PAGE_SETTINGS))
        .route(RouteEntry::new("/catalog-graph", PAGE_CATALOG_GRAPH))
        .route(RouteEntry::new(
            "/demo-plugin",
            gangway_plugin_demo::DEMO_PAGE_ID,
        ))
        .bind(
            ExternalRouteRef::new("catalog", "createComponent"),
            RouteRef::new("scaffolder", "root"),
        )
        .bind(
            ExternalRouteRef::new("catalog", "viewTechDoc"),
            RouteRef::new("techdocs", "docRoot"),
        )
        .bind(
            ExternalRouteRef::new("api-docs", "registerApi"),
            RouteRef::new("catalog-import", "importPage"),
        )
        .bind(
            ExternalRouteRef::new("scaffolder", "registerComponent"),
            RouteRef::new("catalog-import", "importPage"),
        )
        .bind(
            ExternalRouteRef::new("org", "catalogIndex"),
            RouteRef::new("catalog", "catalogIndex"),
        )
        .theme(crate::theme::portal_theme()?)
        .sign_in(SignInConfig {
            provider: SignInProvider {
                id: config.auth.provider.clone(),
                title: config.auth.title.clone(),
                message: config.auth.message.clone(),
            },
            auto: config.auth.auto,
        })
        .build()
}
