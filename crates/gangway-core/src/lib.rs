//! Gangway core - the application assembly layer for a plugin-based
//! developer portal.
//!
//! Everything here is constructed once at startup from static declarations
//! and held immutable for the process lifetime: the route table, the
//! external-route binding table, theme descriptors, and plugin descriptors.
//! Rendering, permission evaluation, and authentication are external
//! collaborators reached through the traits in [`app`], [`guard`], and
//! [`plugin`]. The only mutable shared structure is the per-extension
//! single-flight load cache.

pub mod app;
pub mod auth;
pub mod binding;
pub mod error;
pub mod guard;
pub mod navigation;
pub mod plugin;
pub mod routing;
pub mod theme;

pub use app::{App, AppBuilder, RenderHost};
pub use auth::{SignInConfig, SignInProvider};
pub use binding::{BindingTable, BoundRoute, ExternalRouteRef, RouteRef};
pub use error::{ConfigError, LoadError};
pub use guard::{AllowAll, CapabilityRef, Decision, PermissionEvaluator};
pub use navigation::{NavigationOutcome, Navigator};
pub use plugin::{
    Extension, ExtensionLoader, ExtensionState, PluginDescriptor, PluginId, PluginRegistry,
    Renderable, RenderableHandle, StaticPage,
};
pub use routing::{
    PageId, Redirect, Resolution, RouteEntry, RouteMatch, RouteTable, RouteTableBuilder,
};
pub use theme::{
    NavigationPalette, PageShape, PageTheme, Palette, Rgb, ThemeBuilder, ThemeDescriptor,
    ThemeVariant,
};
