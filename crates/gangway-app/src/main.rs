//! Gangway - demo developer portal.
//!
//! Startup is deliberately small: construct the four static tables (routes,
//! bindings, themes, plugins), validate them, and hand the result to the
//! host framework. There is no command-line surface; the config path comes
//! from `GANGWAY_CONFIG` when set.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gangway_core::{App, RenderHost};

mod assembly;
mod config;
mod theme;

/// Stand-in host that logs what it was handed. The real rendering host
/// lives outside this repository.
struct LoggingHost;

impl RenderHost for LoggingHost {
    fn receive(&mut self, app: &App) {
        info!(
            routes = app.route_table().routes().len(),
            redirects = app.route_table().redirects().len(),
            "host received route table"
        );
        for (plugin, extension) in app.extensions() {
            info!(
                %plugin,
                extension = extension.name(),
                mount = %extension.mount_point(),
                "extension available"
            );
        }
        if let Some(sign_in) = app.sign_in() {
            info!(
                provider = %sign_in.provider.id,
                auto = sign_in.auto,
                "sign-in configured"
            );
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::var_os("GANGWAY_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("gangway.toml"));
    let config = config::AppConfig::load(&config_path)?;
    info!(title = %config.app.title, theme = %config.app.theme, "starting portal");

    let app = assembly::assemble(&config).context("application assembly failed")?;
    let mut host = LoggingHost;
    host.receive(&app);
    Ok(())
}
