//! HTTP server for the Fern documentation site.
//!
//! Serves server-rendered documentation pages, a JSON API for pages,
//! navigation and the implementation variant, and a websocket pushing
//! variant changes and content reloads to open pages.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use fd_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         content_dir: PathBuf::from("content"),
//!         live_reload_enabled: true,
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (fd-server)
//!                        │
//!                        ├─► HTML views + JSON API ──► ContentRegistry (fd-content)
//!                        │                                  │
//!                        │                                  └─► highlighter (fd-highlight)
//!                        │
//!                        └─► /ws/events ◄── SiteEvent broadcast
//!                                              ▲
//!                              variant toggle ─┤
//!                              ContentWatcher ─┘ (notify)
//! ```

mod app;
mod assets;
mod error;
mod events;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use fd_content::{ContentRegistry, Variant};

pub use error::ServerError;
use events::ContentWatcher;
use state::{AppState, SiteOptions};

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Content directory (`navigation.yaml` and `pages/`).
    pub content_dir: PathBuf,
    /// Site title shown in page headers.
    pub site_title: String,
    /// Variant selected at startup.
    pub default_variant: Variant,
    /// Reload content when files change.
    pub live_reload_enabled: bool,
    /// Watch patterns for live reload.
    pub watch_patterns: Option<Vec<String>>,
    /// Application version (part of page `ETag`s).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            content_dir: PathBuf::from("content"),
            site_title: "Fern Documentation".to_owned(),
            default_variant: Variant::default(),
            live_reload_enabled: false,
            watch_patterns: None,
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the content fails to load, the watcher cannot be
/// started or the address cannot be bound.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let registry = ContentRegistry::load(&config.content_dir)?;

    let state = Arc::new(AppState::new(
        registry,
        SiteOptions {
            title: config.site_title.clone(),
            default_variant: config.default_variant,
            live_reload_enabled: config.live_reload_enabled,
            version: config.version.clone(),
        },
    ));

    // Watching stops when this guard is dropped at shutdown.
    let _watcher = if config.live_reload_enabled {
        let watcher = ContentWatcher::new(
            config.content_dir.clone(),
            config.watch_patterns.clone(),
            Arc::clone(&state),
        );
        Some(watcher.start()?)
    } else {
        None
    };

    let app = app::create_router(state);

    let address = format!("{}:{}", config.host, config.port);
    let addr =
        SocketAddr::from_str(&address).map_err(|_| ServerError::InvalidAddress(address.clone()))?;
    tracing::info!(address = %addr, variant = %config.default_variant, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from the loaded site configuration.
///
/// An unparsable `site.default_variant` falls back to the default variant
/// with a warning.
#[must_use]
pub fn server_config_from_config(config: &fd_config::Config, version: String) -> ServerConfig {
    let default_variant = config
        .site
        .default_variant
        .parse::<Variant>()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Using default implementation variant");
            Variant::default()
        });

    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        content_dir: config.content_resolved.dir.clone(),
        site_title: config.site.title.clone(),
        default_variant,
        live_reload_enabled: config.live_reload.enabled,
        watch_patterns: config.live_reload.watch_patterns.clone(),
        version,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use fd_config::Config;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_server_config_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("fern-docs.toml");
        fs::write(
            &config_path,
            r#"
[server]
port = 9000

[content]
dir = "site"

[site]
title = "Fern"
default_variant = "c"

[live_reload]
enabled = true
"#,
        )
        .unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();
        let server = server_config_from_config(&config, "1.2.3".to_owned());

        assert_eq!(server.port, 9000);
        assert_eq!(server.site_title, "Fern");
        assert_eq!(server.default_variant, Variant::C);
        assert!(server.live_reload_enabled);
        assert_eq!(server.content_dir, dir.path().join("site"));
        assert_eq!(server.version, "1.2.3");
    }

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 7979);
        assert_eq!(config.default_variant, Variant::Cpp);
        assert!(!config.live_reload_enabled);
    }
}
