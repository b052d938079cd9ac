//! Static file hosting for the cubewalk page.
//!
//! `/` serves `index.html`; every other path is looked up under the static
//! root. There are no dynamic routes.

pub mod config;
pub mod routes;

pub use config::{ConfigError, ServerConfig};
pub use routes::app;

use anyhow::Context;

/// Bind and serve until the process is stopped.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.socket_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.socket_addr()))?;
    log::info!(
        "listening on port: {} (static root {})",
        config.port,
        config.static_dir.display()
    );
    axum::serve(listener, app(&config.static_dir))
        .await
        .context("server failed")
}
