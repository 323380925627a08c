use std::sync::Arc;

use anyhow::{ensure, Context};
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod redirects;
mod server;

use config::ServerConfig;
use redirects::RedirectManifest;
use server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    ensure!(
        config.dist_dir.is_dir(),
        "bundle directory {} does not exist, run `trunk build` in frontend/ first",
        config.dist_dir.display()
    );

    let manifest = if config.redirects_file.is_file() {
        RedirectManifest::load(&config.redirects_file)?
    } else {
        warn!(path = %config.redirects_file.display(), "no redirect manifest, unknown paths will 404");
        RedirectManifest::default()
    };
    info!(rules = manifest.rule_count(), "redirect manifest loaded");

    let app = server::router(Arc::new(AppState::new(config.dist_dir.clone(), manifest)));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, bundle = %config.dist_dir.display(), "serving welcome center");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
