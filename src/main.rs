mod config;
mod content;
mod fs;
mod http;
mod server;

use std::sync::Arc;

use config::Config;
use fs::LocalFs;
use http::connection::ServerContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();

    let ctx = Arc::new(ServerContext {
        fs: Arc::new(LocalFs::new(cfg.content.root.clone())),
        signature: cfg.server.signature.clone(),
    });

    tokio::select! {
        _ = server::listener::run(&cfg, ctx) => {}

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
