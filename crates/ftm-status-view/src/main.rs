//! Family Task Manager status page — text shell around the health view.
//!
//! Mounts one `HealthView`, prints the page while the backend check is in
//! flight, and prints it again once the check settles.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use ftm_health_client::{ClientConfig, HealthClient};
use ftm_status_view::{HealthView, render_page};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "ftm-status starting");

    // ── Load config ─────────────────────────────────────────────
    let config = ClientConfig::load()?;
    tracing::info!(
        base_url = %config.base_url,
        health_url = %config.health_url(),
        "config loaded"
    );

    // ── Mount the view ──────────────────────────────────────────
    let client = HealthClient::new(&config)?;
    let view = HealthView::mount(Arc::new(client));
    println!("{}\n", render_page(&view.state(), &config.base_url));

    tokio::select! {
        settled = view.settled() => {
            if let Some(state) = settled {
                println!("{}", render_page(&state, &config.base_url));
            }
        }
        // Tear down on SIGINT; the in-flight request is left to finish.
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
            view.teardown();
        }
    }

    tracing::info!("ftm-status stopped");
    Ok(())
}
