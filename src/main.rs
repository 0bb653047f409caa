use std::sync::Arc;

use anyhow::Context;
use portfolio_site::app::{Site, SiteDeps};
use portfolio_site::config::{load_env_files, SiteConfig};
use portfolio_site::routing::application::domain::ROUTING_PREFIX;
use portfolio_site::storage::adapter::outgoing::FileStorage;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Arguments with this prefix are sent to the chat widget instead of routed.
const CHAT_PREFIX: &str = "chat:";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the rendered pages.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    load_env_files();
    let config = SiteConfig::from_env();

    let storage = FileStorage::open(&config.storage_dir).with_context(|| {
        format!(
            "Failed to open durable storage in {}",
            config.storage_dir.display()
        )
    })?;
    info!(path = %storage.path().display(), "Durable storage opened");

    let mut site = Site::new(&config, SiteDeps::headless(Arc::new(storage)));
    let mut booted = false;

    for arg in std::env::args().skip(1) {
        if let Some(message) = arg.strip_prefix(CHAT_PREFIX) {
            if !site.chat().is_open() {
                site.chat().toggle().await;
            }
            if let Err(e) = site.chat().send(message).await {
                warn!("Chat message not answered: {}", e);
            }
            println!("{}", serde_json::to_string_pretty(&site.chat().messages())?);
            continue;
        }

        let snapshot = if booted {
            site.navigate(&arg)
        } else {
            booted = true;
            site.boot(&arg)
        };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    if !booted {
        let snapshot = site.boot(ROUTING_PREFIX);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    if site.store().has_unsaved_changes() {
        warn!("Some content changes could not be written to storage");
    }

    Ok(())
}
