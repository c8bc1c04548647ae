#![forbid(unsafe_code)]

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{error, info};

mod bridge;
mod config;
mod parsers;
mod signature;
mod slack;
mod store;
mod utils;
mod web;

use config::Config;
use slack::{InMemoryUserCache, SlackApi, SlackClient, UserInfoCache};
use store::StoreManager;
use web::WebServer;

#[tokio::main]
async fn main() -> Result<()> {
    utils::logging::init_tracing();

    let config = Arc::new(Config::load()?);
    info!("slack chat bridge starting up");

    let store = StoreManager::in_memory();

    let slack_client: Arc<dyn SlackApi> = Arc::new(SlackClient::new(&config.slack));
    let user_cache: Arc<dyn UserInfoCache> = Arc::new(InMemoryUserCache::new(
        Duration::from_secs(config.slack.user_cache_ttl_secs),
    ));

    let bridge = Arc::new(bridge::BridgeCore::new(
        store.clone(),
        slack_client,
        user_cache,
        config.as_ref().clone(),
    ));

    let web_server = WebServer::new(config.clone(), store, bridge).await?;

    let web_handle = tokio::spawn(async move {
        if let Err(e) = web_server.start().await {
            error!("web server error: {}", e);
        }
    });

    tokio::select! {
        _ = web_handle => {},
        _ = tokio::signal::ctrl_c() => {},
    }

    info!("slack chat bridge shutting down");
    Ok(())
}
