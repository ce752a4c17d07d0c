//! Runs the blackjack bot against the Telegram Bot API.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use bjbot::{Bot, Config, DeckApi, GameStateStore, LocalShoe, Source, Table, TelegramApi};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();

    let source = if config.offline {
        let seed = config.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
        tracing::info!(seed, "shuffling decks in-process");
        Source::Local(LocalShoe::new(seed))
    } else {
        tracing::info!(url = %config.deck_api, "using card-deck service");
        Source::Remote(
            DeckApi::new(config.deck_api.clone(), config.request_timeout())
                .context("failed to build card-deck client")?,
        )
    };

    let api = TelegramApi::new(&config.telegram_api, &config.token, config.telegram_timeout())
        .context("failed to build Bot API client")?;
    let table = Arc::new(Table::new(
        GameStateStore::new(),
        source,
        api.clone(),
        config.game_options(),
        config.locale,
    ));

    Bot::new(api, table, config.poll_timeout)
        .run(shutdown_signal())
        .await
        .context("bot failed")?;

    tracing::info!("bot stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    tracing::info!("received shutdown signal");
}
