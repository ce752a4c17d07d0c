//! Process configuration.

use std::time::Duration;

use clap::Parser;
use url::Url;

use crate::messages::Locale;
use crate::options::GameOptions;
use crate::source::DEFAULT_DECK_API;
use crate::telegram::DEFAULT_TELEGRAM_API;

/// Telegram blackjack bot backed by a card-deck service.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Config {
    /// Bot API token.
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Base URL of the card-deck service.
    #[arg(long, env = "DECK_API_URL", default_value = DEFAULT_DECK_API)]
    pub deck_api: Url,

    /// Base URL of the Telegram Bot API.
    #[arg(long, env = "TELEGRAM_API_URL", default_value = DEFAULT_TELEGRAM_API)]
    pub telegram_api: Url,

    /// Decks shuffled together for each game.
    #[arg(long, env = "DECK_COUNT", default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=20))]
    pub decks: u8,

    /// Score at which the dealer stops drawing.
    #[arg(long, env = "DEALER_STANDS_ON", default_value_t = 17, value_parser = clap::value_parser!(u8).range(1..=21))]
    pub dealer_stands_on: u8,

    /// Timeout for card-deck service requests, in seconds.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout: u64,

    /// Long-poll timeout for Telegram updates, in seconds.
    #[arg(long, env = "POLL_TIMEOUT_SECS", default_value_t = 30)]
    pub poll_timeout: u32,

    /// Reply language (`en` or `ru`).
    #[arg(long, env = "BOT_LOCALE", default_value_t = Locale::En)]
    pub locale: Locale,

    /// Shuffle decks in-process instead of calling the card-deck service.
    #[arg(long, env = "BOT_OFFLINE")]
    pub offline: bool,

    /// Shuffle seed for offline decks; defaults to the current time.
    #[arg(long, requires = "offline")]
    pub seed: Option<u64>,
}

impl Config {
    /// Table options derived from the flags.
    #[must_use]
    pub fn game_options(&self) -> GameOptions {
        GameOptions::default()
            .with_decks(self.decks)
            .with_dealer_stands_on(self.dealer_stands_on)
    }

    /// Timeout for card-deck service requests.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Timeout for Bot API requests; leaves headroom over the long-poll timeout.
    #[must_use]
    pub fn telegram_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.poll_timeout) + 10)
    }
}
