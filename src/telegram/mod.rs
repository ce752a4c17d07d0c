//! Telegram front-end: Bot API client, command routing, and authorization.

mod api;
mod bot;
mod command;
pub mod types;

pub use api::{DEFAULT_TELEGRAM_API, TelegramApi};
pub use bot::Bot;
pub use command::Command;
