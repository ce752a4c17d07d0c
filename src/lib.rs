//! A Telegram blackjack bot backed by a remote card-deck service.
//!
//! The crate is split into a small game core and the adapters around it:
//!
//! - [`card`] and [`hand`] resolve card values and score hands.
//! - [`GameStateStore`] keeps at most one [`GameSession`] per user.
//! - [`Table`] runs rounds: deal, hit, stand, dealer play, and settlement.
//! - [`CardSource`] supplies decks; [`DeckApi`] talks to the deck service and
//!   [`LocalShoe`] shuffles in-process.
//! - [`Notifier`] delivers replies; [`telegram`] implements it against the Bot API and
//!   routes chat commands.
//!
//! # Example
//!
//! ```no_run
//! use bjbot::{GameOptions, GameStateStore, LocalShoe, Locale, Table, TelegramApi};
//!
//! # fn demo(api: TelegramApi) {
//! let table = Table::new(
//!     GameStateStore::new(),
//!     LocalShoe::new(42),
//!     api,
//!     GameOptions::default(),
//!     Locale::En,
//! );
//! let _ = table;
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod config;
pub mod error;
pub mod game;
pub mod hand;
pub mod messages;
pub mod notify;
pub mod options;
pub mod result;
pub mod session;
pub mod source;
pub mod store;
mod sync;
pub mod telegram;

// Re-export main types
pub use card::{Card, DECK_SIZE, DeckHandle, Face, Suit, face_value};
pub use config::Config;
pub use error::{CardError, NotifyError, RoundError, SourceError, TelegramError};
pub use game::Table;
pub use hand::{BLACKJACK, Hand, score};
pub use messages::Locale;
pub use notify::{Keyboard, Notifier};
pub use options::GameOptions;
pub use result::{Outcome, RoundSummary, Turn};
pub use session::{ChatId, GameSession, Phase, UserId};
pub use source::{CardSource, DeckApi, LocalShoe, Source};
pub use store::{GameStateStore, UserTurn};
pub use telegram::{Bot, TelegramApi};
