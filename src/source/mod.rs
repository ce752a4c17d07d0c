//! Card sources: where shuffled decks and drawn cards come from.

use core::future::Future;

use crate::card::{Card, DeckHandle};
use crate::error::SourceError;

mod http;
mod local;

pub use http::{DEFAULT_DECK_API, DeckApi};
pub use local::LocalShoe;

/// Creates shuffled decks and draws cards from them one at a time.
///
/// Implementations do not retry; any retry policy belongs in the implementation's own
/// client, and the round controller treats every error as ending the round.
pub trait CardSource: Send + Sync {
    /// Creates a new deck made of `decks` shuffled 52-card decks.
    fn new_deck(&self, decks: u8) -> impl Future<Output = Result<DeckHandle, SourceError>> + Send;

    /// Draws the top card of `deck`.
    fn draw(&self, deck: &DeckHandle) -> impl Future<Output = Result<Card, SourceError>> + Send;

    /// Signals that no more cards will be drawn from `deck`.
    fn release(&self, deck: &DeckHandle) {
        let _ = deck;
    }
}

/// A card source chosen at startup.
pub enum Source {
    /// The remote deck service.
    Remote(DeckApi),
    /// An in-process shoe.
    Local(LocalShoe),
}

impl CardSource for Source {
    async fn new_deck(&self, decks: u8) -> Result<DeckHandle, SourceError> {
        match self {
            Self::Remote(api) => api.new_deck(decks).await,
            Self::Local(shoe) => shoe.new_deck(decks).await,
        }
    }

    async fn draw(&self, deck: &DeckHandle) -> Result<Card, SourceError> {
        match self {
            Self::Remote(api) => api.draw(deck).await,
            Self::Local(shoe) => shoe.draw(deck).await,
        }
    }

    fn release(&self, deck: &DeckHandle) {
        match self {
            Self::Remote(api) => api.release(deck),
            Self::Local(shoe) => shoe.release(deck),
        }
    }
}
