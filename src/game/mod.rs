//! Round controller: deals, takes player decisions, plays the dealer, and settles.

use tracing::{error, warn};

use crate::card::{Card, DeckHandle};
use crate::error::RoundError;
use crate::messages::Locale;
use crate::notify::{Keyboard, Notifier};
use crate::options::GameOptions;
use crate::session::{ChatId, GameSession, UserId};
use crate::source::CardSource;
use crate::store::GameStateStore;

mod actions;
mod dealer;

/// Which hand a drawn card goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seat {
    Player,
    Dealer,
}

/// A blackjack table that runs one independent round per user.
///
/// The table owns the [`GameStateStore`] handed to it and talks to the outside world only
/// through its [`CardSource`] and [`Notifier`]. Every command takes the user's exclusive
/// turn before touching the store, so commands for one user run one at a time while
/// different users play concurrently.
pub struct Table<S, N> {
    store: GameStateStore,
    source: S,
    notifier: N,
    options: GameOptions,
    locale: Locale,
}

impl<S: CardSource, N: Notifier> Table<S, N> {
    /// Creates a table.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn demo(notifier: impl bjbot::Notifier) {
    /// use bjbot::{GameOptions, GameStateStore, LocalShoe, Locale, Table};
    ///
    /// let table = Table::new(
    ///     GameStateStore::new(),
    ///     LocalShoe::new(42),
    ///     notifier,
    ///     GameOptions::default(),
    ///     Locale::En,
    /// );
    /// let _ = table;
    /// # }
    /// ```
    #[must_use]
    pub const fn new(
        store: GameStateStore,
        source: S,
        notifier: N,
        options: GameOptions,
        locale: Locale,
    ) -> Self {
        Self {
            store,
            source,
            notifier,
            options,
            locale,
        }
    }

    /// Returns the session store.
    #[must_use]
    pub const fn store(&self) -> &GameStateStore {
        &self.store
    }

    /// Returns the card source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the notifier.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns the reply language.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns a snapshot of the user's session, if any.
    #[must_use]
    pub fn session(&self, user: UserId) -> Option<GameSession> {
        self.store.get(user)
    }

    /// Draws one card and appends it to the given hand.
    ///
    /// Returns the card and the hand's new score. The append happens right after the draw
    /// completes, under the caller's user turn, so a hand never misses a card it drew.
    async fn draw_into(
        &self,
        user: UserId,
        deck: &DeckHandle,
        seat: Seat,
    ) -> Result<(Card, u8), RoundError> {
        let card = self.source.draw(deck).await?;
        self.store
            .update(user, |session| {
                let hand = match seat {
                    Seat::Player => &mut session.player,
                    Seat::Dealer => &mut session.dealer,
                };
                hand.add_card(card.clone());
                hand.score()
            })
            .map(|score| (card, score))
            .ok_or(RoundError::NoActiveSession)
    }

    /// Arms a guard that ends the round if the command never completes.
    const fn guard(&self, user: UserId, deck: DeckHandle) -> RoundGuard<'_, S, N> {
        RoundGuard {
            table: self,
            user,
            deck,
            armed: true,
        }
    }

    /// Removes the session and frees its deck.
    fn finish(&self, user: UserId, deck: &DeckHandle) {
        self.store.remove(user);
        self.source.release(deck);
    }

    /// Ends the round after a card source failure.
    fn abort(&self, user: UserId, deck: &DeckHandle, err: RoundError) -> RoundError {
        error!(%user, %deck, %err, "round ended by card source failure");
        self.finish(user, deck);
        err
    }

    async fn say(&self, chat: ChatId, text: &str, keyboard: Option<Keyboard>) {
        if let Err(err) = self.notifier.send_text(chat, text, keyboard).await {
            warn!(%chat, %err, "failed to send message");
        }
    }

    async fn show(&self, chat: ChatId, image: &str) {
        if let Err(err) = self.notifier.send_image(chat, image).await {
            warn!(%chat, %err, "failed to send card image");
        }
    }
}

/// Ends a round that is mid-transition when dropped.
///
/// A command that is cancelled or panics while the session is outside
/// [`Phase::PlayerTurn`](crate::Phase::PlayerTurn) would otherwise leave a session no command
/// can act on.
struct RoundGuard<'a, S: CardSource, N: Notifier> {
    table: &'a Table<S, N>,
    user: UserId,
    deck: DeckHandle,
    armed: bool,
}

impl<S: CardSource, N: Notifier> RoundGuard<'_, S, N> {
    /// The session is back in a state commands can act on.
    fn disarm(mut self) {
        self.armed = false;
    }

    /// Ends the round normally.
    fn complete(mut self) {
        self.armed = false;
        self.table.finish(self.user, &self.deck);
    }

    /// Ends the round after a card source failure.
    fn fail(mut self, err: RoundError) -> RoundError {
        self.armed = false;
        self.table.abort(self.user, &self.deck, err)
    }
}

impl<S: CardSource, N: Notifier> Drop for RoundGuard<'_, S, N> {
    fn drop(&mut self) {
        if self.armed {
            warn!(user = %self.user, deck = %self.deck, "round abandoned mid-command");
            self.table.finish(self.user, &self.deck);
        }
    }
}
