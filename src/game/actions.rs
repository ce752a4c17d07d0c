use tracing::{debug, info};

use crate::error::RoundError;
use crate::hand::BLACKJACK;
use crate::notify::{Keyboard, Notifier};
use crate::result::{Outcome, RoundSummary, Turn};
use crate::session::{ChatId, Phase, UserId};
use crate::source::CardSource;

use super::{Seat, Table};

/// Initial deal order.
const DEAL_ORDER: [Seat; 4] = [Seat::Player, Seat::Player, Seat::Dealer, Seat::Dealer];

impl<S: CardSource, N: Notifier> Table<S, N> {
    /// Starts a new round: shuffles a deck and deals two cards each to player and dealer.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::SessionAlreadyExists`] if the user is already playing; nothing
    /// changes in that case. Card source failures are returned as well: if the deck could
    /// not be created nothing was stored, and if a deal failed the half-dealt session is
    /// removed.
    pub async fn start(&self, user: UserId, chat: ChatId) -> Result<Turn, RoundError> {
        let _turn = self.store.lock_user(user).await;
        if self.store.contains(user) {
            return Err(RoundError::SessionAlreadyExists);
        }

        let deck = self.source.new_deck(self.options.decks).await?;
        self.store.create(user, deck.clone())?;
        let guard = self.guard(user, deck.clone());

        for seat in DEAL_ORDER {
            if let Err(err) = self.draw_into(user, &deck, seat).await {
                return Err(guard.fail(err));
            }
        }

        let session = self
            .store
            .update(user, |session| {
                session.phase = Phase::PlayerTurn;
                session.clone()
            })
            .ok_or(RoundError::NoActiveSession)?;
        guard.disarm();
        let player_score = session.player.score();
        info!(%user, %deck, player_score, "new round dealt");

        for card in session.player.cards() {
            self.show(chat, &card.image).await;
        }
        let dealer_up = session.dealer.up_card().map(|card| card.face);
        self.say(
            chat,
            &self.locale.new_game(player_score, dealer_up),
            Some(Keyboard::HitStand),
        )
        .await;

        Ok(Turn::Playing { player_score })
    }

    /// Draws one card for the player.
    ///
    /// Going over 21 ends the round at once as a dealer win; the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoActiveSession`] if the user has no game and
    /// [`RoundError::NotPlayerTurn`] if the game is not waiting for a decision; neither
    /// changes any state. A card source failure ends the round and is returned.
    pub async fn hit(&self, user: UserId, chat: ChatId) -> Result<Turn, RoundError> {
        let _turn = self.store.lock_user(user).await;
        let session = self.store.get(user).ok_or(RoundError::NoActiveSession)?;
        if session.phase != Phase::PlayerTurn {
            return Err(RoundError::NotPlayerTurn);
        }

        let (card, player_score) = match self.draw_into(user, &session.deck, Seat::Player).await {
            Ok(drawn) => drawn,
            Err(err) => return Err(self.abort(user, &session.deck, err)),
        };
        debug!(%user, face = %card.face, player_score, "player hit");

        self.say(chat, &self.locale.drew_card(card.face, player_score), None)
            .await;
        self.show(chat, &card.image).await;

        if player_score > BLACKJACK {
            let summary = RoundSummary {
                outcome: Outcome::PlayerBust,
                player_score,
                dealer_score: session.dealer.score(),
                dealer_draws: 0,
            };
            self.finish(user, &session.deck);
            info!(%user, player_score, "player busts");
            self.announce(chat, &summary).await;
            return Ok(Turn::Finished(summary));
        }

        self.say(chat, self.locale.your_move(), Some(Keyboard::HitStand))
            .await;
        Ok(Turn::Playing { player_score })
    }

    /// Ends the player's turn, plays out the dealer, and settles the round.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoActiveSession`] if the user has no game and
    /// [`RoundError::NotPlayerTurn`] if the game is not waiting for a decision; neither
    /// changes any state. A card source failure during dealer play ends the round and is
    /// returned.
    pub async fn stand(&self, user: UserId, chat: ChatId) -> Result<Turn, RoundError> {
        let _turn = self.store.lock_user(user).await;
        let session = self.store.get(user).ok_or(RoundError::NoActiveSession)?;
        if session.phase != Phase::PlayerTurn {
            return Err(RoundError::NotPlayerTurn);
        }
        self.store
            .update(user, |session| session.phase = Phase::DealerTurn);
        let guard = self.guard(user, session.deck.clone());

        let summary = match self.dealer_play(user, chat, &session).await {
            Ok(summary) => summary,
            Err(err) => return Err(guard.fail(err)),
        };
        guard.complete();
        info!(
            %user,
            outcome = ?summary.outcome,
            player_score = summary.player_score,
            dealer_score = summary.dealer_score,
            "round settled"
        );

        self.announce(chat, &summary).await;
        Ok(Turn::Finished(summary))
    }

    async fn announce(&self, chat: ChatId, summary: &RoundSummary) {
        if summary.outcome != Outcome::PlayerBust {
            self.say(
                chat,
                &self
                    .locale
                    .scores(summary.player_score, summary.dealer_score),
                None,
            )
            .await;
        }
        self.say(chat, self.locale.outcome(summary.outcome), None)
            .await;
        self.say(chat, self.locale.game_over(), None).await;
    }
}
