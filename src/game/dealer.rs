use tracing::debug;

use crate::error::RoundError;
use crate::notify::Notifier;
use crate::result::{Outcome, RoundSummary};
use crate::session::{ChatId, GameSession, UserId};
use crate::source::CardSource;

use super::{Seat, Table};

impl<S: CardSource, N: Notifier> Table<S, N> {
    /// Dealer plays their hand: reveals it, then draws while below the stand threshold.
    ///
    /// `session` is the snapshot taken when the player stood; the store holds the live
    /// hand that cards are appended to.
    pub(super) async fn dealer_play(
        &self,
        user: UserId,
        chat: ChatId,
        session: &GameSession,
    ) -> Result<RoundSummary, RoundError> {
        for card in session.dealer.cards() {
            self.show(chat, &card.image).await;
        }

        let mut dealer_score = session.dealer.score();
        let mut dealer_draws = 0;
        while dealer_score < self.options.dealer_stands_on {
            let (card, score) = self.draw_into(user, &session.deck, Seat::Dealer).await?;
            debug!(%user, face = %card.face, score, "dealer draws");
            self.show(chat, &card.image).await;
            dealer_score = score;
            dealer_draws += 1;
        }

        let player_score = session.player.score();
        Ok(RoundSummary {
            outcome: Outcome::settle(player_score, dealer_score),
            player_score,
            dealer_score,
            dealer_draws,
        })
    }
}
