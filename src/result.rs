//! Round result types.

use crate::hand::BLACKJACK;

/// How a finished round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Dealer busts or the player has the higher score.
    PlayerWins,
    /// Dealer has the higher score without busting.
    DealerWins,
    /// Player went over 21 on a hit. The dealer did not play.
    PlayerBust,
    /// Equal scores.
    Push,
}

impl Outcome {
    /// Compares final scores after the dealer has played.
    ///
    /// A player bust never reaches this comparison; it ends the round on the hit that
    /// caused it.
    #[must_use]
    pub const fn settle(player_score: u8, dealer_score: u8) -> Self {
        if dealer_score > BLACKJACK || player_score > dealer_score {
            Self::PlayerWins
        } else if dealer_score > player_score {
            Self::DealerWins
        } else {
            Self::Push
        }
    }
}

/// Final state of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    /// How the round ended.
    pub outcome: Outcome,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Cards the dealer drew after the player stood.
    pub dealer_draws: usize,
}

/// What a command left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The round goes on; the player decides next.
    Playing {
        /// The player's current score.
        player_score: u8,
    },
    /// The round is over and the session has been removed.
    Finished(RoundSummary),
}
