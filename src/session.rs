//! Per-user game records.

use core::fmt;

use crate::card::DeckHandle;
use crate::hand::Hand;

/// Identifies the user a game belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifies the chat replies are sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Where a game is within its round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The session exists but the initial cards are not all dealt yet.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The dealer is playing out their hand.
    DealerTurn,
}

/// The active round of one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    /// Deck the round draws from.
    pub deck: DeckHandle,
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand.
    pub dealer: Hand,
    /// Current phase of the round.
    pub phase: Phase,
}

impl GameSession {
    /// Creates a session with empty hands that has not started yet.
    #[must_use]
    pub const fn new(deck: DeckHandle) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            phase: Phase::Dealing,
        }
    }

    /// Returns whether the initial deal has completed.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != Phase::Dealing
    }
}
