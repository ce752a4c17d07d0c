//! Game configuration options.

use crate::hand::BLACKJACK;

/// Configuration options for the blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjbot::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_dealer_stands_on(17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks shuffled together for each new game.
    pub decks: u8,
    /// The dealer keeps drawing while their score is below this value.
    pub dealer_stands_on: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            dealer_stands_on: 17,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// Zero is raised to one.
    ///
    /// # Example
    ///
    /// ```
    /// use bjbot::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = if decks == 0 { 1 } else { decks };
        self
    }

    /// Sets the score at which the dealer stops drawing.
    ///
    /// Clamped to `1..=21`: the dealer always stops once past 21.
    ///
    /// # Example
    ///
    /// ```
    /// use bjbot::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// assert_eq!(options.with_dealer_stands_on(40).dealer_stands_on, 21);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, score: u8) -> Self {
        self.dealer_stands_on = match score {
            0 => 1,
            s if s > BLACKJACK => BLACKJACK,
            s => s,
        };
        self
    }
}
