//! Hands and the hand scorer.

use crate::card::Card;

/// Highest score that does not bust.
pub const BLACKJACK: u8 = 21;

/// Difference between a high ace (11) and a low ace (1).
const ACE_DOWNGRADE: u8 = 10;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.face.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.face.points());
    }

    while value > BLACKJACK && aces > 0 {
        value -= ACE_DOWNGRADE;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Scores a sequence of cards.
///
/// Every ace counts as 11 unless that would bust the hand, in which case aces are
/// downgraded to 1 one at a time. The result may still exceed 21 once no ace is left to
/// downgrade. An empty slice scores 0.
///
/// # Example
///
/// ```
/// use bjbot::card::{Card, Face, Suit};
/// use bjbot::hand::score;
///
/// let cards = [
///     Card::new(Face::Ace, Suit::Hearts, ""),
///     Card::new(Face::Ace, Suit::Clubs, ""),
///     Card::new(Face::Nine, Suit::Spades, ""),
/// ];
/// assert_eq!(score(&cards), 21);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// An ordered, append-only sequence of cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, if any.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the most recently drawn card.
    #[must_use]
    pub fn last(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Calculates the best score of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
