//! Card types and the card value resolver.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in shoe-building order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Parses a suit label such as `"HEARTS"` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownSuit`] for anything that is not one of the four suits.
    pub fn parse(label: &str) -> Result<Self, CardError> {
        match label.trim().to_ascii_lowercase().as_str() {
            "hearts" => Ok(Self::Hearts),
            "diamonds" => Ok(Self::Diamonds),
            "clubs" => Ok(Self::Clubs),
            "spades" => Ok(Self::Spades),
            _ => Err(CardError::UnknownSuit(label.to_owned())),
        }
    }

    /// Single-letter code used in card codes (`"AS"`, `"0H"`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }
}

/// One of the thirteen ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Numeral 2.
    Two,
    /// Numeral 3.
    Three,
    /// Numeral 4.
    Four,
    /// Numeral 5.
    Five,
    /// Numeral 6.
    Six,
    /// Numeral 7.
    Seven,
    /// Numeral 8.
    Eight,
    /// Numeral 9.
    Nine,
    /// Numeral 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Face {
    /// All thirteen ranks, numerals first.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Parses a face label (case-insensitive).
    ///
    /// Accepts `"king"`, `"queen"`, `"jack"`, `"ace"` and the numerals `2` through `10`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MalformedCardFace`] for any other label. Unrecognized labels are
    /// never coerced to a default value.
    pub fn parse(label: &str) -> Result<Self, CardError> {
        let normalized = label.trim().to_ascii_lowercase();
        let face = match normalized.as_str() {
            "king" => Self::King,
            "queen" => Self::Queen,
            "jack" => Self::Jack,
            "ace" => Self::Ace,
            numeral => match numeral.parse::<u8>() {
                Ok(2) => Self::Two,
                Ok(3) => Self::Three,
                Ok(4) => Self::Four,
                Ok(5) => Self::Five,
                Ok(6) => Self::Six,
                Ok(7) => Self::Seven,
                Ok(8) => Self::Eight,
                Ok(9) => Self::Nine,
                Ok(10) => Self::Ten,
                _ => return Err(CardError::MalformedCardFace(label.to_owned())),
            },
        };
        Ok(face)
    }

    /// Blackjack point value. Aces count high here; the hand scorer downgrades them.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 11,
        }
    }

    /// Returns whether this face is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }

    /// Single-character code used by the deck service (`'0'` stands for ten).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => '0',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    /// Label in the deck service's spelling (`"KING"`, `"10"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "JACK",
            Self::Queen => "QUEEN",
            Self::King => "KING",
            Self::Ace => "ACE",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolves a face label straight to its point value.
///
/// # Errors
///
/// Returns [`CardError::MalformedCardFace`] when the label is not a known rank.
///
/// # Example
///
/// ```
/// use bjbot::card::face_value;
///
/// assert_eq!(face_value("Queen").unwrap(), 10);
/// assert_eq!(face_value("ACE").unwrap(), 11);
/// assert!(face_value("joker").is_err());
/// ```
pub fn face_value(label: &str) -> Result<u8, CardError> {
    Face::parse(label).map(Face::points)
}

/// A card drawn from a card source. Never mutated after it is produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card.
    pub face: Face,
    /// The suit of the card.
    pub suit: Suit,
    /// Opaque image reference, used only for display.
    pub image: String,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub fn new(face: Face, suit: Suit, image: impl Into<String>) -> Self {
        Self {
            face,
            suit,
            image: image.into(),
        }
    }

    /// Two-character card code, e.g. `"AS"` or `"0H"`.
    #[must_use]
    pub fn code(&self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.face.code());
        code.push(self.suit.code());
        code
    }
}

/// Opaque token naming a shuffled deck held by a card source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckHandle(String);

impl DeckHandle {
    /// Wraps a raw deck identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_rank_case_insensitively() {
        let expected = [2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, 11];
        let labels = [
            "2", "3", "4", "5", "6", "7", "8", "9", "10", "jack", "queen", "king", "ace",
        ];
        for (label, value) in labels.iter().zip(expected) {
            assert_eq!(face_value(label).unwrap(), value);
            assert_eq!(face_value(&label.to_uppercase()).unwrap(), value);
        }
        assert_eq!(face_value("KiNg").unwrap(), 10);
    }

    #[test]
    fn rejects_unknown_faces() {
        for label in ["", "1", "11", "0", "joker", "A", "ten", "-3"] {
            assert_eq!(
                face_value(label).unwrap_err(),
                CardError::MalformedCardFace(label.to_owned())
            );
        }
    }

    #[test]
    fn labels_round_trip_through_parse() {
        for face in Face::ALL {
            assert_eq!(Face::parse(face.label()).unwrap(), face);
        }
    }

    #[test]
    fn card_codes_match_deck_service() {
        let card = Card::new(Face::Ten, Suit::Hearts, "");
        assert_eq!(card.code(), "0H");
        let card = Card::new(Face::Ace, Suit::Spades, "");
        assert_eq!(card.code(), "AS");
    }

    #[test]
    fn suit_parse() {
        assert_eq!(Suit::parse("SPADES").unwrap(), Suit::Spades);
        assert_eq!(Suit::parse("diamonds").unwrap(), Suit::Diamonds);
        assert!(matches!(Suit::parse("stars"), Err(CardError::UnknownSuit(_))));
    }
}
