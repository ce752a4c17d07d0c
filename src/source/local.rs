use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, DeckHandle, Face, Suit};
use crate::error::SourceError;
use crate::sync::Mutex;

use super::{CardSource, DEFAULT_DECK_API};

/// An in-process card source that shuffles its own shoes.
///
/// Image references follow the deck service's static image scheme, so a bot running
/// offline still shows real card pictures.
pub struct LocalShoe {
    /// Shoes by deck handle. Cards are drawn from the end.
    shoes: Mutex<HashMap<DeckHandle, Vec<Card>>>,
    /// Pre-arranged draw orders handed out to the next new decks.
    stacked: Mutex<VecDeque<Vec<Card>>>,
    next_id: AtomicU64,
    image_base: String,
    rng: Mutex<ChaCha8Rng>,
}

impl LocalShoe {
    /// Creates a shoe source with the given shuffle seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            shoes: Mutex::new(HashMap::new()),
            stacked: Mutex::new(VecDeque::new()),
            next_id: AtomicU64::new(0),
            image_base: DEFAULT_DECK_API.to_owned(),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Image reference for a face and suit.
    #[must_use]
    pub fn image_for(&self, face: Face, suit: Suit) -> String {
        format!("{}/static/img/{}{}.png", self.image_base, face.code(), suit.code())
    }

    /// Builds a card with this source's image reference.
    #[must_use]
    pub fn card(&self, face: Face, suit: Suit) -> Card {
        Card::new(face, suit, self.image_for(face, suit))
    }

    /// Queues a deck whose cards come out in exactly the order given.
    ///
    /// The next call to [`CardSource::new_deck`] receives it instead of a shuffled shoe.
    pub fn stack(&self, draws: Vec<Card>) {
        self.stacked.with(|stacked| stacked.push_back(draws));
    }

    /// Queues a deck drawn in the given face order; suits cycle through all four.
    pub fn stack_faces(&self, faces: &[Face]) {
        let draws = faces
            .iter()
            .zip(Suit::ALL.iter().cycle())
            .map(|(&face, &suit)| self.card(face, suit))
            .collect();
        self.stack(draws);
    }

    /// Cards left in `deck`, or `None` if it is unknown.
    #[must_use]
    pub fn remaining(&self, deck: &DeckHandle) -> Option<usize> {
        self.shoes.with(|shoes| shoes.get(deck).map(Vec::len))
    }

    /// Number of decks currently held.
    #[must_use]
    pub fn open_decks(&self) -> usize {
        self.shoes.with(|shoes| HashMap::len(shoes))
    }

    /// Creates and shuffles a shoe with the specified number of decks.
    fn create_shoe(&self, num_decks: u8) -> Vec<Card> {
        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for face in Face::ALL {
                    cards.push(self.card(face, suit));
                }
            }
        }

        self.rng.with(|rng| cards.shuffle(rng));
        cards
    }
}

impl CardSource for LocalShoe {
    async fn new_deck(&self, decks: u8) -> Result<DeckHandle, SourceError> {
        let stacked = self.stacked.with(VecDeque::pop_front);
        let shoe = match stacked {
            Some(mut draws) => {
                draws.reverse();
                draws
            }
            None => self.create_shoe(decks.max(1)),
        };

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let deck = DeckHandle::new(format!("local-{id}"));
        self.shoes.with(|shoes| shoes.insert(deck.clone(), shoe));
        Ok(deck)
    }

    async fn draw(&self, deck: &DeckHandle) -> Result<Card, SourceError> {
        self.shoes.with(|shoes| {
            let shoe = shoes
                .get_mut(deck)
                .ok_or_else(|| SourceError::UnknownDeck(deck.to_string()))?;
            shoe.pop()
                .ok_or_else(|| SourceError::Exhausted(deck.to_string()))
        })
    }

    fn release(&self, deck: &DeckHandle) {
        self.shoes.with(|shoes| shoes.remove(deck));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[tokio::test]
    async fn shuffled_shoe_holds_every_card_per_deck() {
        let source = LocalShoe::new(42);
        let deck = source.new_deck(2).await.unwrap();
        assert_eq!(source.remaining(&deck), Some(2 * DECK_SIZE));

        let mut seen = HashSet::new();
        for _ in 0..DECK_SIZE * 2 {
            let card = source.draw(&deck).await.unwrap();
            seen.insert(card.code());
        }
        assert_eq!(seen.len(), DECK_SIZE);
        assert!(matches!(
            source.draw(&deck).await,
            Err(SourceError::Exhausted(_))
        ));
    }

    #[tokio::test]
    async fn same_seed_same_order() {
        let a = LocalShoe::new(7);
        let b = LocalShoe::new(7);
        let deck_a = a.new_deck(1).await.unwrap();
        let deck_b = b.new_deck(1).await.unwrap();
        for _ in 0..10 {
            assert_eq!(
                a.draw(&deck_a).await.unwrap(),
                b.draw(&deck_b).await.unwrap()
            );
        }
    }

    #[tokio::test]
    async fn stacked_deck_draws_in_order() {
        let source = LocalShoe::new(0);
        source.stack_faces(&[Face::Ace, Face::Two, Face::King]);
        let deck = source.new_deck(1).await.unwrap();

        let faces = [
            source.draw(&deck).await.unwrap().face,
            source.draw(&deck).await.unwrap().face,
            source.draw(&deck).await.unwrap().face,
        ];
        assert_eq!(faces, [Face::Ace, Face::Two, Face::King]);

        let next = source.new_deck(1).await.unwrap();
        assert_ne!(next, deck);
        assert_eq!(source.remaining(&next), Some(DECK_SIZE));
    }

    #[tokio::test]
    async fn released_decks_are_unknown() {
        let source = LocalShoe::new(0);
        let deck = source.new_deck(1).await.unwrap();
        source.release(&deck);
        assert_eq!(source.open_decks(), 0);
        assert!(matches!(
            source.draw(&deck).await,
            Err(SourceError::UnknownDeck(_))
        ));
    }

    #[test]
    fn images_use_service_scheme() {
        let source = LocalShoe::new(0);
        assert_eq!(
            source.image_for(Face::Ten, Suit::Diamonds),
            "https://deckofcardsapi.com/static/img/0D.png"
        );
    }
}
