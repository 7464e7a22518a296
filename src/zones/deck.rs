//! The shared draw deck.
//!
//! Index 0 is the bottom of the deck, the last index is the top.
//! Dealing and cycle draws take from the top; cycled-out cards go to the bottom.

use crate::cards::Card;
use crate::core::rng::GameRng;

/// Ordered pile of face-down cards.
///
/// ```
/// use joerg::cards::{Card, CardDefinition, CardId};
/// use joerg::zones::Deck;
///
/// let mut deck: Deck = [Card::new(CardId::new(0), CardDefinition::new("A", 1))].into_iter().collect();
/// deck.put_on_bottom(Card::new(CardId::new(1), CardDefinition::new("B", 2)));
///
/// assert_eq!(deck.draw().map(|c| c.id), Some(CardId::new(0)));
/// assert_eq!(deck.draw().map(|c| c.id), Some(CardId::new(1)));
/// assert!(deck.draw().is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Put a card on the bottom of the deck.
    pub fn put_on_bottom(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Shuffle the whole deck.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl FromIterator<Card> for Deck {
    /// The last card yielded ends up on top.
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
