//! A player's hand.
//!
//! Order matters: the cycle mechanic puts a replacement card into the exact
//! slot the cycled card left, and random selection is by slot index.

use crate::cards::{Card, CardId};

/// Ordered cards held by one player.
#[derive(Clone, Debug, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at `index`, or append when `None`.
    ///
    /// An index past the end appends.
    pub fn insert(&mut self, card: Card, index: Option<usize>) {
        match index {
            Some(i) => {
                let idx = i.min(self.cards.len());
                self.cards.insert(idx, card);
            }
            None => self.cards.push(card),
        }
    }

    /// Slot of a card, if held.
    #[must_use]
    pub fn position(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card)
    }

    /// Remove a card by identity, returning its former slot.
    pub fn remove(&mut self, card: CardId) -> Option<(usize, Card)> {
        let index = self.position(card)?;
        Some((index, self.cards.remove(index)))
    }

    /// Remove the card in slot `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.position(card).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Card ids in slot order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(|c| c.id)
    }
}
