//! Player identification, per-player data storage, and the player's hand.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Seating order defaults to id order.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//!
//! ## Player
//!
//! A seated player and their ordered hand.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::rng::GameRng;
use crate::cards::{Card, CardId};
use crate::error::HandError;
use crate::zones::Hand;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use joerg::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use joerg::core::{PlayerId, PlayerMap};
///
/// let mut victories: PlayerMap<u32> = PlayerMap::with_value(4, 0);
/// victories[PlayerId::new(1)] += 1;
///
/// assert_eq!(victories[PlayerId::new(1)], 1);
/// assert_eq!(victories[PlayerId::new(0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A seated player.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    hand: Hand,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Hand::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Take a card into hand.
    ///
    /// Fires the card's hand-entry hook and makes this player its owner, then
    /// inserts it at `index` (clamped to the hand size) or appends it.
    pub fn add_card_to_hand(&mut self, mut card: Card, index: Option<usize>) {
        card.on_hand_enter();
        card.owner = Some(self.id);
        log::trace!("{} takes {} into slot {:?}", self.id, card, index);
        self.hand.insert(card, index);
    }

    /// Remove a specific card, returning the slot it occupied.
    pub fn remove_card_from_hand(&mut self, card: CardId) -> Result<(usize, Card), HandError> {
        self.hand.remove(card).ok_or(HandError::CardNotInHand {
            player: self.id,
            card,
        })
    }

    /// Remove a uniformly random card, returning the slot it occupied.
    pub fn pop_random_card(&mut self, rng: &mut GameRng) -> Result<(usize, Card), HandError> {
        if self.hand.is_empty() {
            return Err(HandError::EmptyHand(self.id));
        }
        let index = rng.gen_range_usize(0..self.hand.len());
        let card = self.hand.remove_at(index).ok_or(HandError::EmptyHand(self.id))?;
        Ok((index, card))
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.id.fmt(f)
    }
}
