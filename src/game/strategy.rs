//! Commit-phase decision policies.
//!
//! The game loop asks a `CommitStrategy` which card each player commits and
//! in which orientation. The strategy detaches the card from the hand itself,
//! so the engine only ever sees cards that already left the hand.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::cards::Card;
use crate::core::{GameRng, Player, PlayerId};
use crate::error::HandError;
use crate::round::Orientation;

/// Chooses and detaches one card per player per round.
pub trait CommitStrategy {
    /// Remove the card `player` commits this round from their hand.
    fn commit(
        &mut self,
        player: &mut Player,
        rng: &mut GameRng,
    ) -> Result<(Card, Orientation), HandError>;
}

/// Uniformly random card, fair coin for the orientation.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl CommitStrategy for RandomStrategy {
    fn commit(
        &mut self,
        player: &mut Player,
        rng: &mut GameRng,
    ) -> Result<(Card, Orientation), HandError> {
        let (_, card) = player.pop_random_card(rng)?;
        let orientation = rng
            .choose(&Orientation::ALL)
            .copied()
            .unwrap_or(Orientation::Attack);
        Ok((card, orientation))
    }
}

/// A scripted commit: hand slot plus orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommitChoice {
    /// Hand slot. Slots past the end pick the last card.
    pub slot: usize,
    pub orientation: Orientation,
}

impl CommitChoice {
    #[must_use]
    pub const fn new(slot: usize, orientation: Orientation) -> Self {
        Self { slot, orientation }
    }
}

/// Plays queued choices per player, then a fallback choice forever.
///
/// ```
/// use joerg::core::PlayerId;
/// use joerg::game::{CommitChoice, ScriptedStrategy};
/// use joerg::round::Orientation;
///
/// let mut strategy = ScriptedStrategy::new(CommitChoice::new(0, Orientation::Attack));
/// strategy.push(PlayerId::new(1), CommitChoice::new(2, Orientation::Defense));
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedStrategy {
    queued: FxHashMap<PlayerId, VecDeque<CommitChoice>>,
    fallback: CommitChoice,
}

impl ScriptedStrategy {
    #[must_use]
    pub fn new(fallback: CommitChoice) -> Self {
        Self {
            queued: FxHashMap::default(),
            fallback,
        }
    }

    /// Queue the next choice for `player`.
    pub fn push(&mut self, player: PlayerId, choice: CommitChoice) -> &mut Self {
        self.queued.entry(player).or_default().push_back(choice);
        self
    }
}

impl CommitStrategy for ScriptedStrategy {
    fn commit(
        &mut self,
        player: &mut Player,
        _rng: &mut GameRng,
    ) -> Result<(Card, Orientation), HandError> {
        let choice = self
            .queued
            .get_mut(&player.id())
            .and_then(VecDeque::pop_front)
            .unwrap_or(self.fallback);

        let last = player
            .hand_size()
            .checked_sub(1)
            .ok_or(HandError::EmptyHand(player.id()))?;
        let card = player
            .hand()
            .get(choice.slot.min(last))
            .map(|c| c.id)
            .ok_or(HandError::EmptyHand(player.id()))?;

        let (_, card) = player.remove_card_from_hand(card)?;
        Ok((card, choice.orientation))
    }
}
