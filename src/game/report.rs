//! What a round and a game report back to the caller.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, Hook};
use crate::core::PlayerId;
use crate::round::Orientation;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The first player to reach the win target.
    Winner(PlayerId),
}

impl GameResult {
    /// The winning player.
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        match self {
            GameResult::Winner(p) => *p,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
        }
    }
}

/// One hook invocation made by the game loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookFiring {
    pub hook: Hook,
    pub player: PlayerId,
    pub card: CardId,
}

impl HookFiring {
    #[must_use]
    pub const fn new(hook: Hook, player: PlayerId, card: CardId) -> Self {
        Self { hook, player, card }
    }
}

/// Everything that happened in one round, in the order it happened.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundReport {
    /// Round number, starting at 1.
    pub round: u32,
    /// Pole for this round.
    pub pole: PlayerId,
    /// Reveal/resolution order.
    pub order: SmallVec<[PlayerId; 6]>,
    /// Orientation that contended for the win.
    pub orientation: Orientation,
    pub winner: PlayerId,
    pub winning_card: CardId,
    /// Power of the winning card when it won.
    pub winning_power: i64,
    /// Losing players in resolution order.
    pub losers: SmallVec<[PlayerId; 6]>,
    /// Every hook fired this round.
    pub hooks: Vec<HookFiring>,
    /// Players who cycled a card this round, in seating order.
    pub cycled: SmallVec<[PlayerId; 6]>,
    /// Pole for the next round.
    pub next_pole: PlayerId,
}

impl RoundReport {
    /// Hook firings of one kind, in order.
    pub fn fired(&self, hook: Hook) -> impl Iterator<Item = &HookFiring> {
        self.hooks.iter().filter(move |h| h.hook == hook)
    }
}
