//! Card instances - runtime card state.
//!
//! `Card` is a specific card in a game: a definition, an identity, the
//! player who holds it, and the mutable state its ability writes to.
//!
//! ## State Values (i64 only)
//!
//! Ability effects are stored in `state` under two keys:
//! - [`ROUND_BONUS`]: cleared whenever the card enters a hand
//! - [`LASTING_BONUS`]: kept for the rest of the game

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::ability::{Ability, Hook};
use super::definition::{CardDefinition, CardId};
use crate::core::player::PlayerId;

/// Power modifier that only lasts until the card returns to a hand.
pub const ROUND_BONUS: &str = "round_bonus";

/// Power modifier that lasts for the rest of the game.
pub const LASTING_BONUS: &str = "lasting_bonus";

/// A card in play.
///
/// Equality is identity: two cards are equal when their ids are.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Unique id within the game's card supply.
    pub id: CardId,

    definition: CardDefinition,

    /// The player whose hand the card last entered. `None` while in the deck.
    pub owner: Option<PlayerId>,

    /// Mutable ability state.
    #[serde(default)]
    pub state: FxHashMap<String, i64>,
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Card {
    /// Create an unowned card.
    #[must_use]
    pub fn new(id: CardId, definition: CardDefinition) -> Self {
        Self {
            id,
            definition,
            owner: None,
            state: FxHashMap::default(),
        }
    }

    /// The static definition.
    #[must_use]
    pub fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[must_use]
    pub fn ability(&self) -> Ability {
        self.definition.ability
    }

    /// Ruling text.
    #[must_use]
    pub fn ruling(&self) -> String {
        self.definition.ruling()
    }

    /// Current power: base power plus every bonus picked up so far.
    #[must_use]
    pub fn power(&self) -> i64 {
        self.definition.power + self.get_state(LASTING_BONUS, 0) + self.get_state(ROUND_BONUS, 0)
    }

    /// Whether `hook` triggers this card's ability.
    #[must_use]
    pub fn responds_to(&self, hook: Hook) -> bool {
        self.definition.ability.responds_to(hook)
    }

    pub fn on_hand_enter(&mut self) {
        self.fire(Hook::HandEnter);
    }

    pub fn on_reveal(&mut self) {
        self.fire(Hook::Reveal);
    }

    pub fn before_power(&mut self) {
        self.fire(Hook::BeforePower);
    }

    pub fn on_win(&mut self) {
        self.fire(Hook::Win);
    }

    pub fn on_lose(&mut self) {
        self.fire(Hook::Lose);
    }

    pub fn on_cycle(&mut self) {
        self.fire(Hook::Cycle);
    }

    /// Fire a hook by value. Same as calling the matching `on_*` method.
    pub fn fire(&mut self, hook: Hook) {
        if hook == Hook::HandEnter {
            self.state.remove(ROUND_BONUS);
        }
        let ability = self.definition.ability;
        ability.apply(hook, self);
    }

    /// Get a state value with a default.
    #[must_use]
    pub fn get_state(&self, key: &str, default: i64) -> i64 {
        self.state.get(key).copied().unwrap_or(default)
    }

    /// Modify a state value by delta.
    pub fn modify_state(&mut self, key: &str, delta: i64) {
        let current = self.get_state(key, 0);
        self.state.insert(key.to_string(), current + delta);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.definition.name, self.power())
    }
}
