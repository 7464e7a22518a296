//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its name,
//! base power, ruling text and ability. Runtime state (owner, bonuses picked
//! up from abilities) lives on `Card`.

use serde::{Deserialize, Serialize};

use super::ability::Ability;

/// Unique identifier for a card in a game.
///
/// Every physical card in the supply gets its own id; identity checks
/// (ownership, hand removal, duplicate detection) compare ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition, as read from a library file.
///
/// ## Example
///
/// ```
/// use joerg::cards::{Ability, CardDefinition};
///
/// let knight = CardDefinition::new("Knight", 5)
///     .with_ability(Ability::Veteran { amount: 1 });
///
/// assert_eq!(knight.power, 5);
/// assert_eq!(knight.ruling(), "On Win: +1 power.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Card name. Unique within a library.
    pub name: String,

    /// Base power before ability bonuses.
    pub power: i64,

    /// Ruling text. Empty means "describe the ability".
    #[serde(default)]
    pub ruling: String,

    /// The card's ability.
    #[serde(default)]
    pub ability: Ability,
}

impl CardDefinition {
    /// Create a vanilla card definition.
    #[must_use]
    pub fn new(name: impl Into<String>, power: i64) -> Self {
        Self {
            name: name.into(),
            power,
            ruling: String::new(),
            ability: Ability::Vanilla,
        }
    }

    /// Set the ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.ability = ability;
        self
    }

    /// Set explicit ruling text (builder pattern).
    #[must_use]
    pub fn with_ruling(mut self, ruling: impl Into<String>) -> Self {
        self.ruling = ruling.into();
        self
    }

    /// The ruling shown to players.
    #[must_use]
    pub fn ruling(&self) -> String {
        if self.ruling.is_empty() {
            self.ability.describe()
        } else {
            self.ruling.clone()
        }
    }
}
