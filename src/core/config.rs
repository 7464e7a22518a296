//! Game configuration.
//!
//! The core consumes configuration, it never hardcodes it. `GameConfig`
//! carries the player count, win target, hand size and the named rule
//! choices, and validates them against a card library before play.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::round::OrientationRule;

/// Fewest players a table can seat.
pub const MIN_PLAYERS: usize = 3;

/// Most players a table can seat.
pub const MAX_PLAYERS: usize = 6;

/// Default number of players.
pub const DEFAULT_PLAYERS: usize = 4;

/// Default number of round wins that ends the game.
pub const DEFAULT_WINS_NEEDED: u32 = 3;

/// Where the pole moves after a round resolves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoleRotation {
    /// The player seated after the round's winner.
    #[default]
    AfterWinner,
    /// The player seated after the current pole.
    AfterPole,
}

/// Complete game configuration.
///
/// ```
/// use joerg::core::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.player_count, 4);
/// assert_eq!(config.wins_needed, 3);
/// assert_eq!(config.starting_hand_size, 4);
/// assert_eq!(config.cycle_at_wins, 2);
///
/// let config = GameConfig::new(5).with_wins_needed(4);
/// assert_eq!(config.starting_hand_size, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seated players.
    pub player_count: usize,

    /// Round wins that end the game.
    pub wins_needed: u32,

    /// Cards dealt to each player at setup.
    pub starting_hand_size: usize,

    /// Victory count at which every other player cycles a card. 0 disables.
    pub cycle_at_wins: u32,

    /// How the round's winning orientation is chosen.
    pub orientation_rule: OrientationRule,

    /// How the pole advances between rounds.
    pub pole_rotation: PoleRotation,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYERS)
    }
}

impl GameConfig {
    /// Create a configuration for `player_count` players with default rules.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            wins_needed: DEFAULT_WINS_NEEDED,
            starting_hand_size: DEFAULT_WINS_NEEDED as usize + 1,
            cycle_at_wins: DEFAULT_WINS_NEEDED - 1,
            orientation_rule: OrientationRule::default(),
            pole_rotation: PoleRotation::default(),
        }
    }

    /// Set the win target. Also resets hand size and cycle threshold to
    /// their defaults for that target.
    #[must_use]
    pub fn with_wins_needed(mut self, wins: u32) -> Self {
        self.wins_needed = wins;
        self.starting_hand_size = wins as usize + 1;
        self.cycle_at_wins = wins.saturating_sub(1);
        self
    }

    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_cycle_at_wins(mut self, wins: u32) -> Self {
        self.cycle_at_wins = wins;
        self
    }

    #[must_use]
    pub fn with_orientation_rule(mut self, rule: OrientationRule) -> Self {
        self.orientation_rule = rule;
        self
    }

    #[must_use]
    pub fn with_pole_rotation(mut self, rotation: PoleRotation) -> Self {
        self.pole_rotation = rotation;
        self
    }

    /// Check the configuration against a library of `library_size` cards.
    ///
    /// The library must cover every starting hand plus one cycle draw per
    /// player.
    pub fn validate(&self, library_size: usize) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount {
                count: self.player_count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        if self.wins_needed == 0 || self.wins_needed as usize > self.starting_hand_size {
            return Err(ConfigError::WinsNeeded {
                wins_needed: self.wins_needed,
                hand_size: self.starting_hand_size,
            });
        }
        let dealt = self.starting_hand_size * self.player_count;
        if dealt + self.player_count > library_size {
            return Err(ConfigError::LibraryTooSmall {
                library: library_size,
                hand_size: self.starting_hand_size,
                players: self.player_count,
            });
        }
        Ok(())
    }
}
